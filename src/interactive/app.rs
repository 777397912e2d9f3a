use std::sync::Arc;
use std::time::Instant;

use crossterm::event::KeyCode;

use crate::client::AllocationClient;
use crate::context::AppContext;
use crate::error::{AllocationError, AllocationResult};
use crate::logging::log_debug;
use crate::models::{InvitationReply, Role, Team, User};

use super::state::{ConfirmAction, DialogInput, Effect, Page, TeamView, TeamsState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Members,
    Invitations,
}

#[derive(Debug, Clone)]
pub enum Popup {
    CreateTeam(DialogInput),
    InviteMember(DialogInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
    pub dismissed: bool,
}

/// The dashboard's own my-team card (students only).
pub struct DashboardState {
    pub loading: bool,
    pub team: Option<Team>,
    pub error: Option<String>,
}

impl DashboardState {
    fn new() -> Self {
        Self {
            loading: true,
            team: None,
            error: None,
        }
    }
}

pub struct InteractiveApp {
    pub user: User,
    pub client: Arc<AllocationClient>,
    pub page: Page,
    pub teams: TeamsState,
    pub dashboard: DashboardState,
    pub focus: Focus,
    pub popup: Option<Popup>,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    pub logout_requested: bool,
}

impl InteractiveApp {
    /// Build the app from a restored session and load the landing page.
    /// The cached user is refreshed from the API so role gating reflects
    /// the server's view.
    pub async fn new(context: &mut AppContext) -> AllocationResult<Self> {
        let client = context.client()?;
        let user = context.refresh_user().await?;

        let mut app = Self {
            user,
            client,
            page: Page::Dashboard,
            teams: TeamsState::new(),
            dashboard: DashboardState::new(),
            focus: Focus::Members,
            popup: None,
            notifications: Vec::new(),
            should_quit: false,
            logout_requested: false,
        };

        app.load_dashboard().await;
        Ok(app)
    }

    // ----- fetching ------------------------------------------------------

    /// The teams page requests the caller's team and pending invitations
    /// concurrently on entry.
    pub async fn refresh_teams_view(&mut self) {
        let (team, invitations) = tokio::join!(self.client.my_team(), self.client.invitations());
        self.teams.apply_team_result(team);
        self.teams.apply_invitations_result(invitations);
    }

    pub async fn load_dashboard(&mut self) {
        self.dashboard = DashboardState::new();
        if self.user.role != Role::Student {
            self.dashboard.loading = false;
            return;
        }
        match self.client.my_team().await {
            Ok(team) => {
                self.dashboard.team = team;
                self.dashboard.error = None;
            }
            Err(_) => {
                self.dashboard.error = Some("Failed to fetch team information".to_string());
            }
        }
        self.dashboard.loading = false;
    }

    pub async fn enter_page(&mut self, page: Page) {
        log_debug(&format!("Entering page {:?}", page));
        self.page = page;
        self.popup = None;
        match page {
            Page::Teams => {
                self.teams = TeamsState::new();
                self.focus = Focus::Members;
                self.refresh_teams_view().await;
            }
            Page::Dashboard => self.load_dashboard().await,
            Page::Professors | Page::Applications => {}
        }
    }

    pub async fn refresh_current_page(&mut self) {
        match self.page {
            Page::Teams => self.refresh_teams_view().await,
            Page::Dashboard => self.load_dashboard().await,
            Page::Professors | Page::Applications => {}
        }
    }

    async fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RefetchTeam => {
                    let result = self.client.my_team().await;
                    self.teams.apply_team_result(result);
                }
                Effect::RefetchInvitations => {
                    let result = self.client.invitations().await;
                    self.teams.apply_invitations_result(result);
                }
            }
        }
    }

    // ----- dialogs -------------------------------------------------------

    pub fn open_create_dialog(&mut self) {
        if self.user.role != Role::Student || self.popup.is_some() {
            return;
        }
        let no_team = match self.page {
            Page::Teams => matches!(self.teams.view, TeamView::NoTeam),
            Page::Dashboard => !self.dashboard.loading && self.dashboard.team.is_none(),
            _ => false,
        };
        if no_team {
            self.popup = Some(Popup::CreateTeam(DialogInput::new()));
        }
    }

    pub fn open_invite_dialog(&mut self) {
        if self.page != Page::Teams || self.popup.is_some() || self.user.role != Role::Student {
            return;
        }
        if self.teams.view.team().map(|t| t.can_invite).unwrap_or(false) {
            self.popup = Some(Popup::InviteMember(DialogInput::new()));
        }
    }

    fn popup_input_mut(&mut self) -> Option<&mut DialogInput> {
        match &mut self.popup {
            Some(Popup::CreateTeam(input)) | Some(Popup::InviteMember(input)) => Some(input),
            None => None,
        }
    }

    fn popup_submitting(&self) -> bool {
        match &self.popup {
            Some(Popup::CreateTeam(input)) | Some(Popup::InviteMember(input)) => input.submitting,
            None => false,
        }
    }

    pub async fn submit_popup(&mut self) {
        match &self.popup {
            Some(Popup::CreateTeam(_)) => self.submit_create_team().await,
            Some(Popup::InviteMember(_)) => self.submit_invite().await,
            None => {}
        }
    }

    async fn submit_create_team(&mut self) {
        let name = match &self.popup {
            Some(Popup::CreateTeam(input)) if input.can_submit() => input.value.trim().to_string(),
            _ => return,
        };
        if let Some(input) = self.popup_input_mut() {
            input.begin_submit();
        }

        match self.client.create_team(&name).await {
            Ok(team) => {
                self.popup = None;
                match self.page {
                    Page::Dashboard => self.dashboard.team = Some(team.clone()),
                    _ => self.teams.team_created(team.clone()),
                }
                self.notify(NotificationKind::Success, format!("Team \"{}\" created", team.name));
            }
            Err(e) => {
                let message = validation_or(&e, "Failed to create team");
                if let Some(input) = self.popup_input_mut() {
                    input.fail(message);
                }
            }
        }
    }

    async fn submit_invite(&mut self) {
        let user_id = match &self.popup {
            Some(Popup::InviteMember(input)) if input.can_submit() => {
                input.value.trim().to_string()
            }
            _ => return,
        };
        if let Some(input) = self.popup_input_mut() {
            input.begin_submit();
        }

        match self.client.invite_member(&user_id).await {
            Ok(()) => {
                self.popup = None;
                self.notify(NotificationKind::Success, "Invitation sent".to_string());
                // Reflect the new pending membership
                self.run_effects(vec![Effect::RefetchTeam]).await;
            }
            Err(e) => {
                let message = validation_or(&e, "Failed to invite member");
                if let Some(input) = self.popup_input_mut() {
                    input.fail(message);
                }
            }
        }
    }

    // ----- invitations ---------------------------------------------------

    pub async fn respond_selected_invitation(&mut self, reply: InvitationReply) {
        let Some(invitation) = self.teams.selected_invitation() else {
            return;
        };
        let id = invitation.id;
        let team_name = invitation.team.name.clone();

        let result = self.client.respond_invitation(id, reply).await;
        let ok = result.is_ok();
        let effects = self.teams.invitation_responded(reply, result);
        self.run_effects(effects).await;

        if ok {
            match reply {
                InvitationReply::Accepted => self.notify(
                    NotificationKind::Success,
                    format!("Joined team \"{}\"", team_name),
                ),
                InvitationReply::Rejected => self.notify(
                    NotificationKind::Info,
                    format!("Invitation from \"{}\" rejected", team_name),
                ),
            }
        }
    }

    // ----- destructive actions -------------------------------------------

    /// Team-level action: delete for the leader, leave for a member the
    /// server allows out. One dialog, labeled by the caller's position.
    pub fn request_team_action(&mut self) {
        let Some(team) = self.teams.view.team() else {
            return;
        };
        let action = if team.is_led_by(&self.user) {
            Some(ConfirmAction::DeleteTeam { team_id: team.id })
        } else if team.can_leave {
            Some(ConfirmAction::LeaveTeam)
        } else {
            None
        };
        if let Some(action) = action {
            self.teams.confirm.request(action);
        }
    }

    /// Member-card action on the selected row: remove when permitted,
    /// otherwise leave when it is the viewer's own card.
    pub fn request_member_action(&mut self) {
        let action = {
            let Some(team) = self.teams.view.team() else {
                return;
            };
            let Some(member) = self.teams.selected_member() else {
                return;
            };
            if member.removable_by(&self.user, team) {
                Some(ConfirmAction::RemoveMember {
                    membership_id: member.id,
                    member_name: member.user.full_name(),
                })
            } else if member.leavable_by(&self.user) {
                Some(ConfirmAction::LeaveAsMember)
            } else {
                None
            }
        };
        if let Some(action) = action {
            self.teams.confirm.request(action);
        }
    }

    pub async fn run_confirmed_action(&mut self) {
        let Some(action) = self.teams.confirm.begin() else {
            return;
        };

        let result = match &action {
            ConfirmAction::DeleteTeam { team_id } => self.client.delete_team(*team_id).await,
            ConfirmAction::LeaveTeam | ConfirmAction::LeaveAsMember => {
                self.client.leave_team().await
            }
            ConfirmAction::RemoveMember { membership_id, .. } => {
                self.client.remove_member(*membership_id).await
            }
        };

        let ok = result.is_ok();
        let effects = self.teams.action_settled(&action, result);
        self.run_effects(effects).await;

        if ok {
            let message = match &action {
                ConfirmAction::DeleteTeam { .. } => "Team deleted".to_string(),
                ConfirmAction::LeaveTeam | ConfirmAction::LeaveAsMember => {
                    "You left the team".to_string()
                }
                ConfirmAction::RemoveMember { member_name, .. } => {
                    format!("{} removed from the team", member_name)
                }
            };
            self.notify(NotificationKind::Success, message);
        }
    }

    // ----- notifications -------------------------------------------------

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notifications.push(Notification {
            kind,
            message,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    pub fn prune_notifications(&mut self) {
        self.notifications.retain(|n| {
            let ttl = match n.kind {
                NotificationKind::Error => 10,
                _ => 5,
            };
            !n.dismissed && n.created_at.elapsed().as_secs() < ttl
        });
    }

    // ----- synchronous key handling --------------------------------------

    pub fn handle_key(&mut self, key: KeyCode) {
        if self.popup.is_some() {
            match key {
                KeyCode::Esc => {
                    if !self.popup_submitting() {
                        self.popup = None;
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.popup_input_mut() {
                        if !input.submitting {
                            input.insert_char(c);
                        }
                    }
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.popup_input_mut() {
                        if !input.submitting {
                            input.backspace();
                        }
                    }
                }
                _ => {}
            }
            return;
        }

        if self.teams.confirm.is_open() {
            // Cancellation only; confirmation runs an API call and is
            // dispatched by the event loop.
            if matches!(key, KeyCode::Esc | KeyCode::Char('n')) {
                self.teams.confirm.cancel();
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('L') => {
                self.logout_requested = true;
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down if self.page == Page::Teams => {
                self.move_selection(1)
            }
            KeyCode::Char('k') | KeyCode::Up if self.page == Page::Teams => {
                self.move_selection(-1)
            }
            KeyCode::Tab if self.page == Page::Teams => self.toggle_focus(),
            KeyCode::Char('c') => self.open_create_dialog(),
            KeyCode::Char('i') => self.open_invite_dialog(),
            KeyCode::Char('D') if self.page == Page::Teams => self.request_team_action(),
            KeyCode::Char('x') if self.page == Page::Teams && self.focus == Focus::Members => {
                self.request_member_action()
            }
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        match self.focus {
            Focus::Members => self.teams.move_member_selection(delta),
            Focus::Invitations => self.teams.move_invitation_selection(delta),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Members => Focus::Invitations,
            Focus::Invitations => Focus::Members,
        };
    }
}

/// Field-validation message if the server sent one, otherwise the fallback.
fn validation_or(err: &AllocationError, fallback: &str) -> String {
    match err {
        AllocationError::Validation { message, .. } => message.clone(),
        _ => fallback.to_string(),
    }
}
