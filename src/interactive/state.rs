use crate::error::{AllocationError, AllocationResult};
use crate::models::{Invitation, InvitationReply, Membership, Role, Team};

/// Pages of the application. These mirror the service's routes; navigation
/// keys can reach all of them even when the tab bar hides one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Professors,
    Teams,
    Applications,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Professors => "Professors",
            Page::Teams => "Teams",
            Page::Applications => "Applications",
        }
    }
}

/// Navigation items visible for a role. Only admins get the Teams entry;
/// teachers and every other role have it filtered out (observed product
/// behavior, kept as-is).
pub fn nav_items(role: Role) -> Vec<Page> {
    let items = vec![
        Page::Dashboard,
        Page::Professors,
        Page::Teams,
        Page::Applications,
    ];
    match role {
        Role::Admin => items,
        _ => items.into_iter().filter(|p| *p != Page::Teams).collect(),
    }
}

/// What the teams view currently knows about the caller's team.
#[derive(Debug, Clone)]
pub enum TeamView {
    Loading,
    NoTeam,
    Team(Team),
}

impl TeamView {
    pub fn team(&self) -> Option<&Team> {
        match self {
            TeamView::Team(team) => Some(team),
            _ => None,
        }
    }
}

/// Follow-up fetches a state transition asks the caller to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RefetchTeam,
    RefetchInvitations,
}

/// Destructive actions that must be confirmed before running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Leader closes the whole team, removing all members.
    DeleteTeam { team_id: i64 },
    /// Non-leader leaves via the team-level action.
    LeaveTeam,
    /// Leader or admin removes another member's row.
    RemoveMember { membership_id: i64, member_name: String },
    /// The viewer leaves via their own member card.
    LeaveAsMember,
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteTeam { .. } => "Delete Team",
            ConfirmAction::RemoveMember { .. } => "Remove Member",
            ConfirmAction::LeaveTeam | ConfirmAction::LeaveAsMember => "Leave Team",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteTeam { .. } => {
                "Are you sure you want to delete this team? This action cannot be undone and will remove all team members.".to_string()
            }
            ConfirmAction::RemoveMember { member_name, .. } => {
                format!("Are you sure you want to remove {} from the team?", member_name)
            }
            ConfirmAction::LeaveTeam | ConfirmAction::LeaveAsMember => {
                "Are you sure you want to leave this team?".to_string()
            }
        }
    }
}

/// Confirmation flow for destructive actions:
/// `Idle → Confirming → InFlight → Idle`. While a call is in flight the
/// dialog's buttons are disabled; the dialog always closes on settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmFlow {
    Idle,
    Confirming(ConfirmAction),
    InFlight(ConfirmAction),
}

impl ConfirmFlow {
    pub fn request(&mut self, action: ConfirmAction) {
        if matches!(self, ConfirmFlow::Idle) {
            *self = ConfirmFlow::Confirming(action);
        }
    }

    /// Dismiss the dialog. Ignored while the call is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, ConfirmFlow::Confirming(_)) {
            *self = ConfirmFlow::Idle;
        }
    }

    /// Move to in-flight and hand back the action to execute.
    pub fn begin(&mut self) -> Option<ConfirmAction> {
        match self {
            ConfirmFlow::Confirming(action) => {
                let action = action.clone();
                *self = ConfirmFlow::InFlight(action.clone());
                Some(action)
            }
            _ => None,
        }
    }

    /// The call settled, success or failure: close the dialog.
    pub fn settle(&mut self) {
        *self = ConfirmFlow::Idle;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ConfirmFlow::Idle)
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, ConfirmFlow::InFlight(_))
    }

    pub fn action(&self) -> Option<&ConfirmAction> {
        match self {
            ConfirmFlow::Confirming(action) | ConfirmFlow::InFlight(action) => Some(action),
            ConfirmFlow::Idle => None,
        }
    }
}

/// Single-line text input behind a dialog. Submit stays disabled while the
/// trimmed value is empty or a call is already running.
#[derive(Debug, Clone, Default)]
pub struct DialogInput {
    pub value: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl DialogInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.value.trim().is_empty() && !self.submitting
    }

    pub fn insert_char(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Submission failed: keep the dialog open with the message inline.
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}

/// State of the team membership view: the fetched team and invitations,
/// list selections, the confirmation flow, and one inline error slot that
/// persists until the next successful action.
#[derive(Debug)]
pub struct TeamsState {
    pub view: TeamView,
    pub invitations: Vec<Invitation>,
    pub error: Option<String>,
    pub confirm: ConfirmFlow,
    pub selected_member: usize,
    pub selected_invitation: usize,
}

impl TeamsState {
    pub fn new() -> Self {
        Self {
            view: TeamView::Loading,
            invitations: Vec::new(),
            error: None,
            confirm: ConfirmFlow::Idle,
            selected_member: 0,
            selected_invitation: 0,
        }
    }

    /// Result of the "my team" fetch. A missing team is a normal state, so
    /// the client already mapped 404 to `Ok(None)`; any remaining error is
    /// displayed without discarding a previously loaded team.
    pub fn apply_team_result(&mut self, result: AllocationResult<Option<Team>>) {
        match result {
            Ok(Some(team)) => {
                self.view = TeamView::Team(team);
                self.error = None;
            }
            Ok(None) => {
                self.view = TeamView::NoTeam;
                self.error = None;
            }
            Err(_) => {
                if matches!(self.view, TeamView::Loading) {
                    self.view = TeamView::NoTeam;
                }
                self.error = Some("Failed to fetch team information".to_string());
            }
        }
        self.clamp_selections();
    }

    /// Result of the invitations fetch. Failures here never raise the
    /// banner; the previous list stays.
    pub fn apply_invitations_result(&mut self, result: AllocationResult<Vec<Invitation>>) {
        if let Ok(invitations) = result {
            self.invitations = invitations;
        }
        self.clamp_selections();
    }

    /// A team was created from the dialog; replaces the no-team state.
    pub fn team_created(&mut self, team: Team) {
        self.view = TeamView::Team(team);
        self.error = None;
        self.clamp_selections();
    }

    /// An invitation response settled. The pending list is always
    /// re-fetched; accepting also re-fetches the team.
    pub fn invitation_responded(
        &mut self,
        reply: InvitationReply,
        result: AllocationResult<()>,
    ) -> Vec<Effect> {
        let mut effects = vec![Effect::RefetchInvitations];
        match result {
            Ok(()) => {
                self.error = None;
                if reply == InvitationReply::Accepted {
                    effects.push(Effect::RefetchTeam);
                }
            }
            Err(_) => {
                self.error = Some("Failed to respond to invitation".to_string());
            }
        }
        effects
    }

    /// A confirmed destructive call settled. Closes the dialog, applies the
    /// local transition on success, and reports the follow-up fetches.
    pub fn action_settled(
        &mut self,
        action: &ConfirmAction,
        result: AllocationResult<()>,
    ) -> Vec<Effect> {
        self.confirm.settle();

        let err = match result {
            Ok(()) => None,
            Err(e) => Some(e),
        };

        if let Some(err) = err {
            self.error = Some(failure_message(action, &err));
            return Vec::new();
        }

        self.error = None;
        match action {
            ConfirmAction::DeleteTeam { .. } | ConfirmAction::LeaveTeam => {
                self.view = TeamView::NoTeam;
                self.clamp_selections();
                Vec::new()
            }
            ConfirmAction::RemoveMember { membership_id, .. } => {
                // Server-confirmed local patch, then a reconciling re-fetch.
                if let TeamView::Team(team) = &mut self.view {
                    team.remove_member_local(*membership_id);
                }
                self.clamp_selections();
                vec![Effect::RefetchTeam]
            }
            ConfirmAction::LeaveAsMember => vec![Effect::RefetchTeam],
        }
    }

    pub fn selected_member(&self) -> Option<&Membership> {
        self.view.team().and_then(|t| t.members.get(self.selected_member))
    }

    pub fn selected_invitation(&self) -> Option<&Invitation> {
        self.invitations.get(self.selected_invitation)
    }

    pub fn move_member_selection(&mut self, delta: isize) {
        let len = self.view.team().map(|t| t.members.len()).unwrap_or(0);
        self.selected_member = step(self.selected_member, delta, len);
    }

    pub fn move_invitation_selection(&mut self, delta: isize) {
        self.selected_invitation = step(self.selected_invitation, delta, self.invitations.len());
    }

    fn clamp_selections(&mut self) {
        let member_len = self.view.team().map(|t| t.members.len()).unwrap_or(0);
        if self.selected_member >= member_len {
            self.selected_member = member_len.saturating_sub(1);
        }
        if self.selected_invitation >= self.invitations.len() {
            self.selected_invitation = self.invitations.len().saturating_sub(1);
        }
    }
}

impl Default for TeamsState {
    fn default() -> Self {
        Self::new()
    }
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((index as isize + delta) % len + len) % len) as usize
}

fn failure_message(action: &ConfirmAction, err: &AllocationError) -> String {
    let fallback = match action {
        ConfirmAction::DeleteTeam { .. } => "Failed to delete team",
        ConfirmAction::LeaveTeam | ConfirmAction::LeaveAsMember => "Failed to leave team",
        ConfirmAction::RemoveMember { .. } => "Failed to remove member",
    };
    match err {
        AllocationError::Api(message) | AllocationError::NotFound(message) => message.clone(),
        AllocationError::Validation { message, .. } => message.clone(),
        _ => fallback.to_string(),
    }
}
