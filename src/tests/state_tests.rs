use crate::error::AllocationError;
use crate::interactive::state::{
    ConfirmAction, ConfirmFlow, DialogInput, Effect, TeamView, TeamsState,
};
use crate::models::{
    Invitation, InvitationReply, Membership, MembershipStatus, Role, Team, TeamSummary, User,
};

fn user(id: i64, role: Role) -> User {
    User {
        id,
        username: format!("2021CS{:03}", id),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        email: None,
        department: Some("Computer Science".to_string()),
        role,
    }
}

fn membership(id: i64, user_id: i64, is_leader: bool) -> Membership {
    Membership {
        id,
        user: user(user_id, Role::Unknown),
        status: MembershipStatus::Accepted,
        is_leader,
        invited_at: None,
        responded_at: None,
    }
}

fn team(id: i64, leader_id: i64, member_ids: &[(i64, i64)]) -> Team {
    let members: Vec<Membership> = member_ids
        .iter()
        .map(|(mid, uid)| membership(*mid, *uid, *uid == leader_id))
        .collect();
    Team {
        id,
        name: "Alpha".to_string(),
        leader: user(leader_id, Role::Student),
        member_count: members.len() as u32,
        members,
        is_full: false,
        can_invite: true,
        can_leave: false,
        created_at: None,
        updated_at: None,
    }
}

fn invitation(id: i64, team_id: i64) -> Invitation {
    Invitation {
        id,
        team: TeamSummary {
            id: team_id,
            name: format!("Team{}", team_id),
            leader: user(900 + team_id, Role::Student),
        },
        status: MembershipStatus::Pending,
    }
}

#[test]
fn test_missing_team_is_not_an_error() {
    // A 404 on the my-team fetch arrives here as Ok(None): the view must
    // become "no team" with no error banner.
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(None));

    assert!(matches!(state.view, TeamView::NoTeam));
    assert!(state.error.is_none());
}

#[test]
fn test_fetch_failure_shows_banner() {
    let mut state = TeamsState::new();
    state.apply_team_result(Err(AllocationError::Api("boom".to_string())));

    assert!(matches!(state.view, TeamView::NoTeam));
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch team information")
    );
}

#[test]
fn test_fetch_failure_keeps_previously_loaded_team() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(Some(team(1, 10, &[(100, 10)]))));

    state.apply_team_result(Err(AllocationError::Api("boom".to_string())));

    // The stale copy stays rendered alongside the banner
    assert!(matches!(state.view, TeamView::Team(_)));
    assert!(state.error.is_some());
}

#[test]
fn test_create_dialog_blocks_blank_names() {
    let mut input = DialogInput::new();
    assert!(!input.can_submit());

    // Whitespace-only names stay blocked after trimming
    input.value = "  ".to_string();
    assert!(!input.can_submit());

    input.value = " Alpha ".to_string();
    assert!(input.can_submit());

    // No double submits while a call runs
    input.begin_submit();
    assert!(!input.can_submit());
}

#[test]
fn test_create_failure_keeps_dialog_open_with_message() {
    let mut input = DialogInput::new();
    input.value = "Alpha".to_string();
    input.begin_submit();

    input.fail("A team with this name already exists".to_string());

    assert!(!input.submitting);
    assert_eq!(
        input.error.as_deref(),
        Some("A team with this name already exists")
    );
}

#[test]
fn test_team_created_replaces_no_team_view() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(None));

    state.team_created(team(1, 10, &[(100, 10)]));

    match &state.view {
        TeamView::Team(team) => assert_eq!(team.name, "Alpha"),
        other => panic!("Expected team view, got {:?}", other),
    }
    assert!(state.error.is_none());
}

#[test]
fn test_accepting_invitation_refetches_team_and_invitations() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(None));
    state.apply_invitations_result(Ok(vec![invitation(5, 1), invitation(6, 2)]));

    let effects = state.invitation_responded(InvitationReply::Accepted, Ok(()));

    assert!(effects.contains(&Effect::RefetchInvitations));
    assert!(effects.contains(&Effect::RefetchTeam));

    // The re-fetch drops the accepted invitation from the pending list
    state.apply_invitations_result(Ok(vec![invitation(6, 2)]));
    assert_eq!(state.invitations.len(), 1);
    assert_eq!(state.invitations[0].id, 6);
}

#[test]
fn test_rejecting_invitation_only_refetches_invitations() {
    let mut state = TeamsState::new();
    let effects = state.invitation_responded(InvitationReply::Rejected, Ok(()));

    assert_eq!(effects, vec![Effect::RefetchInvitations]);
}

#[test]
fn test_failed_response_still_refetches_invitations() {
    let mut state = TeamsState::new();
    let effects = state.invitation_responded(
        InvitationReply::Accepted,
        Err(AllocationError::Api("boom".to_string())),
    );

    assert_eq!(effects, vec![Effect::RefetchInvitations]);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to respond to invitation")
    );
}

#[test]
fn test_confirmed_remove_patches_list_without_reload() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(Some(team(1, 10, &[(100, 10), (101, 11), (102, 12)]))));

    state.confirm.request(ConfirmAction::RemoveMember {
        membership_id: 101,
        member_name: "First11 Last11".to_string(),
    });
    let action = state.confirm.begin().expect("action should begin");
    let effects = state.action_settled(&action, Ok(()));

    let team = state.view.team().expect("team should remain loaded");
    assert_eq!(team.member_count, 2);
    assert!(team.members.iter().all(|m| m.id != 101));
    // Reconciling re-fetch, not a full reload
    assert_eq!(effects, vec![Effect::RefetchTeam]);
}

#[test]
fn test_delete_team_clears_local_state() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(Some(team(1, 10, &[(100, 10)]))));

    state.confirm.request(ConfirmAction::DeleteTeam { team_id: 1 });
    let action = state.confirm.begin().expect("action should begin");
    let effects = state.action_settled(&action, Ok(()));

    assert!(matches!(state.view, TeamView::NoTeam));
    assert!(effects.is_empty());
    assert!(state.confirm == ConfirmFlow::Idle);
}

#[test]
fn test_confirm_flow_transitions() {
    let mut flow = ConfirmFlow::Idle;
    assert!(!flow.is_open());

    flow.request(ConfirmAction::LeaveTeam);
    assert!(flow.is_open());
    assert!(!flow.in_flight());

    // Cancel only works before the call starts
    let action = flow.begin().expect("confirming flow should begin");
    assert_eq!(action, ConfirmAction::LeaveTeam);
    assert!(flow.in_flight());
    flow.cancel();
    assert!(flow.in_flight());

    // The dialog always closes once the call settles
    flow.settle();
    assert!(!flow.is_open());
}

#[test]
fn test_confirm_request_ignored_while_open() {
    let mut flow = ConfirmFlow::Idle;
    flow.request(ConfirmAction::LeaveTeam);
    flow.request(ConfirmAction::DeleteTeam { team_id: 9 });

    assert_eq!(flow.action(), Some(&ConfirmAction::LeaveTeam));
}

#[test]
fn test_failed_action_closes_dialog_and_shows_error() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(Some(team(1, 10, &[(100, 10), (101, 11)]))));

    state.confirm.request(ConfirmAction::RemoveMember {
        membership_id: 101,
        member_name: "First11 Last11".to_string(),
    });
    let action = state.confirm.begin().expect("action should begin");
    let effects = state.action_settled(
        &action,
        Err(AllocationError::Api("Only team leader can remove members".to_string())),
    );

    assert!(!state.confirm.is_open());
    assert!(effects.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("Only team leader can remove members")
    );
    // Nothing was patched locally
    assert_eq!(state.view.team().map(|t| t.members.len()), Some(2));
}

#[test]
fn test_selection_wraps_and_clamps() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(Some(team(1, 10, &[(100, 10), (101, 11), (102, 12)]))));

    state.move_member_selection(-1);
    assert_eq!(state.selected_member, 2);
    state.move_member_selection(1);
    assert_eq!(state.selected_member, 0);

    // Shrinking the list pulls the selection back in range
    state.selected_member = 2;
    state.apply_team_result(Ok(Some(team(1, 10, &[(100, 10)]))));
    assert_eq!(state.selected_member, 0);
}
