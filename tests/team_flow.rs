use allocation_cli::interactive::state::{ConfirmAction, Effect, TeamView, TeamsState};
use allocation_cli::models::{Invitation, InvitationReply, MembershipStatus, Role, Team};
use allocation_cli::AllocationClient;

fn team_payload() -> &'static str {
    r#"{
        "id": 7,
        "name": "Alpha",
        "leader": {
            "id": 10,
            "username": "2021CS010",
            "first_name": "Lea",
            "last_name": "Der",
            "email": "lea@example.edu",
            "department": "Computer Science"
        },
        "members": [
            {
                "id": 100,
                "user": {
                    "id": 10,
                    "username": "2021CS010",
                    "first_name": "Lea",
                    "last_name": "Der",
                    "email": "lea@example.edu",
                    "department": "Computer Science"
                },
                "status": "accepted",
                "invited_at": "2024-01-10T09:00:00Z",
                "responded_at": "2024-01-10T09:00:00Z",
                "is_leader": true
            },
            {
                "id": 101,
                "user": {
                    "id": 11,
                    "username": "2021CS011",
                    "first_name": "Mem",
                    "last_name": "Ber",
                    "email": "mem@example.edu",
                    "department": "Computer Science"
                },
                "status": "pending",
                "invited_at": "2024-01-11T09:00:00Z",
                "responded_at": null,
                "is_leader": false
            }
        ],
        "member_count": 1,
        "is_full": false,
        "can_invite": true,
        "can_leave": false,
        "created_at": "2024-01-10T09:00:00Z",
        "updated_at": "2024-01-11T09:00:00Z"
    }"#
}

fn invitations_payload() -> &'static str {
    r#"[
        {
            "id": 55,
            "team": {
                "id": 7,
                "name": "Alpha",
                "leader": {
                    "id": 10,
                    "username": "2021CS010",
                    "first_name": "Lea",
                    "last_name": "Der"
                }
            },
            "status": "pending"
        }
    ]"#
}

#[test]
fn deserializes_team_as_served() {
    let team: Team = serde_json::from_str(team_payload()).expect("team should deserialize");

    assert_eq!(team.id, 7);
    assert_eq!(team.name, "Alpha");
    assert_eq!(team.leader.username, "2021CS010");
    assert_eq!(team.members.len(), 2);
    assert_eq!(team.member_count, 1);
    assert!(team.can_invite);
    assert!(!team.can_leave);

    // Member rows come without a role field
    assert_eq!(team.members[0].user.role, Role::Unknown);
    assert!(team.members[0].is_leader);
    assert_eq!(team.members[1].status, MembershipStatus::Pending);
    assert!(team.members[1].responded_at.is_none());
}

#[test]
fn deserializes_invitations_as_served() {
    let invitations: Vec<Invitation> =
        serde_json::from_str(invitations_payload()).expect("invitations should deserialize");

    assert_eq!(invitations.len(), 1);
    assert_eq!(invitations[0].id, 55);
    assert_eq!(invitations[0].team.name, "Alpha");
    assert_eq!(invitations[0].team.leader.full_name(), "Lea Der");
    assert_eq!(invitations[0].status, MembershipStatus::Pending);
}

#[test]
fn unknown_membership_status_is_tolerated() {
    let payload = r#"{
        "id": 1,
        "user": {"id": 2, "username": "u2", "first_name": "A", "last_name": "B"},
        "status": "withdrawn",
        "is_leader": false
    }"#;
    let membership: allocation_cli::models::Membership =
        serde_json::from_str(payload).expect("membership should deserialize");
    assert_eq!(membership.status, MembershipStatus::Unknown);
}

#[test]
fn full_membership_flow_over_fetched_payloads() {
    let mut state = TeamsState::new();

    // Mount: both fetches land
    let team: Team = serde_json::from_str(team_payload()).expect("team should deserialize");
    state.apply_team_result(Ok(Some(team)));
    let invitations: Vec<Invitation> =
        serde_json::from_str(invitations_payload()).expect("invitations should deserialize");
    state.apply_invitations_result(Ok(invitations));

    assert!(matches!(state.view, TeamView::Team(_)));
    assert_eq!(state.invitations.len(), 1);
    assert!(state.error.is_none());

    // Leader confirms removal of the pending member
    state.confirm.request(ConfirmAction::RemoveMember {
        membership_id: 101,
        member_name: "Mem Ber".to_string(),
    });
    let action = state.confirm.begin().expect("action should begin");
    let effects = state.action_settled(&action, Ok(()));
    assert_eq!(effects, vec![Effect::RefetchTeam]);

    let team = state.view.team().expect("team should still be loaded");
    assert_eq!(team.members.len(), 1);
    assert_eq!(team.member_count, 0);

    // Reconciling re-fetch comes back 404 after the leader deletes the team
    state.confirm.request(ConfirmAction::DeleteTeam { team_id: 7 });
    let action = state.confirm.begin().expect("action should begin");
    state.action_settled(&action, Ok(()));
    assert!(matches!(state.view, TeamView::NoTeam));

    state.apply_team_result(Ok(None));
    assert!(matches!(state.view, TeamView::NoTeam));
    assert!(state.error.is_none());
}

#[test]
fn accepted_invitation_requests_both_refetches() {
    let mut state = TeamsState::new();
    state.apply_team_result(Ok(None));
    let invitations: Vec<Invitation> =
        serde_json::from_str(invitations_payload()).expect("invitations should deserialize");
    state.apply_invitations_result(Ok(invitations));

    let effects = state.invitation_responded(InvitationReply::Accepted, Ok(()));
    assert!(effects.contains(&Effect::RefetchTeam));
    assert!(effects.contains(&Effect::RefetchInvitations));

    // The team re-fetch now finds the joined team
    let team: Team = serde_json::from_str(team_payload()).expect("team should deserialize");
    state.apply_team_result(Ok(Some(team)));
    assert!(matches!(state.view, TeamView::Team(_)));

    // And the invitation list re-fetch comes back empty
    state.apply_invitations_result(Ok(Vec::new()));
    assert!(state.invitations.is_empty());
}

#[tokio::test]
async fn client_normalizes_base_url() {
    let client =
        AllocationClient::new("http://localhost:8000/", "token").expect("client should build");
    assert_eq!(client.base_url(), "http://localhost:8000");
}
