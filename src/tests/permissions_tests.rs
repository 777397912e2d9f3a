use crate::interactive::state::{nav_items, Page};
use crate::models::{Membership, MembershipStatus, Role, Team, User};

fn user(id: i64, role: Role) -> User {
    User {
        id,
        username: format!("u{}", id),
        first_name: "Test".to_string(),
        last_name: format!("User{}", id),
        email: None,
        department: None,
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

fn team_with(leader_id: i64, memberships: Vec<Membership>) -> Team {
    Team {
        id: 1,
        name: "Alpha".to_string(),
        leader: user(leader_id, Role::Student),
        member_count: memberships.len() as u32,
        members: memberships,
        is_full: false,
        can_invite: true,
        can_leave: true,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_leader_can_remove_others_but_not_self() {
    let team = team_with(10, vec![membership(100, 10, true), membership(101, 11, false)]);
    let leader = user(10, Role::Student);

    let own_row = &team.members[0];
    let other_row = &team.members[1];

    assert!(other_row.removable_by(&leader, &team));
    assert!(!own_row.removable_by(&leader, &team));
}

#[test]
fn test_admin_can_remove_any_member_except_self() {
    let team = team_with(10, vec![membership(100, 10, true), membership(101, 11, false)]);
    let admin = user(99, Role::Admin);

    assert!(team.members[0].removable_by(&admin, &team));
    assert!(team.members[1].removable_by(&admin, &team));
}

#[test]
fn test_plain_member_sees_no_remove_action() {
    let team = team_with(10, vec![membership(100, 10, true), membership(101, 11, false)]);
    let member = user(11, Role::Student);

    assert!(!team.members[0].removable_by(&member, &team));
    assert!(!team.members[1].removable_by(&member, &team));
}

#[test]
fn test_member_can_leave_own_row_only() {
    let team = team_with(10, vec![membership(100, 10, true), membership(101, 11, false)]);
    let member = user(11, Role::Student);

    assert!(team.members[1].leavable_by(&member));
    assert!(!team.members[0].leavable_by(&member));
}

#[test]
fn test_leader_cannot_leave_own_team() {
    let team = team_with(10, vec![membership(100, 10, true), membership(101, 11, false)]);
    let leader = user(10, Role::Student);

    assert!(!team.members[0].leavable_by(&leader));
}

#[test]
fn test_remove_member_local_decrements_count_once() {
    let mut team = team_with(
        10,
        vec![
            membership(100, 10, true),
            membership(101, 11, false),
            membership(102, 12, false),
        ],
    );

    assert!(team.remove_member_local(101));
    assert_eq!(team.member_count, 2);
    assert_eq!(team.members.len(), 2);
    assert!(team.members.iter().all(|m| m.id != 101));

    // Removing an id that is not present changes nothing
    assert!(!team.remove_member_local(101));
    assert_eq!(team.member_count, 2);
}

#[test]
fn test_only_admin_sees_teams_nav_item() {
    assert!(nav_items(Role::Admin).contains(&Page::Teams));
    assert!(!nav_items(Role::Teacher).contains(&Page::Teams));
    assert!(!nav_items(Role::Student).contains(&Page::Teams));
    assert!(!nav_items(Role::Unknown).contains(&Page::Teams));
}

#[test]
fn test_nav_items_keep_order_and_remaining_pages() {
    assert_eq!(
        nav_items(Role::Admin),
        vec![Page::Dashboard, Page::Professors, Page::Teams, Page::Applications]
    );
    assert_eq!(
        nav_items(Role::Student),
        vec![Page::Dashboard, Page::Professors, Page::Applications]
    );
}
