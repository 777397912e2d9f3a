use serde::{Deserialize, Serialize};
use std::fmt;

use super::user::{Role, User};

/// Lifecycle of a membership row: an invitation starts pending and is
/// resolved by the invitee to accepted or rejected. Anything the server
/// adds later renders with the neutral style instead of failing to parse.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MembershipStatus {
    Pending,
    Accepted,
    Rejected,
    Unknown,
}

impl From<String> for MembershipStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => MembershipStatus::Pending,
            "accepted" => MembershipStatus::Accepted,
            "rejected" => MembershipStatus::Rejected,
            _ => MembershipStatus::Unknown,
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MembershipStatus::Pending => "Pending",
            MembershipStatus::Accepted => "Accepted",
            MembershipStatus::Rejected => "Rejected",
            MembershipStatus::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// One user's membership in a team. The owning team is not embedded in the
/// payload; permission checks take it as an explicit argument.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Membership {
    pub id: i64,
    pub user: User,
    pub status: MembershipStatus,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub invited_at: Option<String>,
    #[serde(default)]
    pub responded_at: Option<String>,
}

impl Membership {
    /// Admins and the team leader may remove a member, never themselves.
    pub fn removable_by(&self, viewer: &User, team: &Team) -> bool {
        (viewer.role == Role::Admin || team.is_led_by(viewer)) && self.user.id != viewer.id
    }

    /// A member may leave their own membership unless they lead the team.
    pub fn leavable_by(&self, viewer: &User) -> bool {
        self.user.id == viewer.id && !self.is_leader
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub leader: User,
    #[serde(default)]
    pub members: Vec<Membership>,
    pub member_count: u32,
    #[serde(default)]
    pub is_full: bool,
    #[serde(default)]
    pub can_invite: bool,
    #[serde(default)]
    pub can_leave: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Team {
    pub fn is_led_by(&self, user: &User) -> bool {
        self.leader.id == user.id
    }

    /// Drop a membership from the locally held list after the server has
    /// confirmed the removal. Returns false if the id was not present.
    pub fn remove_member_local(&mut self, membership_id: i64) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != membership_id);
        if self.members.len() < before {
            self.member_count = self.member_count.saturating_sub(1);
            true
        } else {
            false
        }
    }
}

/// The reduced team shape embedded in an invitation.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TeamSummary {
    pub id: i64,
    pub name: String,
    pub leader: User,
}

/// A pending offer for the current user to join a team.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Invitation {
    pub id: i64,
    pub team: TeamSummary,
    pub status: MembershipStatus,
}

/// The two ways an invitee can resolve a pending invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationReply {
    Accepted,
    Rejected,
}

impl InvitationReply {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationReply::Accepted => "accepted",
            InvitationReply::Rejected => "rejected",
        }
    }
}
