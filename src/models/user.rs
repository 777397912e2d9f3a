use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned user role. Gates which navigation items and actions are
/// visible; the server remains authoritative for every permission.
/// Unrecognized role strings fall back to `Unknown` rather than failing
/// the whole payload.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    Unknown,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "student" => Role::Student,
            "teacher" => Role::Teacher,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Unknown
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// A user as returned by the API. Membership rows carry a reduced shape
/// without `role`, so the field defaults to `Unknown` there.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
