use serde::{Deserialize, Serialize};

use super::user::User;

/// Payload returned by the login endpoint: the authenticated user plus a
/// token pair. Refresh handling lives in the auth service, not here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoginResponse {
    pub user: User,
    pub access: String,
    pub refresh: String,
}
