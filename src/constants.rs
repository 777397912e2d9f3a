pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const CONFIG_FILE: &str = ".allocation-cli-config.json";

pub const TOKEN_ENV_VAR: &str = "ALLOCATION_ACCESS_TOKEN";
pub const API_URL_ENV_VAR: &str = "ALLOCATION_API_URL";

// Teams hold at most four accepted members; the server is authoritative,
// this only drives the "n/4" capacity chip.
pub const TEAM_CAPACITY: u32 = 4;

// REST endpoints
pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const CURRENT_USER_PATH: &str = "/api/auth/me/";
pub const MY_TEAM_PATH: &str = "/api/teams/my/";
pub const CREATE_TEAM_PATH: &str = "/api/teams/create/";
pub const INVITATIONS_PATH: &str = "/api/teams/invitations/";
pub const INVITE_PATH: &str = "/api/teams/invite/";
pub const LEAVE_TEAM_PATH: &str = "/api/teams/leave/";
