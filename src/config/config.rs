use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV_VAR, CONFIG_FILE, DEFAULT_API_URL, TOKEN_ENV_VAR};
use crate::error::{AllocationError, AllocationResult};
use crate::models::User;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    pub api_url: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// User identity captured at login; refreshed from the API on demand.
    pub user: Option<User>,
}

impl Config {
    /// Drop everything tied to the current session.
    pub fn clear_session(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
    }
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn load_config() -> Config {
    let path = config_path();
    if path.exists() {
        let content = fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> AllocationResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path(), content)?;
    Ok(())
}

/// Resolve the access token: environment variable first, then config file.
pub fn get_access_token() -> AllocationResult<String> {
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        return Ok(token);
    }

    let config = load_config();
    if let Some(token) = config.access_token {
        return Ok(token);
    }

    Err(AllocationError::NotLoggedIn)
}

/// Resolve the API base URL: environment variable, then config, then default.
pub fn get_api_url() -> String {
    if let Ok(url) = env::var(API_URL_ENV_VAR) {
        return url;
    }

    load_config()
        .api_url
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
