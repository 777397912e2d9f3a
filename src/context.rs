use std::sync::Arc;

use crate::client::AllocationClient;
use crate::config::{get_access_token, get_api_url, load_config, save_config, Config};
use crate::error::{AllocationError, AllocationResult};
use crate::models::User;

/// Application-scoped context: the current session and its API client.
///
/// Constructed once at startup and passed by reference to the view layer.
/// `init` restores a persisted session, `login`/`logout` are the only
/// operations that mutate it; everything else reads.
pub struct AppContext {
    config: Config,
    api_url: String,
    user: Option<User>,
    client: Option<Arc<AllocationClient>>,
}

impl AppContext {
    /// Load the persisted config and restore the session if a token is
    /// available (environment variable first, then config file).
    pub fn init() -> AllocationResult<Self> {
        let config = load_config();
        let api_url = get_api_url();
        let token = get_access_token().ok();

        let client = match &token {
            Some(token) => Some(Arc::new(AllocationClient::new(&api_url, token)?)),
            None => None,
        };
        let user = config.user.clone();

        Ok(Self {
            config,
            api_url,
            user,
            client,
        })
    }

    /// Build a context from an explicit config, ignoring the environment.
    pub fn with_config(config: Config) -> AllocationResult<Self> {
        let api_url = config
            .api_url
            .clone()
            .unwrap_or_else(|| crate::constants::DEFAULT_API_URL.to_string());

        let client = match &config.access_token {
            Some(token) => Some(Arc::new(AllocationClient::new(&api_url, token)?)),
            None => None,
        };
        let user = config.user.clone();

        Ok(Self {
            config,
            api_url,
            user,
            client,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> AllocationResult<&User> {
        self.user.as_ref().ok_or(AllocationError::NotLoggedIn)
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.is_some()
    }

    /// The authenticated client, or a "please log in" error.
    pub fn client(&self) -> AllocationResult<Arc<AllocationClient>> {
        self.client.clone().ok_or(AllocationError::NotLoggedIn)
    }

    /// Authenticate against the API and persist credentials and user
    /// identity for later sessions.
    pub async fn login(&mut self, username: &str, password: &str) -> AllocationResult<User> {
        let anonymous = AllocationClient::anonymous(&self.api_url)?;
        let response = anonymous.login(username, password).await?;

        self.config.access_token = Some(response.access.clone());
        self.config.refresh_token = Some(response.refresh.clone());
        self.config.user = Some(response.user.clone());
        save_config(&self.config)?;

        self.client = Some(Arc::new(AllocationClient::new(&self.api_url, &response.access)?));
        self.user = Some(response.user.clone());

        Ok(response.user)
    }

    /// Clear the persisted session. Safe to call when not logged in.
    pub fn logout(&mut self) -> AllocationResult<()> {
        self.config.clear_session();
        save_config(&self.config)?;
        self.client = None;
        self.user = None;
        Ok(())
    }

    /// Re-fetch the current user from the API and refresh the cached copy.
    pub async fn refresh_user(&mut self) -> AllocationResult<User> {
        let client = self.client()?;
        let user = client.current_user().await?;
        self.config.user = Some(user.clone());
        save_config(&self.config)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Persist a new API base URL for subsequent sessions.
    pub fn set_api_url(&mut self, url: String) -> AllocationResult<()> {
        self.api_url = url.trim_end_matches('/').to_string();
        self.config.api_url = Some(self.api_url.clone());
        save_config(&self.config)?;
        Ok(())
    }
}
