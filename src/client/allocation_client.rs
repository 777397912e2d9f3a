use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{
    CREATE_TEAM_PATH, CURRENT_USER_PATH, INVITATIONS_PATH, INVITE_PATH, LEAVE_TEAM_PATH,
    LOGIN_PATH, MY_TEAM_PATH,
};
use crate::error::{AllocationError, AllocationResult};
use crate::models::{Invitation, InvitationReply, LoginResponse, Team, User};

use super::response::error_from_response;

/// Thin client over the Project Allocation REST API. One method per
/// endpoint; every call is a single request/response round trip with no
/// retry or timeout policy of its own.
pub struct AllocationClient {
    base_url: String,
    client: reqwest::Client,
}

impl AllocationClient {
    /// Build an authenticated client attaching `Authorization: Bearer`.
    pub fn new(base_url: impl Into<String>, access_token: &str) -> AllocationResult<Self> {
        Self::build(base_url.into(), Some(access_token))
    }

    /// Build a client without credentials, for the login call only.
    pub fn anonymous(base_url: impl Into<String>) -> AllocationResult<Self> {
        Self::build(base_url.into(), None)
    }

    fn build(base_url: String, access_token: Option<&str>) -> AllocationResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = access_token {
            let bearer = format!("Bearer {}", token);
            let value = HeaderValue::from_str(&bearer)
                .map_err(|_| AllocationError::Config("Invalid access token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and map any non-2xx response onto the error
    /// taxonomy. The response is handed back for the caller to decode.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> AllocationResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }

    async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> AllocationResult<T> {
        let response = self.send(method, path, body).await?;
        Ok(response.json().await?)
    }

    /// Fire a mutation whose success body we do not need (some endpoints
    /// answer `{"message": ...}`, some 204 with no body at all).
    async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> AllocationResult<()> {
        self.send(method, path, body).await?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> AllocationResult<LoginResponse> {
        let body = json!({ "username": username, "password": password });
        self.request(Method::POST, LOGIN_PATH, Some(body)).await
    }

    pub async fn current_user(&self) -> AllocationResult<User> {
        self.request(Method::GET, CURRENT_USER_PATH, None).await
    }

    /// Fetch the caller's team. A 404 means "no team yet" and is a normal
    /// state for every view, so it maps to `Ok(None)` here.
    pub async fn my_team(&self) -> AllocationResult<Option<Team>> {
        match self.request(Method::GET, MY_TEAM_PATH, None).await {
            Ok(team) => Ok(Some(team)),
            Err(AllocationError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_team(&self, name: &str) -> AllocationResult<Team> {
        let body = json!({ "name": name });
        self.request(Method::POST, CREATE_TEAM_PATH, Some(body)).await
    }

    pub async fn invitations(&self) -> AllocationResult<Vec<Invitation>> {
        self.request(Method::GET, INVITATIONS_PATH, None).await
    }

    /// Invite a student by university id. The id is passed through as
    /// typed; the server validates existence, role, and capacity.
    pub async fn invite_member(&self, user_id: &str) -> AllocationResult<()> {
        let body = json!({ "user_id": user_id });
        self.request_unit(Method::POST, INVITE_PATH, Some(body)).await
    }

    pub async fn respond_invitation(
        &self,
        invitation_id: i64,
        reply: InvitationReply,
    ) -> AllocationResult<()> {
        let path = format!("/api/teams/response/{}/", invitation_id);
        let body = json!({ "status": reply.as_str() });
        self.request_unit(Method::PUT, &path, Some(body)).await
    }

    pub async fn leave_team(&self) -> AllocationResult<()> {
        self.request_unit(Method::POST, LEAVE_TEAM_PATH, None).await
    }

    pub async fn remove_member(&self, membership_id: i64) -> AllocationResult<()> {
        let path = format!("/api/teams/members/{}/remove/", membership_id);
        self.request_unit(Method::DELETE, &path, None).await
    }

    pub async fn delete_team(&self, team_id: i64) -> AllocationResult<()> {
        let path = format!("/api/teams/{}/", team_id);
        self.request_unit(Method::DELETE, &path, None).await
    }
}
