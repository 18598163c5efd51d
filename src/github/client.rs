/// Thin typed client over the GitHub REST API.
///
/// Four read-only endpoints are consumed, all GET:
///
/// - `/orgs/{org}/members`: public members of an organization
/// - `/orgs/{org}/teams`: teams, for resolving a name or slug to an id
/// - `/teams/{team_id}/members`: members of a team
/// - `/users/{login}/keys`: a user's public SSH keys
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use super::errors::ApiError;
use super::models::{ApiErrorBody, Member, PublicKey, Team};

/// Default API endpoint. Overridable for tests and GitHub Enterprise hosts.
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Sent with every request; the API rejects requests without a user agent.
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub's JSON media type.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client bound to one API host and one (optional) access token.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client against the public GitHub API.
    ///
    /// With a token, every request carries `Authorization: token <token>`;
    /// without one, requests are unauthenticated and subject to the
    /// platform's unauthenticated rate limits.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(token: Option<String>) -> Result<Self, ApiError> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Build a client against a specific API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_base_url(
        token: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// List the public members of an organization.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request failure or a non-success status.
    pub async fn org_members(&self, org: &str) -> Result<Vec<Member>, ApiError> {
        self.get_json(&format!("/orgs/{org}/members")).await
    }

    /// List the teams of an organization.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request failure or a non-success status.
    pub async fn org_teams(&self, org: &str) -> Result<Vec<Team>, ApiError> {
        self.get_json(&format!("/orgs/{org}/teams")).await
    }

    /// List the members of a team by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request failure or a non-success status.
    pub async fn team_members(&self, team_id: u64) -> Result<Vec<Member>, ApiError> {
        self.get_json(&format!("/teams/{team_id}/members")).await
    }

    /// List a user's public SSH keys. A user with none yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on request failure or a non-success status.
    pub async fn user_keys(&self, login: &str) -> Result<Vec<PublicKey>, ApiError> {
        self.get_json(&format!("/users/{login}/keys")).await
    }

    /// GET `path` and deserialize the JSON response body.
    ///
    /// On a non-success status the body is parsed as the platform's error
    /// shape; an absent or unparseable body leaves both fields empty rather
    /// than failing again on the way out.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.get(url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: body.message,
                documentation_url: body.documentation_url,
            });
        }

        Ok(response.json().await?)
    }
}
