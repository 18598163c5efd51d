/// Serde models for the GitHub API responses this tool consumes.
///
/// Each struct declares exactly the fields the tool reads; any other field
/// in the response is ignored during deserialization.
use serde::Deserialize;

/// An organization or team member.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    /// The member's login name.
    pub login: String,
}

/// A team within an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    /// Numeric team id, used to list the team's members.
    pub id: u64,
    /// Human-readable display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
}

/// One public SSH key record from a user's key list.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicKey {
    /// The public key text (e.g. `ssh-rsa AAAA...`).
    pub key: String,
}

/// Error body the API returns alongside non-success statuses.
///
/// Both fields are optional: some failures (proxies, HTML error pages) carry
/// no parseable body at all, in which case both stay `None`.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub message: Option<String>,
    /// Link to the relevant API documentation.
    pub documentation_url: Option<String>,
}
