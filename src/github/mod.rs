/// Public API for the GitHub REST layer.
pub mod client;
pub mod errors;
pub mod models;

pub use client::GithubClient;
pub use errors::ApiError;
pub use models::{Member, PublicKey, Team};
