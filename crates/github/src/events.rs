//! GitHub event types
//!
//! Only the subset of the `pull_request` webhook payload the relay reads.
//! Every field falls back to its zero value when it is missing or `null`.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// GitHub user (as appears in webhook payloads)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,
}

/// GitHub repository (as appears in webhook payloads)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `owner/repo`
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

/// GitHub pull request (as appears in webhook payloads)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubPullRequest {
    /// API resource URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: GitHubUser,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub merged: bool,
    /// Human-facing URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

/// Pull request event payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// Free-form verb such as `opened`, `closed` or `reopened`
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pull_request: GitHubPullRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repository: GitHubRepo,
}

impl PullRequestEvent {
    /// Thread key used to group alerts about the same pull request
    pub fn thread_key(&self) -> String {
        self.number.to_string()
    }
}
