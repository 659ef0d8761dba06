//! GitHub webhook payloads and the shared-secret request gate

pub mod events;
pub mod gate;
pub mod webhooks;

pub use events::{GitHubPullRequest, GitHubRepo, GitHubUser, PullRequestEvent};
pub use gate::{check_request, GateRejection};
pub use webhooks::{parse_pull_request, DecodeError};
