//! Alert text for pull request events
//!
//! Pure functions: the same event always yields the same text. User-controlled
//! values (login, repository name) are inserted verbatim, without escaping the
//! chat markup.

use common::AlertStyle;
use github::PullRequestEvent;

use crate::message::OutboundMessage;

/// Label describing what happened to the pull request.
///
/// A merged pull request is always reported as `merged`; otherwise the
/// webhook action is passed through unchanged.
pub fn action_label(event: &PullRequestEvent) -> &str {
    if event.pull_request.merged {
        "merged"
    } else {
        &event.action
    }
}

/// Compose the alert line for an event
pub fn format_alert(event: &PullRequestEvent, style: AlertStyle) -> String {
    let login = &event.pull_request.user.login;
    let label = action_label(event);
    let repo = &event.repository.full_name;

    match style {
        AlertStyle::Link => format!(
            "{} {} a Pull Request  <{}|{}>",
            login, label, event.pull_request.html_url, repo
        ),
        AlertStyle::Plain => format!(
            "{} {} a Pull Request on repo: {}\n{}",
            login, label, repo, event.pull_request.url
        ),
    }
}

impl OutboundMessage {
    /// Build the chat message announcing `event`
    pub fn for_event(event: &PullRequestEvent, style: AlertStyle) -> Self {
        Self::new(format_alert(event, style))
    }
}
