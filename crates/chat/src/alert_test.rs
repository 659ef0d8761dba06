#[cfg(test)]
mod tests {
    use crate::alert::*;
    use crate::message::OutboundMessage;
    use common::AlertStyle;
    use github::{GitHubPullRequest, GitHubRepo, GitHubUser, PullRequestEvent};

    fn make_event(action: &str, merged: bool) -> PullRequestEvent {
        PullRequestEvent {
            action: action.to_string(),
            number: 7,
            pull_request: GitHubPullRequest {
                url: "https://api.github.com/repos/org/repo/pulls/7".to_string(),
                id: 1001,
                user: GitHubUser {
                    login: "alice".to_string(),
                    id: 5,
                    avatar_url: String::new(),
                },
                body: String::new(),
                merged,
                html_url: "http://x/7".to_string(),
            },
            repository: GitHubRepo {
                id: 9,
                name: "repo".to_string(),
                full_name: "org/repo".to_string(),
            },
        }
    }

    // action_label tests
    #[test]
    fn test_label_passes_action_through() {
        for action in ["opened", "closed", "reopened", "synchronize", ""] {
            assert_eq!(action_label(&make_event(action, false)), action);
        }
    }

    #[test]
    fn test_label_merged_overrides_action() {
        for action in ["opened", "closed", "edited"] {
            assert_eq!(action_label(&make_event(action, true)), "merged");
        }
    }

    // format_alert tests
    #[test]
    fn test_link_style() {
        let event = make_event("opened", false);
        assert_eq!(
            format_alert(&event, AlertStyle::Link),
            "alice opened a Pull Request  <http://x/7|org/repo>"
        );
    }

    #[test]
    fn test_link_style_merged() {
        let event = make_event("closed", true);
        assert_eq!(
            format_alert(&event, AlertStyle::Link),
            "alice merged a Pull Request  <http://x/7|org/repo>"
        );
    }

    #[test]
    fn test_plain_style() {
        let event = make_event("reopened", false);
        assert_eq!(
            format_alert(&event, AlertStyle::Plain),
            "alice reopened a Pull Request on repo: org/repo\nhttps://api.github.com/repos/org/repo/pulls/7"
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let mut event = make_event("opened", false);
        event.pull_request.user.login = "<b>|eve".to_string();
        assert_eq!(
            format_alert(&event, AlertStyle::Link),
            "<b>|eve opened a Pull Request  <http://x/7|org/repo>"
        );
    }

    #[test]
    fn test_empty_event() {
        let event = PullRequestEvent::default();
        assert_eq!(
            format_alert(&event, AlertStyle::Link),
            "  a Pull Request  <|>"
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let event = make_event("opened", false);
        assert_eq!(
            OutboundMessage::for_event(&event, AlertStyle::Link),
            OutboundMessage::for_event(&event.clone(), AlertStyle::Link)
        );
    }
}
