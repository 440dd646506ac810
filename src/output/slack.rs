use serde::Serialize;

use super::markdown::format_score;
use crate::config::PeopleDirectory;
use crate::github::types::Issue;
use crate::scoring::{Row, ScoredIssue};

/// Incoming-webhook body: a single mrkdwn section block.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlackPayload {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Text,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Text {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl SlackPayload {
    pub fn section(text: String) -> Self {
        Self {
            blocks: vec![Block {
                kind: "section".to_string(),
                text: Text {
                    kind: "mrkdwn".to_string(),
                    text,
                },
            }],
        }
    }
}

/// Escape the characters Slack reserves for markup
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Slack link with the issue title as display text
pub fn format_link(issue: &Issue) -> String {
    format!("<{}|{}>", issue.url, escape(&issue.title))
}

/// `<@id>` for every assignee known to `people`; unknown assignees are left out
pub fn format_mentions(issue: &Issue, people: &PeopleDirectory) -> String {
    issue
        .assignees
        .iter()
        .filter_map(|a| people.mention_id(&a.login))
        .map(|id| format!("<@{}>", id))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the ranked issues selected by `rows` as a Slack message.
pub fn format_message(
    ranked: &[ScoredIssue],
    rows: &[Row],
    source_link: &str,
    people: &PeopleDirectory,
) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        ":fire: *<{}|priority>* :calendar: days stale",
        source_link
    ));

    for row in rows {
        match *row {
            Row::Issue(index) => {
                let scored = &ranked[index];
                lines.push(format!(
                    ":fire: {} :calendar: {} {} {}",
                    format_score(scored.score()),
                    scored.days_stale(),
                    format_link(&scored.issue),
                    format_mentions(&scored.issue, people)
                ));
            }
            Row::Ellipsis => lines.push("...".to_string()),
        }
    }

    lines.join("\n").trim_end().to_string()
}

/// Build the webhook payload for the ranked issues.
pub fn build_payload(
    ranked: &[ScoredIssue],
    rows: &[Row],
    source_link: &str,
    people: &PeopleDirectory,
) -> SlackPayload {
    SlackPayload::section(format_message(ranked, rows, source_link, people))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::markdown::format_table;
    use crate::scoring::engine::tests::{fixed_now, sample_issue, with_assignees};
    use crate::scoring::{display_window, rank, WeightConfig};
    use std::collections::HashMap;

    const LINK: &str = "https://github.com/owner/repo/actions/runs/1";

    fn people() -> PeopleDirectory {
        PeopleDirectory::new(HashMap::from([
            ("octocat".to_string(), "U111".to_string()),
            ("hubot".to_string(), "U222".to_string()),
        ]))
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = SlackPayload::section("hello".to_string());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "blocks": [{"type": "section", "text": {"type": "mrkdwn", "text": "hello"}}]
            })
        );
        assert_eq!(payload.blocks[0].text.text, "hello");
    }

    #[test]
    fn test_format_mentions_skips_unknown_people() {
        let issue = with_assignees(sample_issue(1, 1, 0), &["octocat", "stranger", "hubot"]);
        assert_eq!(format_mentions(&issue, &people()), "<@U111> <@U222>");
        assert_eq!(format_mentions(&issue, &PeopleDirectory::default()), "");
    }

    #[test]
    fn test_unknown_assignee_still_shown_in_table() {
        let issue = with_assignees(sample_issue(1, 1, 0), &["stranger"]);
        let ranked = rank(vec![issue], &WeightConfig::default(), fixed_now());
        let rows = display_window(ranked.len());

        let table = format_table(&ranked, &rows, LINK);
        let message = format_message(&ranked, &rows, LINK, &people());

        assert!(table.contains("@stranger"));
        assert!(!message.contains("stranger"));
        assert!(!message.contains("<@"));
    }

    #[test]
    fn test_format_link_escapes_title() {
        let mut issue = sample_issue(3, 1, 0);
        issue.title = "Fix <br> & co".to_string();
        assert_eq!(
            format_link(&issue),
            "<https://github.com/owner/repo/issues/3|Fix &lt;br&gt; &amp; co>"
        );
    }

    #[test]
    fn test_format_message() {
        let issue = with_assignees(sample_issue(7, 7, 0), &["octocat"]);
        let ranked = rank(vec![issue], &WeightConfig::default(), fixed_now());
        let message = format_message(&ranked, &display_window(ranked.len()), LINK, &people());

        assert_eq!(
            message,
            ":fire: *<https://github.com/owner/repo/actions/runs/1|priority>* :calendar: days stale\n\
             :fire: 32 :calendar: 7 <https://github.com/owner/repo/issues/7|Issue 7> <@U111>"
        );
    }

    #[test]
    fn test_format_message_trims_trailing_whitespace() {
        let ranked = rank(vec![sample_issue(2, 1, 0)], &WeightConfig::default(), fixed_now());
        let message = format_message(&ranked, &display_window(ranked.len()), LINK, &people());
        assert!(message.ends_with("|Issue 2>"));
    }

    #[test]
    fn test_format_message_long_list_has_ellipsis() {
        let issues = (1..=20).map(|n| sample_issue(n, n as i64, 0)).collect();
        let ranked = rank(issues, &WeightConfig::default(), fixed_now());
        let message = format_message(&ranked, &display_window(ranked.len()), LINK, &people());
        let lines: Vec<&str> = message.lines().collect();

        // title + 10 head + ellipsis + 5 tail
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[11], "...");
    }
}
