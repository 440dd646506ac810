use crate::github::types::Issue;
use crate::scoring::{Row, ScoredIssue};

const SEPARATOR_ROW: &str = "-:|-:|-:|:-|:-";
const ELLIPSIS_ROW: &str = "...|...|...|...|...";

/// Format a score rounded to the nearest integer ("-0" prints as "0")
pub fn format_score(score: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0
    format!("{:.0}", score + 0.0)
}

/// Markdown link with the short reference as text: `[owner/repo#1](url)`
pub fn format_link(issue: &Issue) -> String {
    format!("[{}]({})", issue.short_ref(), issue.url)
}

/// Space-joined `@login` for every assignee
pub fn format_assignees(issue: &Issue) -> String {
    issue
        .assignees
        .iter()
        .map(|a| format!("@{}", a.login))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the ranked issues selected by `rows` as a Markdown pipe table.
///
/// Columns: index, priority (linking to `source_link`), days stale, link, assigned.
pub fn format_table(ranked: &[ScoredIssue], rows: &[Row], source_link: &str) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "#|[priority]({})|days stale|link|assigned",
        source_link
    ));
    lines.push(SEPARATOR_ROW.to_string());

    for row in rows {
        match *row {
            Row::Issue(index) => {
                let scored = &ranked[index];
                lines.push(format!(
                    "{}|{}|{}|{}|{}",
                    index,
                    format_score(scored.score()),
                    scored.days_stale(),
                    format_link(&scored.issue),
                    format_assignees(&scored.issue)
                ));
            }
            Row::Ellipsis => lines.push(ELLIPSIS_ROW.to_string()),
        }
    }

    lines.join("\n")
}
