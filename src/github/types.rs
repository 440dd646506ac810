use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;

/// One issue or pull request as exported by `gh issue list --json ...` /
/// `gh pr list --json ...`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub url: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only the number of comments matters, so their bodies are skipped.
    pub comments: Vec<IgnoredAny>,
    pub reaction_groups: Vec<ReactionGroup>,
    pub labels: Vec<Label>,
    pub assignees: Vec<Assignee>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionGroup {
    pub users: ReactionUsers,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionUsers {
    pub total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assignee {
    pub login: String,
}

impl Issue {
    /// Number of users across all reaction groups
    pub fn reaction_count(&self) -> u64 {
        self.reaction_groups.iter().map(|g| g.users.total_count).sum()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// True when the URL looks like `.../pull/<N>`
    pub fn is_pull_request(&self) -> bool {
        self.url.rsplit('/').nth(1) == Some("pull")
    }

    /// Return a short reference in the format "owner/repo#123"
    pub fn short_ref(&self) -> String {
        let path = self.url.splitn(4, '/').last().unwrap_or(&self.url);
        path.replace("/issues/", "#").replace("/pull/", "#")
    }
}
