//! Rank exported GitHub issues and pull requests by a weighted priority score,
//! print the top of the list as a Markdown table and post it to Slack.

pub mod config;
pub mod github;
pub mod notify;
pub mod output;
pub mod scoring;
