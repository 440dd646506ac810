pub mod markdown;
pub mod slack;

pub use markdown::{format_assignees, format_score, format_table};
pub use slack::{build_payload, format_mentions, format_message, SlackPayload};
