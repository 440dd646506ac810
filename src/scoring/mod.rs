pub mod config;
pub mod engine;
pub mod labels;
pub mod rank;

pub use config::WeightConfig;
pub use engine::{age_in_days, calculate_score, score, ScoreBreakdown, ScoreResult};
pub use labels::{label_factor, label_priority};
pub use rank::{display_window, rank, Row, ScoredIssue};
