use chrono::{DateTime, Utc};

use super::config::WeightConfig;
use super::labels::label_factor;
use crate::github::types::Issue;

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub days_stale: i64,       // Whole days since updatedAt
    pub days_old: i64,         // Whole days since createdAt
    pub base: f64,             // Weighted reactions + staleness + age + comments
    pub label_factor: f64,     // Summed label priorities (or the graveyard)
    pub label_multiplier: f64, // Product of configured label multipliers
    pub type_multiplier: f64,  // PR multiplier, or 1 for issues
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Whole days from `t` to `now`, floored at millisecond precision, so a
/// timestamp half a second in the future counts as -1.
pub fn age_in_days(t: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - t).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

pub fn calculate_score(issue: &Issue, config: &WeightConfig, now: DateTime<Utc>) -> ScoreResult {
    let days_stale = age_in_days(issue.updated_at, now);
    let days_old = age_in_days(issue.created_at, now);

    let base = config.reactions * issue.reaction_count() as f64
        + config.staleness * days_stale as f64
        + config.age * days_old as f64
        + config.activity * issue.comment_count() as f64;

    let label_factor = label_factor(
        issue.labels.iter().map(|l| l.name.as_str()),
        config.graveyard,
    );

    let label_multiplier: f64 = issue
        .labels
        .iter()
        .map(|l| config.label_multiplier(&l.name))
        .product();

    let type_multiplier = if issue.is_pull_request() {
        config.pr_multiplier
    } else {
        1.0
    };

    ScoreResult {
        score: base * label_factor * label_multiplier * type_multiplier,
        breakdown: ScoreBreakdown {
            days_stale,
            days_old,
            base,
            label_factor,
            label_multiplier,
            type_multiplier,
        },
    }
}

/// Priority score of `issue` at `now`
pub fn score(issue: &Issue, config: &WeightConfig, now: DateTime<Utc>) -> f64 {
    calculate_score(issue, config, now).score
}
