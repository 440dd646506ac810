use chrono::{DateTime, Utc};

use super::config::WeightConfig;
use super::engine::{calculate_score, ScoreResult};
use crate::github::types::Issue;

/// Rows shown before the ellipsis
pub const HEAD_ROWS: usize = 10;
/// Rows shown after the ellipsis
pub const TAIL_ROWS: usize = 5;
/// Lists up to this long are shown in full
pub const FULL_LIST_MAX: usize = 15;

/// An issue with its calculated score
#[derive(Debug, Clone)]
pub struct ScoredIssue {
    pub issue: Issue,
    pub result: ScoreResult,
}

impl ScoredIssue {
    pub fn score(&self) -> f64 {
        self.result.score
    }

    pub fn days_stale(&self) -> i64 {
        self.result.breakdown.days_stale
    }
}

/// One line of the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Issue(usize),
    Ellipsis,
}

/// Score every issue, sort by score descending and drop the negative tail.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank(issues: Vec<Issue>, config: &WeightConfig, now: DateTime<Utc>) -> Vec<ScoredIssue> {
    let mut scored: Vec<ScoredIssue> = issues
        .into_iter()
        .map(|issue| {
            let result = calculate_score(&issue, config, now);
            ScoredIssue { issue, result }
        })
        .collect();

    // NaN (e.g. 0 * an overflowed product) sorts after every number and is dropped with the tail
    scored.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or_else(|| a.score().is_nan().cmp(&b.score().is_nan()))
    });

    let retained = scored.partition_point(|s| s.score() >= 0.0);
    let dropped = scored.len() - retained;
    scored.truncate(retained);

    if dropped > 0 {
        tracing::debug!("dropped {} issues with negative priority", dropped);
    }
    debug_assert!(scored.last().map_or(true, |s| s.score() >= 0.0));

    scored
}

/// Rows to display for a ranked list of `n` issues.
///
/// Up to [`FULL_LIST_MAX`] issues are all shown. Longer lists show the first
/// [`HEAD_ROWS`], an ellipsis, then the last [`TAIL_ROWS`].
pub fn display_window(n: usize) -> Vec<Row> {
    if n <= FULL_LIST_MAX {
        return (0..n).map(Row::Issue).collect();
    }
    (0..HEAD_ROWS)
        .map(Row::Issue)
        .chain(std::iter::once(Row::Ellipsis))
        .chain((n - TAIL_ROWS..n).map(Row::Issue))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::engine::tests::{fixed_now, sample_issue, with_labels};

    #[test]
    fn test_rank_empty() {
        assert!(rank(vec![], &WeightConfig::default(), fixed_now()).is_empty());
    }

    #[test]
    fn test_rank_sorts_descending() {
        let issues = vec![
            sample_issue(1, 1, 0),
            sample_issue(2, 30, 0),
            sample_issue(3, 5, 3),
        ];
        let ranked = rank(issues, &WeightConfig::default(), fixed_now());
        let urls: Vec<_> = ranked.iter().map(|s| s.issue.short_ref()).collect();
        assert_eq!(urls, vec!["owner/repo#3", "owner/repo#2", "owner/repo#1"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let issues = (1..=5).map(|n| sample_issue(n, 3, 1)).collect();
        let ranked = rank(issues, &WeightConfig::default(), fixed_now());
        let refs: Vec<_> = ranked.iter().map(|s| s.issue.short_ref()).collect();
        assert_eq!(
            refs,
            vec!["owner/repo#1", "owner/repo#2", "owner/repo#3", "owner/repo#4", "owner/repo#5"]
        );
    }

    #[test]
    fn test_rank_drops_negative_scores() {
        let config = WeightConfig::default();
        let positive = sample_issue(1, 2, 0);
        let negative = with_labels(sample_issue(2, 40, 3), &["example"]);

        let ranked = rank(vec![negative, positive], &config, fixed_now());

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].issue.short_ref(), "owner/repo#1");
        assert!(ranked.last().unwrap().score() >= 0.0);
    }

    #[test]
    fn test_rank_ten_and_minus_one() {
        // activity weight 1, everything else off: score = comments * graveyard * multiplier
        let config = WeightConfig {
            activity: 1.0,
            reactions: 0.0,
            staleness: 0.0,
            age: 0.0,
            pr_multiplier: 1.0,
            label_multipliers: [("minus".to_string(), -1.0), ("ten".to_string(), 2.5)]
                .into_iter()
                .collect(),
            graveyard: 1.0,
        };
        let ten = with_labels(sample_issue(1, 0, 4), &["ten"]);
        let minus_one = with_labels(sample_issue(2, 0, 1), &["minus"]);

        let ranked = rank(vec![minus_one, ten], &config, fixed_now());

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score(), 10.0);
    }

    #[test]
    fn test_rank_never_keeps_negative_or_nan_scores() {
        // An overflowing label multiplier turns zero-base issues into NaN
        let mut config = WeightConfig::default();
        config.label_multipliers.insert("wontfix".to_string(), f64::MAX);
        config.label_multipliers.insert("huge".to_string(), f64::MAX);

        let issues = (0..60u64)
            .map(|n| match n % 3 {
                0 => with_labels(sample_issue(n, 0, 0), &["wontfix", "huge"]),
                1 => with_labels(sample_issue(n, 5, 1), &["example"]),
                _ => sample_issue(n, n as i64, 0),
            })
            .collect();

        let ranked = rank(issues, &config, fixed_now());

        assert_eq!(ranked.len(), 20);
        assert!(ranked.iter().all(|s| s.score() >= 0.0));
        assert!(ranked.windows(2).all(|w| w[0].score() >= w[1].score()));
    }

    #[test]
    fn test_rank_all_negative() {
        let issues = vec![
            with_labels(sample_issue(1, 3, 1), &["example"]),
            with_labels(sample_issue(2, 9, 0), &["example"]),
        ];
        assert!(rank(issues, &WeightConfig::default(), fixed_now()).is_empty());
    }

    #[test]
    fn test_rank_keeps_zero_scores() {
        let ranked = rank(vec![sample_issue(1, 0, 0)], &WeightConfig::default(), fixed_now());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score(), 0.0);
    }

    #[test]
    fn test_display_window_long_list() {
        let rows = display_window(20);
        let mut expected: Vec<Row> = (0..10).map(Row::Issue).collect();
        expected.push(Row::Ellipsis);
        expected.extend((15..20).map(Row::Issue));
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_display_window_short_list_shows_everything() {
        let rows = display_window(12);
        assert_eq!(rows, (0..12).map(Row::Issue).collect::<Vec<_>>());
    }

    #[test]
    fn test_display_window_threshold() {
        assert_eq!(display_window(15).len(), 15);
        assert!(!display_window(15).contains(&Row::Ellipsis));

        let rows = display_window(16);
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[10], Row::Ellipsis);
        assert_eq!(rows[11], Row::Issue(11));
    }

    #[test]
    fn test_display_window_small() {
        assert!(display_window(0).is_empty());
        assert_eq!(display_window(3), vec![Row::Issue(0), Row::Issue(1), Row::Issue(2)]);
    }
}
