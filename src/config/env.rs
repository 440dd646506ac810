use anyhow::{bail, Context, Result};
use std::collections::HashMap;

pub const WEIGHT_ACTIVITY: &str = "WEIGHT_ACTIVITY";
pub const WEIGHT_REACTIONS: &str = "WEIGHT_REACTIONS";
pub const WEIGHT_STALENESS: &str = "WEIGHT_STALENESS";
pub const WEIGHT_AGE: &str = "WEIGHT_AGE";
pub const MULTIPLIER_PR: &str = "MULTIPLIER_PR";
pub const MULTIPLIER_LABELS: &str = "MULTIPLIER_LABELS";
pub const P_LABEL_GRAVEYARD: &str = "P_LABEL_GRAVEYARD";
pub const SLACK_WEBHOOK: &str = "SLACK_WEBHOOK";
pub const GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";

pub const DEFAULT_WEIGHT_ACTIVITY: &str = "14";
pub const DEFAULT_WEIGHT_REACTIONS: &str = "7";
pub const DEFAULT_WEIGHT_STALENESS: &str = "1";
pub const DEFAULT_WEIGHT_AGE: &str = "1/7";
pub const DEFAULT_MULTIPLIER_PR: &str = "7";
pub const DEFAULT_MULTIPLIER_LABELS: &str = "example:-1 epic:1/7 blocked:1/7 invalid:1/7";
pub const DEFAULT_P_LABEL_GRAVEYARD: &str = "4";

/// Parse a number written either as a decimal ("0.5", "-1") or a fraction ("1/7").
///
/// Infinite and NaN values are rejected.
pub fn parse_factor(s: &str) -> Result<f64> {
    let s = s.trim();
    let value = parse_number(s)?;
    if !value.is_finite() {
        bail!("Value '{}' is not a finite number", s);
    }
    Ok(value)
}

fn parse_number(s: &str) -> Result<f64> {
    if let Some((num, den)) = s.split_once('/') {
        let num: f64 = num
            .trim()
            .parse()
            .with_context(|| format!("Invalid numerator in '{}'", s))?;
        let den: f64 = den
            .trim()
            .parse()
            .with_context(|| format!("Invalid denominator in '{}'", s))?;
        if den == 0.0 {
            bail!("Division by zero in '{}'", s);
        }
        Ok(num / den)
    } else {
        s.parse()
            .with_context(|| format!("Invalid number '{}'", s))
    }
}

/// Parse a whitespace-separated list of `label:factor` pairs.
///
/// The factor is split off at the last colon, so label names may themselves
/// contain colons ("priority: high:2"). A later entry for the same label wins.
pub fn parse_label_multipliers(s: &str) -> Result<HashMap<String, f64>> {
    let mut multipliers = HashMap::new();
    for pair in s.split_whitespace() {
        let Some((label, factor)) = pair.rsplit_once(':') else {
            bail!("Expected 'label:factor', got '{}'", pair);
        };
        let factor = parse_factor(factor).with_context(|| format!("In pair '{}'", pair))?;
        multipliers.insert(label.to_string(), factor);
    }
    Ok(multipliers)
}
