pub mod env;
mod people;

pub use people::{load_people, PeopleDirectory, PEOPLE_FILE};

use crate::scoring::WeightConfig;
use self::env::*;

/// Where the report links back to when it is not running in GitHub Actions
pub const FALLBACK_SOURCE_LINK: &str = "https://github.com/iterative/priority-list#notes";

/// Everything read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub weights: WeightConfig,

    /// Incoming webhook; `None` prints the payload to stderr instead
    pub slack_webhook: Option<String>,

    pub provenance: Provenance,
}

/// The GitHub Actions run that produced the report, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provenance {
    pub server_url: String,
    pub repository: String,
    pub run_id: String,
}

impl Provenance {
    /// Link to the Actions run, or the fallback when any part is missing
    pub fn source_link(&self) -> String {
        if self.server_url.is_empty() || self.repository.is_empty() || self.run_id.is_empty() {
            FALLBACK_SOURCE_LINK.to_string()
        } else {
            format!(
                "{}/{}/actions/runs/{}",
                self.server_url, self.repository, self.run_id
            )
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, Vec<String>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`.
    ///
    /// Unset and empty variables fall back to their defaults.
    /// Returns all validation errors at once (not just the first).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Vec<String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut errors = Vec::new();

        let mut number = |key: &str, default: &str| -> f64 {
            let raw = get(key).unwrap_or_else(|| default.to_string());
            match parse_factor(&raw) {
                Ok(v) => v,
                Err(e) => {
                    errors.push(format!("{}: invalid value '{}' - {}", key, raw, e));
                    0.0
                }
            }
        };

        let activity = number(WEIGHT_ACTIVITY, DEFAULT_WEIGHT_ACTIVITY);
        let reactions = number(WEIGHT_REACTIONS, DEFAULT_WEIGHT_REACTIONS);
        let staleness = number(WEIGHT_STALENESS, DEFAULT_WEIGHT_STALENESS);
        let age = number(WEIGHT_AGE, DEFAULT_WEIGHT_AGE);
        let pr_multiplier = number(MULTIPLIER_PR, DEFAULT_MULTIPLIER_PR);
        let graveyard = number(P_LABEL_GRAVEYARD, DEFAULT_P_LABEL_GRAVEYARD);

        let raw_labels =
            get(MULTIPLIER_LABELS).unwrap_or_else(|| DEFAULT_MULTIPLIER_LABELS.to_string());
        let label_multipliers = match parse_label_multipliers(&raw_labels) {
            Ok(m) => m,
            Err(e) => {
                errors.push(format!("{}: {:#}", MULTIPLIER_LABELS, e));
                Default::default()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            weights: WeightConfig {
                activity,
                reactions,
                staleness,
                age,
                pr_multiplier,
                label_multipliers,
                graveyard,
            },
            slack_webhook: get(SLACK_WEBHOOK),
            provenance: Provenance {
                server_url: get(GITHUB_SERVER_URL).unwrap_or_default(),
                repository: get(GITHUB_REPOSITORY).unwrap_or_default(),
                run_id: get(GITHUB_RUN_ID).unwrap_or_default(),
            },
        })
    }
}
