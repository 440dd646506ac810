use std::collections::HashMap;

/// Weights that turn an issue into a priority score.
///
/// Built once at startup (see [`crate::config::Config::from_env`]) and shared
/// by every score computed in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightConfig {
    /// Points per comment
    pub activity: f64,

    /// Points per reacting user
    pub reactions: f64,

    /// Points per day since the last update
    pub staleness: f64,

    /// Points per day since creation
    pub age: f64,

    /// Multiplier applied to pull requests
    pub pr_multiplier: f64,

    /// Per-label multiplier; labels not listed count as 1
    pub label_multipliers: HashMap<String, f64>,

    /// Priority of an issue without any priority/severity label.
    /// A `pN` label contributes `graveyard - N`.
    pub graveyard: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        let seventh = 1.0 / 7.0;
        Self {
            activity: 14.0,
            reactions: 7.0,
            staleness: 1.0,
            age: seventh,
            pr_multiplier: 7.0,
            label_multipliers: HashMap::from([
                ("example".to_string(), -1.0),
                ("epic".to_string(), seventh),
                ("blocked".to_string(), seventh),
                ("invalid".to_string(), seventh),
            ]),
            graveyard: 4.0,
        }
    }
}

impl WeightConfig {
    /// Multiplier configured for `label`, or 1 when none is set
    pub fn label_multiplier(&self, label: &str) -> f64 {
        self.label_multipliers.get(label).copied().unwrap_or(1.0)
    }
}
