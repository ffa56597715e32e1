// Configuration type definitions

use serde::Deserialize;

use crate::suggest::DEFAULT_MAX_RESULTS;

/// Suggestion behaviour section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Resolve cache lookups with a substring scan over keys instead of an
    /// exact key match
    #[serde(default)]
    pub broad_lookup: bool,
    /// Fields that never get suggestions (numeric grade entry by default)
    #[serde(default = "default_excluded_fields")]
    pub excluded_fields: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_excluded_fields() -> Vec<String> {
    vec!["nilai".to_string()]
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            enabled: default_enabled(),
            max_results: default_max_results(),
            broad_lookup: false,
            excluded_fields: default_excluded_fields(),
        }
    }
}

impl SuggestionsConfig {
    /// Result limit, never below one
    pub fn effective_max_results(&self) -> usize {
        self.max_results.max(1)
    }

    /// Whether suggestions run for `field`
    pub fn is_enabled_for(&self, field: &str) -> bool {
        self.enabled && !self.excluded_fields.iter().any(|f| f == field)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}
