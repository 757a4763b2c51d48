//! Display-layer tuning.

use serde::{Deserialize, Serialize};

/// Default search dropdown cap.
const fn default_max_results() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Maximum search results to display. `0` means unlimited.
    ///
    /// This caps presentation only; the search engine itself returns every
    /// match unless handed this limit.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl DisplayConfig {
    /// The cap as the search engine's option shape.
    #[must_use]
    pub const fn result_cap(&self) -> Option<usize> {
        if self.max_results == 0 {
            None
        } else {
            Some(self.max_results)
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cap_at_ten() {
        let config = DisplayConfig::default();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.result_cap(), Some(10));
    }

    #[test]
    fn zero_means_unlimited() {
        let config = DisplayConfig { max_results: 0 };
        assert_eq!(config.result_cap(), None);
    }
}
