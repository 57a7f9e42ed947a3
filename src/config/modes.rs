//! Run mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which download strategies a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Sequential first, then parallel (default).
    #[default]
    Both,
    Sequential,
    Parallel,
}

impl RunMode {
    /// Strategies to execute, in order.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            RunMode::Both => &[Strategy::Sequential, Strategy::Parallel],
            RunMode::Sequential => &[Strategy::Sequential],
            RunMode::Parallel => &[Strategy::Parallel],
        }
    }
}

/// A single download strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl Strategy {
    /// Heading printed before the run starts.
    pub fn heading(self) -> &'static str {
        match self {
            Strategy::Sequential => "Download images sequentially",
            Strategy::Parallel => "Download images in parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Parallel => write!(f, "parallel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_mode_toml_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: RunMode,
        }

        let parsed: Wrapper = toml::from_str("mode = \"sequential\"").unwrap();
        assert_eq!(parsed.mode, RunMode::Sequential);
        assert!(toml::from_str::<Wrapper>("mode = \"concurrent\"").is_err());
    }

    #[test]
    fn test_both_runs_sequential_first() {
        assert_eq!(
            RunMode::Both.strategies(),
            &[Strategy::Sequential, Strategy::Parallel]
        );
        assert_eq!(RunMode::Parallel.strategies(), &[Strategy::Parallel]);
    }
}
