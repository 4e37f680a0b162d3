use std::time::Duration;

use thiserror::Error;

use crate::clock::DEFAULT_STEP_INTERVAL;
use crate::controller::DEFAULT_LIVE_PROBABILITY;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Invalid rule: {0}")]
    Rule(#[from] RuleError),

    #[error("Step interval must be greater than zero")]
    ZeroInterval,

    #[error("Canvas must be at least 1x1, got {width}x{height}")]
    Canvas { width: u16, height: u16 },
}

/// Everything needed to set up a simulation and its canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub rules: RuleSet,

    /// Chance of each cell starting alive on (re)initialization
    pub live_probability: f64,

    /// Time between steps while running
    pub step_interval: Duration,

    /// Canvas width in pixels. `None` fits the available space.
    pub width: Option<u16>,

    /// Canvas height in pixels. `None` fits the available space.
    pub height: Option<u16>,

    pub show_gridlines: bool,

    /// Seed for random initialization. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Whether to stay stopped after the first initialization
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 50,
            columns: 50,
            rules: RuleSet::default(),
            live_probability: DEFAULT_LIVE_PROBABILITY,
            step_interval: DEFAULT_STEP_INTERVAL,
            width: None,
            height: None,
            show_gridlines: true,
            seed: None,
            start_paused: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::cell_count(self.rows, self.columns)?;

        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(GridError::Probability(self.live_probability).into());
        }

        if self.step_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }

        if self.width == Some(0) || self.height == Some(0) {
            return Err(ConfigError::Canvas {
                width: self.width.unwrap_or_default(),
                height: self.height.unwrap_or_default(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::B3S23;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!((config.rows, config.columns), (50, 50));
        assert_eq!(config.rules, B3S23);
        assert_eq!(config.live_probability, 0.2);
        assert_eq!(config.step_interval, Duration::from_millis(300));
        assert!(config.show_gridlines);
        assert!(!config.start_paused);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let bad = Config {
            rows: 0,
            ..Config::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Grid(GridError::Dimensions { rows: 0, .. }))
        ));

        let bad = Config {
            columns: usize::MAX,
            ..Config::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Grid(GridError::Dimensions { .. }))
        ));

        let bad = Config {
            live_probability: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::Grid(GridError::Probability(_)))
        ));

        let bad = Config {
            step_interval: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::ZeroInterval));

        let bad = Config {
            width: Some(0),
            ..Config::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::Canvas { .. })));
    }
}
