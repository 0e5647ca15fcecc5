use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.25;

/// Board construction parameters, fixed for the lifetime of a game.
///
/// Missing fields fall back to the defaults, so the host page may pass a
/// partial object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Chance, in `[0, 1]`, that any single cell starts lit.
    pub chance_light_starts_on: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            chance_light_starts_on: DEFAULT_CHANCE_LIGHT_STARTS_ON,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, chance_light_starts_on: f64) -> Self {
        Self {
            rows,
            cols,
            chance_light_starts_on,
        }
    }

    /// Validate configuration values. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        // Written so NaN fails too.
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(ConfigError::InvalidProbability(
                self.chance_light_starts_on,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 5);
        assert!((config.chance_light_starts_on - 0.25).abs() < 1e-12);
    }

    #[test]
    fn validation_rejects_zero_rows() {
        let config = BoardConfig::new(0, 5, 0.5);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRows));
    }

    #[test]
    fn validation_rejects_zero_cols() {
        let config = BoardConfig::new(5, 0, 0.5);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCols));
    }

    #[test]
    fn validation_rejects_grid_whose_cell_count_overflows() {
        let rows = usize::MAX / 2 + 1;
        let config = BoardConfig::new(rows, 2, 0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge { rows, cols: 2 })
        );
        assert!(BoardConfig::new(usize::MAX, usize::MAX, 0.5).validate().is_err());
    }

    #[test]
    fn validation_rejects_probability_out_of_range() {
        assert!(BoardConfig::new(5, 5, 1.01).validate().is_err());
        assert!(BoardConfig::new(5, 5, -0.1).validate().is_err());
        assert!(BoardConfig::new(5, 5, f64::NAN).validate().is_err());
    }

    #[test]
    fn validation_accepts_probability_bounds() {
        BoardConfig::new(1, 1, 0.0).validate().unwrap();
        BoardConfig::new(1, 1, 1.0).validate().unwrap();
    }
}
