//! Configuration structures for training
//!
//! A [`TrainingConfig`] carries the learning rate, the number of epochs, the
//! loss function and the weight initializer. Every field has a default, so a
//! JSON file only needs the fields it overrides.
//!
//! # Example
//!
//! ```json
//! {
//!   "learning_rate": 0.4,
//!   "epochs": 100000,
//!   "loss": "euclidean",
//!   "init": "uniform"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::utils::init::Init;
use crate::utils::loss::Loss;

pub const DEFAULT_LEARNING_RATE: f64 = 0.4;
pub const DEFAULT_EPOCHS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// Step size of every weight update; must be finite and positive.
    pub learning_rate: f64,
    /// Number of full passes over the training samples.
    pub epochs: usize,
    pub loss: Loss,
    pub init: Init,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            loss: Loss::Euclidean,
            init: Init::Uniform,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// Loads a training configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it and validates the result.
///
/// # Examples
///
/// ```no_run
/// use rust_feedforward::config::load_config;
///
/// let cfg = load_config("config/logical_and.json").unwrap();
/// assert!(cfg.learning_rate > 0.0);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TrainingConfig> {
    let contents = fs::read_to_string(path)?;
    let config: TrainingConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = TrainingConfig::default();
        assert_eq!(cfg.learning_rate, 0.4);
        assert_eq!(cfg.epochs, 100_000);
        assert_eq!(cfg.loss, Loss::Euclidean);
        assert_eq!(cfg.init, Init::Uniform);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let cfg = TrainingConfig {
                learning_rate: lr,
                ..TrainingConfig::default()
            };
            assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: TrainingConfig = serde_json::from_str(r#"{ "epochs": 10 }"#).unwrap();
        assert_eq!(cfg.epochs, 10);
        assert_eq!(cfg.learning_rate, DEFAULT_LEARNING_RATE);
    }
}
