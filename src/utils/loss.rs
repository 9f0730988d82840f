//! Loss functions
//!
//! Losses are evaluated per element. The derivative mode supplies the
//! output-layer term of backpropagation.

use serde::Deserialize;

use crate::utils::activations::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loss {
    /// Squared error: `½·(target − output)²`, derivative `output − target`.
    #[default]
    Euclidean,
}

impl Loss {
    /// Evaluates the loss for one element.
    #[inline]
    pub fn apply(self, target: f64, output: f64, mode: Mode) -> f64 {
        match self {
            Loss::Euclidean => match mode {
                Mode::Forward => 0.5 * (target - output).powi(2),
                Mode::Derivative => output - target,
            },
        }
    }
}
