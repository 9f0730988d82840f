//! Activation functions for network layers
//!
//! Every activation is evaluated in one of two modes:
//! - [`Mode::Forward`] returns the activated value
//! - [`Mode::Derivative`] returns the local gradient, expressed in terms of the
//!   *activated output* (never the pre-activation sum)

use serde::Deserialize;

use crate::error::{Error, Result};

/// Selects between a function's value and its derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Forward,
    Derivative,
}

/// Element-wise activation applied after a layer's linear transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Sigmoid,
    /// Softmax is recognised by name only. It is a whole-vector operation and
    /// cannot be expressed element-wise, so layers reject it at configuration.
    Softmax,
}

impl Activation {
    /// Checks that this activation can be attached to a layer.
    pub fn validate(self) -> Result<()> {
        match self {
            Activation::Sigmoid => Ok(()),
            Activation::Softmax => Err(Error::UnsupportedActivation(self)),
        }
    }

    /// Evaluates the activation at `n`.
    ///
    /// With [`Mode::Derivative`], `n` must already be the activated output.
    ///
    /// # Panics
    ///
    /// Panics for [`Activation::Softmax`]; call [`Activation::validate`] first.
    #[inline]
    pub fn apply(self, n: f64, mode: Mode) -> f64 {
        match self {
            Activation::Sigmoid => match mode {
                Mode::Forward => sigmoid(n),
                Mode::Derivative => sigmoid_derivative(n),
            },
            Activation::Softmax => panic!("softmax cannot be applied element-wise"),
        }
    }
}

/// Sigmoid activation function.
///
/// Returns the sigmoid of the input: 1 / (1 + exp(-x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative assuming x = sigmoid(z).
///
/// Returns the derivative: x * (1 - x)
pub fn sigmoid_derivative(x: f64) -> f64 {
    x * (1.0 - x)
}
