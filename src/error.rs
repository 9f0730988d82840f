//! Error type shared by the whole crate.

use crate::utils::activations::Activation;

/// Errors raised while configuring, building or training a network.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two matrices (or a sample and a layer) disagree on shape.
    ///
    /// Shapes are reported as `(rows, cols)`.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("activation {0:?} is not supported for layers")]
    UnsupportedActivation(Activation),

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("model has not been initialized")]
    NotInitialized,

    #[error("model is already initialized")]
    AlreadyInitialized,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
