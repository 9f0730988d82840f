//! Numeric helpers shared by layers and the network
//!
//! Activation functions, loss functions and weight initializers.

pub mod activations;
pub mod init;
pub mod loss;

pub use activations::{Activation, Mode};
pub use init::Init;
pub use loss::Loss;
