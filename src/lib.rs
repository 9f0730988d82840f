//! Rust Feed-Forward Networks Library
//!
//! A small training engine for dense feed-forward networks: fully connected
//! layers, sigmoid activations, squared-error loss and hand-derived
//! backpropagation with online stochastic gradient descent.
//!
//! # Modules
//!
//! - `matrix`: dense matrix container and operations
//! - `utils`: activation functions, loss functions and weight initializers
//! - `layers`: Layer trait and the fully connected layer
//! - `state`: weights, activations and deltas shared by all layers
//! - `network`: model initialization, forward/backward passes, training loop
//! - `config`: training configuration
//! - `architecture`: JSON network descriptions
//!
//! # Example
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rust_feedforward::{Activation, FullyConnected, Network, TrainingConfig, TrainingSample};
//!
//! # fn main() -> rust_feedforward::Result<()> {
//! let mut net = Network::new(TrainingConfig::default())?;
//! net.initialize_model(
//!     vec![
//!         FullyConnected::new(2, Activation::Sigmoid)?.into(),
//!         FullyConnected::new(10, Activation::Sigmoid)?.into(),
//!         FullyConnected::new(1, Activation::Sigmoid)?.into(),
//!     ],
//!     &mut StdRng::seed_from_u64(0),
//! )?;
//! net.train(&[
//!     TrainingSample::from_slices(&[1.0, 1.0], &[1.0]),
//!     TrainingSample::from_slices(&[0.0, 1.0], &[0.0]),
//! ])?;
//! let prediction = net.forward(&rust_feedforward::Matrix::from_row(&[1.0, 1.0]))?;
//! println!("{}", prediction.pretty());
//! # Ok(())
//! # }
//! ```

pub mod architecture;
pub mod config;
pub mod error;
pub mod layers;
pub mod matrix;
pub mod network;
pub mod state;
pub mod utils;

pub use config::TrainingConfig;
pub use error::{Error, Result};
pub use layers::{FullyConnected, Layer, LayerKind};
pub use matrix::Matrix;
pub use network::{Network, TrainingSample};
pub use state::TrainingState;
pub use utils::{Activation, Init, Loss, Mode};
