//! Layer abstractions for feed-forward networks
//!
//! [`Layer`] is the capability set every layer provides. [`LayerKind`] is the
//! closed set of layers a [`crate::Network`] can be built from; new layer types
//! implement [`Layer`] and get a variant here.

mod r#trait;
pub mod fully_connected;

use rand::RngCore;

pub use fully_connected::FullyConnected;
pub use r#trait::{Backprop, Layer};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::state::TrainingState;
use crate::utils::init::Init;

#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    FullyConnected(FullyConnected),
}

impl From<FullyConnected> for LayerKind {
    fn from(layer: FullyConnected) -> Self {
        LayerKind::FullyConnected(layer)
    }
}

impl Layer for LayerKind {
    fn initialize(
        &self,
        state: &mut TrainingState,
        index: usize,
        next: &dyn Layer,
        init: Init,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        match self {
            LayerKind::FullyConnected(fc) => fc.initialize(state, index, next, init, rng),
        }
    }

    fn forward(&self, state: &TrainingState, index: usize) -> Result<Matrix> {
        match self {
            LayerKind::FullyConnected(fc) => fc.forward(state, index),
        }
    }

    fn backward(
        &self,
        state: &mut TrainingState,
        index: usize,
        pass: &Backprop<'_>,
    ) -> Result<Matrix> {
        match self {
            LayerKind::FullyConnected(fc) => fc.backward(state, index, pass),
        }
    }

    fn size(&self) -> usize {
        match self {
            LayerKind::FullyConnected(fc) => fc.size(),
        }
    }
}
