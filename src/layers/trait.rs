//! Layer trait definition for network layers
//!
//! A layer is stateless at rest: its weights, activations and deltas live in
//! the network's [`TrainingState`]. Every call receives the layer's own index
//! so the layer can find its slots without any hidden cursor.

use rand::RngCore;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::state::TrainingState;
use crate::utils::init::Init;
use crate::utils::loss::Loss;

/// Per-sample inputs to a backward pass.
#[derive(Debug, Clone, Copy)]
pub struct Backprop<'a> {
    /// Target vector for the sample being backpropagated.
    pub target: &'a Matrix,
    pub learning_rate: f64,
    pub loss: Loss,
}

/// Core trait for network layers.
///
/// The network drives layers in a strict order: `initialize` once per layer in
/// ascending order, then repeated cycles of `forward` (ascending) and
/// `backward` (descending).
pub trait Layer {
    /// Allocates this layer's outgoing weight matrix in `state.weights[index]`.
    ///
    /// The matrix has shape `self.size() × next.size()`. Never called for the
    /// last layer, which has no successor.
    fn initialize(
        &self,
        state: &mut TrainingState,
        index: usize,
        next: &dyn Layer,
        init: Init,
        rng: &mut dyn RngCore,
    ) -> Result<()>;

    /// Computes the activations of layer `index + 1` from `state.nodes[index]`.
    ///
    /// Weights are left untouched.
    fn forward(&self, state: &TrainingState, index: usize) -> Result<Matrix>;

    /// Returns this layer's delta vector.
    ///
    /// As a side effect, layers that own outgoing weights update
    /// `state.weights[index]` in place. The delta must be computed from the
    /// weights as they were before that update.
    fn backward(
        &self,
        state: &mut TrainingState,
        index: usize,
        pass: &Backprop<'_>,
    ) -> Result<Matrix>;

    /// Number of nodes (output width) of this layer.
    fn size(&self) -> usize;
}
