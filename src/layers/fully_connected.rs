//! Fully connected layer implementation
//!
//! Forward: `nodes[l + 1] = activation(nodes[l] × weights[l])`. There is no
//! bias term.
//!
//! Backward for the output layer:
//!
//! `delta[i] = activation'(o[i]) · loss'(o[i], target[i])`
//!
//! Backward for a hidden layer `l`, in two ordered steps:
//!
//! 1. `delta_l[i] = activation'(o[i]) · Σ_x delta_{l+1}[x] · w[i][x]`
//!    using the current (pre-update) weights
//! 2. `w[i][x] -= learning_rate · o[i] · delta_{l+1}[x]`

use rand::RngCore;
use tracing::trace;

use crate::error::{Error, Result};
use crate::layers::r#trait::{Backprop, Layer};
use crate::matrix::Matrix;
use crate::state::TrainingState;
use crate::utils::activations::{Activation, Mode};
use crate::utils::init::Init;

/// Dense layer described by its node count and activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullyConnected {
    nodes: usize,
    activation: Activation,
}

impl FullyConnected {
    /// Creates a layer with `nodes` outputs.
    ///
    /// Fails for a zero-width layer or an activation that cannot be applied
    /// element-wise (see [`Activation::validate`]).
    pub fn new(nodes: usize, activation: Activation) -> Result<Self> {
        if nodes == 0 {
            return Err(Error::InvalidArchitecture(
                "fully connected layer needs at least one node".to_owned(),
            ));
        }
        activation.validate()?;
        Ok(Self { nodes, activation })
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    fn output_deltas(
        &self,
        state: &TrainingState,
        index: usize,
        pass: &Backprop<'_>,
    ) -> Result<Matrix> {
        let out = &state.nodes[index];
        if out.dims() != pass.target.dims() {
            return Err(Error::DimensionMismatch {
                op: "backward",
                left: out.dims(),
                right: pass.target.dims(),
            });
        }
        Ok(out.map(|o, x, y| {
            self.activation.apply(o, Mode::Derivative)
                * pass.loss.apply(pass.target.at(x, y), o, Mode::Derivative)
        }))
    }

    fn hidden_deltas(
        &self,
        state: &mut TrainingState,
        index: usize,
        pass: &Backprop<'_>,
    ) -> Result<Matrix> {
        let TrainingState {
            weights,
            nodes,
            deltas,
        } = state;
        let out = &nodes[index];
        let next_delta = &deltas[index + 1];
        let w = &mut weights[index];

        // Error reaching each node, read from the weights before they move.
        let propagated = next_delta.dot(&w.transpose())?;
        let delta = out.map(|o, x, _| {
            self.activation.apply(o, Mode::Derivative) * propagated.at(x, 0)
        });

        let rate = pass.learning_rate;
        w.map_in_place(|value, x, y| value - rate * out.at(y, 0) * next_delta.at(x, 0));

        Ok(delta)
    }
}

impl Layer for FullyConnected {
    fn initialize(
        &self,
        state: &mut TrainingState,
        index: usize,
        next: &dyn Layer,
        init: Init,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        state.weights[index] = init.weights(self.nodes, next.size(), rng);
        trace!(layer = index, rows = self.nodes, cols = next.size(), "allocated weights");
        Ok(())
    }

    fn forward(&self, state: &TrainingState, index: usize) -> Result<Matrix> {
        let mut out = state.nodes[index].dot(&state.weights[index])?;
        out.map_in_place(|v, _, _| self.activation.apply(v, Mode::Forward));
        Ok(out)
    }

    fn backward(
        &self,
        state: &mut TrainingState,
        index: usize,
        pass: &Backprop<'_>,
    ) -> Result<Matrix> {
        if index == state.last_index() {
            self.output_deltas(state, index, pass)
        } else {
            self.hidden_deltas(state, index, pass)
        }
    }

    fn size(&self) -> usize {
        self.nodes
    }
}
