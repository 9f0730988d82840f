//! Mutable state shared by every layer of one network.
//!
//! Layers own no matrices. Each layer reads and writes its own slots, found
//! by the layer index the network passes into every call:
//!
//! - `weights[l]` maps layer `l`'s nodes onto layer `l + 1`'s nodes
//! - `nodes[l]` holds the latest activations produced for layer `l`
//! - `deltas[l]` holds the latest error gradient for layer `l`
//!
//! `weights.len() == nodes.len() - 1 == deltas.len() - 1` always holds.

use crate::matrix::Matrix;

#[derive(Debug, Clone)]
pub struct TrainingState {
    pub(crate) weights: Vec<Matrix>,
    pub(crate) nodes: Vec<Matrix>,
    pub(crate) deltas: Vec<Matrix>,
}

impl TrainingState {
    /// Allocates zero-filled slots for a network with the given layer widths.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two widths are given or any width is zero.
    pub fn new(widths: &[usize]) -> Self {
        assert!(widths.len() >= 2, "a network needs at least two layers");
        let row_vectors = || widths.iter().map(|&w| Matrix::new(1, w)).collect::<Vec<_>>();
        Self {
            weights: widths
                .windows(2)
                .map(|pair| Matrix::new(pair[0], pair[1]))
                .collect(),
            nodes: row_vectors(),
            deltas: row_vectors(),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn last_index(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn nodes(&self) -> &[Matrix] {
        &self.nodes
    }

    pub fn deltas(&self) -> &[Matrix] {
        &self.deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_shapes() {
        let state = TrainingState::new(&[2, 10, 3]);

        assert_eq!(state.layer_count(), 3);
        assert_eq!(state.weights.len(), state.nodes.len() - 1);
        assert_eq!(state.deltas.len(), state.nodes.len());
        assert_eq!(state.weights[0].dims(), (2, 10));
        assert_eq!(state.weights[1].dims(), (10, 3));
        assert_eq!(state.nodes[2].dims(), (1, 3));
        assert_eq!(state.deltas[1].dims(), (1, 10));
    }

    #[test]
    #[should_panic(expected = "two layers")]
    fn test_single_layer_panics() {
        let _ = TrainingState::new(&[4]);
    }
}
