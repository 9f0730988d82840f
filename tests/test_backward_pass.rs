// Tests for backward propagation: delta values, weight-update direction and
// the read-before-write ordering of the fused delta/update step.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_feedforward::{
    Activation, FullyConnected, LayerKind, Matrix, Network, TrainingConfig,
};

const LEARNING_RATE: f64 = 0.4;

fn seeded_network(widths: &[usize], seed: u64) -> Network {
    let layers: Vec<LayerKind> = widths
        .iter()
        .map(|&n| FullyConnected::new(n, Activation::Sigmoid).unwrap().into())
        .collect();
    let mut net = Network::new(TrainingConfig {
        learning_rate: LEARNING_RATE,
        ..TrainingConfig::default()
    })
    .unwrap();
    net.initialize_model(layers, &mut StdRng::seed_from_u64(seed))
        .unwrap();
    net
}

// One forward/backward cycle; returns the weights from before the update.
fn step(net: &mut Network, input: &[f64], target: &[f64]) -> Vec<Matrix> {
    let before = net.state().unwrap().weights().to_vec();
    net.forward(&Matrix::from_row(input)).unwrap();
    net.backward(&Matrix::from_row(target)).unwrap();
    before
}

// ============================================================================
// Delta Tests
// ============================================================================

mod delta_tests {
    use super::*;

    #[test]
    fn test_output_delta() {
        let mut net = seeded_network(&[2, 4, 1], 10);
        step(&mut net, &[1.0, 0.0], &[0.0]);

        let state = net.state().unwrap();
        let o = state.nodes()[2].at(0, 0);
        assert_relative_eq!(
            state.deltas()[2].at(0, 0),
            o * (1.0 - o) * (o - 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_hidden_delta_uses_pre_update_weights() {
        let mut net = seeded_network(&[2, 4, 3, 2], 10);
        let before = step(&mut net, &[0.2, 0.9], &[1.0, 0.0]);

        let state = net.state().unwrap();
        for l in [1, 2] {
            let next = &state.deltas()[l + 1];
            for i in 0..state.nodes()[l].cols() {
                let o = state.nodes()[l].at(i, 0);
                let propagated: f64 = (0..next.cols())
                    .map(|x| next.at(x, 0) * before[l].at(x, i))
                    .sum();
                assert_relative_eq!(
                    state.deltas()[l].at(i, 0),
                    o * (1.0 - o) * propagated,
                    epsilon = 1e-12
                );
            }
        }
    }
}

// ============================================================================
// Weight Update Tests
// ============================================================================

mod weight_update_tests {
    use super::*;

    #[test]
    fn test_update_moves_against_gradient() {
        let mut net = seeded_network(&[2, 5, 3, 1], 3);
        let before = step(&mut net, &[1.0, 1.0], &[0.0]);

        let state = net.state().unwrap();
        for l in 1..state.weights().len() {
            let after = &state.weights()[l];
            for i in 0..after.rows() {
                for x in 0..after.cols() {
                    let grad = state.nodes()[l].at(i, 0) * state.deltas()[l + 1].at(x, 0);
                    let moved = after.at(x, i) - before[l].at(x, i);

                    assert_relative_eq!(moved, -LEARNING_RATE * grad, epsilon = 1e-12);
                    if grad > 0.0 {
                        assert!(moved < 0.0);
                    } else if grad < 0.0 {
                        assert!(moved > 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_input_layer_weights_are_not_updated() {
        let mut net = seeded_network(&[2, 5, 1], 3);
        let before = step(&mut net, &[1.0, 1.0], &[0.0]);
        assert_eq!(net.state().unwrap().weights()[0], before[0]);
    }

    #[test]
    fn test_repeated_steps_reduce_loss() {
        let mut net = seeded_network(&[2, 4, 1], 6);
        let sample = [rust_feedforward::TrainingSample::from_slices(&[1.0, 0.0], &[0.0])];

        let initial = net.evaluate(&sample).unwrap();
        for _ in 0..50 {
            step(&mut net, &[1.0, 0.0], &[0.0]);
        }
        assert!(net.evaluate(&sample).unwrap() < initial);
    }
}
