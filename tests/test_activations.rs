// Tests for activation and loss functions in both evaluation modes.

use approx::assert_relative_eq;
use rust_feedforward::utils::activations::{sigmoid, sigmoid_derivative};
use rust_feedforward::{Activation, Error, Loss, Mode};

// ============================================================================
// Sigmoid Tests
// ============================================================================

mod sigmoid_tests {
    use super::*;

    #[test]
    fn test_sigmoid_symmetry() {
        for x in [-5.0, -1.0, -0.1, 0.0, 0.3, 2.0, 8.0] {
            assert_relative_eq!(sigmoid(x) + sigmoid(-x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_derivative_identity_on_outputs() {
        for i in 1..100 {
            let o = i as f64 / 100.0;
            assert_relative_eq!(
                Activation::Sigmoid.apply(o, Mode::Derivative),
                o * (1.0 - o),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_derivative_matches_numerical_gradient() {
        let h = 1e-6;
        for x in [-3.0, -0.5, 0.0, 0.7, 2.5] {
            let o = Activation::Sigmoid.apply(x, Mode::Forward);
            let numerical = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
            assert_relative_eq!(sigmoid_derivative(o), numerical, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_derivative_expects_activated_value() {
        // Passing the pre-activation sum gives a different (wrong) gradient.
        let x = 2.0;
        let correct = sigmoid_derivative(sigmoid(x));
        let misuse = sigmoid_derivative(x);
        assert!((correct - misuse).abs() > 1.0);
    }
}

// ============================================================================
// Softmax Tests
// ============================================================================

mod softmax_tests {
    use super::*;

    #[test]
    fn test_softmax_rejected_at_validation() {
        let err = Activation::Softmax.validate().unwrap_err();
        assert!(matches!(err, Error::UnsupportedActivation(Activation::Softmax)));
        assert!(err.to_string().contains("Softmax"));
    }
}

// ============================================================================
// Loss Tests
// ============================================================================

mod loss_tests {
    use super::*;

    #[test]
    fn test_euclidean_forward_is_half_squared_error() {
        for (t, o) in [(0.0, 1.0), (1.0, 0.2), (0.5, 0.5), (-1.0, 2.0)] {
            assert_relative_eq!(
                Loss::Euclidean.apply(t, o, Mode::Forward),
                0.5 * (t - o) * (t - o),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_euclidean_derivative_is_output_minus_target() {
        for (t, o) in [(0.0, 1.0), (1.0, 0.2), (0.5, 0.5), (-1.0, 2.0)] {
            assert_relative_eq!(Loss::Euclidean.apply(t, o, Mode::Derivative), o - t);
        }
    }

    #[test]
    fn test_default_loss() {
        assert_eq!(Loss::default(), Loss::Euclidean);
    }
}
