//! Weight initialization schemes.

use rand::Rng;
use serde::Deserialize;

use crate::matrix::Matrix;

/// Strategy used to fill a freshly allocated weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Init {
    /// Every weight drawn uniformly from `[0, 1)`.
    ///
    /// No variance scaling is applied, which makes deep or wide sigmoid
    /// networks start close to saturation. Kept as the default so results stay
    /// comparable with networks trained under this scheme.
    #[default]
    Uniform,
    /// Xavier/Glorot: uniform in `[-limit, limit]` with
    /// `limit = sqrt(6 / (fan_in + fan_out))`.
    Xavier,
}

impl Init {
    /// Allocates a `fan_in × fan_out` weight matrix.
    pub fn weights<R: Rng + ?Sized>(self, fan_in: usize, fan_out: usize, rng: &mut R) -> Matrix {
        match self {
            Init::Uniform => Matrix::random(fan_in, fan_out, rng),
            Init::Xavier => {
                let limit = (6.0 / (fan_in + fan_out) as f64).sqrt();
                let mut m = Matrix::new(fan_in, fan_out);
                m.map_in_place(|_, _, _| rng.gen_range(-limit..=limit));
                m
            }
        }
    }
}
