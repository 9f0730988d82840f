//! Network orchestration: model initialization, forward and backward passes
//! and the online SGD training loop.
//!
//! Per sample, the input is copied into `nodes[0]`, every layer but the last
//! writes the activations of its successor, and the final node slot is the
//! prediction. Backpropagation then walks layers from the output down to
//! index 1 and updates weights as it goes, before the next sample is seen.
//!
//! Layer 0 is skipped by the backward walk, so `weights[0]` keeps the values it
//! was initialized with.

use rand::Rng;
use tracing::{debug, info, instrument, Level};

use crate::config::TrainingConfig;
use crate::error::{Error, Result};
use crate::layers::{Backprop, Layer, LayerKind};
use crate::matrix::Matrix;
use crate::state::TrainingState;
use crate::utils::activations::Mode;

/// One `(input, target)` training pair, both single-row matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub input: Matrix,
    pub target: Matrix,
}

impl TrainingSample {
    pub fn new(input: Matrix, target: Matrix) -> Self {
        Self { input, target }
    }

    /// # Panics
    ///
    /// Panics if either slice is empty.
    pub fn from_slices(input: &[f64], target: &[f64]) -> Self {
        Self::new(Matrix::from_row(input), Matrix::from_row(target))
    }
}

/// A feed-forward network and the state it trains.
#[derive(Debug, Clone)]
pub struct Network {
    config: TrainingConfig,
    layers: Vec<LayerKind>,
    state: Option<TrainingState>,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            config: TrainingConfig::default(),
            layers: Vec::new(),
            state: None,
        }
    }
}

impl Network {
    /// Creates an uninitialized network; call [`Network::initialize_model`] next.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Stores `layers` and allocates their weights.
    ///
    /// The first layer's size is the input width and the last layer's size is
    /// the output width. Every layer but the last allocates its outgoing
    /// weights, in ascending order, from `rng`.
    pub fn initialize_model<R: Rng>(&mut self, layers: Vec<LayerKind>, rng: &mut R) -> Result<()> {
        if self.state.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        if layers.len() < 2 {
            return Err(Error::InvalidArchitecture(format!(
                "need at least an input and an output layer, got {} layer(s)",
                layers.len()
            )));
        }

        let widths: Vec<usize> = layers.iter().map(Layer::size).collect();
        let mut state = TrainingState::new(&widths);
        for (index, pair) in layers.windows(2).enumerate() {
            pair[0].initialize(&mut state, index, &pair[1], self.config.init, &mut *rng)?;
        }

        info!(layers = ?widths, init = ?self.config.init, "initialized model");
        self.layers = layers;
        self.state = Some(state);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    /// Shared training state, once the model is initialized.
    pub fn state(&self) -> Option<&TrainingState> {
        self.state.as_ref()
    }

    /// Propagates `input` through the network and returns the prediction.
    ///
    /// `input` must be a `1 × n` matrix where `n` is the first layer's size.
    /// Weights are not modified; the per-layer activations are kept for a
    /// following [`Network::backward`].
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix> {
        self.check_width(input, 0, "forward")?;
        let state = self.state.as_mut().ok_or(Error::NotInitialized)?;
        forward_pass(&self.layers, state, input)?;
        Ok(state.nodes[state.last_index()].clone())
    }

    /// Backpropagates `target` against the activations of the latest forward
    /// pass, updating weights in place.
    pub fn backward(&mut self, target: &Matrix) -> Result<()> {
        let last = self.layers.len().saturating_sub(1);
        self.check_width(target, last, "backward")?;
        let state = self.state.as_mut().ok_or(Error::NotInitialized)?;
        let pass = Backprop {
            target,
            learning_rate: self.config.learning_rate,
            loss: self.config.loss,
        };
        backward_pass(&self.layers, state, &pass)
    }

    /// Runs online SGD: for every epoch, every sample in order is propagated
    /// forward and immediately backpropagated.
    #[instrument(skip_all, fields(samples = samples.len(), epochs = self.config.epochs))]
    pub fn train(&mut self, samples: &[TrainingSample]) -> Result<()> {
        self.check_samples(samples)?;
        let state = self.state.as_mut().ok_or(Error::NotInitialized)?;
        let epochs = self.config.epochs;
        let report_every = (epochs / 10).max(1);

        info!("training started");
        for epoch in 1..=epochs {
            let report = epoch % report_every == 0 && tracing::enabled!(Level::DEBUG);
            let mut epoch_loss = 0.0;
            for sample in samples {
                forward_pass(&self.layers, state, &sample.input)?;
                if report {
                    epoch_loss += sample_loss(&self.config, state, &sample.target);
                }
                let pass = Backprop {
                    target: &sample.target,
                    learning_rate: self.config.learning_rate,
                    loss: self.config.loss,
                };
                backward_pass(&self.layers, state, &pass)?;
            }
            if report {
                debug!(epoch, loss = epoch_loss / samples.len() as f64, "epoch finished");
            }
        }

        let loss = self.evaluate(samples)?;
        info!(loss, "training finished");
        Ok(())
    }

    /// Mean loss over `samples`, summing the per-element loss of each sample.
    ///
    /// Runs forward passes only; weights are not modified.
    pub fn evaluate(&mut self, samples: &[TrainingSample]) -> Result<f64> {
        self.check_samples(samples)?;
        let state = self.state.as_mut().ok_or(Error::NotInitialized)?;
        let mut total = 0.0;
        for sample in samples {
            forward_pass(&self.layers, state, &sample.input)?;
            total += sample_loss(&self.config, state, &sample.target);
        }
        Ok(total / samples.len() as f64)
    }

    fn check_samples(&self, samples: &[TrainingSample]) -> Result<()> {
        if samples.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }
        let last = self.layers.len().saturating_sub(1);
        for sample in samples {
            self.check_width(&sample.input, 0, "forward")?;
            self.check_width(&sample.target, last, "backward")?;
        }
        Ok(())
    }

    /// `m` must be a row vector as wide as layer `index`.
    fn check_width(&self, m: &Matrix, index: usize, op: &'static str) -> Result<()> {
        let layer = self.layers.get(index).ok_or(Error::NotInitialized)?;
        let expected = (1, layer.size());
        if m.dims() != expected {
            return Err(Error::DimensionMismatch {
                op,
                left: m.dims(),
                right: expected,
            });
        }
        Ok(())
    }
}

fn forward_pass(layers: &[LayerKind], state: &mut TrainingState, input: &Matrix) -> Result<()> {
    state.nodes[0] = input.clone();
    for (index, layer) in layers[..layers.len() - 1].iter().enumerate() {
        state.nodes[index + 1] = layer.forward(state, index)?;
    }
    Ok(())
}

fn backward_pass(layers: &[LayerKind], state: &mut TrainingState, pass: &Backprop<'_>) -> Result<()> {
    for index in (1..layers.len()).rev() {
        state.deltas[index] = layers[index].backward(state, index, pass)?;
    }
    Ok(())
}

fn sample_loss(config: &TrainingConfig, state: &TrainingState, target: &Matrix) -> f64 {
    let out = &state.nodes[state.last_index()];
    out.as_slice()
        .iter()
        .zip(target.as_slice())
        .map(|(&o, &t)| config.loss.apply(t, o, Mode::Forward))
        .sum()
}
