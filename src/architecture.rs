//! Architecture configuration structures
//!
//! Networks can be described in JSON instead of code. Layers are listed in
//! order, input layer first and output layer last.
//!
//! # Example
//!
//! ```json
//! {
//!   "layers": [
//!     { "layer_type": "fully_connected", "nodes": 2 },
//!     { "layer_type": "fully_connected", "nodes": 10, "activation": "sigmoid" },
//!     { "layer_type": "fully_connected", "nodes": 1 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::config::TrainingConfig;
use crate::error::{Error, Result};
use crate::layers::{FullyConnected, LayerKind};
use crate::network::Network;
use crate::utils::activations::Activation;

/// Configuration for a single layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerConfig {
    /// Type of layer; only "fully_connected" (alias "dense") is known.
    pub layer_type: String,
    /// Number of nodes (output width) of the layer.
    pub nodes: usize,
    /// Activation applied by the layer (default: sigmoid).
    #[serde(default = "default_activation")]
    pub activation: Activation,
}

fn default_activation() -> Activation {
    Activation::Sigmoid
}

impl LayerConfig {
    fn build(&self, index: usize) -> Result<LayerKind> {
        match self.layer_type.to_lowercase().as_str() {
            "fully_connected" | "dense" => FullyConnected::new(self.nodes, self.activation)
                .map(LayerKind::from)
                .map_err(|e| match e {
                    Error::InvalidArchitecture(msg) => {
                        Error::InvalidArchitecture(format!("layer {index}: {msg}"))
                    }
                    other => other,
                }),
            _ => Err(Error::InvalidArchitecture(format!(
                "layer {index}: unknown layer type '{}'",
                self.layer_type
            ))),
        }
    }
}

/// Ordered layer list describing a whole network.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArchitectureConfig {
    pub layers: Vec<LayerConfig>,
}

impl ArchitectureConfig {
    /// Builds the layer list, checking every layer and the minimum depth.
    pub fn build_layers(&self) -> Result<Vec<LayerKind>> {
        if self.layers.len() < 2 {
            return Err(Error::InvalidArchitecture(format!(
                "architecture needs an input and an output layer, got {} layer(s)",
                self.layers.len()
            )));
        }
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| layer.build(i))
            .collect()
    }
}

/// Loads and validates an architecture from a JSON file.
pub fn load_architecture(path: impl AsRef<Path>) -> Result<ArchitectureConfig> {
    let contents = fs::read_to_string(path)?;
    let arch: ArchitectureConfig = serde_json::from_str(&contents)?;
    arch.build_layers()?;
    Ok(arch)
}

/// Builds an initialized network from an architecture and training config.
pub fn build_network<R: Rng>(
    arch: &ArchitectureConfig,
    config: TrainingConfig,
    rng: &mut R,
) -> Result<Network> {
    let mut network = Network::new(config)?;
    network.initialize_model(arch.build_layers()?, rng)?;
    Ok(network)
}
