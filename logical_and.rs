use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_feedforward::architecture::{build_network, load_architecture};
use rust_feedforward::config::load_config;
use rust_feedforward::TrainingSample;

// Teach a 2-10-10-1 sigmoid network the logical AND of two inputs.
const CONFIG_PATH: &str = "config/logical_and.json";
const ARCHITECTURE_PATH: &str = "config/logical_and_architecture.json";
// Fixed seed so repeated runs start from the same weights.
const SEED: u64 = 42;

fn training_data() -> Vec<TrainingSample> {
    vec![
        TrainingSample::from_slices(&[1.0, 0.0], &[0.0]),
        TrainingSample::from_slices(&[0.0, 1.0], &[0.0]),
        TrainingSample::from_slices(&[0.0, 0.0], &[0.0]),
        TrainingSample::from_slices(&[1.0, 1.0], &[1.0]),
    ]
}

fn main() -> rust_feedforward::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config(CONFIG_PATH)?;
    let arch = load_architecture(ARCHITECTURE_PATH)?;
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut network = build_network(&arch, config, &mut rng)?;

    let samples = training_data();
    network.train(&samples)?;

    for sample in &samples {
        let out = network.forward(&sample.input)?;
        println!(
            "Given the input: {}the network predicted -> {}",
            sample.input.pretty(),
            out.pretty()
        );
    }
    Ok(())
}
