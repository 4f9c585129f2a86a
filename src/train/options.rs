use std::str::FromStr;
use std::sync::mpsc;

use serde::Deserialize;

use crate::activation::OutputActivation;
use crate::error::{MlpError, Result};
use crate::train::round_stats::RoundStats;

const DEFAULT_ETA: f64 = 0.25;
const DEFAULT_ITERATIONS: usize = 1000;

/// Hyperparameters for one training run.
///
/// # Fields
/// - `eta`         — learning rate, must be positive and finite
/// - `iterations`  — full-dataset gradient steps per burst
/// - `outtype`     — output-layer activation for this run
/// - `progress_tx` — optional channel sender; the early-stopping loop sends
///                   one `RoundStats` per completed round. Send failures are
///                   ignored, so a dropped receiver never stops training.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub eta: f64,
    pub iterations: usize,
    pub outtype: OutputActivation,
    pub progress_tx: Option<mpsc::Sender<RoundStats>>,
}

impl TrainOptions {
    /// Creates a `TrainOptions` with no progress channel.
    pub fn new(eta: f64, iterations: usize, outtype: OutputActivation) -> Self {
        TrainOptions {
            eta,
            iterations,
            outtype,
            progress_tx: None,
        }
    }
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions::new(DEFAULT_ETA, DEFAULT_ITERATIONS, OutputActivation::Logistic)
    }
}

/// On-disk shape of an options file. Every field may be omitted; `outtype`
/// arrives as a string and is checked against the known activation names.
#[derive(Debug, Deserialize)]
struct OptionsFile {
    #[serde(default = "default_eta")]
    eta: f64,
    #[serde(default = "default_iterations")]
    iterations: usize,
    #[serde(default = "default_outtype")]
    outtype: String,
}

fn default_eta() -> f64 {
    DEFAULT_ETA
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

fn default_outtype() -> String {
    "logistic".to_string()
}

/// Loads training options from a JSON file and validates them.
pub fn load_options(path: &str) -> Result<TrainOptions> {
    let text = std::fs::read_to_string(path)?;
    parse_options(&text)
}

fn parse_options(text: &str) -> Result<TrainOptions> {
    let file: OptionsFile = serde_json::from_str(text)?;

    if !file.eta.is_finite() || file.eta <= 0.0 {
        return Err(MlpError::InvalidOptions(format!(
            "eta must be positive and finite, got {}",
            file.eta
        )));
    }
    if file.iterations == 0 {
        return Err(MlpError::InvalidOptions(
            "iterations must be at least 1".to_string(),
        ));
    }

    let outtype = OutputActivation::from_str(&file.outtype)?;

    Ok(TrainOptions::new(file.eta, file.iterations, outtype))
}
