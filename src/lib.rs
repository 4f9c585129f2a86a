//! A minimal feed-forward neural network trainer: one hidden layer,
//! bias-augmented inputs, momentum gradient descent, and a validation-driven
//! early-stopping loop.
//!
//! Error convention: matrix operators panic on shape mismatch (programmer
//! error), while the crate's entry points (network construction, training
//! with a validation set, inference, options loading) validate their inputs
//! and return [`error::MlpError`].

pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::OutputActivation;
pub use data::dataset::Dataset;
pub use error::{MlpError, Result};
pub use loss::sum_squares::SumSquaresLoss;
pub use math::matrix::Matrix;
pub use network::mlp::{ForwardPass, Mlp};
pub use train::early_stopping::{early_stopping, early_stopping_with_rng, StopReport};
pub use train::options::{load_options, TrainOptions};
pub use train::round_stats::RoundStats;
pub use train::trainer::{train, train_with_rng};
