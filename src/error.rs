//! Error types for the crate.
//!
//! Shape problems are caught where data enters the network: dataset
//! construction, the early-stopping validation set, and single-sample
//! inference. The low-level `Matrix` operators instead panic on mismatched
//! shapes, since reaching them with bad dimensions is a programming error.
//!
//! Numeric overflow is deliberately absent from this taxonomy: the softmax
//! output is a direct exponential-and-normalize, so extreme pre-activations
//! produce IEEE infinities/NaNs that propagate through later computation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MlpError>;

#[derive(Error, Debug)]
pub enum MlpError {
    /// Input and target row counts disagree at dataset construction.
    #[error("input rows ({inputs}) and target rows ({targets}) must match")]
    SampleCountMismatch { inputs: usize, targets: usize },

    /// A row deviates from the width established by row 0.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Vector or validation-set width disagrees with the trained dimensions.
    #[error("{what} width mismatch: expected {expected} columns, found {found}")]
    WidthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Construction with zero samples.
    #[error("dataset must contain at least one sample")]
    EmptyDataset,

    /// An activation name outside linear | logistic | softmax. Only reachable
    /// where strings enter (options files, `FromStr`); the typed API uses the
    /// closed `OutputActivation` enum.
    #[error("unknown activation `{0}`, expected one of: linear, logistic, softmax")]
    UnknownActivation(String),

    /// An options file field failed validation.
    #[error("invalid training options: {0}")]
    InvalidOptions(String),

    /// Options file could not be read.
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    /// Options file is not valid JSON for the expected schema.
    #[error("failed to parse options file: {0}")]
    Json(#[from] serde_json::Error),
}
