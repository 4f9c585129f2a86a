use serde::{Deserialize, Serialize};

/// Per-round progress emitted by the early-stopping loop.
///
/// When a `progress_tx` channel is configured in `TrainOptions`, one
/// `RoundStats` value is sent after each round's validation pass. Receivers
/// use this to print or chart the error trajectory while training runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundStats {
    /// 1-based early-stopping round number.
    pub round: usize,
    /// Half sum-of-squares error over the validation set after this round.
    pub validation_error: f64,
    /// Drop in validation error since the previous round; `None` until two
    /// real measurements exist.
    pub improvement: Option<f64>,
}
