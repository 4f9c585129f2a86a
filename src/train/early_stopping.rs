use rand::Rng;
use tracing::{debug, info};

use crate::error::{MlpError, Result};
use crate::loss::SumSquaresLoss;
use crate::math::Matrix;
use crate::network::Mlp;
use crate::train::options::TrainOptions;
use crate::train::round_stats::RoundStats;
use crate::train::trainer::train_with_rng;

/// Terminal state of an early-stopping run.
#[derive(Debug, Clone)]
pub struct StopReport {
    /// Number of completed rounds (bursts of `options.iterations` steps).
    pub rounds: usize,
    /// Validation error measured after the final round.
    pub validation_error: f64,
}

/// Trains in bursts until the held-out validation error stops improving,
/// drawing shuffle permutations from `thread_rng`.
pub fn early_stopping(
    mlp: &mut Mlp,
    valid_inputs: &[Vec<f64>],
    valid_targets: &[Vec<f64>],
    options: &TrainOptions,
) -> Result<StopReport> {
    early_stopping_with_rng(
        mlp,
        valid_inputs,
        valid_targets,
        options,
        &mut rand::thread_rng(),
    )
}

/// Like [`early_stopping`] but with an injected random source.
///
/// Keeps a sliding window over the last three validation errors, seeded with
/// descending sentinels so the first round always runs. Each round trains one
/// full burst, then re-evaluates the half sum-of-squares error on the
/// validation set. The loop continues while either of the last two error
/// drops exceeds 0.001; a flat error sequence therefore ends after exactly
/// three rounds.
pub fn early_stopping_with_rng<R: Rng>(
    mlp: &mut Mlp,
    valid_inputs: &[Vec<f64>],
    valid_targets: &[Vec<f64>],
    options: &TrainOptions,
    rng: &mut R,
) -> Result<StopReport> {
    if valid_inputs.len() != valid_targets.len() {
        return Err(MlpError::SampleCountMismatch {
            inputs: valid_inputs.len(),
            targets: valid_targets.len(),
        });
    }

    let valid = Matrix::from_rows(valid_inputs)?;
    let targets = Matrix::from_rows(valid_targets)?;

    if valid.cols != mlp.nodes_in {
        return Err(MlpError::WidthMismatch {
            what: "validation inputs",
            expected: mlp.nodes_in,
            found: valid.cols,
        });
    }
    if targets.cols != mlp.nodes_out {
        return Err(MlpError::WidthMismatch {
            what: "validation targets",
            expected: mlp.nodes_out,
            found: targets.cols,
        });
    }

    let valid = valid.augment_bias();

    let mut old_err2 = 100_002.0;
    let mut old_err1 = 100_001.0;
    let mut new_err = 100_000.0;
    let mut rounds = 0;

    while (old_err1 - new_err > 0.001) || (old_err2 - old_err1 > 0.001) {
        rounds += 1;
        train_with_rng(mlp, options, rng);

        old_err2 = old_err1;
        old_err1 = new_err;
        let pass = mlp.forward(&valid, options.outtype);
        new_err = SumSquaresLoss::loss(&targets, &pass.outputs);

        debug!(
            round = rounds,
            validation_error = new_err,
            "early-stopping round"
        );

        if let Some(ref tx) = options.progress_tx {
            let stats = RoundStats {
                round: rounds,
                validation_error: new_err,
                improvement: if rounds >= 2 {
                    Some(old_err1 - new_err)
                } else {
                    None
                },
            };
            // Reporting is advisory; a dropped receiver never stops training.
            let _ = tx.send(stats);
        }
    }

    info!(
        rounds,
        validation_error = new_err,
        "early stopping finished"
    );

    Ok(StopReport {
        rounds,
        validation_error: new_err,
    })
}
