use crate::math::Matrix;

/// Half sum-of-squares loss over a whole prediction matrix.
///
/// This is the early-stopping validation criterion; it sums over every row
/// and output column rather than averaging.
pub struct SumSquaresLoss;

impl SumSquaresLoss {
    /// 0.5 · Σ (targets − outputs)²
    pub fn loss(targets: &Matrix, outputs: &Matrix) -> f64 {
        assert_eq!(targets.rows, outputs.rows);
        assert_eq!(targets.cols, outputs.cols);

        let sum: f64 = targets
            .data
            .iter()
            .zip(outputs.data.iter())
            .flat_map(|(t_row, o_row)| {
                t_row
                    .iter()
                    .zip(o_row.iter())
                    .map(|(t, o)| (t - o) * (t - o))
            })
            .sum();

        0.5 * sum
    }
}
