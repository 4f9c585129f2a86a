use std::str::FromStr;

use crate::error::MlpError;
use crate::math::Matrix;

/// Logistic squashing with steepness `beta`: 1 / (1 + exp(−beta·x)).
pub fn logistic(beta: f64, x: f64) -> f64 {
    1.0 / (1.0 + (-beta * x).exp())
}

/// Logistic derivative in terms of the activation itself: y·(1 − y).
pub fn logistic_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Output-layer activation kind.
///
/// A closed enum: every dispatch on it is exhaustive, so an unrecognized
/// activation cannot reach the numeric core. Activation names as strings
/// exist only at the options-file boundary, where parsing yields
/// `MlpError::UnknownActivation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputActivation {
    /// Identity, for regression targets.
    Linear,
    /// Element-wise logistic with the network's `beta`.
    Logistic,
    /// Row-normalized exponential; applied per row, not element-wise.
    ///
    /// No max-subtraction stabilization is performed: very large
    /// pre-activations overflow `exp` and the resulting infinities/NaNs
    /// propagate through later computation. Known limitation, kept visible.
    Softmax,
}

impl OutputActivation {
    /// Applies the output transform to a matrix of pre-activations.
    pub fn apply(&self, pre: Matrix, beta: f64) -> Matrix {
        match self {
            OutputActivation::Linear => pre,
            OutputActivation::Logistic => pre.map(|x| logistic(beta, x)),
            OutputActivation::Softmax => {
                let data = pre
                    .data
                    .iter()
                    .map(|row| {
                        let normaliser: f64 = row.iter().map(|x| x.exp()).sum();
                        row.iter().map(|x| x.exp() / normaliser).collect()
                    })
                    .collect();
                Matrix::from_data(data)
            }
        }
    }

    /// Scales the raw output error (`targets − outputs`) into the delta-rule
    /// error signal for this activation kind: linear and softmax average over
    /// the batch, logistic applies the activation derivative element-wise.
    pub fn output_delta(&self, error: Matrix, outputs: &Matrix) -> Matrix {
        match self {
            OutputActivation::Linear | OutputActivation::Softmax => {
                let samples = error.rows as f64;
                error.map(|e| e / samples)
            }
            OutputActivation::Logistic => error.hadamard(&outputs.map(logistic_derivative)),
        }
    }
}

impl FromStr for OutputActivation {
    type Err = MlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(OutputActivation::Linear),
            "logistic" => Ok(OutputActivation::Logistic),
            "softmax" => Ok(OutputActivation::Softmax),
            other => Err(MlpError::UnknownActivation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_logistic_zero() {
        assert_relative_eq!(logistic(1.0, 0.0), 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_logistic_beta_steepens() {
        // Larger beta pushes the same input closer to saturation.
        assert!(logistic(3.0, 1.0) > logistic(1.0, 1.0));
        assert!(logistic(3.0, -1.0) < logistic(1.0, -1.0));
    }

    #[test]
    fn test_logistic_derivative_at_half() {
        assert_relative_eq!(logistic_derivative(0.5), 0.25, epsilon = EPSILON);
    }

    #[test]
    fn test_linear_apply_is_identity() {
        let pre = Matrix::from_data(vec![vec![-3.0, 0.0, 7.5]]);
        let out = OutputActivation::Linear.apply(pre.clone(), 1.0);
        assert_eq!(out, pre);
    }

    #[test]
    fn test_logistic_apply_range() {
        let pre = Matrix::from_data(vec![vec![-30.0, -1.0, 0.0, 1.0, 30.0]]);
        let out = OutputActivation::Logistic.apply(pre, 1.0);
        assert!(out.data[0].iter().all(|&y| y > 0.0 && y < 1.0));
    }

    #[test]
    fn test_softmax_rows_sum_to_one() {
        let pre = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![-1.0, 0.0, 1.0]]);
        let out = OutputActivation::Softmax.apply(pre, 1.0);
        for row in &out.data {
            let sum: f64 = row.iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
            assert!(row.iter().all(|&y| y > 0.0 && y < 1.0));
        }
    }

    #[test]
    fn test_softmax_uniform_input() {
        let pre = Matrix::from_data(vec![vec![2.0, 2.0, 2.0]]);
        let out = OutputActivation::Softmax.apply(pre, 1.0);
        for &y in &out.data[0] {
            assert_relative_eq!(y, 1.0 / 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_softmax_overflow_propagates_nan() {
        // Unstabilized exp overflows to infinity; inf/inf is NaN. The
        // documented behavior is propagation, not a panic.
        let pre = Matrix::from_data(vec![vec![1000.0, 1000.0]]);
        let out = OutputActivation::Softmax.apply(pre, 1.0);
        assert!(out.data[0].iter().all(|y| y.is_nan()));
    }

    #[test]
    fn test_output_delta_linear_averages_over_batch() {
        let error = Matrix::from_data(vec![vec![1.0], vec![-1.0], vec![0.5], vec![0.0]]);
        let outputs = Matrix::zeros(4, 1);
        let delta = OutputActivation::Linear.output_delta(error, &outputs);
        assert_relative_eq!(delta.data[0][0], 0.25, epsilon = EPSILON);
        assert_relative_eq!(delta.data[1][0], -0.25, epsilon = EPSILON);
        assert_relative_eq!(delta.data[2][0], 0.125, epsilon = EPSILON);
    }

    #[test]
    fn test_output_delta_logistic_uses_derivative() {
        let error = Matrix::from_data(vec![vec![2.0]]);
        let outputs = Matrix::from_data(vec![vec![0.5]]);
        let delta = OutputActivation::Logistic.output_delta(error, &outputs);
        // 2.0 · 0.5·(1−0.5) = 0.5
        assert_relative_eq!(delta.data[0][0], 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_from_str_known_names() {
        assert_eq!(
            "linear".parse::<OutputActivation>().unwrap(),
            OutputActivation::Linear
        );
        assert_eq!(
            "logistic".parse::<OutputActivation>().unwrap(),
            OutputActivation::Logistic
        );
        assert_eq!(
            "softmax".parse::<OutputActivation>().unwrap(),
            OutputActivation::Softmax
        );
    }

    #[test]
    fn test_from_str_unknown_name() {
        match "relu".parse::<OutputActivation>() {
            Err(MlpError::UnknownActivation(name)) => assert_eq!(name, "relu"),
            other => panic!("expected UnknownActivation, got {:?}", other),
        }
    }
}
