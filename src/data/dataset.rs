use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MlpError;
use crate::math::Matrix;

/// Training samples: feature rows paired row-for-row with target rows.
///
/// Inputs are stored bias-augmented: the constant −1 feature is appended
/// once at construction and never removed.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Bias-augmented input matrix, `samples × (nodes_in + 1)`.
    pub inputs: Matrix,
    /// Target matrix, `samples × nodes_out`.
    pub targets: Matrix,
}

impl Dataset {
    /// Validates the raw rows (equal sample counts, rectangular, non-empty)
    /// and stores the inputs with the bias column appended.
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Dataset, MlpError> {
        if inputs.len() != targets.len() {
            return Err(MlpError::SampleCountMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }

        let inputs = Matrix::from_rows(&inputs)?;
        let targets = Matrix::from_rows(&targets)?;

        Ok(Dataset {
            inputs: inputs.augment_bias(),
            targets,
        })
    }

    pub fn samples(&self) -> usize {
        self.inputs.rows
    }

    /// Raw feature width, without the bias column.
    pub fn nodes_in(&self) -> usize {
        self.inputs.cols - 1
    }

    pub fn nodes_out(&self) -> usize {
        self.targets.cols
    }

    /// Permutes input and target rows with one shared permutation, keeping
    /// every (input, target) pair together.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let mut indices: Vec<usize> = (0..self.samples()).collect();
        indices.shuffle(rng);
        self.inputs = self.inputs.select_rows(&indices);
        self.targets = self.targets.select_rows(&indices);
    }
}
