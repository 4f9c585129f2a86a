use rand::Rng;

use crate::activation::{logistic, OutputActivation};
use crate::data::Dataset;
use crate::error::{MlpError, Result};
use crate::math::Matrix;

/// Activations captured by one forward pass.
///
/// `hidden` already carries the bias column, so the backward pass and the
/// layer-2 update can consume it without re-augmenting.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    /// Hidden-layer activations, rows × (nodes_hidden + 1).
    pub hidden: Matrix,
    /// Network outputs after the output activation, rows × nodes_out.
    pub outputs: Matrix,
}

/// A feed-forward perceptron with a single hidden layer.
///
/// Owns its training data and the momentum accumulators for both weight
/// layers. Weights change only through the training functions in
/// [`crate::train`]; `beta` and `momentum` are fixed per network, while the
/// learning rate and output activation travel with each training run.
#[derive(Debug, Clone)]
pub struct Mlp {
    pub dataset: Dataset,
    pub nodes_in: usize,
    pub nodes_hidden: usize,
    pub nodes_out: usize,
    /// Steepness of the logistic squashing, > 0.
    pub beta: f64,
    /// Fraction of the previous update carried into the next one, in [0, 1).
    pub momentum: f64,
    /// (nodes_in + 1) × nodes_hidden.
    pub weights1: Matrix,
    /// (nodes_hidden + 1) × nodes_out.
    pub weights2: Matrix,
    pub velocity1: Matrix,
    pub velocity2: Matrix,
}

impl Mlp {
    /// Builds a network sized for the given samples, drawing initial weights
    /// from `thread_rng`.
    pub fn new(
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        nodes_hidden: usize,
        beta: f64,
        momentum: f64,
    ) -> Result<Mlp> {
        Mlp::with_rng(
            inputs,
            targets,
            nodes_hidden,
            beta,
            momentum,
            &mut rand::thread_rng(),
        )
    }

    /// Like [`Mlp::new`] but with an injected random source, so construction
    /// is reproducible.
    pub fn with_rng<R: Rng>(
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
        nodes_hidden: usize,
        beta: f64,
        momentum: f64,
        rng: &mut R,
    ) -> Result<Mlp> {
        let dataset = Dataset::new(inputs, targets)?;
        let nodes_in = dataset.nodes_in();
        let nodes_out = dataset.nodes_out();

        let weights1 = Matrix::uniform(nodes_in + 1, nodes_hidden, rng);
        let weights2 = Matrix::uniform(nodes_hidden + 1, nodes_out, rng);
        let velocity1 = Matrix::zeros(nodes_in + 1, nodes_hidden);
        let velocity2 = Matrix::zeros(nodes_hidden + 1, nodes_out);

        Ok(Mlp {
            dataset,
            nodes_in,
            nodes_hidden,
            nodes_out,
            beta,
            momentum,
            weights1,
            weights2,
            velocity1,
            velocity2,
        })
    }

    /// Forward phase over a bias-augmented input matrix.
    pub fn forward(&self, inputs: &Matrix, outtype: OutputActivation) -> ForwardPass {
        let hidden = (inputs.clone() * self.weights1.clone())
            .map(|x| logistic(self.beta, x))
            .augment_bias();

        let out_pre = hidden.clone() * self.weights2.clone();
        let outputs = outtype.apply(out_pre, self.beta);

        ForwardPass { hidden, outputs }
    }

    /// Computes outputs for one unlabeled sample. Read-only; always applies
    /// the logistic output activation regardless of how the network was
    /// trained.
    pub fn infer(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.nodes_in {
            return Err(MlpError::WidthMismatch {
                what: "inference input",
                expected: self.nodes_in,
                found: input.len(),
            });
        }

        let inputs = Matrix::from_data(vec![input.to_vec()]).augment_bias();
        let mut pass = self.forward(&inputs, OutputActivation::Logistic);
        Ok(pass.outputs.data.swap_remove(0))
    }
}
