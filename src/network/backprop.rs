use crate::activation::{logistic_derivative, OutputActivation};
use crate::math::Matrix;
use crate::network::mlp::{ForwardPass, Mlp};

/// Error signals produced by one backward pass.
///
/// `hidden` spans the augmented hidden layer; its trailing bias column is
/// dropped again when the layer-1 gradient is formed.
#[derive(Debug, Clone)]
pub struct Deltas {
    /// rows × nodes_out.
    pub output: Matrix,
    /// rows × (nodes_hidden + 1).
    pub hidden: Matrix,
}

impl Mlp {
    /// Backward phase: error signals for both layers. Read-only.
    pub fn deltas(
        &self,
        targets: &Matrix,
        pass: &ForwardPass,
        outtype: OutputActivation,
    ) -> Deltas {
        let error = targets.clone() - pass.outputs.clone();
        let output = outtype.output_delta(error, &pass.outputs);

        let hidden = pass
            .hidden
            .map(logistic_derivative)
            .hadamard(&(output.clone() * self.weights2.transpose()));

        Deltas { output, hidden }
    }

    /// Momentum step over both weight layers.
    ///
    /// `velocity = momentum · velocity + eta · (layer inputsᵀ · delta)`, then
    /// `weights += velocity`. Layer 1 reads the stored training inputs; layer 2
    /// reads the hidden activations from `pass`. Both gradients are formed
    /// before either layer is touched.
    pub fn apply_update(&mut self, pass: &ForwardPass, deltas: &Deltas, eta: f64) {
        let grad1 = self.dataset.inputs.transpose() * deltas.hidden.strip_bias();
        let grad2 = pass.hidden.transpose() * deltas.output.clone();

        let momentum = self.momentum;
        self.velocity1 = self.velocity1.map(|v| v * momentum) + grad1.map(|g| g * eta);
        self.velocity2 = self.velocity2.map(|v| v * momentum) + grad2.map(|g| g * eta);

        self.weights1 = self.weights1.clone() + self.velocity1.clone();
        self.weights2 = self.weights2.clone() + self.velocity2.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::SumSquaresLoss;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn xor_network(seed: u64) -> Mlp {
        let inputs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
        let mut rng = StdRng::seed_from_u64(seed);
        Mlp::with_rng(inputs, targets, 2, 1.0, 0.9, &mut rng).unwrap()
    }

    #[test]
    fn test_delta_shapes() {
        let mlp = xor_network(11);
        let pass = mlp.forward(&mlp.dataset.inputs, OutputActivation::Logistic);
        let deltas = mlp.deltas(&mlp.dataset.targets, &pass, OutputActivation::Logistic);

        assert_eq!((deltas.output.rows, deltas.output.cols), (4, 1));
        assert_eq!((deltas.hidden.rows, deltas.hidden.cols), (4, 3));
    }

    #[test]
    fn test_linear_delta_divides_by_sample_count() {
        let mlp = xor_network(12);
        let pass = mlp.forward(&mlp.dataset.inputs, OutputActivation::Linear);
        let deltas = mlp.deltas(&mlp.dataset.targets, &pass, OutputActivation::Linear);

        for i in 0..4 {
            let expected = (mlp.dataset.targets.data[i][0] - pass.outputs.data[i][0]) / 4.0;
            assert_relative_eq!(deltas.output.data[i][0], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_logistic_delta_scales_by_output_derivative() {
        let mlp = xor_network(13);
        let pass = mlp.forward(&mlp.dataset.inputs, OutputActivation::Logistic);
        let deltas = mlp.deltas(&mlp.dataset.targets, &pass, OutputActivation::Logistic);

        for i in 0..4 {
            let y = pass.outputs.data[i][0];
            let expected = (mlp.dataset.targets.data[i][0] - y) * y * (1.0 - y);
            assert_relative_eq!(deltas.output.data[i][0], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_update_velocity_shapes_match_weights() {
        let mut mlp = xor_network(14);
        let pass = mlp.forward(&mlp.dataset.inputs, OutputActivation::Logistic);
        let deltas = mlp.deltas(&mlp.dataset.targets, &pass, OutputActivation::Logistic);
        mlp.apply_update(&pass, &deltas, 0.2);

        assert_eq!(
            (mlp.velocity1.rows, mlp.velocity1.cols),
            (mlp.weights1.rows, mlp.weights1.cols)
        );
        assert_eq!(
            (mlp.velocity2.rows, mlp.velocity2.cols),
            (mlp.weights2.rows, mlp.weights2.cols)
        );
    }

    #[test]
    fn test_momentum_carries_previous_velocity() {
        let mut mlp = xor_network(15);
        let pass = mlp.forward(&mlp.dataset.inputs, OutputActivation::Logistic);
        let deltas = mlp.deltas(&mlp.dataset.targets, &pass, OutputActivation::Logistic);

        mlp.apply_update(&pass, &deltas, 0.2);
        let first = mlp.velocity2.clone();
        mlp.apply_update(&pass, &deltas, 0.2);

        // Same gradient twice: v2 = momentum·v1 + v1 = (1 + momentum)·v1.
        for i in 0..first.rows {
            for j in 0..first.cols {
                assert_relative_eq!(
                    mlp.velocity2.data[i][j],
                    (1.0 + mlp.momentum) * first.data[i][j],
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_repeated_updates_reduce_training_error() {
        // Logical OR is linearly separable, so gradient descent cannot get
        // stuck and the error reliably drops from any initialization.
        let inputs = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]];
        let mut rng = StdRng::seed_from_u64(16);
        let mut mlp = Mlp::with_rng(inputs, targets, 2, 1.0, 0.9, &mut rng).unwrap();
        let outtype = OutputActivation::Logistic;

        let before = {
            let pass = mlp.forward(&mlp.dataset.inputs, outtype);
            SumSquaresLoss::loss(&mlp.dataset.targets, &pass.outputs)
        };

        for _ in 0..500 {
            let pass = mlp.forward(&mlp.dataset.inputs, outtype);
            let deltas = mlp.deltas(&mlp.dataset.targets, &pass, outtype);
            mlp.apply_update(&pass, &deltas, 0.2);
        }

        let after = {
            let pass = mlp.forward(&mlp.dataset.inputs, outtype);
            SumSquaresLoss::loss(&mlp.dataset.targets, &pass.outputs)
        };

        assert!(after < before, "error went from {before} to {after}");
    }
}
