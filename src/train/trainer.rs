use rand::Rng;
use tracing::debug;

use crate::math::Matrix;
use crate::network::Mlp;
use crate::train::options::TrainOptions;

/// Trains `mlp` for exactly `options.iterations` full-dataset gradient steps,
/// drawing shuffle permutations from `thread_rng`.
pub fn train(mlp: &mut Mlp, options: &TrainOptions) {
    train_with_rng(mlp, options, &mut rand::thread_rng());
}

/// Like [`train`] but with an injected random source, so runs are
/// reproducible.
///
/// Both momentum accumulators are zeroed on entry; momentum builds up only
/// within a single burst. Each iteration runs forward → backward → update
/// over the whole stored dataset, then reshuffles it with one shared
/// permutation. There is no early exit.
pub fn train_with_rng<R: Rng>(mlp: &mut Mlp, options: &TrainOptions, rng: &mut R) {
    debug!(
        iterations = options.iterations,
        eta = options.eta,
        "training burst"
    );

    mlp.velocity1 = Matrix::zeros(mlp.weights1.rows, mlp.weights1.cols);
    mlp.velocity2 = Matrix::zeros(mlp.weights2.rows, mlp.weights2.cols);

    for _ in 0..options.iterations {
        let pass = mlp.forward(&mlp.dataset.inputs, options.outtype);
        let deltas = mlp.deltas(&mlp.dataset.targets, &pass, options.outtype);
        mlp.apply_update(&pass, &deltas, options.eta);

        mlp.dataset.shuffle(rng);
    }
}
