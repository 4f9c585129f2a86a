use std::f64::consts::PI;
use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pyrite_mlp::{
    early_stopping_with_rng, Matrix, Mlp, OutputActivation, RoundStats, TrainOptions,
};

/// Noisy sine regression with a held-out validation split. Early stopping
/// decides when to quit; per-round progress arrives over the options channel.
fn main() -> pyrite_mlp::Result<()> {
    tracing_subscriber::fmt().compact().init();

    let mut rng = StdRng::seed_from_u64(42);

    let mut train_inputs = Vec::new();
    let mut train_targets = Vec::new();
    let mut valid_inputs = Vec::new();
    let mut valid_targets = Vec::new();

    for i in 0..80 {
        let x = i as f64 / 80.0;
        let noise = (rng.gen::<f64>() - 0.5) * 0.2;
        let t = (2.0 * PI * x).sin() + noise;

        // Alternate samples between the training and validation sets.
        if i % 2 == 0 {
            train_inputs.push(vec![x]);
            train_targets.push(vec![t]);
        } else {
            valid_inputs.push(vec![x]);
            valid_targets.push(vec![t]);
        }
    }

    let mut mlp = Mlp::with_rng(train_inputs, train_targets, 3, 1.0, 0.9, &mut rng)?;

    let (tx, rx) = mpsc::channel::<RoundStats>();
    let printer = std::thread::spawn(move || {
        for stats in rx {
            if stats.round % 10 == 0 {
                println!(
                    "[early_stopping] round: {}   error: {:.6}",
                    stats.round, stats.validation_error
                );
            }
        }
    });

    let mut options = TrainOptions::new(0.25, 100, OutputActivation::Linear);
    options.progress_tx = Some(tx);

    let report = early_stopping_with_rng(
        &mut mlp,
        &valid_inputs,
        &valid_targets,
        &options,
        &mut rng,
    )?;

    // Drop the last sender so the printer drains and exits.
    drop(options);
    let _ = printer.join();

    println!(
        "[early_stopping] end rounds: {} and error: {:.6}",
        report.rounds, report.validation_error
    );

    println!("x      sin(2*pi*x)  predicted");
    let grid: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64 / 8.0]).collect();
    let grid_matrix = Matrix::from_rows(&grid)?.augment_bias();
    let pass = mlp.forward(&grid_matrix, OutputActivation::Linear);
    for (input, output) in grid.iter().zip(pass.outputs.data.iter()) {
        let x = input[0];
        println!("{:.3}  {:+.4}      {:+.4}", x, (2.0 * PI * x).sin(), output[0]);
    }

    Ok(())
}
