use pyrite_mlp::{load_options, train, Mlp, OutputActivation, TrainOptions};

fn main() -> pyrite_mlp::Result<()> {
    tracing_subscriber::fmt().compact().init();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    // An options file may be passed as the first argument, e.g. config/xor.json.
    let options = match std::env::args().nth(1) {
        Some(path) => load_options(&path)?,
        None => TrainOptions::new(0.2, 1000, OutputActivation::Logistic),
    };

    println!("Testing MLP with XOR:");
    let mut mlp = Mlp::new(inputs.clone(), targets.clone(), 2, 1.0, 0.9)?;
    train(&mut mlp, &options);

    let mut correct = 0;
    for (input, target) in inputs.iter().zip(targets.iter()) {
        let out = mlp.infer(input)?[0].round();
        if out == target[0] {
            correct += 1;
        } else {
            println!("  False: {} == {}", out, target[0]);
        }
    }
    println!("Correct: {correct}/4");

    Ok(())
}
