//! Train on a labelled attribute file and evaluate on a held-out file.
//!
//! Each input line is a label followed by integer attribute values, all
//! whitespace-separated. Training runs at `Debug` verbosity, so the weight
//! vector is printed after every round.
//!
//! Run with:
//! ```bash
//! cargo run --example train_eval -- train.txt test.txt
//! ```

use std::process::ExitCode;

use maxent::{read_instances_from_path, GradientAscentConfig, GradientAscentTrainer, Verbosity};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: train_eval <train-file> <test-file>");
        return ExitCode::FAILURE;
    }

    // =========================================================================
    // 1. Load Data
    // =========================================================================
    let train = match read_instances_from_path(&args[1]) {
        Ok(instances) => instances,
        Err(err) => {
            eprintln!("failed to read {}: {}", args[1], err);
            return ExitCode::FAILURE;
        }
    };
    let test = match read_instances_from_path(&args[2]) {
        Ok(instances) => instances,
        Err(err) => {
            eprintln!("failed to read {}: {}", args[2], err);
            return ExitCode::FAILURE;
        }
    };

    // =========================================================================
    // 2. Configure and Train
    // =========================================================================
    let config = GradientAscentConfig::builder()
        .verbosity(Verbosity::Debug)
        .build()
        .expect("invalid configuration");

    println!("Training on {} instances...", train.len());
    println!("  Rounds: {}", config.n_rounds);
    println!("  Learning rate: {}", config.learning_rate);

    let model = GradientAscentTrainer::new(config).train(&train);

    // =========================================================================
    // 3. Evaluate
    // =========================================================================
    let correct = test
        .iter()
        .filter(|instance| model.classify(instance.attributes()) == instance.label())
        .count();

    println!("accuracy: {}", correct as f64 / test.len() as f64);
    ExitCode::SUCCESS
}
