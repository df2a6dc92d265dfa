//! Tiny sentiment classifier trained by stochastic gradient ascent.
//!
//! Four labelled documents over a four-word vocabulary, two classes. Runs
//! at `Debug` verbosity so the weight vector is printed after every pass.
//!
//! Run with:
//! ```bash
//! cargo run --example sentiment
//! ```

use std::time::Instant;

use maxent::{DocumentCorpus, StochasticConfig, StochasticTrainer, Verbosity};

const CLASS_NAMES: [&str; 2] = ["positive", "negative"];

fn main() {
    // =========================================================================
    // 1. Prepare Data
    // =========================================================================
    let mut corpus = DocumentCorpus::new(vec!["good", "bad", "exciting", "boring"], 2);
    corpus.push("good bad good good", 0);
    corpus.push("exciting exciting", 0);
    corpus.push("bad boring boring boring", 1);
    corpus.push("bad exciting bad", 1);

    // =========================================================================
    // 2. Configure and Train
    // =========================================================================
    let config = StochasticConfig::builder()
        .verbosity(Verbosity::Debug)
        .build()
        .expect("invalid configuration");

    println!("Training on {} documents...", corpus.len());
    println!("  Rounds: {}", config.n_rounds);
    println!("  Learning rate: {}", config.learning_rate);
    println!("  Seed: {}", config.seed);

    let started = Instant::now();
    let model = StochasticTrainer::new(config).train(&corpus);
    println!("\n{} msec", started.elapsed().as_millis());

    // =========================================================================
    // 3. Classify Unseen Text
    // =========================================================================
    for text in ["good exciting good", "boring bad boring", "exciting boring"] {
        let positive = model.score(text, 0);
        let negative = model.score(text, 1);
        let verdict = CLASS_NAMES[model.classify(text)];
        println!(
            "{:20} positive: {:+.4}  negative: {:+.4}  -> {}",
            text, positive, negative, verdict
        );
    }
}
