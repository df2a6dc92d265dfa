//! End-to-end stochastic training on a small sentiment corpus.

use approx::assert_abs_diff_eq;
use maxent::{DocumentCorpus, ShuffleKind, StochasticConfig, StochasticTrainer};
use rstest::rstest;

fn sentiment_corpus() -> DocumentCorpus {
    let mut corpus = DocumentCorpus::new(vec!["good", "bad", "exciting", "boring"], 2);
    corpus.push("good bad good good", 0);
    corpus.push("exciting exciting", 0);
    corpus.push("bad boring boring boring", 1);
    corpus.push("bad exciting bad", 1);
    corpus
}

#[rstest]
#[case::swap_attempts(ShuffleKind::SwapAttempts(100))]
#[case::uniform(ShuffleKind::Uniform)]
fn same_seed_gives_identical_weights(#[case] shuffle: ShuffleKind) {
    let corpus = sentiment_corpus();
    let config = StochasticConfig::builder()
        .seed(42)
        .shuffle(shuffle)
        .build()
        .unwrap();

    let first = StochasticTrainer::new(config.clone()).train(&corpus);
    let second = StochasticTrainer::new(config).train(&corpus);

    assert_eq!(first.weights(), second.weights());
}

#[rstest]
#[case::swap_attempts(ShuffleKind::SwapAttempts(100))]
#[case::uniform(ShuffleKind::Uniform)]
fn weights_stay_finite(#[case] shuffle: ShuffleKind) {
    let corpus = sentiment_corpus();
    let config = StochasticConfig::builder()
        .shuffle(shuffle)
        .build()
        .unwrap();
    let model = StochasticTrainer::new(config).train(&corpus);

    assert_eq!(model.weights().len(), corpus.n_features());
    assert!(model.weights().iter().all(|w| w.is_finite()));
}

#[test]
fn classification_agrees_with_score_comparison() {
    let corpus = sentiment_corpus();
    let model = StochasticTrainer::new(StochasticConfig::default()).train(&corpus);

    for text in ["good exciting good", "boring bad boring", "exciting boring"] {
        let positive = model.score(text, 0);
        let negative = model.score(text, 1);
        // class 0 wins only on a strictly greater score
        let expected = if positive > negative { 0 } else { 1 };
        assert_eq!(model.classify(text), expected);
    }
}

#[test]
fn default_seed_run_matches_recorded_scores() {
    // Golden values from a default-config run (seed 42, 10 rounds). Any
    // change to the shuffle sequence or to the in-round buffer chaining
    // moves these scores.
    let corpus = sentiment_corpus();
    let model = StochasticTrainer::new(StochasticConfig::default()).train(&corpus);

    assert_abs_diff_eq!(
        model.score("exciting boring", 0),
        -2.6285934999903473,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        model.score("exciting boring", 1),
        2.6285934999903473,
        epsilon = 1e-9
    );
    assert_eq!(model.classify("exciting boring"), 1);
}

#[test]
fn different_seeds_may_visit_documents_differently() {
    // Not a strict inequality check on weights (tiny corpora can coincide),
    // just that both runs finish and produce full-length weight vectors.
    let corpus = sentiment_corpus();

    let a = StochasticTrainer::new(StochasticConfig::builder().seed(1).build().unwrap())
        .train(&corpus);
    let b = StochasticTrainer::new(StochasticConfig::builder().seed(2).build().unwrap())
        .train(&corpus);

    assert_eq!(a.weights().len(), b.weights().len());
}
