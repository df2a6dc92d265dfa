//! Per-document stochastic training for bag-of-words corpora.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::documents::{DocumentCorpus, DocumentModel};
use crate::scoring;

use super::config::StochasticConfig;
use super::logger::{TrainingLogger, Verbosity};

/// How the document visiting order is shuffled before each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleKind {
    /// Attempt this many random pair swaps; attempts that draw the same
    /// index twice leave the order untouched.
    SwapAttempts(usize),
    /// One uniform Fisher-Yates permutation.
    Uniform,
}

impl Default for ShuffleKind {
    fn default() -> Self {
        Self::SwapAttempts(100)
    }
}

/// Trains a [`DocumentModel`] by stochastic gradient ascent.
///
/// The trainer owns a seeded RNG and a visiting-order permutation that
/// persists across rounds: each round reshuffles the previous order rather
/// than starting from the identity. Within a round the update buffer starts
/// from the current weights and each visited document's gradient, taken
/// against the running buffer, replaces it; the final buffer is applied at
/// the learning rate.
///
/// # Example
///
/// ```
/// use maxent::documents::DocumentCorpus;
/// use maxent::training::{StochasticConfig, StochasticTrainer};
///
/// let mut corpus = DocumentCorpus::new(vec!["good", "bad"], 2);
/// corpus.push("good good", 0);
/// corpus.push("bad", 1);
///
/// let trainer = StochasticTrainer::new(StochasticConfig::default());
/// let model = trainer.train(&corpus);
/// assert_eq!(model.weights().len(), corpus.n_features());
/// ```
pub struct StochasticTrainer {
    config: StochasticConfig,
}

impl StochasticTrainer {
    pub fn new(config: StochasticConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StochasticConfig {
        &self.config
    }

    /// Train a model on the given corpus, starting from zero weights.
    ///
    /// # Panics
    ///
    /// Panics when the corpus contains no documents.
    pub fn train(&self, corpus: &DocumentCorpus) -> DocumentModel {
        assert!(!corpus.is_empty(), "document corpus must be non-empty");

        let mut weights: Array1<f64> = Array1::zeros(corpus.n_features());
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut order: Vec<usize> = (0..corpus.len()).collect();

        let mut logger = TrainingLogger::new(self.config.verbosity);
        logger.info(&format!(
            "Training on {} documents over {} (word, class) slots",
            corpus.len(),
            corpus.n_features()
        ));
        logger.start_training(self.config.n_rounds as usize);
        logger.debug(&format!("initial weights: {}", weights));

        for round in 0..self.config.n_rounds {
            shuffle_order(&mut order, self.config.shuffle, &mut rng);

            // The buffer starts from the current weights; each document's
            // gradient is taken against the running buffer and replaces it.
            let mut delta = weights.clone();
            for &doc in &order {
                delta = document_gradient(corpus, doc, &delta);
            }
            weights.scaled_add(self.config.learning_rate, &delta);

            if self.config.verbosity >= Verbosity::Info {
                let norm = delta.dot(&delta).sqrt();
                let metrics = [("delta_norm".to_string(), norm)];
                logger.log_round(round as usize, &metrics);
            }
            logger.log_weights(round as usize, weights.view());
        }

        logger.finish_training();
        DocumentModel::from_parts(
            corpus.vocabulary().to_vec(),
            corpus.n_classes(),
            weights,
        )
    }
}

fn shuffle_order(order: &mut [usize], kind: ShuffleKind, rng: &mut StdRng) {
    match kind {
        ShuffleKind::SwapAttempts(attempts) => {
            for _ in 0..attempts {
                let j = rng.gen_range(0..order.len());
                let k = rng.gen_range(0..order.len());
                if j != k {
                    order.swap(j, k);
                }
            }
        }
        ShuffleKind::Uniform => order.shuffle(rng),
    }
}

/// Penalized gradient of one document's log-likelihood at `weights`:
/// observed feature vector, minus the vector expected under the conditional
/// class distribution, minus the weights themselves.
fn document_gradient(corpus: &DocumentCorpus, doc: usize, weights: &Array1<f64>) -> Array1<f64> {
    let words = corpus.words(doc);
    let observed = corpus.feature_vector(words, corpus.label(doc));

    let mut z = 0.0;
    let mut expected: Array1<f64> = Array1::zeros(corpus.n_features());
    for class in 0..corpus.n_classes() {
        let fv = corpus.feature_vector(words, class);
        let scale = scoring::inner_product(weights.view(), fv.view()).exp();
        z += scale;
        expected.scaled_add(scale, &fv);
    }
    expected *= 1.0 / z;

    observed - expected - weights
}
