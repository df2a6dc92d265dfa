//! Bag-of-words document corpus for the stochastic trainer.
//!
//! Documents are represented by word presence against a fixed vocabulary.
//! The joint feature vector for a (document, class) pair lays class blocks
//! out contiguously: slot `class * vocabulary_len + word_index` is 1.0 when
//! the word occurs in the document, 0.0 otherwise. Words outside the
//! vocabulary are ignored.

use std::collections::HashSet;

use ndarray::{Array1, ArrayView1};

use crate::scoring;

fn presence_vector(
    vocabulary: &[String],
    n_classes: usize,
    words: &HashSet<String>,
    class: usize,
) -> Array1<f64> {
    assert!(class < n_classes, "class index out of range");
    let mut fv = Array1::zeros(vocabulary.len() * n_classes);
    let base = class * vocabulary.len();
    for (index, word) in vocabulary.iter().enumerate() {
        if words.contains(word) {
            fv[base + index] = 1.0;
        }
    }
    fv
}

/// A labelled collection of documents over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct DocumentCorpus {
    vocabulary: Vec<String>,
    n_classes: usize,
    documents: Vec<HashSet<String>>,
    labels: Vec<usize>,
}

impl DocumentCorpus {
    /// An empty corpus over the given vocabulary and class count.
    ///
    /// # Panics
    ///
    /// Panics when the vocabulary is empty or `n_classes` is zero.
    pub fn new<S: Into<String>>(vocabulary: Vec<S>, n_classes: usize) -> Self {
        assert!(!vocabulary.is_empty(), "vocabulary must be non-empty");
        assert!(n_classes >= 1, "at least one class required");
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            n_classes,
            documents: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Add one labelled document. The text is tokenized on whitespace and
    /// reduced to its word set.
    ///
    /// # Panics
    ///
    /// Panics when `class` is not below the corpus class count.
    pub fn push(&mut self, text: &str, class: usize) {
        assert!(class < self.n_classes, "class index out of range");
        self.documents.push(Self::word_set(text));
        self.labels.push(class);
    }

    /// Tokenize text into its set of distinct words.
    pub fn word_set(text: &str) -> HashSet<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of joint feature slots: vocabulary size times class count.
    pub fn n_features(&self) -> usize {
        self.vocabulary.len() * self.n_classes
    }

    /// Joint feature vector of a word set paired with a candidate class.
    pub fn feature_vector(&self, words: &HashSet<String>, class: usize) -> Array1<f64> {
        presence_vector(&self.vocabulary, self.n_classes, words, class)
    }

    /// Word set of the document at `index`.
    pub fn words(&self, index: usize) -> &HashSet<String> {
        &self.documents[index]
    }

    /// Gold class of the document at `index`.
    pub fn label(&self, index: usize) -> usize {
        self.labels[index]
    }
}

/// A trained document classifier: the corpus layout plus one weight per
/// joint feature slot.
#[derive(Debug, Clone)]
pub struct DocumentModel {
    vocabulary: Vec<String>,
    n_classes: usize,
    weights: Array1<f64>,
}

impl DocumentModel {
    /// Assemble a model from a vocabulary, class count, and weight vector.
    ///
    /// # Panics
    ///
    /// Panics unless the weight length is `vocabulary.len() * n_classes`.
    pub fn from_parts(vocabulary: Vec<String>, n_classes: usize, weights: Array1<f64>) -> Self {
        assert_eq!(
            weights.len(),
            vocabulary.len() * n_classes,
            "one weight per (word, class) slot required"
        );
        Self {
            vocabulary,
            n_classes,
            weights,
        }
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Linear score of a text under a candidate class.
    pub fn score(&self, text: &str, class: usize) -> f64 {
        let words = DocumentCorpus::word_set(text);
        let fv = presence_vector(&self.vocabulary, self.n_classes, &words, class);
        scoring::inner_product(self.weights.view(), fv.view())
    }

    /// The class with the highest linear score. An earlier class is kept
    /// only while it strictly beats each later candidate, so exact ties
    /// resolve to the last tied class.
    pub fn classify(&self, text: &str) -> usize {
        let words = DocumentCorpus::word_set(text);
        let mut chosen = 0;
        let mut best = scoring::inner_product(
            self.weights.view(),
            presence_vector(&self.vocabulary, self.n_classes, &words, 0).view(),
        );
        for class in 1..self.n_classes {
            let statistic = scoring::inner_product(
                self.weights.view(),
                presence_vector(&self.vocabulary, self.n_classes, &words, class).view(),
            );
            if statistic >= best {
                best = statistic;
                chosen = class;
            }
        }
        chosen
    }
}
