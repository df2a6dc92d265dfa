//! Trained model and decision rules.

use ndarray::{Array1, ArrayView1};

use crate::features::FeatureSet;

/// How [`MaxEntModel::classify_with`] picks a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decision {
    /// Compare statistics against a running maximum that starts at zero,
    /// with the result label starting at 0. A candidate is chosen only when
    /// its statistic is strictly positive, so when every candidate statistic
    /// is zero (for example after exponent underflow) the returned label is
    /// 0, which may fall outside the trained label range.
    #[default]
    ZeroBaseline,
    /// Argmax over the trained label range, seeded from the first candidate.
    /// Ties keep the earliest label; the result is always in range.
    InRange,
}

/// A trained maximum-entropy model: the feature functions of the training
/// corpus plus one learned weight per function.
///
/// Produced by [`GradientAscentTrainer::train`](crate::training::GradientAscentTrainer::train);
/// read-only afterwards.
pub struct MaxEntModel {
    features: FeatureSet,
    weights: Array1<f64>,
}

impl MaxEntModel {
    /// Assemble a model from a feature set and a weight vector.
    ///
    /// # Panics
    ///
    /// Panics unless there is exactly one weight per feature function.
    pub fn from_parts(features: FeatureSet, weights: Array1<f64>) -> Self {
        assert_eq!(
            weights.len(),
            features.len(),
            "one weight per feature function required"
        );
        Self { features, weights }
    }

    /// The feature functions the model was trained with.
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// The learned weight vector, in feature-function slot order.
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Decision statistic for one candidate label: every weighted indicator
    /// is exponentiated individually and the terms summed. Functions that do
    /// not fire contribute `exp(0) = 1` each.
    ///
    /// This is a cheaper inference-time statistic, not the exponentiated
    /// inner product used by the training-side scoring math.
    ///
    /// # Panics
    ///
    /// Panics if `attributes` does not have the training corpus width.
    /// [`classify`](Self::classify) and [`classify_with`](Self::classify_with)
    /// share this contract.
    pub fn score(&self, attributes: &[u32], label: i32) -> f64 {
        assert_eq!(
            attributes.len(),
            self.features.n_attributes(),
            "attribute width must match the training corpus"
        );
        self.features
            .functions()
            .iter()
            .zip(self.weights.iter())
            .map(|(function, &weight)| (weight * function.apply(attributes, label)).exp())
            .sum()
    }

    /// Classify with the default [`Decision::ZeroBaseline`] rule.
    pub fn classify(&self, attributes: &[u32]) -> i32 {
        self.classify_with(attributes, Decision::ZeroBaseline)
    }

    /// Classify under the given decision rule.
    pub fn classify_with(&self, attributes: &[u32], decision: Decision) -> i32 {
        match decision {
            Decision::ZeroBaseline => {
                let mut best = 0.0;
                let mut chosen = 0;
                for label in self.features.labels() {
                    let statistic = self.score(attributes, label);
                    if statistic > best {
                        best = statistic;
                        chosen = label;
                    }
                }
                chosen
            }
            Decision::InRange => {
                let mut chosen = self.features.min_label();
                let mut best = self.score(attributes, chosen);
                for label in self.features.labels().skip(1) {
                    let statistic = self.score(attributes, label);
                    if statistic > best {
                        best = statistic;
                        chosen = label;
                    }
                }
                chosen
            }
        }
    }
}

impl std::fmt::Debug for MaxEntModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxEntModel")
            .field("n_functions", &self.features.len())
            .field("min_label", &self.features.min_label())
            .field("max_label", &self.features.max_label())
            .finish()
    }
}
