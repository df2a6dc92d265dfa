//! Indicator feature functions enumerated from a training corpus.
//!
//! [`FeatureSet::from_instances`] scans the corpus once and enumerates one
//! indicator function per (attribute index, attribute value, label) triple:
//! for each attribute in order, every value from 0 up to the maximum observed
//! at that index, crossed with every label in the observed range. The
//! enumeration order assigns each function its permanent vector slot, shared
//! by feature vectors, gradients, and the weight vector.

use std::ops::RangeInclusive;

use ndarray::Array1;

use crate::instance::Instance;

/// Indicator over one (attribute index, attribute value, label) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFunction {
    attribute: usize,
    value: u32,
    label: i32,
}

impl FeatureFunction {
    /// The attribute index this function inspects.
    pub fn attribute(&self) -> usize {
        self.attribute
    }

    /// The attribute value this function matches.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The label this function matches.
    pub fn label(&self) -> i32 {
        self.label
    }

    /// 1.0 iff the attribute at this function's index equals its value and
    /// the candidate label equals its label, else 0.0.
    pub fn apply(&self, attributes: &[u32], label: i32) -> f64 {
        if attributes[self.attribute] == self.value && label == self.label {
            1.0
        } else {
            0.0
        }
    }
}

/// The enumerated feature functions of a corpus, with the stable
/// function-to-slot mapping used by every vector in the system.
///
/// # Example
///
/// ```
/// use maxent::{FeatureSet, Instance};
///
/// let corpus = vec![
///     Instance::new(1, vec![0, 1]),
///     Instance::new(2, vec![1, 0]),
/// ];
/// let features = FeatureSet::from_instances(&corpus);
///
/// // (max value + 1) per attribute, times the number of labels
/// assert_eq!(features.len(), (2 + 2) * 2);
/// assert_eq!(features.labels(), 1..=2);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureSet {
    functions: Vec<FeatureFunction>,
    /// Slot of each attribute's first function.
    offsets: Vec<usize>,
    /// Enumerated values (max observed + 1) per attribute.
    value_counts: Vec<u32>,
    min_label: i32,
    max_label: i32,
}

impl FeatureSet {
    /// Enumerate feature functions from a training corpus.
    ///
    /// # Panics
    ///
    /// Panics if the corpus is empty or the instances do not share one
    /// attribute width.
    pub fn from_instances(instances: &[Instance]) -> Self {
        assert!(!instances.is_empty(), "training corpus must be non-empty");

        let width = instances[0].attributes().len();
        let mut max_values = vec![0u32; width];
        let mut min_label = instances[0].label();
        let mut max_label = instances[0].label();

        for instance in instances {
            assert_eq!(
                instance.attributes().len(),
                width,
                "instances must share one attribute width"
            );
            min_label = min_label.min(instance.label());
            max_label = max_label.max(instance.label());
            for (max, &value) in max_values.iter_mut().zip(instance.attributes()) {
                *max = (*max).max(value);
            }
        }

        let n_labels = (max_label as i64 - min_label as i64 + 1) as usize;
        let mut functions = Vec::new();
        let mut offsets = Vec::with_capacity(width);
        for (attribute, &max_value) in max_values.iter().enumerate() {
            offsets.push(functions.len());
            for value in 0..=max_value {
                for label in min_label..=max_label {
                    functions.push(FeatureFunction {
                        attribute,
                        value,
                        label,
                    });
                }
            }
        }
        debug_assert_eq!(
            functions.len(),
            max_values.iter().map(|&m| m as usize + 1).sum::<usize>() * n_labels
        );

        Self {
            functions,
            offsets,
            value_counts: max_values.iter().map(|&m| m + 1).collect(),
            min_label,
            max_label,
        }
    }

    /// Number of feature functions (and the length of every weight and
    /// feature vector).
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions were enumerated. Never true for a set built by
    /// [`FeatureSet::from_instances`].
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// The enumerated functions in slot order.
    pub fn functions(&self) -> &[FeatureFunction] {
        &self.functions
    }

    /// Number of attributes per instance.
    pub fn n_attributes(&self) -> usize {
        self.offsets.len()
    }

    /// Smallest label observed in training.
    pub fn min_label(&self) -> i32 {
        self.min_label
    }

    /// Largest label observed in training.
    pub fn max_label(&self) -> i32 {
        self.max_label
    }

    /// The dense candidate label range. Labels absent from the corpus but
    /// inside the range still have functions.
    pub fn labels(&self) -> RangeInclusive<i32> {
        self.min_label..=self.max_label
    }

    /// Vector slot of the function for (attribute, value, label), or `None`
    /// when the triple was never enumerated.
    pub fn slot(&self, attribute: usize, value: u32, label: i32) -> Option<usize> {
        if attribute >= self.offsets.len()
            || value >= self.value_counts[attribute]
            || label < self.min_label
            || label > self.max_label
        {
            return None;
        }
        let n_labels = (self.max_label as i64 - self.min_label as i64 + 1) as usize;
        Some(
            self.offsets[attribute]
                + value as usize * n_labels
                + (label - self.min_label) as usize,
        )
    }

    /// Indicator vector for `attributes` evaluated against a candidate label.
    ///
    /// Element `i` is the result of applying function `i`. Attribute values
    /// never seen in training have no function and contribute nothing.
    ///
    /// # Panics
    ///
    /// Panics if `attributes` does not have the training corpus width.
    pub fn feature_vector(&self, attributes: &[u32], label: i32) -> Array1<f64> {
        assert_eq!(
            attributes.len(),
            self.n_attributes(),
            "attribute width must match the training corpus"
        );
        let mut fv = Array1::zeros(self.functions.len());
        for (attribute, &value) in attributes.iter().enumerate() {
            if let Some(slot) = self.slot(attribute, value, label) {
                fv[slot] = 1.0;
            }
        }
        fv
    }

    /// Indicator vector of an instance against its own label.
    pub fn observed_vector(&self, instance: &Instance) -> Array1<f64> {
        self.feature_vector(instance.attributes(), instance.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Instance> {
        vec![
            Instance::new(3, vec![1, 0]),
            Instance::new(5, vec![0, 2]),
            Instance::new(4, vec![1, 1]),
        ]
    }

    #[test]
    fn function_count_matches_value_and_label_ranges() {
        // maxima [1, 2], labels 3..=5: (1+1 + 2+1) * 3 = 15
        let features = FeatureSet::from_instances(&corpus());
        assert_eq!(features.len(), 15);
        assert_eq!(features.functions().len(), 15);
        assert_eq!(features.labels(), 3..=5);
    }

    #[test]
    fn label_gaps_still_get_functions() {
        let corpus = vec![Instance::new(0, vec![0]), Instance::new(2, vec![0])];
        let features = FeatureSet::from_instances(&corpus);
        // one value, labels 0..=2 including the unobserved 1
        assert_eq!(features.len(), 3);
        assert!(features.slot(0, 0, 1).is_some());
    }

    #[test]
    fn slots_are_stable_and_match_enumeration_order() {
        let features = FeatureSet::from_instances(&corpus());
        // attribute-major, then value, then label
        let first = features.functions()[0];
        assert_eq!(
            (first.attribute(), first.value(), first.label()),
            (0, 0, 3)
        );
        for (slot, function) in features.functions().iter().enumerate() {
            assert_eq!(
                features.slot(function.attribute(), function.value(), function.label()),
                Some(slot)
            );
        }
        // last function: attribute 1, value 2, label 5
        assert_eq!(features.slot(1, 2, 5), Some(14));
    }

    #[test]
    fn unseen_triples_have_no_slot() {
        let features = FeatureSet::from_instances(&corpus());
        assert_eq!(features.slot(0, 9, 3), None);
        assert_eq!(features.slot(2, 0, 3), None);
        assert_eq!(features.slot(0, 0, 6), None);
        assert_eq!(features.slot(0, 0, 2), None);
    }

    #[test]
    fn feature_vector_matches_per_function_evaluation() {
        let features = FeatureSet::from_instances(&corpus());
        for attributes in [&[1, 0][..], &[0, 2], &[1, 9]] {
            for label in features.labels() {
                let fv = features.feature_vector(attributes, label);
                for (slot, function) in features.functions().iter().enumerate() {
                    assert_eq!(fv[slot], function.apply(attributes, label));
                }
            }
        }
    }

    #[test]
    fn out_of_range_values_contribute_nothing() {
        let features = FeatureSet::from_instances(&corpus());
        // value 9 at attribute 0 was never observed
        let fv = features.feature_vector(&[9, 0], 3);
        let fired: f64 = fv.sum();
        assert_eq!(fired, 1.0);
    }

    #[test]
    fn apply_checks_value_and_label() {
        let features = FeatureSet::from_instances(&corpus());
        let function = features.functions()[features.slot(1, 2, 5).unwrap()];
        assert_eq!(function.apply(&[0, 2], 5), 1.0);
        assert_eq!(function.apply(&[0, 2], 4), 0.0);
        assert_eq!(function.apply(&[0, 1], 5), 0.0);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn empty_corpus_is_rejected() {
        FeatureSet::from_instances(&[]);
    }

    #[test]
    #[should_panic(expected = "attribute width")]
    fn ragged_corpus_is_rejected() {
        FeatureSet::from_instances(&[
            Instance::new(0, vec![0, 1]),
            Instance::new(1, vec![0]),
        ]);
    }

    #[test]
    #[should_panic(expected = "attribute width")]
    fn feature_vector_rejects_wrong_width() {
        let features = FeatureSet::from_instances(&corpus());
        features.feature_vector(&[0], 3);
    }
}
