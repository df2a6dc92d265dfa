//! Scoring math for the conditional label distribution.
//!
//! Pure functions over a [`FeatureSet`] and a weight vector. All arithmetic
//! is double precision and exponentials are taken directly: very large
//! scores overflow to infinity and propagate as ordinary floating-point
//! values.

use ndarray::{Array1, ArrayView1};

use crate::features::FeatureSet;

/// Dot product of two equal-length vectors.
///
/// # Panics
///
/// Panics if the vectors differ in length.
pub fn inner_product(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "inner product requires equal-length vectors"
    );
    a.dot(&b)
}

/// The normalizer Z: sum over candidate labels of
/// `exp(weights · feature_vector(attributes, label))`.
pub fn partition_value(
    features: &FeatureSet,
    weights: ArrayView1<'_, f64>,
    attributes: &[u32],
) -> f64 {
    features
        .labels()
        .map(|label| {
            let fv = features.feature_vector(attributes, label);
            inner_product(weights, fv.view()).exp()
        })
        .sum()
}

/// Feature vector expected under the model's conditional distribution
/// `P(label | attributes; weights) = exp(weights · fv) / Z`.
///
/// Every entry is a convex combination of 0/1 indicators and lies in [0, 1].
pub fn expected_feature_vector(
    features: &FeatureSet,
    weights: ArrayView1<'_, f64>,
    attributes: &[u32],
) -> Array1<f64> {
    let z = partition_value(features, weights, attributes);
    let mut expected = Array1::zeros(features.len());
    for label in features.labels() {
        let fv = features.feature_vector(attributes, label);
        let scale = inner_product(weights, fv.view()).exp();
        expected.scaled_add(scale, &fv);
    }
    expected *= 1.0 / z;
    expected
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;
    use crate::instance::Instance;

    fn features() -> FeatureSet {
        // maxima [1], labels 0..=2 (label 1 unobserved): 2 * 3 = 6 functions
        FeatureSet::from_instances(&[Instance::new(0, vec![0]), Instance::new(2, vec![1])])
    }

    #[test]
    fn inner_product_is_symmetric() {
        let a = array![1.0, -2.0, 0.5];
        let b = array![0.25, 4.0, -1.0];
        assert_abs_diff_eq!(
            inner_product(a.view(), b.view()),
            inner_product(b.view(), a.view())
        );
    }

    #[test]
    #[should_panic(expected = "equal-length")]
    fn inner_product_rejects_mismatched_lengths() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        inner_product(a.view(), b.view());
    }

    #[test]
    fn sum_then_subtract_restores_operand() {
        let a = array![0.1, -7.25, 3.0, 0.0];
        let b = array![2.5, 0.125, -1.5, 9.0];
        let restored = (&a + &b) - &b;
        for (&x, &y) in restored.iter().zip(a.iter()) {
            assert_abs_diff_eq!(x, y);
        }
    }

    #[test]
    fn partition_with_zero_weights_counts_labels() {
        let features = features();
        let weights = Array1::zeros(features.len());
        // every label scores exp(0) = 1
        assert_abs_diff_eq!(
            partition_value(&features, weights.view(), &[0]),
            3.0
        );
    }

    #[test]
    fn expected_vector_with_zero_weights_averages_indicators() {
        let features = features();
        let weights = Array1::zeros(features.len());
        let expected = expected_feature_vector(&features, weights.view(), &[0]);
        // the three functions matching value 0 each carry P = 1/3
        for label in features.labels() {
            let slot = features.slot(0, 0, label).unwrap();
            assert_abs_diff_eq!(expected[slot], 1.0 / 3.0, epsilon = 1e-12);
        }
        for label in features.labels() {
            let slot = features.slot(0, 1, label).unwrap();
            assert_abs_diff_eq!(expected[slot], 0.0);
        }
    }

    #[test]
    fn expected_vector_entries_stay_within_unit_interval() {
        let features = features();
        let weights = array![0.7, -1.3, 2.0, 0.4, -0.2, 1.1];
        for attributes in [&[0u32][..], &[1]] {
            let expected = expected_feature_vector(&features, weights.view(), attributes);
            for &entry in expected.iter() {
                assert!((0.0..=1.0).contains(&entry), "entry {} out of range", entry);
            }
        }
    }

    #[test]
    fn expected_vector_entries_sum_to_one_per_attribute() {
        // for a single attribute, exactly one function fires per label, so
        // the expected vector is the label distribution itself
        let features = features();
        let weights = array![0.7, -1.3, 2.0, 0.4, -0.2, 1.1];
        let expected = expected_feature_vector(&features, weights.view(), &[1]);
        assert_abs_diff_eq!(expected.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn overflowing_scores_propagate_as_infinity() {
        let features = features();
        let weights = Array1::from_elem(features.len(), 1000.0);
        let z = partition_value(&features, weights.view(), &[0]);
        assert!(z.is_infinite());
    }
}
