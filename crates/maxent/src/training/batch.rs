//! Batch gradient-ascent training.

use ndarray::Array1;

use crate::features::FeatureSet;
use crate::instance::Instance;
use crate::model::MaxEntModel;
use crate::scoring;

use super::config::GradientAscentConfig;
use super::logger::{TrainingLogger, Verbosity};

/// Trains a [`MaxEntModel`] by full-corpus gradient ascent on the
/// L2-penalized conditional log-likelihood.
///
/// Each round accumulates, over every instance, the observed feature vector
/// minus the model-expected feature vector, subtracts the current weights as
/// the regularization term, and steps the weights by the learning rate times
/// that gradient.
///
/// # Example
///
/// ```
/// use maxent::instance::Instance;
/// use maxent::training::{GradientAscentConfig, GradientAscentTrainer};
///
/// let corpus = vec![Instance::new(0, vec![0]), Instance::new(1, vec![1])];
/// let trainer = GradientAscentTrainer::new(GradientAscentConfig::default());
/// let model = trainer.train(&corpus);
///
/// assert_eq!(model.classify(&[0]), 0);
/// assert_eq!(model.classify(&[1]), 1);
/// ```
pub struct GradientAscentTrainer {
    config: GradientAscentConfig,
}

impl GradientAscentTrainer {
    pub fn new(config: GradientAscentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GradientAscentConfig {
        &self.config
    }

    /// Train a model on the given instances, starting from zero weights.
    ///
    /// # Panics
    ///
    /// Panics when `instances` is empty or rows disagree on attribute width
    /// (see [`FeatureSet::from_instances`]).
    pub fn train(&self, instances: &[Instance]) -> MaxEntModel {
        let features = FeatureSet::from_instances(instances);
        let mut weights: Array1<f64> = Array1::zeros(features.len());

        let mut logger = TrainingLogger::new(self.config.verbosity);
        logger.info(&format!(
            "Training on {} instances with {} feature functions",
            instances.len(),
            features.len()
        ));
        logger.start_training(self.config.n_rounds as usize);
        logger.debug(&format!("initial weights: {}", weights));

        // Observed vectors never change across rounds.
        let observed_vectors: Vec<Array1<f64>> = instances
            .iter()
            .map(|instance| features.observed_vector(instance))
            .collect();

        for round in 0..self.config.n_rounds {
            let mut gradient: Array1<f64> = Array1::zeros(features.len());
            for (instance, observed) in instances.iter().zip(&observed_vectors) {
                let expected = scoring::expected_feature_vector(
                    &features,
                    weights.view(),
                    instance.attributes(),
                );
                gradient += &(observed - &expected);
            }
            // L2 penalty, coefficient fixed at 1.0.
            gradient -= &weights;

            weights.scaled_add(self.config.learning_rate, &gradient);

            if self.config.verbosity >= Verbosity::Info {
                let norm = gradient.dot(&gradient).sqrt();
                let metrics = [("gradient_norm".to_string(), norm)];
                logger.log_round(round as usize, &metrics);
            }
            logger.log_weights(round as usize, weights.view());
        }

        logger.finish_training();
        MaxEntModel::from_parts(features, weights)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn separable_pair() -> Vec<Instance> {
        vec![Instance::new(0, vec![0]), Instance::new(1, vec![1])]
    }

    #[test]
    fn one_round_from_zero_weights() {
        // With zero weights every expected entry that can fire is 1/2, so
        // per instance the observed-minus-expected residual is +-1/2 on the
        // two slots its attribute value touches. Summed over both instances
        // and scaled by the 0.1 learning rate:
        //   functions (0,0,0), (0,0,1), (0,1,0), (0,1,1)
        //   weights    0.05    -0.05    -0.05     0.05
        let config = GradientAscentConfig::builder()
            .n_rounds(1)
            .build()
            .unwrap();
        let model = GradientAscentTrainer::new(config).train(&separable_pair());

        let expected = [0.05, -0.05, -0.05, 0.05];
        for (&w, &e) in model.weights().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(w, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn default_run_recovers_separable_labels() {
        let trainer = GradientAscentTrainer::new(GradientAscentConfig::default());
        let model = trainer.train(&separable_pair());

        assert_eq!(model.classify(&[0]), 0);
        assert_eq!(model.classify(&[1]), 1);
    }

    #[test]
    fn trained_weights_are_finite() {
        let corpus = vec![
            Instance::new(1, vec![0, 2]),
            Instance::new(2, vec![1, 0]),
            Instance::new(1, vec![0, 1]),
        ];
        let config = GradientAscentConfig::builder()
            .n_rounds(20)
            .build()
            .unwrap();
        let model = GradientAscentTrainer::new(config).train(&corpus);

        assert_eq!(model.weights().len(), model.features().len());
        assert!(model.weights().iter().all(|w| w.is_finite()));
    }
}
