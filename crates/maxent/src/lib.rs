//! maxent: A multinomial maximum-entropy classifier for Rust.
//!
//! Log-linear models over categorical attribute data, trained by batch
//! gradient ascent, plus a bag-of-words document classifier trained by
//! stochastic gradient ascent.
//!
//! # Key Types
//!
//! - [`MaxEntModel`] / [`DocumentModel`] - Trained classifiers
//! - [`GradientAscentTrainer`] / [`StochasticTrainer`] - The two training loops
//! - [`GradientAscentConfig`] / [`StochasticConfig`] - Configuration builders
//! - [`FeatureSet`] - Indicator feature functions enumerated from a corpus
//! - [`Instance`] / [`DocumentCorpus`] - Training data
//!
//! # Training
//!
//! Use `GradientAscentConfig::builder()` to configure, then
//! `GradientAscentTrainer::train()`:
//!
//! ```
//! use maxent::{GradientAscentConfig, GradientAscentTrainer, Instance};
//!
//! let corpus = vec![Instance::new(0, vec![0]), Instance::new(1, vec![1])];
//! let config = GradientAscentConfig::builder().build().unwrap();
//! let model = GradientAscentTrainer::new(config).train(&corpus);
//!
//! assert_eq!(model.classify(&[0]), 0);
//! assert_eq!(model.classify(&[1]), 1);
//! ```
//!
//! # Loading Corpora
//!
//! Use [`data::read_instances_from_path`] to load line-oriented label +
//! attribute files. See the [`data`] module for the format.

// Re-export approx traits for users who want to compare weights
pub use approx;

pub mod data;
pub mod documents;
pub mod features;
pub mod instance;
pub mod model;
pub mod scoring;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use documents::{DocumentCorpus, DocumentModel};
pub use model::{Decision, MaxEntModel};

// Configuration types (most users want these)
pub use training::{ConfigError, GradientAscentConfig, StochasticConfig};

// Training types
pub use training::{GradientAscentTrainer, ShuffleKind, StochasticTrainer, Verbosity};

// Data types (for preparing training data)
pub use data::{read_instances, read_instances_from_path, DatasetError};
pub use features::{FeatureFunction, FeatureSet};
pub use instance::Instance;
