//! Training infrastructure for maximum-entropy models.
//!
//! This module provides the two trainers and their supporting types:
//!
//! - [`GradientAscentTrainer`]: Full-corpus gradient ascent over instance data
//! - [`StochasticTrainer`]: Per-document stochastic ascent over bag-of-words corpora
//! - [`GradientAscentConfig`] / [`StochasticConfig`]: Validated builder-based configuration
//! - [`ShuffleKind`]: Visiting-order shuffle strategies for the stochastic trainer
//! - [`TrainingLogger`]: Structured logging with verbosity levels

mod batch;
mod config;
mod logger;
mod stochastic;

pub use batch::GradientAscentTrainer;
pub use config::{ConfigError, GradientAscentConfig, StochasticConfig};
pub use logger::{TrainingLogger, Verbosity};
pub use stochastic::{ShuffleKind, StochasticTrainer};
