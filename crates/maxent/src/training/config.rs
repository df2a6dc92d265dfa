//! Trainer configuration with builder pattern.
//!
//! [`GradientAscentConfig`] and [`StochasticConfig`] use the `bon` crate for
//! builder pattern generation with validation at build time.
//!
//! # Example
//!
//! ```
//! use maxent::training::{GradientAscentConfig, StochasticConfig, Verbosity};
//!
//! // All defaults
//! let config = GradientAscentConfig::builder().build().unwrap();
//!
//! // Customize the run
//! let config = StochasticConfig::builder()
//!     .n_rounds(25)
//!     .learning_rate(0.05)
//!     .seed(7)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use super::logger::Verbosity;
use super::stochastic::ShuffleKind;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Learning rate must be finite and positive.
    InvalidLearningRate(f64),
    /// Number of rounds must be at least 1.
    InvalidNRounds,
    /// Swap-attempt shuffling needs at least one attempt.
    InvalidSwapAttempts,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLearningRate(v) => {
                write!(f, "learning_rate must be finite and positive, got {}", v)
            }
            Self::InvalidNRounds => write!(f, "n_rounds must be at least 1"),
            Self::InvalidSwapAttempts => {
                write!(f, "swap-attempt shuffling requires at least one attempt")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// GradientAscentConfig
// =============================================================================

/// Configuration for batch gradient-ascent training.
///
/// # Example
///
/// ```
/// use maxent::training::GradientAscentConfig;
///
/// // Default config: 100 rounds at learning rate 0.1
/// let config = GradientAscentConfig::builder().build().unwrap();
/// assert_eq!(config.n_rounds, 100);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct GradientAscentConfig {
    // === Optimization ===
    /// Number of full-corpus ascent rounds. Default: 100.
    #[builder(default = 100)]
    pub n_rounds: u32,

    /// Step size applied to each averaged gradient. Default: 0.1.
    #[builder(default = 0.1)]
    pub learning_rate: f64,

    // === Logging ===
    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: gradient_ascent_config_builder::IsComplete> GradientAscentConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `learning_rate` not finite or not positive
    /// - `n_rounds == 0`
    pub fn build(self) -> Result<GradientAscentConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl GradientAscentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.n_rounds == 0 {
            return Err(ConfigError::InvalidNRounds);
        }
        Ok(())
    }
}

impl Default for GradientAscentConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// StochasticConfig
// =============================================================================

/// Configuration for per-document stochastic training.
///
/// # Example
///
/// ```
/// use maxent::training::{ShuffleKind, StochasticConfig};
///
/// let config = StochasticConfig::builder()
///     .shuffle(ShuffleKind::Uniform)
///     .build()
///     .unwrap();
/// assert_eq!(config.n_rounds, 10);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct StochasticConfig {
    // === Optimization ===
    /// Number of passes over the corpus. Default: 10.
    #[builder(default = 10)]
    pub n_rounds: u32,

    /// Step size applied to each accumulated update. Default: 0.1.
    #[builder(default = 0.1)]
    pub learning_rate: f64,

    // === Reproducibility ===
    /// Random seed for the visiting-order shuffle. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Shuffle strategy for the document visiting order.
    #[builder(default)]
    pub shuffle: ShuffleKind,

    // === Logging ===
    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: stochastic_config_builder::IsComplete> StochasticConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `learning_rate` not finite or not positive
    /// - `n_rounds == 0`
    /// - `shuffle` set to zero swap attempts
    pub fn build(self) -> Result<StochasticConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl StochasticConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.n_rounds == 0 {
            return Err(ConfigError::InvalidNRounds);
        }
        if self.shuffle == ShuffleKind::SwapAttempts(0) {
            return Err(ConfigError::InvalidSwapAttempts);
        }
        Ok(())
    }
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================
