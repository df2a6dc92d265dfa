//! Training progress output.

use std::time::Instant;

use ndarray::ArrayView1;

/// How much training output to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Round-level progress and summary lines.
    Info,
    /// Everything, including per-round weight vectors.
    Debug,
}

/// Structured logging with verbosity levels.
///
/// Trainers create one logger per training run and route all output through
/// it, so callers control chattiness with a single config field.
pub struct TrainingLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            started: None,
        }
    }

    /// Print a progress line at `Info` and above.
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Info {
            println!("{}", message);
        }
    }

    /// Print a detail line at `Debug` only.
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            println!("{}", message);
        }
    }

    /// Mark the start of a run and remember the wall clock for
    /// [`finish_training`](Self::finish_training).
    pub fn start_training(&mut self, n_rounds: usize) {
        self.started = Some(Instant::now());
        self.info(&format!("Starting training: {} rounds", n_rounds));
    }

    /// Print named per-round metrics at `Info` and above.
    pub fn log_round(&self, round: usize, metrics: &[(String, f64)]) {
        if self.verbosity < Verbosity::Info {
            return;
        }
        let rendered: Vec<String> = metrics
            .iter()
            .map(|(name, value)| format!("{}: {:.6}", name, value))
            .collect();
        println!("[round {}] {}", round, rendered.join(", "));
    }

    /// Print the full weight vector at `Debug` only.
    pub fn log_weights(&self, round: usize, weights: ArrayView1<'_, f64>) {
        if self.verbosity >= Verbosity::Debug {
            println!("[round {}] weights: {}", round, weights);
        }
    }

    /// Print the elapsed wall-clock time recorded by
    /// [`start_training`](Self::start_training).
    pub fn finish_training(&mut self) {
        if let Some(started) = self.started.take() {
            self.info(&format!(
                "Training complete in {:.3}s",
                started.elapsed().as_secs_f64()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Silent < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
    }

    #[test]
    fn test_verbosity_default_is_silent() {
        assert_eq!(Verbosity::default(), Verbosity::Silent);
    }

    #[test]
    fn test_silent_logger_round_trips() {
        // No panic when logging without a start mark.
        let mut logger = TrainingLogger::new(Verbosity::Silent);
        logger.log_round(0, &[("gradient_norm".to_string(), 1.0)]);
        logger.finish_training();
    }
}
