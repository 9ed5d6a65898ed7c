// ============================================================================
// Step Observer Interface
// Defines the contract for watching a calculation run step by step
// ============================================================================

use crate::decimal::BigDecimal;
use crate::eval::expression::Step;

/// Observer trait notified after each step of an evaluation.
/// Implementations can handle logging, progress display, auditing, etc.
pub trait StepObserver: Send + Sync {
    /// Called after `step` has been applied, with the new accumulator.
    fn on_step(&self, step: &Step, accumulator: &BigDecimal);
}

/// No-op observer for quiet evaluation
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {
    fn on_step(&self, _step: &Step, _accumulator: &BigDecimal) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingStepObserver;

impl StepObserver for LoggingStepObserver {
    fn on_step(&self, step: &Step, accumulator: &BigDecimal) {
        tracing::debug!("Calculation step {}: accumulator {}", step, accumulator);
    }
}
