// ============================================================================
// Expression Evaluation
// ============================================================================
//
// This module provides:
// - `Step`, a parsed calculation step with its text form
// - `StepStack`, an evaluator folding steps over a zero-initialized
//   accumulator
// - `StepObserver`, a seam for watching runs (no-op and logging impls)

mod expression;
mod observer;
mod stack;

pub use expression::{ParseStepError, Step};
pub use observer::{LoggingStepObserver, NoOpStepObserver, StepObserver};
pub use stack::StepStack;
