// ============================================================================
// Step Stack Evaluator
// Applies queued steps to an accumulator that starts at zero
// ============================================================================

use crate::decimal::{BigDecimal, DecimalError, DecimalResult};
use crate::eval::expression::Step;
use crate::eval::observer::{NoOpStepObserver, StepObserver};
use num_traits::ToPrimitive;
use std::fmt;
use std::sync::Arc;

/// An ordered list of steps plus the observer notified as they run.
///
/// `evaluate` folds the steps in push order over an accumulator that
/// starts at zero, so a first step of `Add` sets the working value.
///
/// # Example
/// ```
/// use longhand::{Step, StepStack};
///
/// let mut stack = StepStack::new();
/// stack.push("+2".parse::<Step>().unwrap());
/// stack.push("*3".parse::<Step>().unwrap());
/// stack.push("-1".parse::<Step>().unwrap());
/// assert_eq!(stack.evaluate().unwrap().to_string(), "5");
/// ```
pub struct StepStack {
    steps: Vec<Step>,
    observer: Arc<dyn StepObserver>,
}

impl StepStack {
    /// An empty stack with the no-op observer.
    pub fn new() -> Self {
        Self::with_observer(Arc::new(NoOpStepObserver))
    }

    /// An empty stack notifying `observer` after each applied step.
    pub fn with_observer(observer: Arc<dyn StepObserver>) -> Self {
        Self {
            steps: Vec::new(),
            observer,
        }
    }

    /// Appends a step to run after all current ones.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Removes and returns the most recently pushed step.
    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    /// Drops all steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Number of queued steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the stack holds no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The queued steps in push order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs the steps in push order starting from zero. The stack itself
    /// is unchanged, so a failed run can be repaired and retried.
    ///
    /// # Errors
    /// The first step that fails aborts the run: `DivisionByZero` from
    /// `Div`/`Mod`/reciprocal trig steps, `InvalidArgument` from `Fac` on
    /// non-integers and from `Pow` operands that are fractional or do not
    /// fit `i32`.
    pub fn evaluate(&self) -> DecimalResult<BigDecimal> {
        let mut accumulator = BigDecimal::zero();
        for step in &self.steps {
            accumulator = apply(step, &accumulator)?;
            self.observer.on_step(step, &accumulator);
        }
        Ok(accumulator)
    }
}

impl Default for StepStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StepStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepStack")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

fn apply(step: &Step, accumulator: &BigDecimal) -> DecimalResult<BigDecimal> {
    match step {
        Step::Add(operand) => Ok(accumulator + operand),
        Step::Sub(operand) => Ok(accumulator - operand),
        Step::Mul(operand) => Ok(accumulator * operand),
        Step::Div(operand) => accumulator.checked_div(operand),
        Step::Mod(operand) => accumulator.checked_rem(operand),
        Step::Pow(operand) => accumulator.powi(power_exponent(operand)?),
        Step::Fac => accumulator.factorial(),
        Step::Sin => Ok(accumulator.sin()),
        Step::Cos => Ok(accumulator.cos()),
        Step::Tan => accumulator.tan(),
        Step::Csc => accumulator.csc(),
        Step::Sec => accumulator.sec(),
        Step::Cot => accumulator.cot(),
    }
}

/// A power operand must be an integer that fits `i32`.
fn power_exponent(operand: &BigDecimal) -> DecimalResult<i32> {
    operand
        .to_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(DecimalError::InvalidArgument)
}
