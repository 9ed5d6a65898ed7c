// ============================================================================
// Calculation Steps
// One operation applied to a running accumulator, with a text form
// ============================================================================

use crate::decimal::{BigDecimal, ParseDecimalError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single calculation step.
///
/// Binary kinds carry their right-hand operand; unary kinds apply to the
/// accumulator alone. The text form is the operator character followed by
/// a decimal literal (`"+3"`, `"^2"`) or a bare function name (`"sin"`,
/// `"fac"`, with `"!"` accepted for the latter).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Add the operand to the accumulator
    Add(BigDecimal),
    /// Subtract the operand
    Sub(BigDecimal),
    /// Multiply by the operand
    Mul(BigDecimal),
    /// Divide by the operand at the configured budget
    Div(BigDecimal),
    /// Floored modulo by the operand
    Mod(BigDecimal),
    /// Raise to the operand, which must be an integer fitting `i32`
    Pow(BigDecimal),
    /// Factorial of the accumulator
    Fac,
    /// Sine of the accumulator, in radians
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Cosecant
    Csc,
    /// Secant
    Sec,
    /// Cotangent
    Cot,
}

/// Failure to read a [`Step`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStepError {
    /// The input was empty or all whitespace
    Empty,
    /// The input named no known operation
    Unrecognized,
    /// The operation was known but its operand did not parse
    InvalidOperand(ParseDecimalError),
}

impl fmt::Display for ParseStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStepError::Empty => {
                write!(f, "empty input: no step to parse")
            },
            ParseStepError::Unrecognized => {
                write!(f, "unrecognized operation")
            },
            ParseStepError::InvalidOperand(cause) => {
                write!(f, "invalid operand: {cause}")
            },
        }
    }
}

impl std::error::Error for ParseStepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseStepError::InvalidOperand(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<ParseDecimalError> for ParseStepError {
    fn from(err: ParseDecimalError) -> Self {
        ParseStepError::InvalidOperand(err)
    }
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseStepError::Empty);
        }
        match text.to_ascii_lowercase().as_str() {
            "!" | "fac" => return Ok(Step::Fac),
            "sin" => return Ok(Step::Sin),
            "cos" => return Ok(Step::Cos),
            "tan" => return Ok(Step::Tan),
            "csc" => return Ok(Step::Csc),
            "sec" => return Ok(Step::Sec),
            "cot" => return Ok(Step::Cot),
            _ => {},
        }
        let op = text.chars().next().expect("text is non-empty");
        let build: fn(BigDecimal) -> Step = match op {
            '+' => Step::Add,
            '-' => Step::Sub,
            '*' => Step::Mul,
            '/' => Step::Div,
            '%' => Step::Mod,
            '^' => Step::Pow,
            _ => return Err(ParseStepError::Unrecognized),
        };
        let operand: BigDecimal = text[op.len_utf8()..].parse()?;
        Ok(build(operand))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Add(operand) => write!(f, "+{operand}"),
            Step::Sub(operand) => write!(f, "-{operand}"),
            Step::Mul(operand) => write!(f, "*{operand}"),
            Step::Div(operand) => write!(f, "/{operand}"),
            Step::Mod(operand) => write!(f, "%{operand}"),
            Step::Pow(operand) => write!(f, "^{operand}"),
            Step::Fac => f.write_str("fac"),
            Step::Sin => f.write_str("sin"),
            Step::Cos => f.write_str("cos"),
            Step::Tan => f.write_str("tan"),
            Step::Csc => f.write_str("csc"),
            Step::Sec => f.write_str("sec"),
            Step::Cot => f.write_str("cot"),
        }
    }
}
