// ============================================================================
// Trigonometric Constants
// ============================================================================

use crate::decimal::BigDecimal;
use std::sync::LazyLock;

/// π/2 to 50 significant digits.
pub static HALF_PI: LazyLock<BigDecimal> = LazyLock::new(|| {
    "1.5707963267948966192313216916397514420985846996876"
        .parse()
        .expect("half-pi literal is a valid decimal")
});

/// π to 50 significant digits.
pub static PI: LazyLock<BigDecimal> = LazyLock::new(|| {
    "3.1415926535897932384626433832795028841971693993751"
        .parse()
        .expect("pi literal is a valid decimal")
});

/// 2π to 50 significant digits, the range-reduction period.
pub static TWO_PI: LazyLock<BigDecimal> = LazyLock::new(|| {
    "6.2831853071795864769252867665590057683943387987502"
        .parse()
        .expect("two-pi literal is a valid decimal")
});

/// Terms summed for the sine series.
pub(crate) const TAYLOR_TERMS: u32 = 20;

/// Significant digits kept in trigonometric results.
pub(crate) const TRIG_DIGITS: usize = 10;
