// ============================================================================
// Arithmetic Engine
// ============================================================================
//
// This module provides:
// - Signed addition and subtraction over aligned digit strings
// - Schoolbook multiplication
// - Bounded-precision long division with an exactness flag, and floored
//   modulo built on it
// - Floor, ceiling, fractional split and significant-digit truncation
// - Integer powers and factorial
//
// Operators (`+`, `-`, `*`, `/`, `%`) are implemented for every
// value/reference combination; `/` and `%` panic on a zero divisor, with
// `checked_div` and `checked_rem` as the fallible forms.

// Operator impls live on &T/&T; these forward the owned combinations.

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to val-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

macro_rules! forward_val_assignop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                // forward to mutref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

mod add_sub;
mod digits;
mod divide;
mod multiply;
mod power;
mod rounding;

pub use divide::Quotient;
