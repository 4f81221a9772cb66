//! Rendering of floating point payloads.
//!
//! Float payloads are shown in fixed notation with six fractional digits,
//! the way C's `%f` conversion (and `std::to_string` in C++) renders a
//! `double`. Keeping this exact shape makes token dumps stable and
//! comparable across front-ends.

use std::fmt::Display;

/// Number of digits after the decimal point.
pub const FRACTION_DIGITS: usize = 6;

/// [Display] an [f64] in `%f` style: `1.5` is `1.500000`.
/// Non-finite values are `inf`, `-inf`, `nan` and `-nan`.
#[derive(Clone, Copy, Debug)]
pub struct FixedPoint(pub f64);

impl Display for FixedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value.is_nan() {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            write!(f, "{sign}nan")
        } else if value.is_infinite() {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            write!(f, "{sign}inf")
        } else {
            write!(f, "{value:.prec$}", prec = FRACTION_DIGITS)
        }
    }
}
