//! The "undefined" sentinel and tolerant float comparison.
//!
//! Layout values use `NaN` to mean "unset / not yet computed". Such a value is
//! distinct from zero and must never be compared with `==`.

/// Sentinel for an unset or not-yet-computed length.
pub const UNDEFINED: f32 = f32::NAN;

/// Tolerance used by every float comparison in the engine.
pub const EPSILON: f32 = 0.00001;

#[inline]
pub fn is_undefined(value: f32) -> bool {
    value.is_nan()
}

/// Returns `true` for a value that is set and non-negative.
#[inline]
pub fn is_defined_non_negative(value: f32) -> bool {
    !value.is_nan() && value >= 0.0
}

/// Epsilon comparison where two undefined values are considered equal.
pub fn floats_equal(a: f32, b: f32) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => (a - b).abs() < EPSILON,
        _ => false,
    }
}

/// Returns `value`, or zero when `value` is undefined.
#[inline]
pub fn or_zero(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_values_compare_equal() {
        assert!(floats_equal(UNDEFINED, UNDEFINED));
        assert!(!floats_equal(UNDEFINED, 0.0));
        assert!(!floats_equal(0.0, UNDEFINED));
    }

    #[test]
    fn comparison_uses_epsilon() {
        assert!(floats_equal(1.0, 1.000001));
        assert!(!floats_equal(1.0, 1.001));
    }

    #[test]
    fn undefined_is_not_zero() {
        assert!(is_undefined(UNDEFINED));
        assert!(!is_undefined(0.0));
        assert_eq!(or_zero(UNDEFINED), 0.0);
        assert_eq!(or_zero(3.5), 3.5);
        assert!(!is_defined_non_negative(-1.0));
        assert!(is_defined_non_negative(0.0));
    }
}
