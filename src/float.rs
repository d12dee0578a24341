// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Tolerance-based floating point comparison.

/// Relative error bound for values away from zero. 1.0e-5 corresponds to
/// 99.999% accuracy.
pub const MAX_RELATIVE_ERROR: f64 = 1.0e-5;

/// Absolute error bound, used when the values are very close to zero but
/// possibly of different signs.
pub const MAX_ABSOLUTE_ERROR: f64 = 1.0e-37;

/// Compare two floating point numbers for equality using the default error
/// bounds.
pub fn float64_eq(expected: f64, actual: f64) -> bool {
    float64_eq_with(expected, actual, MAX_RELATIVE_ERROR, MAX_ABSOLUTE_ERROR)
}

/// Compare two floating point numbers for equality with explicit error
/// bounds.
///
/// Zero is checked explicitly to avoid dividing by it: a value compares
/// equal to zero iff its magnitude is below `abs_err`. Otherwise the values
/// are equal if they differ by less than `abs_err`, or if the relative
/// error against the larger-magnitude operand is below `rel_err`.
pub fn float64_eq_with(expected: f64, actual: f64, rel_err: f64, abs_err: f64) -> bool {
    if expected == 0.0 {
        fabs(actual) < abs_err
    } else if actual == 0.0 {
        fabs(expected) < abs_err
    } else if fabs(expected - actual) < abs_err {
        true
    } else {
        let relative_error = if fabs(expected) > fabs(actual) {
            fabs((expected - actual) / expected)
        } else {
            fabs((actual - expected) / actual)
        };
        relative_error < rel_err
    }
}

/// Absolute value by clearing the sign bit, usable without `std`.
#[inline]
fn fabs(value: f64) -> f64 {
    f64::from_bits(value.to_bits() & (u64::MAX >> 1))
}
