//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Truncate a non-negative f64 into the u32 range, returning 0 for NaN or negatives.
#[must_use]
pub fn trunc_f64_to_u32(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let max = f64::from(u32::MAX);
    cast::<f64, u32>(value.min(max).trunc()).unwrap_or(0)
}

/// Floor an amount expressed in cents and return it in whole currency units.
#[must_use]
pub fn floor_cents(value: f64) -> f64 {
    value.floor() / 100.0
}

/// Round up to two decimal places.
#[must_use]
pub fn ceil_to_hundredth(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
