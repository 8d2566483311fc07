//! Boundary between raw user text and the numeric core.
//!
//! Anything that is not a finite, non-negative number becomes `0.0`, so the
//! recipe never sees NaN, infinity or negative weights.

/// Clamp an already-numeric weight into the valid range.
#[inline]
pub fn normalize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Parse weight text as typed by the user.
pub fn parse_weight(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .map(normalize_weight)
        .unwrap_or(0.0)
}
