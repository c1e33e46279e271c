//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed angular difference `a - b` normalized to (-180, 180] degrees.
pub fn signed_delta_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}
