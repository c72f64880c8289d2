/// Map an 8-bit channel to `[0, 1]`.
#[inline]
pub(crate) fn unit_from_u8(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Map a `[0, 1]` channel back to 8 bits, rounding half up and clamping.
/// NaN maps to 0.
#[inline]
pub(crate) fn u8_from_unit(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
