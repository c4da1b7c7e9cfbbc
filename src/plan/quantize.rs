//! One-decimal quantization applied after every allocation update.

/// Rounds `value` to one decimal place.
///
/// Rounding goes through the exact decimal expansion of `value`, so a
/// binary value sitting just below a halfway point (e.g. `0.35`, stored as
/// `0.34999…`) rounds down instead of being pushed up by a `* 10.0`.
///
/// # Examples
///
/// ```
/// use production_plan::plan::quantize::round1;
///
/// assert_eq!(round1(798.4 - 460.0), 338.4);
/// assert_eq!(round1(0.35), 0.3);
/// assert_eq!(round1(169.3333), 169.3);
/// ```
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
