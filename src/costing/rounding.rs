use crate::costing::constants::{MONEY_DECIMALS, NUTRITION_DECIMALS, PERCENT_DECIMALS};

/// Round a float to n decimal places, half away from zero.
///
/// This is not banker's rounding: an exact half such as `0.125` at two
/// places becomes `0.13`, where round-half-to-even spreadsheets and
/// Python's `round()` give `0.12`. Values that are not exact halves in
/// binary round identically under both rules.
///
/// Negative zero collapses to zero so serialized output never shows `-0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[inline]
pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_DECIMALS)
}

#[inline]
pub fn round_pct(value: f64) -> f64 {
    round_to(value, PERCENT_DECIMALS)
}

#[inline]
pub fn round_nutrition(value: f64) -> f64 {
    round_to(value, NUTRITION_DECIMALS)
}
