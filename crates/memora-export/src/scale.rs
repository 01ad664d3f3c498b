//! Canonical 0–1 scores converted for display.

/// Convert a 0–1 score to the 0–10 scale, rounded to one decimal.
///
/// Out-of-range and non-finite inputs are clamped (NaN reads as 0).
pub fn out_of_ten(score: f64) -> f64 {
    let clamped = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    (clamped * 100.0).round() / 10.0
}

/// `out_of_ten` formatted as `"7.5/10"`.
pub fn format_out_of_ten(score: f64) -> String {
    format!("{:.1}/10", out_of_ten(score))
}

/// A 0–1 score as a whole percentage, `"85%"`.
pub fn format_percent(score: f64) -> String {
    let clamped = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    format!("{}%", (clamped * 100.0).round() as u32)
}
