//! Formatting helpers for chart labels.

/// Y-axis tick label. Only positive whole numbers get a label; everything else is blank.
pub fn tick_label(value: f64) -> Option<String> {
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 {
        Some(format!("{value:.0}"))
    } else {
        None
    }
}
