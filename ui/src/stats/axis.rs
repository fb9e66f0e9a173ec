//! Y-axis range for the views chart.

use api::StatPoint;

/// Fraction of the value span added below the minimum and above the maximum.
pub const AXIS_PADDING_RATIO: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Suggested y-axis bounds: the series' min/max padded by a quarter of the span.
/// `None` when the series has no finite values.
pub fn padded_range(points: &[StatPoint]) -> Option<AxisRange> {
    let mut values = points.iter().map(|p| p.y).filter(|v| v.is_finite());
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = (max - min) * AXIS_PADDING_RATIO;
    Some(AxisRange {
        min: min - pad,
        max: max + pad,
    })
}
