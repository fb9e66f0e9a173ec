//! Server-side construction of the views series returned by `GET /api/stats/views`.
//!
//! Snapshots are recorded sparsely, so the series walks every bucket of the
//! lookback window and carries the last known count forward through gaps.

use std::collections::BTreeMap;

use time::{macros::format_description, Duration, PrimitiveDateTime};
use tracing::{debug, warn};

use crate::{IntervalType, StatPoint};

/// A recorded view counter sample for one listing at one interval granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub time: PrimitiveDateTime,
    pub views: u32,
}

impl ViewSnapshot {
    pub fn new(time: PrimitiveDateTime, views: u32) -> Self {
        Self { time, views }
    }
}

/// Build one point per bucket from `now - days` up to and including `now`.
///
/// `snapshots` are the samples taken after the window start (in recording order;
/// when two fall into the same bucket the later one wins). `last_before` is the
/// newest sample older than the window start and seeds the carried value (0 if none).
///
/// A window reaching outside the representable date range yields an empty series.
pub fn build_view_series(
    snapshots: &[ViewSnapshot],
    last_before: Option<&ViewSnapshot>,
    interval: IntervalType,
    days: u32,
    now: PrimitiveDateTime,
) -> Vec<StatPoint> {
    let step = interval.step();
    let Some(start) = now
        .checked_sub(Duration::days(i64::from(days)))
        .and_then(|from| round_to_step(from, step))
    else {
        warn!(%interval, days, "lookback window out of range");
        return Vec::new();
    };

    let mut by_bucket = BTreeMap::new();
    for snapshot in snapshots {
        if let Some(bucket) = round_to_step(snapshot.time, step) {
            by_bucket.insert(bucket, snapshot.views);
        }
    }

    let mut last_known = last_before.map(|s| s.views).unwrap_or(0);
    let mut real_points = 0usize;
    let mut filled_points = 0usize;
    let mut points = Vec::new();

    let mut next = Some(start);
    while let Some(bucket) = next.filter(|bucket| *bucket <= now) {
        match by_bucket.get(&bucket) {
            Some(views) => {
                last_known = *views;
                real_points += 1;
            }
            None => filled_points += 1,
        }
        points.push(StatPoint::new(bucket_label(bucket), f64::from(last_known)));
        next = bucket.checked_add(step);
    }

    if snapshots.is_empty() && last_before.is_none() {
        debug!(%interval, days, "no snapshots recorded for window");
    }
    debug!(
        total = points.len(),
        real = real_points,
        filled = filled_points,
        "built views series"
    );

    points
}

/// Floor `time` to a multiple of `step`, counted from the Unix epoch (UTC).
fn round_to_step(time: PrimitiveDateTime, step: Duration) -> Option<PrimitiveDateTime> {
    let step_secs = step.whole_seconds();
    let timestamp = time.assume_utc().unix_timestamp();
    let excess = timestamp.rem_euclid(step_secs);
    time.replace_nanosecond(0)
        .unwrap_or(time)
        .checked_sub(Duration::seconds(excess))
}

/// `HH:mm dd.MM.yyyy`
fn bucket_label(time: PrimitiveDateTime) -> String {
    time.format(&format_description!(
        "[hour]:[minute] [day].[month].[year]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}
