//! Wire contract of the listing statistics endpoint, shared by the widget (`ui`) and
//! whatever backend serves `GET /api/stats/views`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Duration;

pub mod series;
pub use series::{build_view_series, ViewSnapshot};

/// Path of the views time-series endpoint.
pub const VIEWS_ENDPOINT: &str = "/api/stats/views";

/// Lookback window the endpoint assumes when `days` is omitted.
pub const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid listing id `{0}`")]
    ListingId(String),
    #[error("unknown interval `{0}`")]
    Interval(String),
}

/// Identifier of a listing, as carried by the `listingId` attribute / query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListingId {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u64>()
            .map(ListingId)
            .map_err(|_| ParseError::ListingId(raw.to_string()))
    }
}

/// Bucket granularity of a statistics series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalType {
    FiveMinutes,
    Hourly,
    Daily,
    Weekly,
}

impl IntervalType {
    pub const ALL: [IntervalType; 4] = [
        IntervalType::FiveMinutes,
        IntervalType::Hourly,
        IntervalType::Daily,
        IntervalType::Weekly,
    ];

    /// Query-string form (matches the serde representation).
    pub fn as_param(self) -> &'static str {
        match self {
            IntervalType::FiveMinutes => "FIVE_MINUTES",
            IntervalType::Hourly => "HOURLY",
            IntervalType::Daily => "DAILY",
            IntervalType::Weekly => "WEEKLY",
        }
    }

    /// Width of one bucket.
    pub fn step(self) -> Duration {
        match self {
            IntervalType::FiveMinutes => Duration::minutes(5),
            IntervalType::Hourly => Duration::hours(1),
            IntervalType::Daily => Duration::days(1),
            IntervalType::Weekly => Duration::days(7),
        }
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for IntervalType {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        IntervalType::ALL
            .into_iter()
            .find(|interval| interval.as_param().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ParseError::Interval(raw.to_string()))
    }
}

/// One bucket of the series: `x` is the bucket label, `y` the view count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatPoint {
    pub x: String,
    pub y: f64,
}

impl StatPoint {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// Parameters of a views request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewsQuery {
    pub listing_id: ListingId,
    pub interval: IntervalType,
    pub days: u32,
}

impl ViewsQuery {
    pub fn new(listing_id: ListingId, interval: IntervalType, days: u32) -> Self {
        Self {
            listing_id,
            interval,
            days,
        }
    }

    /// `/api/stats/views?listingId=..&interval=..&days=..`
    pub fn path_and_query(&self) -> String {
        format!(
            "{VIEWS_ENDPOINT}?listingId={}&interval={}&days={}",
            self.listing_id,
            self.interval.as_param(),
            self.days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_matches_endpoint_contract() {
        let query = ViewsQuery::new(ListingId(42), IntervalType::Hourly, 30);
        assert_eq!(
            query.path_and_query(),
            "/api/stats/views?listingId=42&interval=HOURLY&days=30"
        );
    }

    #[test]
    fn interval_parses_param_names() {
        assert_eq!(
            "FIVE_MINUTES".parse::<IntervalType>(),
            Ok(IntervalType::FiveMinutes)
        );
        assert_eq!("weekly".parse::<IntervalType>(), Ok(IntervalType::Weekly));
        assert!("MONTHLY".parse::<IntervalType>().is_err());
    }

    #[test]
    fn listing_id_rejects_garbage() {
        assert_eq!(" 17 ".parse::<ListingId>(), Ok(ListingId(17)));
        assert_eq!(
            "abc".parse::<ListingId>(),
            Err(ParseError::ListingId("abc".into()))
        );
    }

    #[test]
    fn points_decode_from_integer_counts() {
        let points: Vec<StatPoint> =
            serde_json::from_str(r#"[{"x":"10:00 01.02.2025","y":3},{"x":"11:00 01.02.2025","y":5}]"#)
                .unwrap();
        assert_eq!(points[1], StatPoint::new("11:00 01.02.2025", 5.0));
    }

    #[test]
    fn interval_serializes_as_screaming_case() {
        let json = serde_json::to_string(&IntervalType::FiveMinutes).unwrap();
        assert_eq!(json, "\"FIVE_MINUTES\"");
    }
}
