//! Listing summaries handed over by the host page.

use api::ListingId;
use serde::{Deserialize, Serialize};

/// Element id of the `<script type="application/json">` block carrying the summaries.
pub const SUMMARIES_ELEMENT_ID: &str = "listing-summaries";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: ListingId,
    pub title: String,
    #[serde(default)]
    pub stats: Vec<SummaryStat>,
}

/// One small statistic on a listing card (`kind` is e.g. `views` or `favorites`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub kind: String,
    pub value: u64,
    /// Figure for the current month, shown in the hover preview when present.
    #[serde(default)]
    pub monthly: Option<u64>,
}

pub fn parse_summaries(raw: &str) -> Result<Vec<ListingSummary>, serde_json::Error> {
    serde_json::from_str(raw)
}
