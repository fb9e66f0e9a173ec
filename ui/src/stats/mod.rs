//! Per-listing view statistics: summary items with hover previews and the toggled
//! chart panel.
//!
//! Element ids and classes follow the markup contract the host stylesheet expects
//! (`statPanelCard<id>`, `statsChart<id>`, `monthly-<type>-<id>`, ...).

mod axis;
mod chart;
#[cfg(target_arch = "wasm32")]
mod chartjs;
mod panel;
mod preview;
mod source;
mod summary;
mod view;

pub use axis::{padded_range, AxisRange, AXIS_PADDING_RATIO};
pub use chart::{
    ChartBackend, ChartError, DefaultChartBackend, HeadlessChartBackend, HeadlessHandle,
    LineChartConfig,
};
#[cfg(target_arch = "wasm32")]
pub use chartjs::{ChartJsBackend, ChartJsHandle, ChartJsSurface};
pub use panel::{LoadOutcome, LoadTicket, PanelManager, PanelToggle, Selection};
pub use preview::PreviewState;
pub use source::{decode_series, HttpStatsSource, StatsError};
pub use summary::{parse_summaries, ListingSummary, SummaryStat, SUMMARIES_ELEMENT_ID};
pub use view::{
    ListingStatsCard, StatSummaryItem, StatsBoard, StatsPanelCard, StatsToggleButton,
};

use api::ListingId;

pub fn panel_element_id(listing: ListingId) -> String {
    format!("statPanelCard{listing}")
}

pub fn canvas_element_id(listing: ListingId) -> String {
    format!("statsChart{listing}")
}

pub fn preview_element_id(kind: &str, listing: ListingId) -> String {
    format!("monthly-{kind}-{listing}")
}
