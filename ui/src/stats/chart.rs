//! Line chart configuration and the charting capability the panel draws through.
//!
//! The configuration serialises to the shape Chart.js expects, so the browser
//! backend can hand it over as-is. Tick label filtering is attached by the backend
//! because it has to be a JS callback.

use std::collections::{BTreeMap, BTreeSet};

use api::StatPoint;
use serde::Serialize;
use tracing::debug;

use super::axis::padded_range;

pub const SERIES_BORDER_COLOR: &str = "rgba(99, 102, 241, 1)";
pub const SERIES_FILL_COLOR: &str = "rgba(99, 102, 241, 0.2)";
pub const POINT_COLOR: &str = "rgba(75, 192, 192, 0)";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("document unavailable")]
    NoDocument,
    #[error("canvas `{0}` not found")]
    MissingCanvas(String),
    #[error("chart config could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("charting library error: {0}")]
    Js(String),
}

/// Draws and disposes charts. At most one handle is kept alive by the panel manager.
///
/// Drawing is split in two so a missing canvas is noticed before the live chart
/// is torn down: Chart.js refuses a second chart on a canvas that still has one.
pub trait ChartBackend {
    /// A canvas resolved and ready to draw on.
    type Surface;
    type Handle;

    fn surface(&mut self, canvas_id: &str) -> Result<Self::Surface, ChartError>;

    fn render(
        &mut self,
        surface: Self::Surface,
        config: &LineChartConfig,
    ) -> Result<Self::Handle, ChartError>;

    fn destroy(&mut self, handle: Self::Handle);
}

#[cfg(target_arch = "wasm32")]
pub type DefaultChartBackend = super::chartjs::ChartJsBackend;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultChartBackend = HeadlessChartBackend;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_background_color: &'static str,
    pub point_border_color: &'static str,
    pub point_hover_radius: u32,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: XAxis,
    pub y: YAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_max: Option<f64>,
    pub ticks: TickOptions,
}

/// Placeholder object the browser backend hangs the tick `callback` on.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TickOptions {}

impl LineChartConfig {
    /// The views chart: one filled line, hidden x labels, padded y range.
    pub fn views(points: &[StatPoint], dataset_label: impl Into<String>) -> Self {
        let range = padded_range(points);
        Self {
            kind: "line",
            data: ChartData {
                labels: points.iter().map(|p| p.x.clone()).collect(),
                datasets: vec![LineDataset {
                    label: dataset_label.into(),
                    data: points.iter().map(|p| p.y).collect(),
                    border_color: SERIES_BORDER_COLOR,
                    background_color: SERIES_FILL_COLOR,
                    fill: true,
                    tension: 0.0,
                    point_radius: 6,
                    point_background_color: POINT_COLOR,
                    point_border_color: POINT_COLOR,
                    point_hover_radius: 10,
                    border_width: 4,
                }],
            },
            options: ChartOptions {
                responsive: true,
                scales: Scales {
                    x: XAxis { display: false },
                    y: YAxis {
                        suggested_min: range.map(|r| r.min),
                        suggested_max: range.map(|r| r.max),
                        ticks: TickOptions::default(),
                    },
                },
            },
        }
    }
}

/// Backend for builds without a charting library: keeps the configs of live charts
/// so callers (and tests) can inspect what would be on screen.
#[derive(Debug, Default)]
pub struct HeadlessChartBackend {
    next_handle: u64,
    live: BTreeMap<u64, (String, LineChartConfig)>,
    detached: BTreeSet<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeadlessHandle(u64);

impl HeadlessChartBackend {
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Canvas id and config of the most recently drawn live chart.
    pub fn current(&self) -> Option<(&str, &LineChartConfig)> {
        self.live
            .values()
            .next_back()
            .map(|(canvas, config)| (canvas.as_str(), config))
    }

    /// Make `canvas_id` unresolvable, as if its element left the page.
    pub fn detach_canvas(&mut self, canvas_id: &str) {
        self.detached.insert(canvas_id.to_string());
    }
}

impl ChartBackend for HeadlessChartBackend {
    type Surface = String;
    type Handle = HeadlessHandle;

    fn surface(&mut self, canvas_id: &str) -> Result<Self::Surface, ChartError> {
        if self.detached.contains(canvas_id) {
            return Err(ChartError::MissingCanvas(canvas_id.to_string()));
        }
        Ok(canvas_id.to_string())
    }

    fn render(
        &mut self,
        canvas_id: Self::Surface,
        config: &LineChartConfig,
    ) -> Result<Self::Handle, ChartError> {
        self.next_handle += 1;
        debug!(%canvas_id, points = config.data.labels.len(), "headless chart drawn");
        self.live
            .insert(self.next_handle, (canvas_id, config.clone()));
        Ok(HeadlessHandle(self.next_handle))
    }

    fn destroy(&mut self, handle: Self::Handle) {
        self.live.remove(&handle.0);
    }
}
