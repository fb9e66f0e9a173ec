//! Panel manager: which listing's statistics panel is open, the single live chart,
//! per-listing select values and the load generation used to drop late responses.

use std::collections::HashMap;

use api::{IntervalType, ListingId, StatPoint, ViewsQuery};
use tracing::{debug, error};

use super::chart::{ChartBackend, LineChartConfig};
use super::source::StatsError;
use super::canvas_element_id;

/// Interval and day-range currently chosen in a panel's selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub interval: IntervalType,
    pub days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelToggle {
    Opened(ListingId),
    Closed(ListingId),
}

/// Issued when a load starts; only the newest ticket may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    query: ViewsQuery,
}

impl LoadTicket {
    pub fn query(&self) -> &ViewsQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { points: usize },
    /// Superseded by a newer load, or the panel closed meanwhile.
    Stale,
    Failed,
}

pub struct PanelManager<B: ChartBackend> {
    backend: B,
    chart: Option<B::Handle>,
    open: Option<ListingId>,
    selections: HashMap<ListingId, Selection>,
    defaults: Selection,
    generation: u64,
    dataset_label: String,
}

impl<B: ChartBackend> PanelManager<B> {
    pub fn new(backend: B, defaults: Selection, dataset_label: impl Into<String>) -> Self {
        Self {
            backend,
            chart: None,
            open: None,
            selections: HashMap::new(),
            defaults,
            generation: 0,
            dataset_label: dataset_label.into(),
        }
    }

    /// Handle a click on a listing's statistics button.
    ///
    /// The chart is torn down and every panel hidden first. Clicking the open
    /// listing closes it; clicking any other listing opens that one instead.
    pub fn toggle(&mut self, listing: ListingId) -> PanelToggle {
        self.destroy_chart();
        self.generation += 1;

        if self.open.take() == Some(listing) {
            debug!(%listing, "statistics panel closed");
            return PanelToggle::Closed(listing);
        }

        debug!(%listing, "statistics panel opened");
        self.open = Some(listing);
        PanelToggle::Opened(listing)
    }

    pub fn is_open(&self, listing: ListingId) -> bool {
        self.open == Some(listing)
    }

    pub fn open_listing(&self) -> Option<ListingId> {
        self.open
    }

    pub fn selection(&self, listing: ListingId) -> Selection {
        self.selections
            .get(&listing)
            .copied()
            .unwrap_or(self.defaults)
    }

    pub fn set_interval(&mut self, listing: ListingId, interval: IntervalType) {
        let defaults = self.defaults;
        self.selections.entry(listing).or_insert(defaults).interval = interval;
    }

    pub fn set_days(&mut self, listing: ListingId, days: u32) {
        let defaults = self.defaults;
        self.selections.entry(listing).or_insert(defaults).days = days;
    }

    /// Start a load for `listing` using its current selection. `None` if its panel
    /// is not open. Any earlier in-flight load becomes stale.
    pub fn begin_load(&mut self, listing: ListingId) -> Option<LoadTicket> {
        if !self.is_open(listing) {
            return None;
        }
        self.generation += 1;
        let Selection { interval, days } = self.selection(listing);
        Some(LoadTicket {
            generation: self.generation,
            query: ViewsQuery::new(listing, interval, days),
        })
    }

    /// Label of the plotted dataset, applied from the next drawn chart on.
    pub fn set_dataset_label(&mut self, label: impl Into<String>) {
        self.dataset_label = label.into();
    }

    /// Draw the result of a load. Fetch failures and an unresolvable canvas are
    /// logged and leave the current chart untouched; otherwise it is replaced.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<StatPoint>, StatsError>,
    ) -> LoadOutcome {
        let listing = ticket.query.listing_id;
        if ticket.generation != self.generation || !self.is_open(listing) {
            debug!(%listing, "dropping superseded statistics response");
            return LoadOutcome::Stale;
        }

        let points = match result {
            Ok(points) => points,
            Err(err) => {
                error!(%listing, %err, "failed to load view statistics");
                return LoadOutcome::Failed;
            }
        };

        let config = LineChartConfig::views(&points, self.dataset_label.clone());
        let surface = match self.backend.surface(&canvas_element_id(listing)) {
            Ok(surface) => surface,
            Err(err) => {
                error!(%listing, %err, "no canvas for views chart");
                return LoadOutcome::Failed;
            }
        };
        self.destroy_chart();
        match self.backend.render(surface, &config) {
            Ok(handle) => {
                self.chart = Some(handle);
                LoadOutcome::Rendered {
                    points: points.len(),
                }
            }
            Err(err) => {
                error!(%listing, %err, "failed to draw views chart");
                LoadOutcome::Failed
            }
        }
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Close everything, e.g. when the board unmounts.
    pub fn teardown(&mut self) {
        self.destroy_chart();
        self.open = None;
        self.generation += 1;
    }

    fn destroy_chart(&mut self) {
        if let Some(handle) = self.chart.take() {
            self.backend.destroy(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::chart::HeadlessChartBackend;

    const A: ListingId = ListingId(1);
    const B: ListingId = ListingId(2);

    fn manager() -> PanelManager<HeadlessChartBackend> {
        PanelManager::new(
            HeadlessChartBackend::default(),
            Selection {
                interval: IntervalType::Hourly,
                days: 7,
            },
            "Views",
        )
    }

    fn series() -> Vec<StatPoint> {
        vec![StatPoint::new("1", 0.0), StatPoint::new("2", 10.0)]
    }

    fn open_and_draw(m: &mut PanelManager<HeadlessChartBackend>, listing: ListingId) {
        assert_eq!(m.toggle(listing), PanelToggle::Opened(listing));
        let ticket = m.begin_load(listing).unwrap();
        assert_eq!(
            m.finish_load(ticket, Ok(series())),
            LoadOutcome::Rendered { points: 2 }
        );
    }

    #[test]
    fn opening_a_then_b_keeps_one_panel_and_one_chart() {
        let mut m = manager();
        open_and_draw(&mut m, A);
        open_and_draw(&mut m, B);

        assert!(!m.is_open(A));
        assert!(m.is_open(B));
        assert_eq!(m.backend().live_count(), 1);
        assert_eq!(
            m.backend().current().map(|(canvas, _)| canvas),
            Some("statsChart2")
        );
    }

    #[test]
    fn toggling_twice_hides_and_clears() {
        let mut m = manager();
        open_and_draw(&mut m, A);
        assert_eq!(m.toggle(A), PanelToggle::Closed(A));

        assert_eq!(m.open_listing(), None);
        assert!(!m.has_chart());
        assert_eq!(m.backend().live_count(), 0);
        assert_eq!(m.begin_load(A), None);
    }

    #[test]
    fn failed_fetch_keeps_previous_chart() {
        let mut m = manager();
        open_and_draw(&mut m, A);

        m.set_days(A, 30);
        let ticket = m.begin_load(A).unwrap();
        let failure = Err(StatsError::Status(500));
        assert_eq!(m.finish_load(ticket, failure), LoadOutcome::Failed);

        assert!(m.has_chart());
        assert_eq!(m.backend().live_count(), 1);
    }

    #[test]
    fn missing_canvas_keeps_previous_chart() {
        let mut m = manager();
        open_and_draw(&mut m, A);
        m.backend_mut().detach_canvas("statsChart1");

        let ticket = m.begin_load(A).unwrap();
        assert_eq!(m.finish_load(ticket, Ok(series())), LoadOutcome::Failed);
        assert!(m.has_chart());
        assert_eq!(m.backend().live_count(), 1);
    }

    #[test]
    fn relabelled_dataset_applies_to_next_chart() {
        let mut m = manager();
        open_and_draw(&mut m, A);
        m.set_dataset_label("Просмотры");

        let ticket = m.begin_load(A).unwrap();
        m.finish_load(ticket, Ok(series()));
        let (_, config) = m.backend().current().unwrap();
        assert_eq!(config.data.datasets[0].label, "Просмотры");
    }

    #[test]
    fn late_response_does_not_overwrite_newer_chart() {
        let mut m = manager();
        m.toggle(A);
        let slow = m.begin_load(A).unwrap();
        m.set_interval(A, IntervalType::Daily);
        let fast = m.begin_load(A).unwrap();

        assert_eq!(fast.query().interval, IntervalType::Daily);
        assert!(matches!(
            m.finish_load(fast, Ok(series())),
            LoadOutcome::Rendered { .. }
        ));
        assert_eq!(m.finish_load(slow, Ok(vec![])), LoadOutcome::Stale);
        assert_eq!(m.backend().current().unwrap().1.data.labels.len(), 2);
    }

    #[test]
    fn response_after_close_is_dropped() {
        let mut m = manager();
        m.toggle(A);
        let ticket = m.begin_load(A).unwrap();
        m.toggle(A);
        assert_eq!(m.finish_load(ticket, Ok(series())), LoadOutcome::Stale);
        assert_eq!(m.backend().live_count(), 0);
    }

    #[test]
    fn selection_is_remembered_per_listing() {
        let mut m = manager();
        m.set_interval(A, IntervalType::Weekly);
        m.set_days(B, 90);

        assert_eq!(m.selection(A).interval, IntervalType::Weekly);
        assert_eq!(m.selection(A).days, 7);
        assert_eq!(m.selection(B).interval, IntervalType::Hourly);
        assert_eq!(m.selection(B).days, 90);

        m.toggle(A);
        let query = *m.begin_load(A).unwrap().query();
        assert_eq!(query, ViewsQuery::new(A, IntervalType::Weekly, 7));
    }

    #[test]
    fn teardown_releases_the_chart() {
        let mut m = manager();
        open_and_draw(&mut m, A);
        m.teardown();
        assert_eq!(m.backend().live_count(), 0);
        assert_eq!(m.open_listing(), None);
    }
}
