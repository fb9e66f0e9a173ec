use api::{IntervalType, ListingId};
use dioxus::prelude::*;
use tracing::warn;

use crate::config::{WidgetConfig, PREVIEW_SETTLE_MS};
use crate::core::timing;
use crate::i18n;
use crate::t;

use super::chart::DefaultChartBackend;
use super::panel::{PanelManager, PanelToggle, Selection};
use super::preview::PreviewState;
use super::source::{HttpStatsSource, StatsError};
use super::summary::{ListingSummary, SummaryStat};
use super::{canvas_element_id, panel_element_id, preview_element_id};

type BoardManager = PanelManager<DefaultChartBackend>;

/// State shared by every card of one board: a single panel manager means a single
/// open panel and a single live chart across all listings.
#[derive(Clone)]
struct BoardContext {
    config: WidgetConfig,
    source: Option<HttpStatsSource>,
    manager: Signal<BoardManager>,
}

#[component]
pub fn StatsBoard(listings: Vec<ListingSummary>) -> Element {
    let _lang = i18n::use_language();
    let config = try_use_context::<WidgetConfig>().unwrap_or_default();
    let defaults = Selection {
        interval: config.default_interval,
        days: config.default_days,
    };
    let manager = use_signal(move || {
        BoardManager::new(
            DefaultChartBackend::default(),
            defaults,
            t!("chart-views-label"),
        )
    });

    use_context_provider(|| {
        let source = HttpStatsSource::from_config(&config)
            .map_err(|err| warn!(%err, "view statistics unavailable"))
            .ok();
        BoardContext {
            config: config.clone(),
            source,
            manager,
        }
    });

    use_drop(move || {
        let mut manager = manager;
        if let Ok(mut panels) = manager.try_write() {
            panels.teardown();
        };
    });

    rsx! {
        section { class: "listing-stats-board",
            if listings.is_empty() {
                p { class: "listing-stats-board__placeholder", {t!("board-empty")} }
            } else {
                for summary in listings.iter() {
                    ListingStatsCard { key: "{summary.id}", summary: summary.clone() }
                }
            }
        }
    }
}

#[component]
pub fn ListingStatsCard(summary: ListingSummary) -> Element {
    let listing_id = summary.id;

    rsx! {
        article { class: "listing-small-card",
            header { class: "listing-small-card__header",
                h3 { class: "listing-small-card__title", "{summary.title}" }
                StatsToggleButton { listing_id }
            }
            if !summary.stats.is_empty() {
                div { class: "listing-small-card-stat-body",
                    for stat in summary.stats.iter() {
                        StatSummaryItem { key: "{stat.kind}", listing_id, stat: stat.clone() }
                    }
                }
            }
            StatsPanelCard { listing_id }
        }
    }
}

/// A small statistic with an optional monthly preview shown while hovered.
/// Without a monthly figure there is no preview element and hovering does nothing.
#[component]
pub fn StatSummaryItem(listing_id: ListingId, stat: SummaryStat) -> Element {
    let settle_ms = try_use_context::<BoardContext>()
        .map(|board| board.config.preview_settle_ms)
        .unwrap_or(PREVIEW_SETTLE_MS);
    let _lang = i18n::use_language();
    let mut preview = use_signal(PreviewState::default);
    let has_preview = stat.monthly.is_some();
    let label = stat_label(&stat.kind);
    let state = preview();

    rsx! {
        div {
            id: "{stat.kind}",
            class: "listing-small-card-stat-body-item",
            "listingId": "{listing_id}",
            onmouseenter: move |_| {
                if !has_preview {
                    return;
                }
                preview.write().enter();
                spawn(settle_preview(preview, settle_ms));
            },
            onmouseleave: move |_| {
                if !has_preview {
                    return;
                }
                preview.write().leave();
                spawn(settle_preview(preview, settle_ms));
            },
            span { class: "listing-small-card-stat-label", "{label}" }
            strong { class: "listing-small-card-stat-value", "{stat.value}" }
            if let Some(monthly) = stat.monthly {
                p {
                    id: preview_element_id(&stat.kind, listing_id),
                    class: state.class(),
                    style: "display: {state.display()}",
                    {t!("stat-monthly", count = monthly)}
                }
            }
        }
    }
}

#[component]
pub fn StatsToggleButton(listing_id: ListingId) -> Element {
    let _lang = i18n::use_language();
    let board = use_context::<BoardContext>();
    let mut manager = board.manager;
    let source = board.source;
    let open = manager.read().is_open(listing_id);
    let class = if open {
        "stats-toggle stats-toggle--open"
    } else {
        "stats-toggle"
    };

    rsx! {
        button {
            r#type: "button",
            class,
            "listingId": "{listing_id}",
            aria_expanded: "{open}",
            aria_controls: panel_element_id(listing_id),
            onclick: move |_| {
                let outcome = manager.write().toggle(listing_id);
                if let PanelToggle::Opened(listing) = outcome {
                    spawn(load_chart(manager, source.clone(), listing));
                }
            },
            {t!("stats-toggle")}
        }
    }
}

/// The collapsible panel with the interval/day selects and the chart canvas.
#[component]
pub fn StatsPanelCard(listing_id: ListingId) -> Element {
    let _lang = i18n::use_language();
    let board = use_context::<BoardContext>();
    let mut manager = board.manager;
    let (open, selection) = {
        let panels = manager.read();
        (panels.is_open(listing_id), panels.selection(listing_id))
    };
    let display = if open { "block" } else { "none" };
    let day_choices = board.config.day_choices();
    let interval_source = board.source.clone();
    let days_source = board.source;

    rsx! {
        div {
            id: panel_element_id(listing_id),
            class: "stat-panel-card",
            style: "display: {display}",
            div { class: "stat-panel-card__controls",
                label { class: "stat-panel-card__field",
                    span { {t!("stats-interval-label")} }
                    select {
                        class: "interval",
                        value: selection.interval.as_param(),
                        onchange: move |evt: FormEvent| {
                            let Ok(interval) = evt.value().parse::<IntervalType>() else {
                                return;
                            };
                            manager.write().set_interval(listing_id, interval);
                            spawn(load_chart(manager, interval_source.clone(), listing_id));
                        },
                        for interval in IntervalType::ALL {
                            option {
                                key: "{interval}",
                                value: interval.as_param(),
                                selected: interval == selection.interval,
                                {interval_label(interval)}
                            }
                        }
                    }
                }
                label { class: "stat-panel-card__field",
                    span { {t!("stats-days-label")} }
                    select {
                        class: "days-select",
                        value: "{selection.days}",
                        onchange: move |evt: FormEvent| {
                            let Ok(days) = evt.value().parse::<u32>() else {
                                return;
                            };
                            manager.write().set_days(listing_id, days);
                            spawn(load_chart(manager, days_source.clone(), listing_id));
                        },
                        for days in day_choices {
                            option {
                                key: "{days}",
                                value: "{days}",
                                selected: days == selection.days,
                                {t!("stats-days-option", days = days)}
                            }
                        }
                    }
                }
            }
            canvas { id: canvas_element_id(listing_id), class: "stat-panel-card__chart" }
        }
    }
}

/// Fetch the open panel's series and hand it to the manager, which decides whether
/// it is still current.
async fn load_chart(
    mut manager: Signal<BoardManager>,
    source: Option<HttpStatsSource>,
    listing: ListingId,
) {
    let ticket = manager.write().begin_load(listing);
    let Some(ticket) = ticket else {
        return;
    };

    let result = match source {
        Some(source) => source.fetch_views(ticket.query()).await,
        None => Err(StatsError::NoBaseUrl),
    };
    let mut panels = manager.write();
    // Picks up a language switch made since the board mounted.
    panels.set_dataset_label(t!("chart-views-label"));
    panels.finish_load(ticket, result);
}

async fn settle_preview(mut preview: Signal<PreviewState>, delay_ms: u64) {
    timing::sleep_ms(delay_ms).await;
    preview.write().settle();
}

fn stat_label(kind: &str) -> String {
    match kind {
        "views" => t!("stat-views"),
        "favorites" => t!("stat-favorites"),
        "responses" => t!("stat-responses"),
        other => other.to_string(),
    }
}

fn interval_label(interval: IntervalType) -> String {
    match interval {
        IntervalType::FiveMinutes => t!("interval-five-minutes"),
        IntervalType::Hourly => t!("interval-hourly"),
        IntervalType::Daily => t!("interval-daily"),
        IntervalType::Weekly => t!("interval-weekly"),
    }
}
