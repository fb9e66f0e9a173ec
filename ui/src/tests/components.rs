//! Server-side renders of components that share state through context.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::ListingId;
use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;

use crate::stats::{StatSummaryItem, SummaryStat};
use crate::theme::{Theme, ThemeToggle};

type ThemeSlot = Rc<RefCell<Option<Signal<Theme>>>>;

#[component]
fn TwoToggles(slot: ThemeSlot) -> Element {
    let theme = use_context_provider(|| Signal::new(Theme::Light));
    slot.borrow_mut().replace(theme);

    rsx! {
        header { ThemeToggle {} }
        footer { ThemeToggle {} }
    }
}

#[component]
fn SingleItem(stat: SummaryStat) -> Element {
    rsx! {
        StatSummaryItem { listing_id: ListingId(3), stat }
    }
}

/// Inputs rendered with `checked` set, however the renderer spells a true flag.
fn checked_inputs(html: &str) -> usize {
    html.matches("checked").count()
        - html.matches("checked=false").count()
        - html.matches("checked=\"false\"").count()
}

fn render_item(monthly: Option<u64>) -> String {
    let stat = SummaryStat {
        kind: "views".to_string(),
        value: 12,
        monthly,
    };
    let mut dom = VirtualDom::new_with_props(SingleItem, SingleItemProps::builder().stat(stat).build());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[tokio::test]
async fn every_toggle_follows_the_shared_theme() {
    let slot = ThemeSlot::default();
    let props = TwoTogglesProps::builder().slot(slot.clone()).build();
    let mut dom = VirtualDom::new_with_props(TwoToggles, props);
    dom.rebuild_in_place();
    assert_eq!(checked_inputs(&dioxus_ssr::render(&dom)), 0);

    let mut theme = (*slot.borrow()).expect("theme signal provided");
    dom.in_runtime(|| theme.set(Theme::from_checked(true)));
    tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work())
        .await
        .expect("toggles scheduled for re-render");
    dom.render_immediate(&mut NoOpMutations);

    assert_eq!(checked_inputs(&dioxus_ssr::render(&dom)), 2);
}

#[test]
fn item_without_monthly_figure_has_no_preview() {
    let html = render_item(None);
    assert!(html.contains("listing-small-card-stat-body-item"));
    assert!(!html.contains("monthly-views-3"));
}

#[test]
fn item_with_monthly_figure_starts_hidden() {
    let html = render_item(Some(30));
    assert!(html.contains("monthly-views-3"));
    assert!(html.contains("display: none"));
    assert!(!html.contains("listing-small-card-stat-preview active"));
}
