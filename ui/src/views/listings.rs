use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::platform;
use crate::i18n;
use crate::stats::{parse_summaries, ListingSummary, StatsBoard, SUMMARIES_ELEMENT_ID};
use crate::t;

/// "My listings" page: the summaries the host page embedded, each with its
/// statistics panel.
#[component]
pub fn Listings() -> Element {
    let _lang = i18n::use_language();
    let listings = use_hook(load_summaries);

    rsx! {
        section { class: "page page--listings",
            h1 { class: "page__title", {t!("page-listings-title")} }
            p { class: "page__intro", {t!("page-listings-intro")} }
            StatsBoard { listings }
        }
    }
}

fn load_summaries() -> Vec<ListingSummary> {
    let Some(raw) = platform::embedded_text(SUMMARIES_ELEMENT_ID) else {
        info!(element = SUMMARIES_ELEMENT_ID, "no embedded listing summaries");
        return Vec::new();
    };
    parse_summaries(&raw).unwrap_or_else(|err| {
        warn!(%err, "embedded listing summaries are malformed");
        Vec::new()
    })
}
