use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::config::WidgetConfig;
use ui::theme::{use_theme_provider, ThemeToggle};
use ui::views::Listings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Listings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
// Chart.js is loaded as a page global; the chart backend binds to `Chart`.
const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppHeader writes the selected language here so the whole tree re-renders.
    let lang_code = use_signal(|| ui::i18n::current_language());
    use_context_provider(|| lang_code);
    use_context_provider(WidgetConfig::default);
    use_theme_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: CHART_JS_SRC }

        Router::<Route> {}
    }
}

/// Header, routed page, and a footer carrying a second theme switch.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        main { class: "app-main", Outlet::<Route> {} }
        footer { class: "app-footer", ThemeToggle {} }
    }
}
