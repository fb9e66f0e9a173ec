use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::{platform, storage};
use crate::i18n;
use crate::t;

use super::{apply_theme, initial_theme, Theme, THEME_ATTRIBUTE};

/// Resolve the startup theme, share it with every [`ThemeToggle`] below and keep the
/// document attribute and persisted value in step with it.
pub fn use_theme_provider() -> Signal<Theme> {
    let theme = use_signal(startup_theme);
    use_context_provider(|| theme);

    use_effect(move || commit_theme(theme()));

    theme
}

fn startup_theme() -> Theme {
    let prefers_dark = platform::prefers_dark_scheme();
    match storage::platform_store() {
        Ok(store) => initial_theme(&store, prefers_dark),
        Err(err) => {
            warn!(%err, "settings storage unavailable; using OS colour scheme");
            Theme::from_checked(prefers_dark)
        }
    }
}

fn commit_theme(theme: Theme) {
    debug!(theme = theme.as_str(), "applying theme");
    match storage::platform_store() {
        Ok(store) => {
            if let Err(err) = apply_theme(&store, theme) {
                warn!(%err, "failed to persist theme");
            }
        }
        Err(err) => {
            platform::set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
            warn!(%err, "theme applied without persistence");
        }
    }
}

/// Checkbox switch bound to the shared theme. Any number may be mounted; they all
/// render from the same signal.
#[component]
pub fn ThemeToggle() -> Element {
    let _lang = i18n::use_language();
    let mut theme = use_context::<Signal<Theme>>();
    let checked = theme().is_checked();

    rsx! {
        label { class: "theme-switch",
            input {
                r#type: "checkbox",
                class: "theme-toggle",
                checked,
                onchange: move |evt: FormEvent| theme.set(Theme::from_checked(evt.checked())),
            }
            span { class: "theme-switch__slider", aria_hidden: "true" }
            span { class: "visually-hidden", {t!("theme-toggle-label")} }
        }
    }
}
