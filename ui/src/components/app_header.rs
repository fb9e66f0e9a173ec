use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::i18n;
use crate::t;
use crate::theme::ThemeToggle;

/// Page header: brand, locale switcher and the theme switch.
///
/// The locale switcher only shows when more than one translation is embedded.
/// If the platform provides a `Signal<String>` language code via context, it is
/// updated on change so the rest of the tree re-renders with the new strings.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Re-render on global language changes.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, %err, "unsupported language"),
        }
    };

    rsx! {
        header { id: "app-header", class: "app-header",
            div { style: "display:none", "{lang_marker}" }
            div { class: "app-header__inner",
                span { class: "app-header__brand", {t!("brand-title")} }

                div { class: "app-header__actions",
                    if show_switcher {
                        div { class: "app-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("header-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                for code in langs() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}
