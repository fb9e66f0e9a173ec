//! Platform glue: document root attributes, the OS colour-scheme preference, the
//! page origin and JSON blocks embedded by the host page.
//!
//! Only the browser build talks to the DOM; native builds get inert fallbacks so the
//! rest of the crate (and its tests) stays platform-agnostic.

#[cfg(target_arch = "wasm32")]
use tracing::warn;

/// Set an attribute on `<html>` (e.g. `data-theme`).
#[cfg(target_arch = "wasm32")]
pub fn set_root_attribute(name: &str, value: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(err) = root.set_attribute(name, value) {
                warn!(name, value, ?err, "failed to set root attribute");
            }
        }
        None => warn!(name, "document root unavailable"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_root_attribute(name: &str, value: &str) {
    tracing::debug!(name, value, "no document root outside the browser");
}

/// Whether the OS reports `prefers-color-scheme: dark`.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// `scheme://host[:port]` of the current page.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Text content of an element the host page rendered (e.g. a
/// `<script type="application/json">` data block).
pub fn embedded_text(element_id: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|el| el.text_content())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
        None
    }
}
