//! Shared UI crate for the listing statistics widget. Views, state and the
//! platform seams live here; the `web` crate only mounts them.

pub mod config;
pub mod core;
pub mod i18n;
pub mod stats;
pub mod theme;
pub mod views;

pub mod components {
    // Localized page header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}
