//! Hover preview of a summary item's monthly figure.

/// Visibility of one `monthly-<type>-<id>` preview.
///
/// `enter`/`leave` flip the display immediately; `settle` runs one short tick later
/// and adds the `active` class so the CSS transition observes the display change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub displayed: bool,
    pub active: bool,
}

impl PreviewState {
    pub fn enter(&mut self) {
        self.displayed = true;
    }

    pub fn leave(&mut self) {
        self.displayed = false;
    }

    pub fn settle(&mut self) {
        self.active = true;
    }

    pub fn display(&self) -> &'static str {
        if self.displayed {
            "block"
        } else {
            "none"
        }
    }

    pub fn class(&self) -> &'static str {
        if self.active {
            "listing-small-card-stat-preview active"
        } else {
            "listing-small-card-stat-preview"
        }
    }
}
