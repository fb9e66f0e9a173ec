//! Widget configuration, provided to the component tree through context.

use api::{IntervalType, DEFAULT_DAYS};

/// Default delay before the preview's `active` class lands, so CSS transitions see
/// the display change first.
pub const PREVIEW_SETTLE_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Base URL of the statistics backend. `None` means "same origin as the page".
    pub api_base: Option<String>,
    pub default_interval: IntervalType,
    pub default_days: u32,
    /// Choices offered by the day-range select.
    pub day_options: Vec<u32>,
    pub preview_settle_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("LISTING_STATS_API_BASE").map(str::to_string),
            default_interval: IntervalType::Hourly,
            default_days: DEFAULT_DAYS,
            day_options: vec![1, 7, 30, 90],
            preview_settle_ms: PREVIEW_SETTLE_MS,
        }
    }
}

impl WidgetConfig {
    /// Day options with the default guaranteed to be selectable.
    pub fn day_choices(&self) -> Vec<u32> {
        let mut days = self.day_options.clone();
        if !days.contains(&self.default_days) {
            days.push(self.default_days);
        }
        days.sort_unstable();
        days.dedup();
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_days_is_always_offered() {
        let config = WidgetConfig {
            default_days: 14,
            ..WidgetConfig::default()
        };
        assert_eq!(config.day_choices(), vec![1, 7, 14, 30, 90]);
    }
}
