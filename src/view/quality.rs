//! Quality selector
//!
//! Selecting an option updates the button label to the uppercased
//! identifier, marks the option active, and closes the dropdown. Actual
//! stream switching is not wired up; the requested quality is only
//! logged. A click anywhere outside the selector region closes the
//! dropdown.

use crate::view::ControlSurface;
use log::info;

/// Tracks the selected quality option
#[derive(Debug, Default)]
pub struct QualitySelector {
    active: Option<String>,
}

impl QualitySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a quality selection to the surface
    pub fn select(&mut self, quality: &str, surface: &mut dyn ControlSurface) {
        surface.set_quality_label(&quality.to_uppercase());
        surface.set_active_quality(quality);
        surface.set_quality_dropdown_open(false);

        self.active = Some(quality.to_string());

        // No stream switching yet; record the request only.
        info!("Quality changed to: {}", quality);
    }

    /// Close the dropdown without changing the selection
    pub fn close(&self, surface: &mut dyn ControlSurface) {
        surface.set_quality_dropdown_open(false);
    }

    /// Currently selected quality, if any
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::RecordingSurface;

    #[test]
    fn test_select_updates_label_and_active_option() {
        let mut selector = QualitySelector::new();
        let mut surface = RecordingSurface::default();

        selector.select("720p", &mut surface);

        assert_eq!(surface.quality_label.as_deref(), Some("720P"));
        assert_eq!(surface.active_quality.as_deref(), Some("720p"));
        assert!(!surface.quality_dropdown_open);
        assert_eq!(selector.active(), Some("720p"));
    }

    #[test]
    fn test_reselect_replaces_active_option() {
        let mut selector = QualitySelector::new();
        let mut surface = RecordingSurface::default();

        selector.select("480p", &mut surface);
        selector.select("1080p", &mut surface);

        assert_eq!(surface.quality_label.as_deref(), Some("1080P"));
        assert_eq!(surface.active_quality.as_deref(), Some("1080p"));
        assert_eq!(selector.active(), Some("1080p"));
    }

    #[test]
    fn test_outside_click_only_closes_dropdown() {
        let selector = QualitySelector::new();
        let mut surface = RecordingSurface {
            quality_dropdown_open: true,
            ..Default::default()
        };

        selector.close(&mut surface);

        assert!(!surface.quality_dropdown_open);
        assert_eq!(surface.quality_label, None);
    }
}
