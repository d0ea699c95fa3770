//! Color palette for the dashboard.

use egui::Color32;

/// Colors used across the dashboard views.
#[derive(Debug, Clone)]
pub struct SnapshotTheme {
    /// Application background color
    pub app_background: Color32,
    /// Day card / panel background color
    pub card_background: Color32,
    /// Day card border color
    pub card_border: Color32,
    /// Border color for an expanded day card
    pub card_border_expanded: Color32,
    /// Primary text color (headings, day badges)
    pub text_primary: Color32,
    /// Secondary text color (details, unit labels)
    pub text_secondary: Color32,
    /// Accent color (countdown digits, chevrons)
    pub accent: Color32,
    /// Welcome banner background
    pub banner_background: Color32,
    /// Welcome banner border
    pub banner_border: Color32,
    /// Easter egg toast background
    pub toast_background: Color32,
}

impl SnapshotTheme {
    pub fn dark() -> Self {
        Self {
            app_background: Color32::from_rgb(18, 21, 28),
            card_background: Color32::from_rgb(28, 33, 44),
            card_border: Color32::from_rgb(48, 55, 70),
            card_border_expanded: Color32::from_rgb(86, 124, 214),
            text_primary: Color32::from_rgb(228, 232, 240),
            text_secondary: Color32::from_rgb(148, 156, 172),
            accent: Color32::from_rgb(120, 162, 255),
            banner_background: Color32::from_rgb(32, 42, 60),
            banner_border: Color32::from_rgb(86, 124, 214),
            toast_background: Color32::from_rgb(52, 40, 72),
        }
    }
}
