//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for secondary labels.
    pub const LABEL: Color32 = Color32::GRAY;
    /// Emphasized color for the title and active states.
    pub const ACTIVE: Color32 = Color32::from_rgb(100, 180, 255);
    /// Success/positive indicator.
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    /// User-visible error text.
    pub const ERROR: Color32 = Color32::from_rgb(255, 80, 80);
}

/// Colors for playback state indicators.
pub mod playback {
    use super::Color32;

    pub const PLAYING: Color32 = Color32::from_rgb(100, 200, 100);
    pub const PAUSED: Color32 = Color32::from_rgb(255, 180, 50);
    pub const STOPPED: Color32 = Color32::from_rgb(120, 120, 130);
}

/// Canvas colors.
pub mod canvas {
    use super::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
}
