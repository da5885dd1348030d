//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 232, 220);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 70, 78);

// Markers
pub const LAST_MOVE_FILL: Color32 = Color32::from_rgb(250, 236, 180);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

/// Configured `[r, g, b]` with an alpha
pub fn mark_color([r, g, b]: [u8; 3], alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_ALERT: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MARK_SIZE_RATIO: f32 = 0.62;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const WIN_LINE_WIDTH: f32 = 4.0;
