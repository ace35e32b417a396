// ABOUTME: Shared color palette for the TUI, warm fashion-forward tones

use ratatui::style::Color;

pub const CORAL: Color = Color::Rgb(255, 90, 57);
pub const CORAL_DIM: Color = Color::Rgb(255, 205, 196);
pub const AMBER: Color = Color::Rgb(249, 115, 22);
pub const CREAM_BG: Color = Color::Rgb(30, 24, 20);
pub const PANEL_BG: Color = Color::Rgb(38, 30, 26);
pub const SOFT_WHITE: Color = Color::Rgb(235, 228, 220);
pub const MUTED_GRAY: Color = Color::Rgb(140, 130, 122);
pub const SUBDUED_BORDER: Color = Color::Rgb(70, 58, 50);
pub const SELECTION_GREEN: Color = Color::Rgb(76, 175, 80);
pub const ERROR_RED: Color = Color::Rgb(220, 80, 80);
pub const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);
