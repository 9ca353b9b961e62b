//! Minimal dark color theme.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Healthy/positive elements - bright green
pub const COLOR_HEALTHY: Color = Color::LightGreen;

/// Warning elements - yellow
pub const COLOR_WARN: Color = Color::Yellow;

/// Error/severe elements - red
pub const COLOR_ERROR: Color = Color::Red;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row highlight
pub const COLOR_SELECTED: Color = Color::Cyan;
