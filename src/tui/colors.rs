//! Color constants for the terminal user interface.

use ratatui::style::Color;

// These support the journey-themed views of the UI,
// reflecting completion state and urgency.

/// Used for completed items
pub const DARK_GREEN: Color = Color::Rgb(0, 80, 0);
/// Used for in-progress items
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for overdue deadlines
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
/// Used for phase headers
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);
