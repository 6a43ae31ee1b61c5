use crate::step::VisualState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub bar: Color,       // Steel blue, unhighlighted bars
    pub bar_range: Color, // Light cyan band for merge windows and partitions
    pub bar_pivot: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    function: Color::Rgb(249, 226, 175),       // Yellow for algorithm names
    bar: Color::Rgb(70, 130, 180),
    bar_range: Color::Rgb(172, 231, 250),
    bar_pivot: Color::Rgb(245, 245, 245),
};

impl Theme {
    /// Bar color for a visual state
    pub fn state_color(&self, state: VisualState) -> Color {
        match state {
            VisualState::Default => self.bar,
            VisualState::Compare => self.error,
            VisualState::Swap | VisualState::Placed => self.success,
            VisualState::Pivot => self.bar_pivot,
            VisualState::Range => self.bar_range,
        }
    }
}
