use crate::trace::Mark;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heading: Color,
    pub bar_idle: Color,
    pub bar_comparing: Color,
    pub bar_swapped: Color,
    pub bar_pivot: Color,
    pub bar_sorted: Color,
    pub bar_inactive: Color,
}

impl Theme {
    /// Bar color for a highlight mark
    pub fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::Idle => self.bar_idle,
            Mark::Comparing => self.bar_comparing,
            Mark::Swapped => self.bar_swapped,
            Mark::Pivot => self.bar_pivot,
            Mark::Sorted => self.bar_sorted,
            Mark::Inactive => self.bar_inactive,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    heading: Color::Rgb(148, 226, 213),        // Cyan/teal for labels
    bar_idle: Color::Rgb(137, 180, 250),       // Blue
    bar_comparing: Color::Rgb(249, 226, 175),  // Yellow
    bar_swapped: Color::Rgb(243, 139, 168),    // Red
    bar_pivot: Color::Rgb(245, 194, 231),      // Pink
    bar_sorted: Color::Rgb(166, 227, 161),     // Green
    bar_inactive: Color::Rgb(69, 71, 90),      // Dim grey
};
