//! Input line shown while editing the array

use super::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the input editor with a block cursor after the text
pub fn render_input_pane(frame: &mut Frame, area: Rect, buffer: &str) {
    let block = pane_block(
        " Input (comma-separated, ↵ apply, esc cancel) ".to_string(),
        true,
    );

    let line = Line::from(vec![
        Span::styled("› ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            " ",
            Style::default()
                .bg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
