//! Algorithm info pane: catalog metadata and the algorithm list

use super::utils::{field_line, pane_block};
use crate::catalog;
use crate::sorts::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the info pane for the active algorithm
pub fn render_info_pane(frame: &mut Frame, area: Rect, active: Algorithm, is_focused: bool) {
    let block = pane_block(" Algorithm ".to_string(), is_focused);
    let info = catalog::info(active);

    let mut lines = vec![
        Line::from(Span::styled(
            info.name,
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        field_line("category", info.category.to_string()),
        field_line("best", info.best_time.to_string()),
        field_line("average", info.average_time.to_string()),
        field_line("worst", info.worst_time.to_string()),
        field_line("space", info.space.to_string()),
        field_line("stable", if info.stable { "yes" } else { "no" }.to_string()),
        field_line("in place", if info.in_place { "yes" } else { "no" }.to_string()),
        Line::raw(""),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::raw(""),
    ];

    // Algorithm list, Tab cycles through it
    for entry in catalog::all() {
        let is_active = entry.algorithm == active;
        let (marker, style) = if is_active {
            (
                "▸ ",
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(DEFAULT_THEME.comment))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(entry.name, style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
