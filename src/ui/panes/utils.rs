//! Shared utility functions for pane rendering
//!
//! All functions in this module are `pub(super)`, making them accessible only
//! within the panes module.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style
pub(super) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// `label: value` line with a styled label
pub(super) fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", label),
            Style::default().fg(DEFAULT_THEME.heading),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// A labelled row of cells, e.g. `counts  [0] [3] [2]`, with one cell highlighted
pub(super) fn cell_row(label: &str, cells: &[String], highlight: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<10}", label),
        Style::default().fg(DEFAULT_THEME.heading),
    )];

    if cells.is_empty() {
        spans.push(Span::styled("—", Style::default().fg(DEFAULT_THEME.comment)));
        return Line::from(spans);
    }

    for (idx, cell) in cells.iter().enumerate() {
        let style = if Some(idx) == highlight {
            Style::default()
                .fg(DEFAULT_THEME.bar_comparing)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!("{:>3}", cell), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Index header matching [`cell_row`] column widths
pub(super) fn index_row(len: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{:<10}", ""))];
    for idx in 0..len {
        spans.push(Span::styled(
            format!("{:>3} ", idx),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    Line::from(spans)
}

/// Format an optional index pair like `(2, 5)`
pub(super) fn format_pair(pair: Option<(usize, usize)>) -> String {
    match pair {
        Some((a, b)) => format!("({}, {})", a, b),
        None => "—".to_string(),
    }
}

/// Format a value list like `[1, 2, 3]`
pub(super) fn format_values(values: &[i64]) -> String {
    format!("{:?}", values)
}
