//! Array pane: the working array drawn as a bar chart
//!
//! Bar heights are shifted so the smallest value still gets a visible bar,
//! which keeps negative inputs drawable. Each bar is colored by the
//! [`Mark`](crate::trace::Mark) of its index and labelled with the real value.

use super::utils::pane_block;
use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

/// Data needed to render the array pane
pub struct ArrayRenderData<'a> {
    pub title: String,
    pub snapshot: Option<&'a Snapshot>,
    pub caption: String,
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: &ArrayRenderData, is_focused: bool) {
    let block = pane_block(data.title.clone(), is_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let caption = Paragraph::new(Line::from(data.caption.clone())).style(
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::ITALIC),
    );
    frame.render_widget(caption, rows[0]);

    let Some(snapshot) = data.snapshot else {
        return;
    };
    if snapshot.array.is_empty() {
        let empty = Paragraph::new("(empty array)").style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(empty, rows[1]);
        return;
    }

    let heights = bar_heights(&snapshot.array);
    let marks = snapshot.marks();
    let bars: Vec<Bar> = snapshot
        .array
        .iter()
        .zip(heights)
        .zip(marks)
        .enumerate()
        .map(|(idx, ((value, height), mark))| {
            let color = DEFAULT_THEME.mark_color(mark);
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .label(Line::from(idx.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let bar_width = bar_width(rows[1].width, bars.len());
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, rows[1]);
}

/// Heights shifted so the minimum value maps to 1
pub(crate) fn bar_heights(values: &[i64]) -> Vec<u64> {
    let min = values.iter().copied().min().unwrap_or_default() as i128;
    values
        .iter()
        .map(|&v| {
            let shifted = v as i128 - min + 1;
            u64::try_from(shifted).unwrap_or(u64::MAX)
        })
        .collect()
}

/// Widest bar that still fits `count` bars (with 1-column gaps) into `width`
fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let gaps = count.saturating_sub(1);
    (width.saturating_sub(gaps) / count).clamp(1, 7)
}
