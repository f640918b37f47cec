//! Detail pane: algorithm-specific state of the current snapshot
//!
//! Everything a learner needs beyond the bars: the runs being merged, the
//! pivot and partition range, the gap, the heap boundary, and Counting Sort's
//! count and output arrays.

use super::utils::{cell_row, field_line, format_pair, format_values, index_row, pane_block};
use crate::trace::{Detail, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
};

/// Render the detail pane
pub fn render_detail_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" State ".to_string(), is_focused);

    let lines = match snapshot {
        Some(snapshot) => detail_lines(snapshot),
        None => vec![Line::styled(
            "(no snapshot)",
            Style::default().fg(DEFAULT_THEME.comment),
        )],
    };

    // Clamp scroll offset only if content exceeds visible area
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(*scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Build the lines describing `snapshot`'s algorithm state
pub(crate) fn detail_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = vec![field_line("array", format_values(&snapshot.array))];

    match &snapshot.detail {
        Detail::Bubble(step) => {
            lines.push(field_line("comparing", format_pair(step.comparing)));
            lines.push(field_line("swapped", yes_no(step.swapped)));
            lines.push(field_line(
                "sorted",
                format!("a[{}..]", step.sorted_from.min(snapshot.array.len())),
            ));
        }
        Detail::Selection(step) => {
            lines.push(field_line("position", format_index(step.position)));
            lines.push(field_line("minimum", format_index(step.min_index)));
            lines.push(field_line("comparing", format_pair(step.comparing)));
            lines.push(field_line("sorted", format!("a[..{}]", step.sorted_upto)));
        }
        Detail::Insertion(step) => {
            lines.push(field_line("comparing", format_pair(step.comparing)));
            lines.push(field_line("shifted", yes_no(step.shifted)));
            lines.push(field_line("inserted", format_index(step.inserted)));
        }
        Detail::Shell(step) => {
            lines.push(field_line("gap", step.gap.to_string()));
            lines.push(field_line("comparing", format_pair(step.comparing)));
            lines.push(field_line("shifted", yes_no(step.shifted)));
            lines.push(field_line("placed", format_index(step.placed)));
        }
        Detail::Merge(step) => {
            lines.push(field_line("phase", format!("{:?}", step.phase)));
            lines.push(field_line(
                "range",
                match step.range {
                    Some((start, end)) => format!("a[{}..{}]", start, end),
                    None => "—".to_string(),
                },
            ));
            let (left_head, right_head) = match step.comparing {
                Some((i, j)) => (Some(i), Some(j)),
                None => (None, None),
            };
            lines.push(cell_row("left", &cells(&step.left), left_head));
            lines.push(cell_row("right", &cells(&step.right), right_head));
            lines.push(cell_row("merged", &cells(&step.merged), None));
        }
        Detail::Quick(step) => {
            lines.push(field_line("phase", format!("{:?}", step.phase)));
            lines.push(field_line(
                "range",
                match step.range {
                    Some((low, high)) => format!("a[{}..={}]", low, high),
                    None => "—".to_string(),
                },
            ));
            lines.push(field_line(
                "pivot",
                match (step.pivot, step.pivot_index) {
                    (Some(pivot), Some(index)) => format!("{} at a[{}]", pivot, index),
                    (Some(pivot), None) => pivot.to_string(),
                    _ => "—".to_string(),
                },
            ));
            lines.push(field_line("comparing", format_pair(step.comparing)));
        }
        Detail::Heap(step) => {
            lines.push(field_line("phase", format!("{:?}", step.phase)));
            lines.push(field_line(
                "heap",
                format!("a[..{}] ({} elements)", step.heap_size, step.heap_size),
            ));
            lines.push(field_line("comparing", format_pair(step.comparing)));
            lines.push(field_line("swapping", format_pair(step.swapping)));
            lines.push(field_line(
                "extracting",
                step.extracting
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "—".to_string()),
            ));
        }
        Detail::Counting(step) => {
            lines.push(field_line("phase", format!("{:?}", step.phase)));
            lines.push(index_row(step.counts.len()));
            let counts: Vec<String> = step.counts.iter().map(|c| c.to_string()).collect();
            lines.push(cell_row("counts", &counts, step.count_index));
            lines.push(Line::raw(""));
            lines.push(index_row(step.output.len()));
            let output: Vec<String> = step
                .output
                .iter()
                .map(|slot| match slot {
                    Some(value) => value.to_string(),
                    None => "·".to_string(),
                })
                .collect();
            lines.push(cell_row("output", &output, step.output_index));
        }
    }

    lines
}

fn cells(values: &[i64]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn format_index(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("a[{}]", index),
        None => "—".to_string(),
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
