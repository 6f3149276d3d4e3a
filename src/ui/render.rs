use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::status;
use super::viewport::Viewport;

/// Render the complete UI: buffer rows, trailing tildes, status bar.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    // The frame is the source of truth for terminal size.
    model
        .viewport
        .resize(area.width, area.height.saturating_sub(1));
    model.sync_viewport();

    let text_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    render_buffer(model, frame, text_area);
    status::render_status_bar(model, frame, status_area);
}

fn render_buffer(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.buffer;
    let width = area.width.max(1) as usize;
    let cursor_line = buf.cursor_line_index();
    let cursor_col = buf.cursor_visual_col();
    let vp = &model.viewport;

    let mut rows: Vec<Line> = Vec::with_capacity(area.height as usize);
    let mut line_idx = vp.top_line();
    let mut skip = vp.top_row();
    'lines: while rows.len() < area.height as usize {
        let Some(text) = buf.line(line_idx) else {
            break;
        };
        let expanded: Vec<char> = expand_tabs(text, buf.tab_width()).chars().collect();
        let wrap_rows = Viewport::rows_in_line(area.width, expanded.len());
        for row in skip..wrap_rows {
            if rows.len() == area.height as usize {
                break 'lines;
            }
            let cells = &expanded[row * width..((row + 1) * width).min(expanded.len())];
            if line_idx == cursor_line && row == cursor_col / width {
                rows.push(cursor_row(cells, cursor_col % width));
            } else {
                rows.push(Line::raw(cells.iter().collect::<String>()));
            }
        }
        skip = 0;
        line_idx += 1;
    }
    while rows.len() < area.height as usize {
        rows.push(Line::styled("~", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(rows), area);
}

/// Build a row with the cursor cell drawn reversed.
fn cursor_row(cells: &[char], col: usize) -> Line<'static> {
    let before: String = cells.iter().take(col).collect();
    let at: String = cells.get(col).map_or_else(|| " ".to_string(), char::to_string);
    let after: String = cells.iter().skip(col + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::raw(before));
    }
    spans.push(Span::styled(
        at,
        Style::default().bg(Color::White).fg(Color::Black),
    ));
    if !after.is_empty() {
        spans.push(Span::raw(after));
    }
    Line::from(spans)
}

/// Expand tabs to spaces against the configured tab stops.
fn expand_tabs(text: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut col = 0;
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - col % tab_width;
            for _ in 0..pad {
                out.push(' ');
            }
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}
