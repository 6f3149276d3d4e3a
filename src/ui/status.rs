use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Mode, Model};

/// Render the bottom status row.
///
/// Command-line entry takes priority, then a transient status message,
/// then the normal file/mode/position summary.
pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let text = if let Some(cmd) = &model.command_line {
        format!(":{cmd}")
    } else if let Some(msg) = &model.status {
        msg.clone()
    } else {
        let name = model.file_path.as_ref().map_or_else(
            || "[No Name]".to_string(),
            |p| p.display().to_string(),
        );
        let modified = if model.buffer.is_dirty() { " [+]" } else { "" };
        let mode = match model.mode {
            Mode::Insert => "  -- INSERT --",
            Mode::Normal => "",
        };
        format!(
            " {}{}  Ln {}, Col {}{}",
            name,
            modified,
            model.buffer.cursor_line_index() + 1,
            model.buffer.cursor_visual_col() + 1,
            mode
        )
    };

    let bar = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}
