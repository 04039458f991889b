//! Plain-text rendering of the chat surface.

use voicechat_core::{MessageRow, RecordLabel};

/// Command summary printed at startup and on `help`.
pub const HELP: &str = "\
Commands:
  r, record      start or stop recording
  p, play <n>    play or pause the voice message listed as [n]
  l, list        show the conversation
  h, help        show this summary
  q, quit        exit
Any other line is sent as a text message.";

/// One line for a timeline row.
pub fn render_row(row: &MessageRow) -> String {
    match row {
        MessageRow::Text { position, content } => format!("[{position}] {content}"),
        MessageRow::Voice {
            position,
            label,
            duration,
            ..
        } => format!("[{position}] {label} {duration}"),
    }
}

/// Timeline lines in display order.
pub fn render_timeline(rows: &[MessageRow], newest_first: bool) -> Vec<String> {
    if rows.is_empty() {
        return vec!["(no messages)".to_string()];
    }

    let lines = rows.iter().map(render_row);
    if newest_first {
        lines.rev().collect()
    } else {
        lines.collect()
    }
}

/// Prompt line naming the record control.
pub fn render_controls(label: RecordLabel) -> String {
    format!("[r] {label}")
}
