use crate::render::{render_controls, render_row, render_timeline};

use voicechat_core::{ClipRef, MessageRow, PlaybackLabel, RecordLabel};

fn rows() -> Vec<MessageRow> {
    vec![
        MessageRow::Text {
            position: 1,
            content: "hi".to_string(),
        },
        MessageRow::Voice {
            position: 2,
            clip: ClipRef::new("clip-1"),
            label: PlaybackLabel::PauseAudio,
            duration: "00:05".to_string(),
        },
    ]
}

/// WHAT: Voice rows show their label and duration
/// WHY: Each bubble carries its own control and clip length
#[test]
fn given_voice_row_when_rendering_then_label_and_duration_shown() {
    // Given: A playing voice row
    let rows = rows();

    // When: Rendering it
    let line = render_row(&rows[1]);

    // Then: Position, label and duration
    assert_eq!(line, "[2] Pause Audio 00:05");
}

/// WHAT: Newest-first rendering reverses insertion order
/// WHY: The conversation shows the latest message at the top
#[test]
fn given_rows_when_rendering_newest_first_then_reversed() {
    // Given: Two rows in insertion order
    let rows = rows();

    // When: Rendering both orders
    let newest_first = render_timeline(&rows, true);
    let oldest_first = render_timeline(&rows, false);

    // Then: Orders differ as configured
    assert_eq!(newest_first, vec!["[2] Pause Audio 00:05", "[1] hi"]);
    assert_eq!(oldest_first, vec!["[1] hi", "[2] Pause Audio 00:05"]);
}

/// WHAT: An empty timeline renders a placeholder
/// WHY: Listing an empty conversation still prints something
#[test]
fn given_no_rows_when_rendering_then_placeholder() {
    // Given/When: Rendering nothing
    let lines = render_timeline(&[], true);

    // Then: A single placeholder line
    assert_eq!(lines, vec!["(no messages)"]);
}

/// WHAT: The control line follows the record label
/// WHY: The record control reads Start or Stop by phase
#[test]
fn given_record_label_when_rendering_controls_then_label_shown() {
    // Given/When/Then: Both labels
    assert_eq!(
        render_controls(RecordLabel::StartRecording),
        "[r] Start Recording"
    );
    assert_eq!(
        render_controls(RecordLabel::StopRecording),
        "[r] Stop Recording"
    );
}
