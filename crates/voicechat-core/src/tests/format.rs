use crate::format_duration;

/// WHAT: Durations render as zero-padded MM:SS
/// WHY: Matches the readout on the record control and voice bubbles
#[test]
fn given_durations_when_formatting_then_zero_padded_minutes_and_seconds() {
    // Given/When/Then: Each duration renders as expected
    assert_eq!(format_duration(0), "00:00");
    assert_eq!(format_duration(5), "00:05");
    assert_eq!(format_duration(59), "00:59");
    assert_eq!(format_duration(65), "01:05");
    assert_eq!(format_duration(600), "10:00");
}

/// WHAT: Minutes are not capped at 59 and not truncated past 99
/// WHY: There is no hour component; padding must never truncate
#[test]
fn given_long_durations_when_formatting_then_minutes_keep_growing() {
    // Given/When/Then: Minutes grow past an hour and past two digits
    assert_eq!(format_duration(3661), "61:01");
    assert_eq!(format_duration(6000), "100:00");
}
