/// Format a duration in seconds as `MM:SS`.
///
/// Both fields are zero-padded to two digits. Minutes are never capped or
/// wrapped into hours, so `3661` renders as `61:01` and `6000` as `100:00`.
pub fn format_duration(duration_secs: u64) -> String {
    let minutes = duration_secs / 60;
    let seconds = duration_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
