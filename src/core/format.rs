// Author: Dustin Pilgrim
// License: MIT

const MS_PER_SECOND: u64 = 1000;
const SECONDS_PER_DAY: u64 = 24 * 3600;

/// Formats a millisecond count as `"Nd Nh Nm Ns"`.
///
/// Days, hours and minutes only appear when nonzero; seconds always appear.
/// Values are truncated, never rounded.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / MS_PER_SECOND;
    let days = total_secs / SECONDS_PER_DAY;
    let hours = (total_secs % SECONDS_PER_DAY) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    for (value, unit) in [(days, 'd'), (hours, 'h'), (minutes, 'm')] {
        if value > 0 {
            out.push_str(&format!("{value}{unit} "));
        }
    }
    out.push_str(&format!("{seconds}s"));
    out
}
