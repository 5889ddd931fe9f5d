// Tick and timestamp conversion for Emby chapter markers

/// Emby runtime tick resolution (100 ns per tick)
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Timestamp of an intro-start marker
pub const MARKER_TIME_ZERO: &str = "0:00:00.000";

/// Convert an Emby tick count to seconds
pub fn ticks_to_seconds(ticks: i64) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}

/// Render seconds as the `H:MM:SS.mmm` timestamp the chapter-api
/// endpoint accepts
///
/// Hours are unpadded (`0:00:05.000`, `12:03:04.500`). Fractional
/// seconds truncate to whole milliseconds. Negative or non-finite
/// input clamps to zero.
pub fn format_marker_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };

    let total_millis = (seconds * 1000.0) as u64;
    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;

    format!("{}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
}
