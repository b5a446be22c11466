//! Clock display formatting.

/// Format a second count as `MM:SS`.
///
/// Minutes are the floor of `seconds / 60` and are zero-padded to two
/// digits; they keep growing past 99 rather than wrapping.
///
/// ```
/// use pairs_engine::core::format_time;
///
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3), "00:03");
/// assert_eq!(format_time(600), "10:00");
/// ```
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
