// ABOUTME: Pace string formatting and parsing for "m:ss" per-kilometre paces
// ABOUTME: Converts between seconds and the minute:second strings consumed by plan views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Format a duration in seconds as `m:ss`
///
/// Rounds to the nearest whole second first, so `299.6` becomes `"5:00"`
/// rather than `"4:60"`. Negative or non-finite inputs format as `"0:00"`.
#[must_use]
pub fn format_pace(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_owned();
    }
    let total = seconds.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parse an `m:ss` (or `mm:ss`) pace string into seconds
///
/// Returns `None` for anything that is not two non-negative integers
/// separated by a single colon with seconds below 60.
#[must_use]
pub fn parse_pace(pace: &str) -> Option<f64> {
    let (minutes, seconds) = pace.trim().split_once(':')?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    let total = minutes.checked_mul(60)?.checked_add(seconds)?;
    Some(f64::from(total))
}

/// Parse a finish time given as `h:mm:ss`, `m:ss` or plain seconds
///
/// Returns `None` for malformed input or minute/second fields of 60 or more
/// after the leading field.
#[must_use]
pub fn parse_duration(text: &str) -> Option<f64> {
    let text = text.trim();
    if !text.contains(':') {
        let seconds: f64 = text.parse().ok()?;
        return (seconds.is_finite() && seconds >= 0.0).then_some(seconds);
    }
    let mut fields = text.split(':');
    let mut total: u32 = fields.next()?.parse().ok()?;
    let mut count = 1;
    for field in fields {
        let value: u32 = field.parse().ok()?;
        if value >= 60 || count == 3 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(value)?;
        count += 1;
    }
    Some(f64::from(total))
}

/// Format a finish time in seconds as `h:mm:ss`, or `m:ss` under an hour
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_owned();
    }
    let total = seconds.round() as u64;
    let hours = total / 3600;
    if hours == 0 {
        return format_pace(seconds);
    }
    format!("{hours}:{:02}:{:02}", (total % 3600) / 60, total % 60)
}

/// Seconds per kilometre for a velocity in metres per minute
#[must_use]
pub fn seconds_per_km(velocity_m_per_min: f64) -> f64 {
    60_000.0 / velocity_m_per_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_seconds() {
        assert_eq!(format_pace(245.0), "4:05");
        assert_eq!(format_pace(600.0), "10:00");
    }

    #[test]
    fn test_format_carries_rounded_minute() {
        assert_eq!(format_pace(299.6), "5:00");
        assert_eq!(format_pace(299.4), "4:59");
    }

    #[test]
    fn test_format_degenerate_input() {
        assert_eq!(format_pace(-3.0), "0:00");
        assert_eq!(format_pace(f64::NAN), "0:00");
        assert_eq!(format_pace(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1_171.0), "19:31");
        assert_eq!(format_duration(5_400.0), "1:30:00");
        assert_eq!(format_duration(11_280.4), "3:08:00");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_pace("5:30"), Some(330.0));
        assert_eq!(parse_pace("04:05"), Some(245.0));
        assert_eq!(parse_pace(" 6:00 "), Some(360.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_pace(""), None);
        assert_eq!(parse_pace("5"), None);
        assert_eq!(parse_pace("5:75"), None);
        assert_eq!(parse_pace("a:bc"), None);
        assert_eq!(parse_pace("-5:10"), None);
        assert_eq!(parse_pace("5:10:20"), None);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("40:00"), Some(2_400.0));
        assert_eq!(parse_duration("1:30:05"), Some(5_405.0));
        assert_eq!(parse_duration("1171"), Some(1_171.0));
        assert_eq!(parse_duration("1:75:00"), None);
        assert_eq!(parse_duration("1:00:00:00"), None);
        assert_eq!(parse_duration("-5"), None);
    }

    #[test]
    fn test_seconds_per_km() {
        assert!((seconds_per_km(250.0) - 240.0).abs() < 1e-9);
    }
}
