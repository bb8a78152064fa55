//! India Standard Time helpers and wall-clock parsing.
//!
//! Every timestamp shown to an admin is rendered in IST (UTC+05:30). Market and
//! withdrawal windows are expressed as IST wall-clock times (`HH:MM`).

use chrono::{DateTime, FixedOffset, NaiveTime, Offset, Utc};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The IST offset.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Convert a UTC timestamp to IST.
pub fn to_ist(dt: DateTime<Utc>) -> DateTime<FixedOffset> {
    dt.with_timezone(&ist())
}

/// `18/10/2026, 02:30 PM`
pub fn format_ist(dt: DateTime<Utc>) -> String {
    to_ist(dt).format("%d/%m/%Y, %I:%M %p").to_string()
}

/// `18/10/2026`
pub fn format_ist_date(dt: DateTime<Utc>) -> String {
    to_ist(dt).format("%d/%m/%Y").to_string()
}

/// Display form for an optional timestamp; `-` when absent.
pub fn format_ist_opt(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_ist).unwrap_or_else(|| "-".to_string())
}

/// Parse a wall-clock time: `14:30`, `14:30:00`, `2:30 PM`, `02:30pm`.
pub fn parse_clock(input: &str) -> Option<NaiveTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    let upper = s.to_ascii_uppercase();
    let compact = upper.replace(' ', "");

    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .or_else(|_| NaiveTime::parse_from_str(&compact, "%I:%M%p"))
        .or_else(|_| NaiveTime::parse_from_str(&compact, "%I:%M:%S%p"))
        .ok()
}

/// Wire form of a wall-clock time: `14:30`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Display form of a wall-clock time: `02:30 PM`.
pub fn format_clock_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Whether `at` falls in `[open, close)`. A window whose close is earlier than
/// its open wraps past midnight. An empty window (`open == close`) is never open.
pub fn within_window(open: NaiveTime, close: NaiveTime, at: NaiveTime) -> bool {
    if open <= close {
        open <= at && at < close
    } else {
        at >= open || at < close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_format_ist_shifts_offset() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        assert_eq!(format_ist(dt), "18/10/2026, 02:30 PM");
        let late = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
        assert_eq!(format_ist_date(late), "19/10/2026");
        assert_eq!(format_ist_opt(None), "-");
    }

    #[test]
    fn test_parse_clock_variants() {
        assert_eq!(parse_clock("14:30"), Some(t(14, 30)));
        assert_eq!(parse_clock("09:05:00"), Some(t(9, 5)));
        assert_eq!(parse_clock("2:30 PM"), Some(t(14, 30)));
        assert_eq!(parse_clock("12:00am"), Some(t(0, 0)));
        assert_eq!(parse_clock("25:00"), None);
        assert_eq!(parse_clock(""), None);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(t(9, 5)), "09:05");
        assert_eq!(format_clock_12h(t(21, 15)), "09:15 PM");
    }

    #[test]
    fn test_within_window() {
        assert!(within_window(t(10, 0), t(12, 0), t(10, 0)));
        assert!(!within_window(t(10, 0), t(12, 0), t(12, 0)));
        assert!(within_window(t(22, 0), t(2, 0), t(23, 30)));
        assert!(within_window(t(22, 0), t(2, 0), t(1, 0)));
        assert!(!within_window(t(22, 0), t(2, 0), t(12, 0)));
        assert!(!within_window(t(10, 0), t(10, 0), t(10, 0)));
    }
}
