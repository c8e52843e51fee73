//! Time utilities: parsing local timestamps and fixed UTC offsets.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Wire format for manual timestamps, e.g. "2024-01-03 09:00".
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a fixed UTC offset of the form "+HH:MM" or "-HH:MM".
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let err = || AppError::InvalidOffset(s.to_string());

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(err()),
    };

    let (h, m) = rest.split_once(':').ok_or_else(err)?;
    let hours: i32 = h.parse().map_err(|_| err())?;
    let minutes: i32 = m.parse().map_err(|_| err())?;
    if hours > 23 || minutes > 59 {
        return Err(err());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(err)
}

/// Parse a "YYYY-MM-DD HH:MM" string as a wall-clock time in the given offset.
pub fn parse_local_datetime(s: &str, tz: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    naive
        .and_local_timezone(tz)
        .single()
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Current time expressed in the given fixed offset.
pub fn now_in(tz: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_negative_offset() {
        let tz = parse_utc_offset("-08:00").unwrap();
        assert_eq!(tz.local_minus_utc(), -8 * 3600);
    }

    #[test]
    fn parses_positive_offset_with_minutes() {
        let tz = parse_utc_offset("+05:30").unwrap();
        assert_eq!(tz.local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn rejects_malformed_offsets() {
        for bad in ["08:00", "+8", "+25:00", "-08:75", "", "+aa:bb"] {
            assert!(parse_utc_offset(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parses_local_datetime_in_offset() {
        let tz = parse_utc_offset("-08:00").unwrap();
        let dt = parse_local_datetime("2024-01-03 09:00", tz).unwrap();
        assert_eq!(dt.hour(), 9);
        // 09:00 PST is 17:00 UTC
        assert_eq!(dt.with_timezone(&Utc).hour(), 17);
    }

    #[test]
    fn rejects_malformed_datetime() {
        let tz = parse_utc_offset("-08:00").unwrap();
        assert!(parse_local_datetime("03/01/2024 9am", tz).is_err());
        assert!(parse_local_datetime("2024-01-03", tz).is_err());
    }
}
