//! UTC calendar dates without timezone dependencies.
//!
//! Provides a lightweight `DateUtc` for the sitemap `<lastmod>` field,
//! which only needs date precision.
//!
//! # Examples
//!
//! ```ignore
//! let date = DateUtc::parse("2024-06-15").unwrap();
//! assert_eq!(date.to_string(), "2024-06-15");
//!
//! let today = DateUtc::today();
//! ```

use anyhow::{Result, bail};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// UTC calendar date (ISO 8601 date-only precision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DateUtc {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Current date in UTC.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Convert seconds since the Unix epoch to a UTC date.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix_secs(secs: u64) -> Self {
        // Days-to-civil conversion (proleptic Gregorian, era-based).
        let days = (secs / SECS_PER_DAY) as i64 + 719_468;
        let era = days.div_euclid(146_097);
        let doe = days.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::from_ymd(year as u16, month as u8, day as u8)
    }

    /// Parse from "YYYY-MM-DD".
    ///
    /// A trailing RFC 3339 time part (`T14:30:45Z`) is accepted and dropped.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        if bytes.len() < 10 {
            return None;
        }
        if bytes.len() > 10 && bytes[10] != b'T' {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Formats as `YYYY-MM-DD`.
impl fmt::Display for DateUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for DateUtc {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid date `{s}`, expected YYYY-MM-DD"))
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            DateUtc::parse("2024-06-15"),
            Some(DateUtc::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_drops_time_part() {
        assert_eq!(
            DateUtc::parse("2024-06-15T14:30:45Z"),
            Some(DateUtc::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateUtc::parse("2024-6-15"), None);
        assert_eq!(DateUtc::parse("2024/06/15"), None);
        assert_eq!(DateUtc::parse("2024-06-15x"), None);
        assert_eq!(DateUtc::parse("2024-13-01"), None);
        assert_eq!(DateUtc::parse("2023-02-29"), None);
        assert_eq!(DateUtc::parse(""), None);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateUtc::from_ymd(2024, 2, 29).validate().is_ok());
        assert!(DateUtc::from_ymd(2000, 2, 29).validate().is_ok());
        assert!(DateUtc::from_ymd(1900, 2, 29).validate().is_err());
        assert!(DateUtc::from_ymd(2024, 4, 31).validate().is_err());
        assert!(DateUtc::from_ymd(2024, 6, 0).validate().is_err());
    }

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(DateUtc::from_ymd(2024, 1, 1).to_string(), "2024-01-01");
        assert_eq!(DateUtc::from_ymd(2024, 12, 31).to_string(), "2024-12-31");
    }

    #[test]
    fn test_from_unix_secs() {
        assert_eq!(DateUtc::from_unix_secs(0), DateUtc::from_ymd(1970, 1, 1));
        // 2024-02-29T12:00:00Z
        assert_eq!(
            DateUtc::from_unix_secs(1_709_208_000),
            DateUtc::from_ymd(2024, 2, 29)
        );
        // 2000-03-01T00:00:00Z
        assert_eq!(
            DateUtc::from_unix_secs(951_868_800),
            DateUtc::from_ymd(2000, 3, 1)
        );
    }

    #[test]
    fn test_today_is_valid() {
        let today = DateUtc::today();
        assert!(today.validate().is_ok());
        assert!(today.year >= 2024);
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "tomorrow".parse::<DateUtc>().unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }
}
