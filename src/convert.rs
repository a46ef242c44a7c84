//! Absolute-day, Julian Day Number, and proleptic Gregorian conversions.
//!
//! All arithmetic is integer-only. The Hebrew side counts days from the
//! calendar's epoch (1 Tishrei of year 1 is absolute day 2) and maps to
//! JDN through [`HEBREW_EPOCH_JDN`]; the Gregorian side uses the
//! era/civil-day decomposition over 400-year cycles.

use crate::DateError;
use crate::calc::{first_day_of_year, month_length, months_of_year};
use crate::consts::{
    DATE_SEPARATOR, HEBREW_EPOCH_JDN, MAX_GREGORIAN_YEAR, MAX_HEBREW_YEAR, MIN_GREGORIAN_YEAR,
};
use std::fmt;
use std::str::FromStr;

/// Days per 400-year Gregorian era
const DAYS_PER_ERA: i64 = 146_097;
/// JDN of 1970-01-01, the era decomposition's reference day
const UNIX_EPOCH_JDN: i64 = 2_440_588;
/// Civil-day offset of 0000-03-01 relative to 1970-01-01
const ERA_OFFSET: i64 = 719_468;

/// Error type for calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Gregorian year outside the supported proleptic range.
    #[error("Unsupported Gregorian year: {0} (must be 1-9999)")]
    UnsupportedRange(i64),

    /// Gregorian month out of range.
    #[error("Invalid Gregorian month: {0} (must be 1-12)")]
    InvalidGregorianMonth(u8),

    /// Gregorian day out of range for its month.
    #[error("Invalid Gregorian day {day} for {year:04}-{month:02}")]
    InvalidGregorianDay { year: i32, month: u8, day: u8 },

    /// Absolute day count before the Hebrew epoch or past the last
    /// supported Hebrew year.
    #[error("Absolute day {0} outside the supported Hebrew calendar range")]
    UnsupportedAbsoluteDay(i64),

    /// Invalid date string.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Error validating a Hebrew date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// A proleptic Gregorian calendar date in the supported range
/// (years 1..=9999), valid by construction. No time of day, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedRange` for years outside 1..=9999,
    /// or an invalid-field error for a bad month or day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ConvertError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(ConvertError::UnsupportedRange(i64::from(year)));
        }
        if month == 0 || month > 12 {
            return Err(ConvertError::InvalidGregorianMonth(month));
        }
        if day == 0 || day > gregorian_month_days(year, month) {
            return Err(ConvertError::InvalidGregorianDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Julian Day Number of this date
    pub const fn to_jdn(self) -> i64 {
        gregorian_to_jdn(self)
    }

    /// Builds a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedRange` when the JDN falls outside
    /// Gregorian years 1..=9999.
    pub fn from_jdn(jdn: i64) -> Result<Self, ConvertError> {
        jdn_to_gregorian(jdn)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConvertError::InvalidFormat("empty date string".to_owned()));
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ConvertError::InvalidFormat(trimmed.to_owned()));
        }
        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| ConvertError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| ConvertError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| ConvertError::InvalidFormat(parts[2].to_owned()))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub const fn gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub const fn gregorian_month_days(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Julian Day Number of a proleptic Gregorian date. Exact inverse of
/// [`jdn_to_gregorian`] over the supported range.
pub const fn gregorian_to_jdn(date: GregorianDate) -> i64 {
    // Shift to a March-first year so leap days trail the year
    let y = date.year as i64 - if date.month <= 2 { 1 } else { 0 };
    let era = y / 400;
    let year_of_era = y - era * 400;
    let shifted_month = (date.month as i64 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + date.day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - ERA_OFFSET + UNIX_EPOCH_JDN
}

/// Proleptic Gregorian date of a Julian Day Number.
///
/// # Errors
/// Returns `ConvertError::UnsupportedRange` when the JDN falls outside
/// Gregorian years 1..=9999.
pub fn jdn_to_gregorian(jdn: i64) -> Result<GregorianDate, ConvertError> {
    let z = jdn - UNIX_EPOCH_JDN + ERA_OFFSET;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = if shifted_month < 10 {
        (shifted_month + 3) as u8
    } else {
        (shifted_month - 9) as u8
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);

    if !(i64::from(MIN_GREGORIAN_YEAR)..=i64::from(MAX_GREGORIAN_YEAR)).contains(&year) {
        return Err(ConvertError::UnsupportedRange(year));
    }
    Ok(GregorianDate {
        year: year as i32,
        month,
        day,
    })
}

/// Absolute day of a valid Hebrew (year, month, day): the resolved first
/// day of the year plus the lengths of every month preceding `month` in
/// Tishrei-first order, plus the day of month.
pub(crate) fn hebrew_to_absolute(year: u16, month: u8, day: u8) -> i64 {
    let mut days = first_day_of_year(year) + i64::from(day) - 1;
    for &m in months_of_year(year) {
        if m == month {
            break;
        }
        days += i64::from(month_length(year, m));
    }
    days
}

/// Inverse of [`hebrew_to_absolute`]: walks years, then months, using the
/// same length functions. Terminates because year lengths are bounded
/// below by 353.
pub(crate) fn absolute_to_hebrew(abs: i64) -> Result<(u16, u8, u8), ConvertError> {
    if abs < first_day_of_year(1) {
        return Err(ConvertError::UnsupportedAbsoluteDay(abs));
    }

    // Underestimate the year, then settle on the last year starting <= abs
    let mut year = ((abs / 366) + 1).min(i64::from(MAX_HEBREW_YEAR)) as u16;
    while year > 1 && first_day_of_year(year) > abs {
        year -= 1;
    }
    while year < MAX_HEBREW_YEAR && first_day_of_year(year + 1) <= abs {
        year += 1;
    }
    if first_day_of_year(year + 1) <= abs {
        return Err(ConvertError::UnsupportedAbsoluteDay(abs));
    }

    let mut remaining = abs - first_day_of_year(year);
    for &month in months_of_year(year) {
        let len = i64::from(month_length(year, month));
        if remaining < len {
            return Ok((year, month, (remaining + 1) as u8));
        }
        remaining -= len;
    }
    Err(ConvertError::UnsupportedAbsoluteDay(abs))
}

/// Absolute day corresponding to a Julian Day Number
pub const fn jdn_to_absolute(jdn: i64) -> i64 {
    jdn - HEBREW_EPOCH_JDN
}

/// Julian Day Number corresponding to an absolute day
pub const fn absolute_to_jdn(abs: i64) -> i64 {
    abs + HEBREW_EPOCH_JDN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::year_length;

    #[test]
    fn test_gregorian_new_valid() {
        let date = GregorianDate::new(2023, 9, 15).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_gregorian_new_unsupported_year() {
        assert!(matches!(
            GregorianDate::new(0, 1, 1),
            Err(ConvertError::UnsupportedRange(0))
        ));
        assert!(matches!(
            GregorianDate::new(10_000, 1, 1),
            Err(ConvertError::UnsupportedRange(10_000))
        ));
    }

    #[test]
    fn test_gregorian_new_invalid_fields() {
        assert!(matches!(
            GregorianDate::new(2023, 13, 1),
            Err(ConvertError::InvalidGregorianMonth(13))
        ));
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(ConvertError::InvalidGregorianDay { .. })
        ));
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_gregorian_display_and_parse() {
        let date = GregorianDate::new(2023, 9, 15).unwrap();
        assert_eq!(date.to_string(), "2023-09-15");
        assert_eq!("2023-09-15".parse::<GregorianDate>().unwrap(), date);
        assert!("2023-09".parse::<GregorianDate>().is_err());
        assert!("2023-09-XX".parse::<GregorianDate>().is_err());
        assert!("".parse::<GregorianDate>().is_err());
    }

    #[test]
    fn test_gregorian_serde_round_trip() {
        let date = GregorianDate::new(2024, 4, 22).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-04-22""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_jdn_anchors() {
        // J2000 anchor
        let date = GregorianDate::new(2000, 1, 1).unwrap();
        assert_eq!(date.to_jdn(), 2_451_545);

        let date = GregorianDate::new(2023, 9, 15).unwrap();
        assert_eq!(date.to_jdn(), 2_460_203);

        let date = GregorianDate::new(2024, 4, 22).unwrap();
        assert_eq!(date.to_jdn(), 2_460_423);

        // First supported day
        let date = GregorianDate::new(1, 1, 1).unwrap();
        assert_eq!(date.to_jdn(), 1_721_426);
    }

    #[test]
    fn test_jdn_to_gregorian_anchors() {
        assert_eq!(
            jdn_to_gregorian(2_451_545).unwrap(),
            GregorianDate::new(2000, 1, 1).unwrap()
        );
        assert_eq!(
            jdn_to_gregorian(2_460_203).unwrap(),
            GregorianDate::new(2023, 9, 15).unwrap()
        );
    }

    #[test]
    fn test_jdn_round_trip_full_range() {
        // Sample the whole supported range with a coprime stride
        let first = GregorianDate::new(1, 1, 1).unwrap().to_jdn();
        let last = GregorianDate::new(9999, 12, 31).unwrap().to_jdn();
        let mut jdn = first;
        while jdn <= last {
            let date = jdn_to_gregorian(jdn).unwrap();
            assert_eq!(date.to_jdn(), jdn, "jdn {jdn} ({date})");
            jdn += 9973;
        }
    }

    #[test]
    fn test_jdn_round_trip_month_boundaries() {
        // Every day of a leap and a non-leap year
        for year in [1900, 2000, 2023, 2024] {
            for month in 1..=12u8 {
                for day in 1..=gregorian_month_days(year, month) {
                    let date = GregorianDate::new(year, month, day).unwrap();
                    assert_eq!(jdn_to_gregorian(date.to_jdn()).unwrap(), date);
                }
            }
        }
    }

    #[test]
    fn test_jdn_out_of_range() {
        let before = GregorianDate::new(1, 1, 1).unwrap().to_jdn() - 1;
        assert!(matches!(
            jdn_to_gregorian(before),
            Err(ConvertError::UnsupportedRange(0))
        ));
        let after = GregorianDate::new(9999, 12, 31).unwrap().to_jdn() + 1;
        assert!(matches!(
            jdn_to_gregorian(after),
            Err(ConvertError::UnsupportedRange(10_000))
        ));
    }

    #[test]
    fn test_hebrew_absolute_anchors() {
        // 1 Tishrei of year 1 is absolute day 2
        assert_eq!(hebrew_to_absolute(1, 7, 1), 2);
        assert_eq!(hebrew_to_absolute(5784, 7, 1), 2_112_208);
        // 15 Nisan 5784: 206 days of Tishrei..Adar II plus 14
        assert_eq!(hebrew_to_absolute(5784, 1, 15), 2_112_208 + 220);
    }

    #[test]
    fn test_hebrew_jdn_references() {
        assert_eq!(absolute_to_jdn(hebrew_to_absolute(5784, 7, 1)), 2_460_203);
        assert_eq!(absolute_to_jdn(hebrew_to_absolute(5784, 1, 15)), 2_460_423);
        // 1 Tishrei 5768, Thursday 13 September 2007 at nightfall
        assert_eq!(absolute_to_jdn(hebrew_to_absolute(5768, 7, 1)), 2_454_356);
    }

    #[test]
    fn test_absolute_to_hebrew_inverse() {
        assert_eq!(absolute_to_hebrew(2).unwrap(), (1, 7, 1));
        assert_eq!(absolute_to_hebrew(2_112_208).unwrap(), (5784, 7, 1));
        assert_eq!(absolute_to_hebrew(2_112_208 + 220).unwrap(), (5784, 1, 15));
    }

    #[test]
    fn test_absolute_round_trip_every_day() {
        // Every day of a window covering all three length classes of both
        // common and leap years
        for year in 5781..=5786u16 {
            for &month in months_of_year(year) {
                for day in 1..=month_length(year, month) {
                    let abs = hebrew_to_absolute(year, month, day);
                    assert_eq!(
                        absolute_to_hebrew(abs).unwrap(),
                        (year, month, day),
                        "{year}-{month}-{day}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_absolute_round_trip_consecutive_days() {
        // Consecutive absolute days map to consecutive dates
        let start = hebrew_to_absolute(5783, 7, 1);
        let end = hebrew_to_absolute(5786, 7, 1);
        let mut previous = absolute_to_hebrew(start - 1).unwrap();
        for abs in start..end {
            let current = absolute_to_hebrew(abs).unwrap();
            assert_ne!(current, previous, "abs {abs}");
            assert_eq!(hebrew_to_absolute(current.0, current.1, current.2), abs);
            previous = current;
        }
    }

    #[test]
    fn test_absolute_before_epoch() {
        assert!(matches!(
            absolute_to_hebrew(1),
            Err(ConvertError::UnsupportedAbsoluteDay(1))
        ));
    }

    #[test]
    fn test_absolute_past_max_year() {
        let beyond = first_day_of_year(MAX_HEBREW_YEAR) + i64::from(year_length(MAX_HEBREW_YEAR).days());
        assert!(matches!(
            absolute_to_hebrew(beyond),
            Err(ConvertError::UnsupportedAbsoluteDay(_))
        ));
        // The last day of the last supported year still converts
        assert_eq!(
            absolute_to_hebrew(beyond - 1).unwrap().0,
            MAX_HEBREW_YEAR
        );
    }

    #[test]
    fn test_jdn_absolute_bridge() {
        assert_eq!(jdn_to_absolute(absolute_to_jdn(12345)), 12345);
        assert_eq!(absolute_to_jdn(2), 347_997);
    }
}
