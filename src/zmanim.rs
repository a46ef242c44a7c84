//! Collaborator boundaries the calendrical core does not implement:
//! astronomical sun times, candle-lighting composition, and
//! holiday/parshah lookup. The core only supplies resolved dates; the
//! astronomy and the tables live behind the traits defined here.

use crate::HebrewDate;
use crate::convert::{ConvertError, GregorianDate};
use crate::prelude::*;
use std::fmt;

/// Default minutes before sunset for candle lighting
pub const DEFAULT_CANDLE_MINUTES: i32 = 18;
/// Default minutes after sunset for havdalah
pub const DEFAULT_HAVDALAH_MINUTES: i32 = 42;

/// An observer position for sun-time queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_m: f64,
}

/// A time of day as whole minutes past UTC midnight of the queried
/// Gregorian date. May exceed one day after an offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct UtcMinutes(i32);

impl UtcMinutes {
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Shifts by a signed minute delta
    pub const fn offset(self, minutes: i32) -> Self {
        Self(self.0 + minutes)
    }
}

impl fmt::Display for UtcMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.div_euclid(60), self.0.rem_euclid(60))
    }
}

/// Sunrise and sunset for one Gregorian date at one location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: UtcMinutes,
    pub sunset: UtcMinutes,
}

/// Boundary to the external astronomical module. Implementations carry
/// the sunrise/sunset formulas; the core never computes them.
pub trait SunTimesProvider {
    fn sun_times(&self, location: &Location, date: &GregorianDate) -> SunTimes;
}

/// Candle-lighting and havdalah times derived from a provider's sunset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleTimes {
    pub candle_lighting: UtcMinutes,
    pub havdalah: UtcMinutes,
}

/// Composes a Hebrew date with the sun-times boundary. The minute deltas
/// are presentation-layer parameters, not calendrical facts.
///
/// # Errors
/// Returns `ConvertError::UnsupportedRange` when the date falls outside
/// the supported Gregorian range.
pub fn candle_times<P: SunTimesProvider>(
    provider: &P,
    location: &Location,
    date: &HebrewDate,
    minutes_before_sunset: i32,
    minutes_after_sunset: i32,
) -> Result<CandleTimes, ConvertError> {
    let gregorian = date.to_gregorian()?;
    let sun = provider.sun_times(location, &gregorian);
    Ok(CandleTimes {
        candle_lighting: sun.sunset.offset(-minutes_before_sunset),
        havdalah: sun.sunset.offset(minutes_after_sunset),
    })
}

/// Holiday classification carried by lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HolidayCategory {
    #[display(fmt = "biblical")]
    Biblical,
    #[display(fmt = "rabbinical")]
    Rabbinical,
    #[display(fmt = "modern")]
    Modern,
    #[display(fmt = "custom")]
    Custom,
}

/// A holiday entry supplied by an external table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub hebrew_name: String,
    pub date: HebrewDate,
    pub category: HolidayCategory,
}

/// Boundary to the external holiday table. The core supplies only the
/// date, never the table.
pub trait HolidayLookup {
    fn holidays_on(&self, date: &HebrewDate) -> Vec<Holiday>;
}

/// A weekly Torah portion entry supplied by an external table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParshahInfo {
    pub name: String,
    pub hebrew_name: String,
    pub is_special: bool,
}

/// Boundary to the external parshah table
pub trait ParshahLookup {
    fn parshah_for(&self, date: &HebrewDate) -> Option<ParshahInfo>;
}

/// Walks forward from `from` (inclusive) collecting up to `count`
/// holidays from the table, scanning at most two Hebrew years ahead.
pub fn upcoming_holidays<T: HolidayLookup>(
    table: &T,
    from: &HebrewDate,
    count: usize,
) -> Vec<Holiday> {
    let mut found = Vec::with_capacity(count);
    let start = from.to_absolute_day();
    // Two leap years bound the horizon
    for abs in start..start + 2 * 385 {
        if found.len() >= count {
            break;
        }
        let Ok(date) = HebrewDate::from_absolute_day(abs) else {
            break;
        };
        found.extend(table.holidays_on(&date));
        found.truncate(count);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TISHREI;

    struct FixedSun;

    impl SunTimesProvider for FixedSun {
        fn sun_times(&self, _location: &Location, _date: &GregorianDate) -> SunTimes {
            SunTimes {
                sunrise: UtcMinutes::from(6 * 60),
                sunset: UtcMinutes::from(18 * 60),
            }
        }
    }

    struct NewYearTable;

    impl HolidayLookup for NewYearTable {
        fn holidays_on(&self, date: &HebrewDate) -> Vec<Holiday> {
            if date.month() == TISHREI && date.day() == 1 {
                vec![Holiday {
                    name: "Rosh Hashanah".to_owned(),
                    hebrew_name: "ראש השנה".to_owned(),
                    date: *date,
                    category: HolidayCategory::Biblical,
                }]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_utc_minutes_display() {
        assert_eq!(UtcMinutes::from(0).to_string(), "00:00");
        assert_eq!(UtcMinutes::from(18 * 60 + 5).to_string(), "18:05");
    }

    #[test]
    fn test_utc_minutes_offset() {
        let sunset = UtcMinutes::from(18 * 60);
        assert_eq!(sunset.offset(-18).get(), 17 * 60 + 42);
        assert_eq!(sunset.offset(42).get(), 18 * 60 + 42);
    }

    #[test]
    fn test_candle_times_composition() {
        let location = Location {
            latitude: 31.778,
            longitude: 35.235,
            elevation_m: 754.0,
        };
        let date = HebrewDate::new(5784, 7, 1).unwrap();
        let times =
            candle_times(&FixedSun, &location, &date, DEFAULT_CANDLE_MINUTES, DEFAULT_HAVDALAH_MINUTES)
                .unwrap();
        assert_eq!(times.candle_lighting.to_string(), "17:42");
        assert_eq!(times.havdalah.to_string(), "18:42");
    }

    #[test]
    fn test_candle_times_out_of_gregorian_range() {
        let location = Location {
            latitude: 0.0,
            longitude: 0.0,
            elevation_m: 0.0,
        };
        // Hebrew year 13999 lies far past Gregorian 9999
        let date = HebrewDate::new(13_999, 7, 1).unwrap();
        let result = candle_times(&FixedSun, &location, &date, 18, 42);
        assert!(matches!(result, Err(ConvertError::UnsupportedRange(_))));
    }

    #[test]
    fn test_upcoming_holidays_finds_next_new_year() {
        let from = HebrewDate::new(5784, 1, 15).unwrap();
        let holidays = upcoming_holidays(&NewYearTable, &from, 2);
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].date, HebrewDate::new(5785, 7, 1).unwrap());
        assert_eq!(holidays[1].date, HebrewDate::new(5786, 7, 1).unwrap());
        assert_eq!(holidays[0].category, HolidayCategory::Biblical);
    }

    #[test]
    fn test_upcoming_holidays_includes_start_day() {
        let from = HebrewDate::new(5785, 7, 1).unwrap();
        let holidays = upcoming_holidays(&NewYearTable, &from, 1);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date, from);
    }

    #[test]
    fn test_holiday_category_display() {
        assert_eq!(HolidayCategory::Biblical.to_string(), "biblical");
        assert_eq!(HolidayCategory::Custom.to_string(), "custom");
    }
}
