use crate::DateError;
use crate::calc::month_length;
use crate::consts::{ADAR_I, MAX_HEBREW_YEAR, MAX_MONTH, MIN_DAY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A Hebrew year guaranteed to be in the range `1..=MAX_HEBREW_YEAR`.
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HebrewYear(NonZeroU16);

impl HebrewYear {
    /// Creates a new year, validating that it's non-zero and <= `MAX_HEBREW_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_HEBREW_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_HEBREW_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year carries a thirteenth month (Adar I)
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Number of months in this year (12 or 13)
    pub const fn months(self) -> u8 {
        months_in_year(self.get())
    }
}

impl TryFrom<u16> for HebrewYear {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HebrewYear> for u16 {
    fn from(year: HebrewYear) -> Self {
        year.0.get()
    }
}

impl fmt::Display for HebrewYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical month number guaranteed to be valid for its owning year:
/// `1..=13`, where 12 (Adar I) requires a leap year. Canonical numbering
/// fixes Nisan = 1 and Tishrei = 7; month 13 is Adar II in leap years and
/// plain Adar in common years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HebrewMonth(NonZeroU8);

impl HebrewMonth {
    /// Creates a new month, validating the number against the owning year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0, > 13, or names
    /// Adar I in a common year.
    pub fn new(value: u8, year: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth { month: value, year })?;
        if value > MAX_MONTH || (value == ADAR_I && !is_leap_year(year)) {
            return Err(DateError::InvalidMonth { month: value, year });
        }
        Ok(Self(non_zero))
    }

    /// Returns the canonical month number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't check the Adar I rule without year context, so only bound-check
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth {
            month: value,
            year: 0,
        })?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth {
                month: value,
                year: 0,
            });
        }
        Ok(Self(non_zero))
    }
}

impl From<HebrewMonth> for u8 {
    fn from(month: HebrewMonth) -> Self {
        month.0.get()
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of month guaranteed to be valid for a given year and month.
/// The upper bound is the resolved month length (29 or 30), which for
/// Cheshvan and Kislev depends on the year's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HebrewDay(NonZeroU8);

impl HebrewDay {
    /// Creates a new day, validating it against the resolved month length
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or exceeds the
    /// length of the given month in the given year.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month,
            year,
        })?;

        if value > month_length(year, month) {
            return Err(DateError::InvalidDay {
                day: value,
                month,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for HebrewDay {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check bounds
        if value < MIN_DAY || value > 30 {
            return Err(DateError::InvalidDay {
                day: value,
                month: 0,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month: 0,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<HebrewDay> for u8 {
    fn from(day: HebrewDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for HebrewDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week on the 1..=7 scale the calendar uses: 1 is Sunday and
/// 7 is Shabbat, never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Shabbat = 7,
}

impl Weekday {
    /// Maps a non-negative absolute day count onto the weekday scale.
    /// A zero remainder maps to Shabbat (7), never 0.
    pub const fn from_day_number(days: i64) -> Self {
        debug_assert!(days >= 0);
        match days % 7 {
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            _ => Self::Shabbat,
        }
    }

    /// Returns the weekday number (1 = Sunday .. 7 = Shabbat)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Whether Rosh Hashanah may not fall on this day (lo ADU rosh:
    /// Sunday, Wednesday, Friday)
    pub const fn is_adu(self) -> bool {
        matches!(self, Self::Sunday | Self::Wednesday | Self::Friday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Shabbat => "Shabbat",
        };
        write!(f, "{name}")
    }
}

// Helper functions

/// Leap years sit at positions {3, 6, 8, 11, 14, 17, 19} of each 19-year cycle
pub const fn is_leap_year(year: u16) -> bool {
    (7 * year as u32 + 1) % 19 < 7
}

pub const fn months_in_year(year: u16) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}
