//! Hebrew (Jewish) lunisolar calendar arithmetic with exact conversion to
//! and from the proleptic Gregorian calendar.
//!
//! The calendar is a chain of modular-arithmetic rules: the 19-year leap
//! cycle, the mean lunar conjunction (molad) tracked in day/hour/part
//! fixed-point units, four New-Year postponement rules, and two months
//! whose length depends on the resulting year length. Every value here is
//! an immutable pure function of the date; there is no shared state and
//! no I/O, so everything is freely callable across threads.

mod calc;
mod consts;
mod convert;
mod format;
mod molad;
mod prelude;
mod types;
mod zmanim;

pub use calc::{
    YearKind, YearLength, first_day_of_year, molad, month_length, months_before_year,
    months_elapsed, months_of_year, postponement, rosh_hashanah_weekday, year_length,
};
pub use consts::*;
pub use convert::{
    ConvertError, GregorianDate, absolute_to_jdn, gregorian_leap_year, gregorian_month_days,
    gregorian_to_jdn, jdn_to_absolute, jdn_to_gregorian,
};
pub use format::{Language, Style, format_date, month_name};
pub use molad::Molad;
pub use types::{HebrewDay, HebrewMonth, HebrewYear, Weekday, is_leap_year, months_in_year};
pub use zmanim::{
    CandleTimes, DEFAULT_CANDLE_MINUTES, DEFAULT_HAVDALAH_MINUTES, Holiday, HolidayCategory,
    HolidayLookup, Location, ParshahInfo, ParshahLookup, SunTimes, SunTimesProvider, UtcMinutes,
    candle_times, upcoming_holidays,
};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// Error raised when a Hebrew date fails validation. Each variant names
/// the offending field and the value supplied.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid Hebrew year: {} (must be 1-{})", "_0", MAX_HEBREW_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month {month} for Hebrew year {year}")]
    InvalidMonth { month: u8, year: u16 },
    #[display(fmt = "Invalid day {day} for month {month} of Hebrew year {year}")]
    InvalidDay { day: u8, month: u8, year: u16 },
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// A Hebrew calendar date, valid by construction: the year is in range,
/// the month exists in that year (Adar I only in leap years), and the day
/// fits the resolved month length.
///
/// Displays and parses as a numeric `year-month-day` triple with
/// canonical month numbering (Nisan = 1, Tishrei = 7); use
/// [`HebrewDate::format`] for named renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: HebrewYear,
    month: HebrewMonth,
    day: HebrewDay,
}

impl HebrewDate {
    /// Creates a validated date from raw components.
    ///
    /// # Errors
    /// Returns `DateError` naming the first offending field.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = HebrewYear::new(year)?;
        let month_t = HebrewMonth::new(month, year)?;
        let day_t = HebrewDay::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the canonical month number as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the typed year
    pub const fn year_typed(&self) -> HebrewYear {
        self.year
    }

    /// Returns the typed month
    pub const fn month_typed(&self) -> HebrewMonth {
        self.month
    }

    /// Returns the typed day
    pub const fn day_typed(&self) -> HebrewDay {
        self.day
    }

    /// Whether the owning year carries Adar I
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Months in the owning year (12 or 13)
    pub const fn months_in_year(&self) -> u8 {
        self.year.months()
    }

    /// Length of the owning year in days, with its classification
    pub const fn year_length(&self) -> YearLength {
        year_length(self.year())
    }

    /// Days in the owning month (29 or 30)
    pub fn month_length(&self) -> u8 {
        month_length(self.year(), self.month())
    }

    /// Mean lunar conjunction for the owning month
    pub const fn molad(&self) -> Molad {
        molad(self.year(), self.month())
    }

    /// Weekday of this date (1 = Sunday .. 7 = Shabbat)
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.to_absolute_day())
    }

    /// Days from the Hebrew epoch; 1 Tishrei of year 1 is absolute day 2
    pub fn to_absolute_day(&self) -> i64 {
        convert::hebrew_to_absolute(self.year(), self.month(), self.day())
    }

    /// Builds a date from an absolute day count.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedAbsoluteDay` outside the
    /// supported Hebrew year range.
    pub fn from_absolute_day(abs: i64) -> Result<Self, ConvertError> {
        let (year, month, day) = convert::absolute_to_hebrew(abs)?;
        Ok(Self::new(year, month, day)?)
    }

    /// Julian Day Number of this date
    pub fn to_jdn(&self) -> i64 {
        absolute_to_jdn(self.to_absolute_day())
    }

    /// Builds a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedAbsoluteDay` outside the
    /// supported Hebrew year range.
    pub fn from_jdn(jdn: i64) -> Result<Self, ConvertError> {
        Self::from_absolute_day(jdn_to_absolute(jdn))
    }

    /// Converts a Gregorian date. A Hebrew day maps to the Gregorian date
    /// at whose sunset it begins: 2023-09-15 is 1 Tishrei 5784.
    ///
    /// # Errors
    /// Returns `ConvertError` if the date falls outside the supported
    /// Hebrew year range.
    pub fn from_gregorian(date: &GregorianDate) -> Result<Self, ConvertError> {
        Self::from_jdn(date.to_jdn())
    }

    /// Converts to the Gregorian date at whose sunset this Hebrew day
    /// begins.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedRange` when the result falls
    /// outside Gregorian years 1..=9999.
    pub fn to_gregorian(&self) -> Result<GregorianDate, ConvertError> {
        jdn_to_gregorian(self.to_jdn())
    }

    /// Renders with named months, e.g. `"15 Nisan 5784"` or
    /// `"15 of Nisan, 5784"`
    pub fn format(&self, style: Style, language: Language) -> String {
        format_date(self, style, language)
    }

    /// Name of the owning month, substituting plain Adar in common years
    pub fn month_name(&self, language: Language) -> &'static str {
        month_name(self.year(), self.month(), language)
    }
}

impl std::fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

impl FromStr for HebrewDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }
        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;
        Self::new(year, month, day)
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical month numbers are not chronological within a year:
        // compare by the Tishrei-first position instead
        let a = (
            self.year(),
            calc::month_offset(self.year(), self.month()),
            self.day(),
        );
        let b = (
            other.year(),
            calc::month_offset(other.year(), other.month()),
            other.day(),
        );
        a.cmp(&b)
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
