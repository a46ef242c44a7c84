use crate::consts::{
    HOURS_PER_DAY, MOLAD_TOHU_DAYS, MOLAD_TOHU_HOURS, MOLAD_TOHU_PARTS, PARTS_PER_HOUR,
    SYNODIC_MONTH_DAYS, SYNODIC_MONTH_HOURS, SYNODIC_MONTH_PARTS,
};
use crate::types::Weekday;
use std::fmt;

/// A moment in the mean lunar cycle, held as a fixed-point
/// (days, hours, parts) triple with 1080 parts per hour.
///
/// The day field is an absolute count from the calendar's epoch and is
/// never wrapped mod 7 while accumulating; the weekday is only read out
/// through [`Molad::weekday`]. All fields are kept non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Molad {
    days: i64,
    hours: i64,
    parts: i64,
}

impl Molad {
    /// Molad of creation (molad tohu): Monday, 5 hours, 204 parts
    pub const TOHU: Self = Self::new(MOLAD_TOHU_DAYS, MOLAD_TOHU_HOURS, MOLAD_TOHU_PARTS);

    /// The mean synodic month: 29 days, 12 hours, 793 parts
    pub const SYNODIC_MONTH: Self =
        Self::new(SYNODIC_MONTH_DAYS, SYNODIC_MONTH_HOURS, SYNODIC_MONTH_PARTS);

    /// Builds a normalized molad from raw field values
    pub const fn new(days: i64, hours: i64, parts: i64) -> Self {
        debug_assert!(days >= 0 && hours >= 0 && parts >= 0);
        Self { days, hours, parts }.normalize()
    }

    /// Multiplies every field by `n` elapsed months and re-normalizes.
    /// Scaling unnormalized products and carrying once is exactly equal to
    /// `n`-fold repeated addition, including `n == 0`.
    pub const fn scale(self, n: i64) -> Self {
        debug_assert!(n >= 0);
        Self {
            days: self.days * n,
            hours: self.hours * n,
            parts: self.parts * n,
        }
        .normalize()
    }

    /// Field-wise sum, then carry
    pub const fn add(self, other: Self) -> Self {
        Self {
            days: self.days + other.days,
            hours: self.hours + other.hours,
            parts: self.parts + other.parts,
        }
        .normalize()
    }

    /// Carries overflow upward, parts -> hours -> days. No mod-7 wrap is
    /// ever applied to the day count here.
    const fn normalize(self) -> Self {
        let hours = self.hours + self.parts / PARTS_PER_HOUR;
        let parts = self.parts % PARTS_PER_HOUR;
        let days = self.days + hours / HOURS_PER_DAY;
        let hours = hours % HOURS_PER_DAY;
        Self { days, hours, parts }
    }

    /// Absolute day count from the epoch
    #[inline]
    pub const fn days(self) -> i64 {
        self.days
    }

    #[inline]
    pub const fn hours(self) -> i64 {
        self.hours
    }

    #[inline]
    pub const fn parts(self) -> i64 {
        self.parts
    }

    /// Time of day in parts (0..25920), used by the postponement rules
    pub const fn parts_of_day(self) -> i64 {
        self.hours * PARTS_PER_HOUR + self.parts
    }

    /// Weekday of the molad on the 1..=7 scale (7 = Shabbat, never 0)
    pub const fn weekday(self) -> Weekday {
        Weekday::from_day_number(self.days)
    }
}

impl fmt::Display for Molad {
    /// Renders as `"<weekday> <hour>:<parts>"`, e.g. `"4 10:468"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.weekday().number(), self.hours, self.parts)
    }
}
