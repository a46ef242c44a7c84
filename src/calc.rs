//! Months-elapsed counting, molad projection, the four New-Year
//! postponement rules (dechiyot), year lengths, and month lengths.
//!
//! Everything here is a pure function of (year[, month]); nothing is cached.

use crate::consts::{
    ADAR_I, ADAR_II, AV, BETUTAKPAT_PARTS, CHESHVAN, ELUL, GATARAD_PARTS, IYAR, KISLEV,
    MOLAD_ZAKEN_PARTS, MONTHS_PER_CYCLE, NISAN, SHEVAT, SIVAN, TAMMUZ, TEVET, TISHREI,
    YEARS_PER_CYCLE,
};
use crate::molad::Molad;
use crate::prelude::*;
use crate::types::{Weekday, is_leap_year};

/// In-year month order for common years, Tishrei first
const COMMON_YEAR_MONTHS: [u8; 12] = [
    TISHREI, CHESHVAN, KISLEV, TEVET, SHEVAT, ADAR_II, NISAN, IYAR, SIVAN, TAMMUZ, AV, ELUL,
];

/// In-year month order for leap years, Tishrei first
const LEAP_YEAR_MONTHS: [u8; 13] = [
    TISHREI, CHESHVAN, KISLEV, TEVET, SHEVAT, ADAR_I, ADAR_II, NISAN, IYAR, SIVAN, TAMMUZ, AV,
    ELUL,
];

/// Canonical month numbers of `year` in chronological order, starting at
/// Tishrei. Common years skip Adar I.
pub fn months_of_year(year: u16) -> &'static [u8] {
    if is_leap_year(year) {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    }
}

/// Whole months from the epoch up to (not including) Tishrei of `year`.
/// Full 19-year cycles contribute 235 months each; the partial cycle adds
/// 12 regular months per year plus the leap months seated so far.
pub const fn months_before_year(year: u16) -> i64 {
    let elapsed = year as i64 - 1;
    let cycles = elapsed / YEARS_PER_CYCLE;
    let year_in_cycle = elapsed % YEARS_PER_CYCLE;
    MONTHS_PER_CYCLE * cycles + 12 * year_in_cycle + (year_in_cycle * 7 + 1) / YEARS_PER_CYCLE
}

/// Position of a canonical month number within its year's Tishrei-first
/// order: Tishrei is 0, Elul is 11 (common) or 12 (leap).
pub(crate) const fn month_offset(year: u16, month: u8) -> i64 {
    debug_assert!(month >= 1 && month <= ADAR_II && (month != ADAR_I || is_leap_year(year)));
    let m = month as i64;
    if month >= TISHREI {
        if month == ADAR_II && !is_leap_year(year) {
            5
        } else {
            m - TISHREI as i64
        }
    } else if is_leap_year(year) {
        m + 6
    } else {
        m + 5
    }
}

/// Whole months from the epoch up to (not including) the given month.
/// Accepts canonical month numbers (Nisan = 1, Tishrei = 7) and converts
/// internally to the Tishrei-first elapsed count.
pub const fn months_elapsed(year: u16, month: u8) -> i64 {
    months_before_year(year) + month_offset(year, month)
}

/// Mean lunar conjunction for the given month: the molad of creation
/// projected forward by the elapsed-month count.
pub const fn molad(year: u16, month: u8) -> Molad {
    Molad::TOHU.add(Molad::SYNODIC_MONTH.scale(months_elapsed(year, month)))
}

/// Applies the four dechiyot, in order, to the raw Tishrei molad and
/// returns the resolved absolute day of 1 Tishrei. Each rule inspects the
/// day count as already postponed by the rules before it.
const fn resolve_new_year(raw: Molad, year: u16) -> i64 {
    let time_of_day = raw.parts_of_day();
    let mut day = raw.days();

    if time_of_day >= MOLAD_ZAKEN_PARTS {
        // Molad zaken: molad at noon or later
        day += 1;
    } else if matches!(raw.weekday(), Weekday::Tuesday)
        && time_of_day >= GATARAD_PARTS
        && !is_leap_year(year)
    {
        // GaTaRaD: lands on Wednesday, which lo ADU then pushes to Thursday
        day += 1;
    } else if matches!(raw.weekday(), Weekday::Monday)
        && time_of_day >= BETUTAKPAT_PARTS
        && is_leap_year(year - 1)
    {
        // BeTuTeKaPot: only in a year following a leap year
        day += 1;
    }

    if Weekday::from_day_number(day).is_adu() {
        // Lo ADU rosh: never Sunday, Wednesday, or Friday
        day += 1;
    }

    day
}

/// Absolute day (days from the epoch) of 1 Tishrei of `year`, after
/// postponements. 1 Tishrei of year 1 is absolute day 2.
pub const fn first_day_of_year(year: u16) -> i64 {
    resolve_new_year(molad(year, TISHREI), year)
}

/// Days Rosh Hashanah of `year` was deferred from its raw molad weekday
/// (0, 1, or 2)
pub const fn postponement(year: u16) -> u8 {
    (first_day_of_year(year) - molad(year, TISHREI).days()) as u8
}

/// Actual weekday of 1 Tishrei of `year`
pub const fn rosh_hashanah_weekday(year: u16) -> Weekday {
    Weekday::from_day_number(first_day_of_year(year))
}

/// Keviah: classification of a year by its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum YearKind {
    /// 353 or 383 days: Cheshvan and Kislev both 29
    #[display(fmt = "deficient")]
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30
    #[display(fmt = "regular")]
    Regular,
    /// 355 or 385 days: Cheshvan and Kislev both 30
    #[display(fmt = "complete")]
    Complete,
}

/// Length of a Hebrew year in days: 353/354/355 for common years,
/// 383/384/385 for leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearLength(u16);

impl YearLength {
    #[inline]
    pub const fn days(self) -> u16 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        self.0 >= 383
    }

    pub const fn kind(self) -> YearKind {
        debug_assert!(matches!(self.0, 353..=355 | 383..=385));
        match self.0 % 10 {
            3 => YearKind::Deficient,
            4 => YearKind::Regular,
            _ => YearKind::Complete,
        }
    }

    /// Cheshvan has 30 days only in a complete year
    pub const fn cheshvan_days(self) -> u8 {
        match self.kind() {
            YearKind::Complete => 30,
            YearKind::Deficient | YearKind::Regular => 29,
        }
    }

    /// Kislev has 29 days only in a deficient year
    pub const fn kislev_days(self) -> u8 {
        match self.kind() {
            YearKind::Deficient => 29,
            YearKind::Regular | YearKind::Complete => 30,
        }
    }
}

/// Gap in days between consecutive 1-Tishrei dates
pub const fn year_length(year: u16) -> YearLength {
    YearLength((first_day_of_year(year + 1) - first_day_of_year(year)) as u16)
}

/// Length of a canonical month in `year`. Eleven months are fixed;
/// Cheshvan and Kislev vary with the year's classification.
pub fn month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month >= 1 && month <= ADAR_II);
    match month {
        CHESHVAN => year_length(year).cheshvan_days(),
        KISLEV => year_length(year).kislev_days(),
        IYAR | TAMMUZ | ELUL | TEVET | ADAR_II => 29,
        // Nisan, Sivan, Av, Tishrei, Shevat, Adar I
        _ => 30,
    }
}
