/// Parts (chalakim) in an hour; the calendar's smallest time unit is 1/1080 hour
pub const PARTS_PER_HOUR: i64 = 1080;

/// Hours in a calendar day
pub const HOURS_PER_DAY: i64 = 24;

/// Parts in a full day (25920)
pub const PARTS_PER_DAY: i64 = PARTS_PER_HOUR * HOURS_PER_DAY;

/// Mean synodic month: 29 days, 12 hours, 793 parts
pub const SYNODIC_MONTH_DAYS: i64 = 29;
pub const SYNODIC_MONTH_HOURS: i64 = 12;
pub const SYNODIC_MONTH_PARTS: i64 = 793;

/// Molad of creation (molad tohu, BeHaRaD): day 2, hour 5, 204 parts
pub const MOLAD_TOHU_DAYS: i64 = 2;
pub const MOLAD_TOHU_HOURS: i64 = 5;
pub const MOLAD_TOHU_PARTS: i64 = 204;

/// Julian Day Number of the Hebrew epoch. Absolute day `n` (days counted
/// from the epoch; 1 Tishrei of year 1 falls on absolute day 2, a Monday)
/// corresponds to JDN `HEBREW_EPOCH_JDN + n`.
pub const HEBREW_EPOCH_JDN: i64 = 347995;

/// Years in the Metonic leap cycle
pub const YEARS_PER_CYCLE: i64 = 19;
/// Leap months inserted per 19-year cycle
pub const LEAP_MONTHS_PER_CYCLE: i64 = 7;
/// Total months per 19-year cycle (12 * 19 + 7)
pub const MONTHS_PER_CYCLE: i64 = 235;

/// Molad zaken: postpone when the molad falls at or after 18h (noon)
pub const MOLAD_ZAKEN_PARTS: i64 = 18 * PARTS_PER_HOUR;
/// GaTaRaD: Tuesday molad at or after 9h 204p in a common year
pub const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204;
/// BeTuTeKaPot: Monday molad at or after 15h 589p following a leap year
pub const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589;

/// Maximum valid Hebrew year (inclusive). Covers every date reachable from
/// the supported Gregorian range, with headroom.
pub const MAX_HEBREW_YEAR: u16 = 13999;

/// Supported proleptic Gregorian year range (inclusive)
pub const MIN_GREGORIAN_YEAR: i32 = 1;
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Maximum canonical month number (Adar II)
pub const MAX_MONTH: u8 = 13;

// Canonical month numbering: Nisan = 1, Tishrei = 7. The civil year begins
// at Tishrei; see `months_of_year` for the in-year ordering.
pub const NISAN: u8 = 1;
pub const IYAR: u8 = 2;
pub const SIVAN: u8 = 3;
pub const TAMMUZ: u8 = 4;
pub const AV: u8 = 5;
pub const ELUL: u8 = 6;
pub const TISHREI: u8 = 7;
pub const CHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const TEVET: u8 = 10;
pub const SHEVAT: u8 = 11;
/// Adar I exists only in leap years
pub const ADAR_I: u8 = 12;
/// Adar II in leap years; plain Adar in common years (same slot)
pub const ADAR_II: u8 = 13;

/// Transliterated month names, indexed by canonical month number - 1
pub const MONTH_NAMES_EN: [&str; 13] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan",
    "Kislev", "Tevet", "Shevat", "Adar I", "Adar II",
];

/// Hebrew-script month names, indexed by canonical month number - 1
pub const MONTH_NAMES_HE: [&str; 13] = [
    "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול", "תשרי", "חשון", "כסלו",
    "טבת", "שבט", "אדר א", "אדר ב",
];

/// Display name for plain Adar (month 13 in a common year)
pub const ADAR_PLAIN_EN: &str = "Adar";
pub const ADAR_PLAIN_HE: &str = "אדר";

/// Date component separator for the numeric display form
pub const DATE_SEPARATOR: char = '-';
