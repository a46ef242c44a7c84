//! String rendering for Hebrew dates: month-name lookup (with the plain
//! Adar substitution in common years) and the fixed plain/verbose
//! templates.

use crate::HebrewDate;
use crate::consts::{ADAR_II, ADAR_PLAIN_EN, ADAR_PLAIN_HE, MONTH_NAMES_EN, MONTH_NAMES_HE};
use crate::prelude::*;
use crate::types::is_leap_year;

/// Rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Style {
    /// `"15 Nisan 5784"`
    #[display(fmt = "plain")]
    Plain,
    /// `"15 of Nisan, 5784"`
    #[display(fmt = "verbose")]
    Verbose,
}

/// Rendering language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Language {
    /// Transliterated month names
    #[display(fmt = "en")]
    English,
    /// Hebrew-script month names
    #[display(fmt = "he")]
    Hebrew,
}

/// Name of a canonical month in `year`. Month 13 renders as plain Adar
/// when the year is not leap; the caller must pass a month valid for the
/// year.
pub fn month_name(year: u16, month: u8, language: Language) -> &'static str {
    debug_assert!(month >= 1 && month <= ADAR_II);
    if month == ADAR_II && !is_leap_year(year) {
        return match language {
            Language::English => ADAR_PLAIN_EN,
            Language::Hebrew => ADAR_PLAIN_HE,
        };
    }
    match language {
        Language::English => MONTH_NAMES_EN[usize::from(month) - 1],
        Language::Hebrew => MONTH_NAMES_HE[usize::from(month) - 1],
    }
}

/// Renders a date with the fixed templates: plain is
/// `"<day> <month> <year>"`; verbose English inserts "of" and a comma,
/// verbose Hebrew only the comma.
pub fn format_date(date: &HebrewDate, style: Style, language: Language) -> String {
    let name = month_name(date.year(), date.month(), language);
    match (style, language) {
        (Style::Plain, _) => format!("{} {} {}", date.day(), name, date.year()),
        (Style::Verbose, Language::English) => {
            format!("{} of {}, {}", date.day(), name, date.year())
        }
        (Style::Verbose, Language::Hebrew) => {
            format!("{} {}, {}", date.day(), name, date.year())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_regular_months() {
        assert_eq!(month_name(5784, 1, Language::English), "Nisan");
        assert_eq!(month_name(5784, 7, Language::English), "Tishrei");
        assert_eq!(month_name(5784, 7, Language::Hebrew), "תשרי");
    }

    #[test]
    fn test_month_name_adar_in_leap_year() {
        assert_eq!(month_name(5784, 12, Language::English), "Adar I");
        assert_eq!(month_name(5784, 13, Language::English), "Adar II");
        assert_eq!(month_name(5784, 12, Language::Hebrew), "אדר א");
        assert_eq!(month_name(5784, 13, Language::Hebrew), "אדר ב");
    }

    #[test]
    fn test_month_name_adar_in_common_year() {
        assert_eq!(month_name(5785, 13, Language::English), "Adar");
        assert_eq!(month_name(5785, 13, Language::Hebrew), "אדר");
    }

    #[test]
    fn test_format_plain_english() {
        let date = HebrewDate::new(5784, 1, 15).unwrap();
        assert_eq!(
            format_date(&date, Style::Plain, Language::English),
            "15 Nisan 5784"
        );
    }

    #[test]
    fn test_format_verbose_english() {
        let date = HebrewDate::new(5784, 1, 15).unwrap();
        assert_eq!(
            format_date(&date, Style::Verbose, Language::English),
            "15 of Nisan, 5784"
        );
    }

    #[test]
    fn test_format_hebrew() {
        let date = HebrewDate::new(5784, 7, 1).unwrap();
        assert_eq!(
            format_date(&date, Style::Plain, Language::Hebrew),
            "1 תשרי 5784"
        );
        assert_eq!(
            format_date(&date, Style::Verbose, Language::Hebrew),
            "1 תשרי, 5784"
        );
    }

    #[test]
    fn test_format_substitutes_plain_adar() {
        let date = HebrewDate::new(5785, 13, 10).unwrap();
        assert_eq!(
            format_date(&date, Style::Plain, Language::English),
            "10 Adar 5785"
        );
    }

    #[test]
    fn test_style_language_display() {
        assert_eq!(Style::Plain.to_string(), "plain");
        assert_eq!(Style::Verbose.to_string(), "verbose");
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::Hebrew.to_string(), "he");
    }
}
