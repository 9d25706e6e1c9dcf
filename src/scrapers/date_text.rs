use crate::error::{MenuError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Day-before-month with an optional year, tolerating spaces between the
// components ("3.6.", "3. 6. 2024", "12.3.24").
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\.\s*(\d{1,2})\.\s*(\d{4}|\d{2})?").unwrap());

/// Pulls the first date-shaped substring out of loose page text.
///
/// A two-digit year is expanded into the 2000s. When the text carries no year
/// at all, `default_year` fills the gap; without one the text is rejected.
pub fn parse(raw_text: &str, default_year: Option<i32>) -> Result<NaiveDate> {
    let caps = DATE_SHAPE
        .captures(raw_text)
        .ok_or_else(|| MenuError::DateParse(format!("no date found in '{}'", raw_text.trim())))?;

    let day: u32 = caps[1]
        .parse()
        .map_err(|_| MenuError::DateParse(format!("bad day in '{}'", &caps[0])))?;
    let month: u32 = caps[2]
        .parse()
        .map_err(|_| MenuError::DateParse(format!("bad month in '{}'", &caps[0])))?;

    let year: i32 = match caps.get(3) {
        Some(year) => year
            .as_str()
            .parse()
            .map_err(|_| MenuError::DateParse(format!("bad year in '{}'", &caps[0])))?,
        None => default_year.ok_or_else(|| {
            MenuError::DateParse(format!("'{}' has no year and no default was given", &caps[0]))
        })?,
    };
    let year = if year < 100 { 2000 + year } else { year };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| MenuError::DateParse(format!("{day}.{month}.{year} is not a valid date")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_date() {
        let date = parse("12.3.2024", None).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    }

    #[test]
    fn expands_two_digit_year() {
        let date = parse("12.3.24", None).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    }

    #[test]
    fn falls_back_to_default_year() {
        let date = parse("5.1.", Some(2024)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn finds_date_inside_heading_text() {
        let date = parse("Pondělí 3.6.", Some(2024)).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn tolerates_spaces_between_components() {
        let spaced = parse("3. 6. 2024", None).unwrap();
        let compact = parse("3.6.24", None).unwrap();
        assert_eq!(spaced, compact);
        assert_eq!(compact, spaced);
    }

    #[test]
    fn date_equality_ignores_time_of_day() {
        let date = parse("12.3.24", None).unwrap();
        let morning = date.and_hms_opt(9, 0, 0).unwrap();
        let evening = date.and_hms_opt(21, 30, 0).unwrap();
        assert_eq!(morning.date(), evening.date());
    }

    #[test]
    fn rejects_text_without_date() {
        assert!(matches!(
            parse("Svátek - zavřeno", None),
            Err(MenuError::DateParse(_))
        ));
    }

    #[test]
    fn rejects_missing_year_without_default() {
        assert!(matches!(parse("5.1.", None), Err(MenuError::DateParse(_))));
    }

    #[test]
    fn rejects_out_of_range_day_and_month() {
        assert!(matches!(
            parse("32.1.2024", None),
            Err(MenuError::DateParse(_))
        ));
        assert!(matches!(
            parse("1.13.2024", None),
            Err(MenuError::DateParse(_))
        ));
    }
}
