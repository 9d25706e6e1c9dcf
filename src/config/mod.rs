use crate::config::cli::Args;
use crate::error::{MenuError, Result};
use chrono::NaiveDate;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::time::Duration;

pub(crate) mod cli;

// Unlike the loose page-text patterns, the argument must be nothing but a
// date. A two-digit year is accepted and read as 20YY.
static DATE_ARG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4}|\d{2})$").unwrap());

pub struct Config {
    pub args: Args,
    pub target_date: NaiveDate,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();
        let target_date = parse_date_arg(&args.date)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            target_date,
            http_client,
        })
    }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    let caps = DATE_ARG
        .captures(raw.trim())
        .ok_or_else(|| MenuError::ArgumentFormat(raw.to_string()))?;

    let day: u32 = caps[1]
        .parse()
        .map_err(|_| MenuError::ArgumentFormat(raw.to_string()))?;
    let month: u32 = caps[2]
        .parse()
        .map_err(|_| MenuError::ArgumentFormat(raw.to_string()))?;
    let year: i32 = caps[3]
        .parse()
        .map_err(|_| MenuError::ArgumentFormat(raw.to_string()))?;
    let year = if year < 100 { 2000 + year } else { year };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| MenuError::ArgumentFormat(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digit_year() {
        let date = parse_date_arg("03.06.2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn accepts_two_digit_year_and_single_digits() {
        let date = parse_date_arg("3.6.24").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in ["", "yesterday", "2024-06-03", "3.6", "3.6.202"] {
            assert!(matches!(
                parse_date_arg(raw),
                Err(MenuError::ArgumentFormat(_))
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_date() {
        assert!(matches!(
            parse_date_arg("31.02.2024"),
            Err(MenuError::ArgumentFormat(_))
        ));
    }
}
