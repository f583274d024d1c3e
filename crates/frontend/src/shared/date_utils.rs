/// Utilities for date and time formatting
///
/// Wire dates are ISO 8601; screens show pt-BR formats.
use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Month name for 1..=12, empty otherwise
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => "",
    }
}

fn split_date(date_str: &str) -> Option<(&str, &str, &str)> {
    let date_part = date_str.split('T').next()?;
    let (year, rest) = date_part.split_once('-')?;
    let (month, day) = rest.split_once('-')?;
    Some((year, month, day))
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    match split_date(date_str) {
        Some((year, month, day)) => format!("{}/{}/{}", day, month, year),
        None => date_str.to_string(),
    }
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((_, time_part)) = datetime_str.split_once('T') {
        if split_date(datetime_str).is_some() {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", format_date(datetime_str), hhmm);
        }
    }
    datetime_str.to_string()
}

/// Example: "2024-03-15" -> "15 de março de 2024"
pub fn format_long_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => format!("{} de {} de {}", d.day(), month_name(d.month()), d.year()),
        Err(_) => date_str.to_string(),
    }
}

/// Value of an `<input type="date">`, empty when unset
pub fn to_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-15"), "15 de março de 2024");
        assert_eq!(format_long_date("2023-01-01T00:00:00Z"), "1 de janeiro de 2023");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_input_date_round_trip() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29);
        assert_eq!(to_input_date(d), "2024-02-29");
        assert_eq!(parse_input_date("2024-02-29"), d);
        assert_eq!(parse_input_date(""), None);
        assert_eq!(to_input_date(None), "");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_long_date("invalid"), "invalid");
    }
}
