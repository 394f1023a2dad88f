//! Форматирование дат для таблиц и полей ввода

use chrono::{DateTime, NaiveDate, Utc};

/// `DD.MM.YYYY HH:MM`, например "15.03.2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// `DD.MM.YYYY`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Значение `<input type="date">` в начало этого дня по UTC
pub fn parse_date_input(text: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Значение для `<input type="date">`
pub fn to_date_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&value), "15.03.2024 14:02");
        assert_eq!(format_date(&value), "15.03.2024");
    }

    #[test]
    fn test_date_input() {
        let value = parse_date_input("2024-12-31").unwrap();
        assert_eq!(to_date_input(&value), "2024-12-31");
        assert_eq!(format_datetime(&value), "31.12.2024 00:00");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_date_input("invalid"), None);
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
    }
}
