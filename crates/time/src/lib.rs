pub use chrono;

use chrono::{Datelike as _, Local, NaiveDate, NaiveDateTime};
use eyre::{Context as _, Result};

pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";
pub const SESSION_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_birthday(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT)
        .with_context(|| format!("Invalid birthday: {}", date))
}

pub fn parse_session_time(date_time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date_time, SESSION_TIME_FORMAT).ok()
}

/// Full years between `birthday` and `today`.
pub fn age_at(birthday: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

pub fn age(birthday: NaiveDate) -> u32 {
    age_at(birthday, Local::now().date_naive())
}

pub fn age_from_birthday(date: &str) -> Result<u32> {
    Ok(age(parse_birthday(date)?))
}

/// True only when `date_time` parses and lies strictly before `now`.
/// An unparsable string is never reported as past.
pub fn is_in_past_at(date_time: &str, now: NaiveDateTime) -> bool {
    match parse_session_time(date_time) {
        Some(date_time) => date_time < now,
        None => false,
    }
}

pub fn is_in_past(date_time: &str) -> bool {
    is_in_past_at(date_time, Local::now().naive_local())
}

/// `dd-MM-yyyy HH:mm` -> `yyyy-MM-ddTHH:mm`, raw input when it does not parse.
pub fn display_time(date_time: &str) -> String {
    match parse_session_time(date_time) {
        Some(date_time) => date_time.format(DISPLAY_TIME_FORMAT).to_string(),
        None => date_time.to_owned(),
    }
}

/// `dd-MM-yyyy` -> `yyyy-MM-dd`, raw input when it does not parse.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => date.to_owned(),
    }
}

pub fn format_birthday(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

pub fn format_session_time(date_time: NaiveDateTime) -> String {
    date_time.format(SESSION_TIME_FORMAT).to_string()
}

/// Date portion of a stored session time, used to group sessions by day.
pub fn date_part(date_time: &str) -> &str {
    date_time.get(..10).unwrap_or(date_time)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birthday = date(2000, 6, 15);
        assert_eq!(age_at(birthday, date(2018, 6, 14)), 17);
        assert_eq!(age_at(birthday, date(2018, 6, 15)), 18);
        assert_eq!(age_at(birthday, date(2018, 12, 1)), 18);
    }

    #[test]
    fn test_age_of_future_birthday_is_zero() {
        assert_eq!(age_at(date(2030, 1, 1), date(2020, 1, 1)), 0);
    }

    #[test]
    fn test_parse_birthday() {
        assert_eq!(parse_birthday("15-06-2000").unwrap(), date(2000, 6, 15));
        assert!(parse_birthday("2000-06-15").is_err());
        assert!(parse_birthday("31-02-2000").is_err());
    }

    #[test]
    fn test_is_in_past() {
        let now = date(2024, 3, 10).and_hms_opt(12, 0, 0).unwrap();
        assert!(is_in_past_at("10-03-2024 11:59", now));
        assert!(!is_in_past_at("10-03-2024 12:00", now));
        assert!(!is_in_past_at("11-03-2024 08:00", now));
    }

    #[test]
    fn test_unparsable_time_is_not_past() {
        let now = date(2024, 3, 10).and_hms_opt(12, 0, 0).unwrap();
        assert!(!is_in_past_at("yesterday", now));
        assert!(!is_in_past_at("10/03/2020 10:00", now));
    }

    #[test]
    fn test_is_in_past_uses_wall_clock() {
        let hour_ago = Local::now().naive_local() - Duration::hours(1);
        let tomorrow = Local::now().naive_local() + Duration::days(1);
        assert!(is_in_past(&format_session_time(hour_ago)));
        assert!(!is_in_past(&format_session_time(tomorrow)));
    }

    #[test]
    fn test_display() {
        assert_eq!(display_time("23-01-2025 10:00"), "2025-01-23T10:00");
        assert_eq!(display_time("garbage"), "garbage");
        assert_eq!(display_date("23-01-2025"), "2025-01-23");
        assert_eq!(date_part("23-01-2025 10:00"), "23-01-2025");
        assert_eq!(date_part("short"), "short");
    }
}
