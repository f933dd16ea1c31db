use chrono::NaiveDate;
use datecalc::utils::datetime::*;
use datecalc::DateCalcError;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_format_display_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(format_date(date, DISPLAY_DATE_FORMAT).unwrap(), "2024 Jan 15 [Mon]");
}

#[test]
fn test_format_date_rejects_bad_formats() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert!(matches!(format_date(date, "%Y-%"), Err(DateCalcError::InvalidFormat(_))));
    // Time fields have nothing to render on a date
    assert!(matches!(format_date(date, "%H:%M"), Err(DateCalcError::InvalidFormat(_))));
}

#[test]
fn test_parse_iso_and_display_forms() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(parse_date("2024-01-15").unwrap(), expected);
    assert_eq!(parse_date("2024 Jan 15 [Mon]").unwrap(), expected);
    assert_eq!(parse_date("  2024-01-15 ").unwrap(), expected);
}

#[test]
fn test_parse_today_keyword() {
    assert_eq!(parse_date("today").unwrap(), today());
    assert_eq!(parse_date("Today").unwrap(), today());
}

#[test]
fn test_parse_rejects_malformed_input() {
    for input in ["", "2024-02-30", "15/01/2024", "2024 Jan 15 [Tue]", "tomorrow"] {
        match parse_date(input) {
            Err(DateCalcError::InvalidDate(text)) => assert_eq!(text, input.trim()),
            other => panic!("expected InvalidDate for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_with_custom_format_falls_back() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(parse_date_with_format("15.01.2024", "%d.%m.%Y").unwrap(), expected);
    assert_eq!(parse_date_with_format("2024-01-15", "%d.%m.%Y").unwrap(), expected);
    assert!(parse_date_with_format("15.01.24x", "%d.%m.%Y").is_err());
}
