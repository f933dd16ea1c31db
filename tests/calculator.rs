use chrono::NaiveDate;
use datecalc::constants::{BUSINESS_MODE_OFF, BUSINESS_MODE_ON};
use datecalc::{BusinessDayCount, Calculator, Comparison, Offset};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_default_calculator() {
    let calculator = Calculator::default();
    assert!(!calculator.business_mode());
    assert_eq!(calculator.offset_limit(), 250);
}

#[test]
fn test_toggle_business_mode_messages() {
    let mut calculator = Calculator::default();
    assert_eq!(calculator.toggle_business_mode(), BUSINESS_MODE_ON);
    assert!(calculator.business_mode());
    assert_eq!(calculator.toggle_business_mode(), BUSINESS_MODE_OFF);
    assert!(!calculator.business_mode());
}

#[test]
fn test_calendar_add() {
    let calculator = Calculator::default();
    let addition = calculator.add(date(2024, 1, 15), 1, 2, 3);
    assert_eq!(addition.base, date(2024, 1, 15));
    assert_eq!(addition.result, date(2025, 3, 18));
    assert_eq!(
        addition.offset,
        Offset::Calendar {
            years: 1,
            months: 2,
            days: 3
        }
    );
}

#[test]
fn test_business_add_ignores_years_and_months() {
    let calculator = Calculator::new(true, 250);
    let addition = calculator.add(date(2024, 1, 15), 3, 7, 5);
    assert_eq!(addition.offset, Offset::Business(5));
    assert_eq!(addition.result, date(2024, 1, 22));
}

#[test]
fn test_offsets_are_clamped_to_limit() {
    let calculator = Calculator::default();
    assert_eq!(
        calculator.offset(300, -1000, 250),
        Offset::Calendar {
            years: 250,
            months: -250,
            days: 250
        }
    );

    let business = Calculator::new(true, 10);
    assert_eq!(business.offset(0, 0, -11), Offset::Business(-10));
}

#[test]
fn test_compare_calendar_mode() {
    let calculator = Calculator::default();
    let comparison = calculator.compare(date(2025, 1, 1), date(2024, 1, 1));
    match comparison {
        Comparison::Calendar(duration) => {
            assert_eq!(duration.total_days, 366);
            assert_eq!(duration.years, 1);
        }
        Comparison::Business(_) => panic!("expected a calendar comparison"),
    }
    assert_eq!(comparison.to_string(), "1 years\n0 months\n0 days\n\n[366 total days]");
}

#[test]
fn test_compare_business_mode() {
    let calculator = Calculator::new(true, 250);
    let comparison = calculator.compare(date(2024, 1, 22), date(2024, 1, 15));
    assert_eq!(comparison, Comparison::Business(BusinessDayCount(5)));
    assert_eq!(comparison.to_string(), "5 business days");
}

#[test]
fn test_results_serialize_to_json() {
    let calculator = Calculator::default();
    let addition = calculator.add(date(2024, 1, 15), 0, 0, -20);
    let json = serde_json::to_value(addition).unwrap();
    assert_eq!(json["base"], "2024-01-15");
    assert_eq!(json["result"], "2023-12-26");
    assert_eq!(json["offset"]["calendar"]["days"], -20);

    let business = Calculator::new(true, 250);
    let json = serde_json::to_value(business.compare(date(2024, 1, 15), date(2024, 1, 22))).unwrap();
    assert_eq!(json["business"], 5);

    let json = serde_json::to_value(calculator.compare(date(2024, 1, 15), date(2024, 3, 18))).unwrap();
    assert_eq!(json["calendar"]["months"], 2);
    assert_eq!(json["calendar"]["total_days"], 63);
}
