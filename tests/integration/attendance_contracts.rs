use chrono::NaiveDate;
use codac_core::attendance::{
    is_editable, is_legal_attendance_day, is_selectable_calendar_day,
    normalize_to_valid_attendance_date, AttendanceDate,
};
use codac_core::clock::{Clock, FixedClock};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn weekday_gate_each_day_of_a_week() {
    // 2024-06-10 (Mon) .. 2024-06-16 (Sun)
    let expected = [true, true, true, true, true, false, false];
    for (offset, legal) in expected.iter().enumerate() {
        let date = ymd(2024, 6, 10 + offset as u32);
        assert_eq!(is_legal_attendance_day(date), *legal, "{}", date);
    }
}

#[test]
fn editable_window_is_thirty_days_inclusive() {
    let today = ymd(2024, 6, 30);
    assert!(is_editable(ymd(2024, 5, 31), today));
    assert!(!is_editable(ymd(2024, 5, 30), today));
}

#[test]
fn saturday_query_normalizes_to_friday() {
    let today = ymd(2024, 6, 12);
    assert_eq!(
        normalize_to_valid_attendance_date(Some("2024-06-01"), today),
        ymd(2024, 5, 31)
    );
}

#[test]
fn sunday_today_without_input_gives_friday() {
    let clock = FixedClock(ymd(2024, 6, 16));
    assert_eq!(
        normalize_to_valid_attendance_date(None, clock.today()),
        ymd(2024, 6, 14)
    );
}

#[test]
fn malformed_input_equals_normalized_today() {
    let today = ymd(2024, 6, 16);
    assert_eq!(
        normalize_to_valid_attendance_date(Some("not-a-date"), today),
        normalize_to_valid_attendance_date(None, today)
    );
}

#[test]
fn normalized_dates_are_always_selectable() {
    let today = ymd(2024, 6, 15);
    for raw in ["2024-06-15", "2024-06-16", "2030-01-01", "2024-01-06", "junk"] {
        let date = normalize_to_valid_attendance_date(Some(raw), today);
        assert!(is_selectable_calendar_day(date, today), "{} -> {}", raw, date);
    }
}

#[test]
fn attendance_date_serializes_camel_case() {
    let evaluated = AttendanceDate::evaluate(ymd(2024, 6, 14), ymd(2024, 6, 16));
    let value = serde_json::to_value(evaluated).unwrap();
    assert_eq!(value["date"], "2024-06-14");
    assert_eq!(value["isWeekday"], true);
    assert_eq!(value["isWithinEditableWindow"], true);
    assert_eq!(value["isFuture"], false);
}
