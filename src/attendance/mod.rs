//! Attendance date rules.
//!
//! Weekday gate, trailing edit window and query-date normalization, plus the
//! calendar helpers built on them.

pub mod calendar;
pub mod rules;

pub use calendar::{is_selectable_calendar_day, selectable_days_in_month, AttendanceDate};
pub use rules::{
    is_editable, is_editable_at, is_legal_attendance_day, normalize_to_valid_attendance_date,
    previous_weekday, AttendanceRules, QUERY_DATE_FORMAT,
};
