//! Calendar-facing views over the attendance rules.

use super::rules::{is_legal_attendance_day, AttendanceRules};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A date together with the flags the attendance UI needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDate {
    pub date: NaiveDate,
    pub is_weekday: bool,
    pub is_within_editable_window: bool,
    pub is_future: bool,
}

impl AttendanceDate {
    /// Evaluate `date` against the default rules.
    pub fn evaluate(date: NaiveDate, today: NaiveDate) -> Self {
        Self::evaluate_with(&AttendanceRules::default(), date, today)
    }

    pub fn evaluate_with(rules: &AttendanceRules, date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            is_weekday: is_legal_attendance_day(date),
            is_within_editable_window: rules.is_editable(date, today),
            is_future: date > today,
        }
    }

    /// Attendance can be recorded for this date.
    pub fn is_selectable(&self) -> bool {
        self.is_weekday && !self.is_future
    }

    /// An existing record for this date can be changed.
    pub fn is_editable(&self) -> bool {
        self.is_weekday && self.is_within_editable_window
    }
}

/// Calendar cell gate: a weekday that is not in the future.
pub fn is_selectable_calendar_day(date: NaiveDate, today: NaiveDate) -> bool {
    is_legal_attendance_day(date) && date <= today
}

/// Selectable days of a month, in order. Invalid months yield nothing.
pub fn selectable_days_in_month(year: i32, month: u32, today: NaiveDate) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month0() == first.month0())
        .filter(|d| is_selectable_calendar_day(*d, today))
        .collect()
}
