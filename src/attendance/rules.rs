//! Attendance date rules: weekday gate, edit window, query normalization.
//!
//! All functions take `today` from the caller; nothing here reads a clock.

use crate::types::DEFAULT_EDITABLE_WINDOW_DAYS;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Format accepted by [`normalize_to_valid_attendance_date`]
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Attendance rule parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRules {
    /// Days back from today (inclusive) in which a record may still be edited
    pub editable_window_days: u32,
}

impl Default for AttendanceRules {
    fn default() -> Self {
        Self {
            editable_window_days: DEFAULT_EDITABLE_WINDOW_DAYS,
        }
    }
}

impl AttendanceRules {
    pub fn new(editable_window_days: u32) -> Self {
        Self {
            editable_window_days,
        }
    }

    /// First day of the edit window ending at `today`.
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.editable_window_days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// `date` lies in `[today - window, today]`.
    pub fn is_editable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.window_start(today) && date <= today
    }
}

/// Monday through Friday.
pub fn is_legal_attendance_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `date` lies in the default 30-day edit window ending at `today`.
pub fn is_editable(date: NaiveDate, today: NaiveDate) -> bool {
    AttendanceRules::default().is_editable(date, today)
}

/// [`is_editable`] for timestamps; time of day is dropped on both sides.
pub fn is_editable_at(at: NaiveDateTime, now: NaiveDateTime) -> bool {
    is_editable(at.date(), now.date())
}

/// Closest weekday at or before `date`.
///
/// At the very start of the calendar, where no earlier Friday exists, this
/// saturates to the following Monday so the result is always a weekday.
pub fn previous_weekday(date: NaiveDate) -> NaiveDate {
    let (back, forward) = match date.weekday() {
        Weekday::Sat => (1, 2),
        Weekday::Sun => (2, 1),
        _ => return date,
    };
    date.checked_sub_days(Days::new(back))
        .or_else(|| date.checked_add_days(Days::new(forward)))
        .unwrap_or(date)
}

/// Coerce an optional `YYYY-MM-DD` query value into a recordable date.
///
/// Missing or unparsable input means `today`. Weekends snap back to Friday,
/// future dates clamp to `today`, and the snap runs again after the clamp
/// since `today` may itself fall on a weekend.
pub fn normalize_to_valid_attendance_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    let requested = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => NaiveDate::parse_from_str(s, QUERY_DATE_FORMAT).unwrap_or_else(|e| {
            debug!(input = s, error = %e, "Unparsable attendance date, using today");
            today
        }),
        None => today,
    };

    let date = previous_weekday(requested);
    if date > today {
        previous_weekday(today)
    } else {
        date
    }
}
