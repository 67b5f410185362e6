//! Longest attendance and absence runs over the calendar.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A maximal run of same-status calendar days.
///
/// A `count` of 0 has no date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakResult {
    pub count: usize,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Compute `(attendance, absence)` streaks in one forward pass.
///
/// `calendar` must be in chronological order. Each counter resets when a day
/// of the other kind occurs; ties keep the earliest run.
pub fn calculate_streaks(
    calendar: &[NaiveDate],
    absent_dates: &BTreeSet<NaiveDate>,
) -> (StreakResult, StreakResult) {
    let mut best_attendance = StreakResult::default();
    let mut best_absence = StreakResult::default();

    let mut attendance_run = 0usize;
    let mut attendance_start = None;
    let mut absence_run = 0usize;
    let mut absence_start = None;

    for &day in calendar {
        if absent_dates.contains(&day) {
            if absence_run == 0 {
                absence_start = Some(day);
            }
            absence_run += 1;
            if absence_run > best_absence.count {
                best_absence = StreakResult {
                    count: absence_run,
                    start: absence_start,
                    end: Some(day),
                };
            }
            attendance_run = 0;
        } else {
            if attendance_run == 0 {
                attendance_start = Some(day);
            }
            attendance_run += 1;
            if attendance_run > best_attendance.count {
                best_attendance = StreakResult {
                    count: attendance_run,
                    start: attendance_start,
                    end: Some(day),
                };
            }
            absence_run = 0;
        }
    }

    (best_attendance, best_absence)
}
