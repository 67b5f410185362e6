//! Cross-member aggregates: global totals, category, month and monthly
//! attendance breakdowns.
//!
//! All maps are `BTreeMap`s so serialized output has a fixed key order.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::month_key;
use crate::category::ExcuseCategory;
use crate::types::Cancellation;
use crate::user_stats::UserStats;

/// Category -> cancellation count; every category present.
pub type CategoryStats = BTreeMap<ExcuseCategory, usize>;

/// `YYYY-MM` -> cancellation count.
pub type MonthStats = BTreeMap<String, usize>;

/// `YYYY-MM` -> average attendance rate (0..=100) over that month's calendar days.
pub type MonthlyAttendanceStats = BTreeMap<String, u32>;

/// Headline totals for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_calendar_days: usize,
    pub total_users: usize,
    pub total_cancellations: usize,
    pub total_attendances: usize,
    /// Unweighted integer mean of the per-member rates.
    pub average_attendance_rate: u32,
}

/// Sum per-member counts into global totals.
///
/// `total_attendances` equals `total_calendar_days * total_users -
/// total_cancellations` whenever the stats came out of one evaluation.
pub fn global_stats(user_stats: &[UserStats], total_calendar_days: usize) -> GlobalStats {
    let total_users = user_stats.len();

    let total_cancellations = user_stats.iter().map(|u| u.cancellation_count).sum();
    let total_attendances = user_stats.iter().map(|u| u.attendance_count).sum();
    let rate_sum: u64 = user_stats.iter().map(|u| u64::from(u.attendance_rate)).sum();

    let average_attendance_rate = if total_users == 0 {
        0
    } else {
        (rate_sum / total_users as u64) as u32
    };

    GlobalStats {
        total_calendar_days,
        total_users,
        total_cancellations,
        total_attendances,
        average_attendance_rate,
    }
}

/// Count cancellations per category, with zero entries for unused ones.
pub fn category_stats(cancellations: &[Cancellation]) -> CategoryStats {
    let mut stats: CategoryStats = ExcuseCategory::ALL.into_iter().map(|c| (c, 0)).collect();
    for cancellation in cancellations {
        *stats.entry(cancellation.category).or_insert(0) += 1;
    }
    stats
}

/// Count cancellations per `YYYY-MM`.
pub fn month_stats(cancellations: &[Cancellation]) -> MonthStats {
    let mut stats = MonthStats::new();
    for cancellation in cancellations {
        *stats.entry(month_key(cancellation.date)).or_insert(0) += 1;
    }
    stats
}

/// Average per-day attendance rate for each month that has calendar days.
///
/// Each day's rate is `(total_users - absent) * 100 / total_users`; the
/// month value is the integer mean of its days. Empty when there are no
/// users.
pub fn monthly_attendance_stats(
    calendar: &[NaiveDate],
    cancellations: &[Cancellation],
    total_users: usize,
) -> MonthlyAttendanceStats {
    if total_users == 0 {
        return MonthlyAttendanceStats::new();
    }

    let mut absent_per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for cancellation in cancellations {
        *absent_per_day.entry(cancellation.date).or_insert(0) += 1;
    }

    // month -> (sum of daily rates, day count)
    let mut sums: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for day in calendar {
        let absent = absent_per_day.get(day).copied().unwrap_or(0).min(total_users);
        let rate = (total_users - absent) * 100 / total_users;
        let entry = sums.entry(month_key(*day)).or_insert((0, 0));
        entry.0 += rate;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(month, (rate_sum, days))| (month, (rate_sum / days) as u32))
        .collect()
}
