//! Orchestrates one evaluation: raw records in, statistics out.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{
    category_stats, global_stats, month_stats, monthly_attendance_stats, CategoryStats,
    GlobalStats, MonthStats, MonthlyAttendanceStats,
};
use crate::awards::{select_awards, Award};
use crate::calendar::{build_calendar, normalize_calendar, parse_weekday, Period};
use crate::cancellation::build_cancellations;
use crate::error::Result;
use crate::ranking::rank_users;
use crate::types::{AbsenceRecord, Cancellation, RawUser};
use crate::user_stats::{calculate_user_stats, UserStats};

fn default_weekday() -> String {
    "thursday".to_string()
}

/// Everything the data-access layer hands to the engine for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub period: Period,
    #[serde(default = "default_weekday")]
    pub weekday: String,
    #[serde(default)]
    pub blackout_dates: Vec<NaiveDate>,
    /// Pins "today"; callers fall back to the current date when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    pub users: Vec<RawUser>,
    #[serde(default)]
    pub absences: Vec<AbsenceRecord>,
}

impl EvaluationInput {
    /// Parse an input document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The full, immutable result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Ranked, rank 1 first.
    pub user_stats: Vec<UserStats>,
    pub global_stats: GlobalStats,
    pub category_stats: CategoryStats,
    pub month_stats: MonthStats,
    pub monthly_attendance_stats: MonthlyAttendanceStats,
    pub awards: Vec<Award>,
    /// All accepted cancellations, in input order.
    pub cancellations: Vec<Cancellation>,
}

impl EvaluationResult {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Evaluate a batch against an explicit calendar.
///
/// Never fails: records for unknown users, non-calendar dates or repeated
/// `(user, date)` pairs are skipped, and an empty calendar or directory
/// degrades every rate and aggregate to zero or empty.
pub fn evaluate(
    users: &[RawUser],
    records: &[AbsenceRecord],
    calendar: &[NaiveDate],
) -> EvaluationResult {
    let calendar = normalize_calendar(calendar);
    let users = dedup_directory(users);

    let cancellations = build_cancellations(&users, records, &calendar);
    let user_stats = rank_users(calculate_user_stats(&users, &calendar, &cancellations));

    let global = global_stats(&user_stats, calendar.len());
    let categories = category_stats(&cancellations);
    let months = month_stats(&cancellations);
    let monthly_attendance = monthly_attendance_stats(&calendar, &cancellations, users.len());
    let awards = select_awards(&user_stats);

    tracing::info!(
        calendar_days = global.total_calendar_days,
        users = global.total_users,
        cancellations = global.total_cancellations,
        dropped = records.len() - cancellations.len(),
        average_rate = global.average_attendance_rate,
        "evaluation complete"
    );

    EvaluationResult {
        user_stats,
        global_stats: global,
        category_stats: categories,
        month_stats: months,
        monthly_attendance_stats: monthly_attendance,
        awards,
        cancellations,
    }
}

/// Build the calendar described by `input` and evaluate it.
///
/// `today` is used when the document does not pin its own.
///
/// # Errors
/// Returns `EngineError::InvalidWeekday` if the weekday name is unknown.
pub fn evaluate_input(input: &EvaluationInput, today: NaiveDate) -> Result<EvaluationResult> {
    let weekday = parse_weekday(&input.weekday)?;
    let today = input.today.unwrap_or(today);
    let calendar = build_calendar(&input.period, weekday, &input.blackout_dates, today);
    Ok(evaluate(&input.users, &input.absences, &calendar))
}

/// Keep the first directory entry per id.
fn dedup_directory(users: &[RawUser]) -> Vec<RawUser> {
    let mut seen = HashSet::new();
    users
        .iter()
        .filter(|user| {
            let fresh = seen.insert(user.id.as_str());
            if !fresh {
                tracing::debug!(user_id = %user.id, "ignoring duplicate directory entry");
            }
            fresh
        })
        .cloned()
        .collect()
}
