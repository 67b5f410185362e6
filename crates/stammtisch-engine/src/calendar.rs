//! Calendar construction -- the ordered set of valid event dates in a period.
//!
//! Every rate in the engine uses the calendar as its denominator, so the
//! output here is strictly increasing, restricted to one weekday, free of
//! blackout dates and never later than "today".

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// An inclusive date range for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The standard season for `year`: 1 December of the previous year
    /// through 30 November of `year`.
    pub fn season(year: i32) -> Self {
        // Both dates exist in every proleptic Gregorian year chrono supports.
        let start = NaiveDate::from_ymd_opt(year - 1, 12, 1).unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(year, 11, 30).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// The season a date belongs to: December counts towards the next year.
    pub fn season_of(date: NaiveDate) -> Self {
        if date.month() == 12 {
            Self::season(date.year() + 1)
        } else {
            Self::season(date.year())
        }
    }

    /// The end date capped at `today`; future dates are never evaluated.
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end.min(today)
    }
}

/// Parse an English weekday name, full or three-letter, case-insensitive.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let weekday = match name.trim().to_lowercase().as_str() {
        "mon" | "monday" => Weekday::Mon,
        "tue" | "tuesday" => Weekday::Tue,
        "wed" | "wednesday" => Weekday::Wed,
        "thu" | "thursday" => Weekday::Thu,
        "fri" | "friday" => Weekday::Fri,
        "sat" | "saturday" => Weekday::Sat,
        "sun" | "sunday" => Weekday::Sun,
        _ => return Err(EngineError::InvalidWeekday(name.to_string())),
    };
    Ok(weekday)
}

/// Lower-case English name, accepted back by [`parse_weekday`].
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// The current date in an IANA timezone (e.g. "Europe/Berlin").
///
/// # Errors
/// Returns `EngineError::InvalidTimezone` if the name is not a known zone.
pub fn today_in(timezone: &str) -> Result<NaiveDate> {
    let tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| EngineError::InvalidTimezone(timezone.to_string()))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

/// Enumerate every `weekday` in `period`, up to `min(period.end, today)`,
/// skipping blackout dates.
///
/// An inverted or fully future period yields an empty calendar.
pub fn build_calendar(
    period: &Period,
    weekday: Weekday,
    blackout: &[NaiveDate],
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let end = period.effective_end(today);
    if period.start > end {
        return Vec::new();
    }

    let blackout: BTreeSet<NaiveDate> = blackout.iter().copied().collect();

    let offset = (7 + weekday.num_days_from_monday()
        - period.start.weekday().num_days_from_monday())
        % 7;

    let mut days = Vec::new();
    let mut cursor = period.start.checked_add_days(Days::new(u64::from(offset)));

    while let Some(day) = cursor {
        if day > end {
            break;
        }
        if !blackout.contains(&day) {
            days.push(day);
        }
        cursor = day.checked_add_days(Days::new(7));
    }

    days
}

/// Sort and deduplicate a caller-supplied calendar.
pub fn normalize_calendar(days: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut days = days.to_vec();
    days.sort_unstable();
    days.dedup();
    days
}

/// `YYYY-MM` grouping key for a date.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
