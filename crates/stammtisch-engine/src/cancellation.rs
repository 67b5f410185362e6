//! Join raw absence records with the directory and the classifier.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;

use crate::classifier::classify;
use crate::types::{AbsenceRecord, Cancellation, RawUser};

/// Build classified cancellations from raw absence records.
///
/// Output follows input order. Records are dropped silently (logged at
/// debug level) when:
///
/// - the user id is not in the directory,
/// - the date is not a calendar day,
/// - the same user already has a cancellation on that date.
pub fn build_cancellations(
    users: &[RawUser],
    records: &[AbsenceRecord],
    calendar: &[NaiveDate],
) -> Vec<Cancellation> {
    let mut directory: HashMap<&str, &RawUser> = HashMap::with_capacity(users.len());
    for user in users {
        directory.entry(user.id.as_str()).or_insert(user);
    }

    let calendar: BTreeSet<NaiveDate> = calendar.iter().copied().collect();
    let mut seen: HashSet<(&str, NaiveDate)> = HashSet::new();
    let mut cancellations = Vec::with_capacity(records.len());

    for record in records {
        let Some(user) = directory.get(record.user_id.as_str()) else {
            tracing::debug!(user_id = %record.user_id, date = %record.date, "dropping absence for unknown user");
            continue;
        };

        if !calendar.contains(&record.date) {
            tracing::debug!(user_id = %record.user_id, date = %record.date, "dropping absence outside the calendar");
            continue;
        }

        if !seen.insert((user.id.as_str(), record.date)) {
            tracing::debug!(user_id = %record.user_id, date = %record.date, "dropping duplicate absence");
            continue;
        }

        let message = record.message.clone().unwrap_or_default();
        let category = classify(Some(&message));

        cancellations.push(Cancellation {
            date: record.date,
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            message,
            category,
        });
    }

    cancellations
}
