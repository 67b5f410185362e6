//! Property-based tests for evaluation invariants using proptest.
//!
//! These hold for *any* directory, absence log and calendar, not just the
//! hand-picked scenarios in `evaluator_tests.rs`.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use stammtisch_engine::{evaluate, AbsenceRecord, ExcuseCategory, RawUser};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 4).unwrap()
}

/// Week offsets from `base()`; duplicates and any order are allowed.
fn arb_calendar() -> impl Strategy<Value = Vec<NaiveDate>> {
    prop::collection::vec(0u64..60, 0..30).prop_map(|weeks| {
        weeks
            .into_iter()
            .map(|w| base().checked_add_days(Days::new(w * 7)).unwrap())
            .collect()
    })
}

fn arb_users() -> impl Strategy<Value = Vec<RawUser>> {
    (0usize..7).prop_map(|n| {
        (0..n)
            .map(|i| RawUser::new(format!("u{i}"), format!("Name {}", i % 3)))
            .collect()
    })
}

fn arb_message() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("Meeting bis 20 Uhr".to_string())),
        Just(Some("Bei dem Wetter geh ich nicht raus".to_string())),
        Just(Some("Netflix hat neue Staffel released, ihr versteht".to_string())),
        "[a-z ]{0,40}".prop_map(Some),
    ]
}

/// User indices up to 9 so some records reference unknown users; day offsets
/// in whole days so some records miss the calendar.
fn arb_absences() -> impl Strategy<Value = Vec<AbsenceRecord>> {
    prop::collection::vec((0usize..10, 0u64..420, arb_message()), 0..80).prop_map(|rows| {
        rows.into_iter()
            .map(|(user, day, message)| AbsenceRecord {
                user_id: format!("u{user}"),
                date: base().checked_add_days(Days::new(day)).unwrap(),
                message,
            })
            .collect()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn attendance_plus_cancellations_is_calendar_length(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        let days = result.global_stats.total_calendar_days;
        for stats in &result.user_stats {
            prop_assert_eq!(stats.attendance_count + stats.cancellation_count, days);
        }
    }

    #[test]
    fn per_user_cancellations_sum_to_total(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        let sum: usize = result.user_stats.iter().map(|u| u.cancellation_count).sum();
        prop_assert_eq!(sum, result.cancellations.len());
        prop_assert_eq!(result.global_stats.total_cancellations, result.cancellations.len());
        prop_assert_eq!(
            result.global_stats.total_attendances,
            result.global_stats.total_calendar_days * result.global_stats.total_users
                - result.cancellations.len()
        );
    }

    #[test]
    fn rates_are_bounded_and_perfect_attendance_is_legendary(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        let days = result.global_stats.total_calendar_days;
        for stats in &result.user_stats {
            prop_assert!(stats.attendance_rate <= 100);
            if stats.cancellation_count == 0 {
                prop_assert!(stats.never_cancelled);
                prop_assert_eq!(stats.title.as_str(), "Die Legende");
                if days > 0 {
                    prop_assert_eq!(stats.attendance_rate, 100);
                }
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let first = evaluate(&users, &absences, &calendar);
        let second = evaluate(&users, &absences, &calendar);
        prop_assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
    }

    #[test]
    fn ranking_is_sorted_with_name_tie_break(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        for (i, stats) in result.user_stats.iter().enumerate() {
            prop_assert_eq!(stats.rank, i + 1);
        }
        for pair in result.user_stats.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.attendance_rate >= b.attendance_rate);
            if a.attendance_rate == b.attendance_rate {
                prop_assert!(a.user.name <= b.user.name);
            }
        }
    }

    #[test]
    fn award_winners_match_their_criteria(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        if let Some(first) = result.awards.first() {
            prop_assert_eq!(first.winner.rank, 1);
        }
        if let Some(streak) = result.awards.iter().find(|a| a.title == "Streak-Meister") {
            for stats in &result.user_stats {
                prop_assert!(
                    streak.winner.max_attendance_streak.count >= stats.max_attendance_streak.count
                );
            }
        }
    }

    #[test]
    fn streaks_never_exceed_their_day_counts(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        for stats in &result.user_stats {
            prop_assert!(stats.max_attendance_streak.count <= stats.attendance_count);
            prop_assert!(stats.max_cancellation_streak.count <= stats.cancellation_count);
            if stats.max_attendance_streak.count > 0 {
                prop_assert!(stats.max_attendance_streak.start <= stats.max_attendance_streak.end);
            } else {
                prop_assert!(stats.max_attendance_streak.start.is_none());
            }
        }
    }

    #[test]
    fn category_stats_cover_all_categories(
        users in arb_users(),
        absences in arb_absences(),
        calendar in arb_calendar(),
    ) {
        let result = evaluate(&users, &absences, &calendar);
        prop_assert_eq!(result.category_stats.len(), ExcuseCategory::ALL.len());
        let total: usize = result.category_stats.values().sum();
        prop_assert_eq!(total, result.cancellations.len());
        let by_month: usize = result.month_stats.values().sum();
        prop_assert_eq!(by_month, result.cancellations.len());
        prop_assert!(result.monthly_attendance_stats.values().all(|&rate| rate <= 100));
    }
}
