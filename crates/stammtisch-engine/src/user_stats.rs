//! Per-member statistics: counts, rate, streaks, favorite excuse and title.
//!
//! Stats are rebuilt from scratch on every evaluation. Rank is left at 0
//! here and filled in by [`crate::ranking::rank_users`].

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::ExcuseCategory;
use crate::streak::{calculate_streaks, StreakResult};
use crate::types::{Cancellation, RawUser, User};

/// Fallback display emojis, assigned by directory position.
const USER_EMOJIS: [&str; 24] = [
    "👑", "🎯", "🔥", "⭐", "🎸", "🎮", "🍕", "🚀", "💪", "🎲", "🎭", "🌟", "🎪", "🎬", "🎵",
    "🎹", "🏆", "⚽", "🎱", "🎳", "🎯", "🎰", "🎼", "🎧",
];

/// Title for members who never cancelled, regardless of rate.
pub const LEGEND_TITLE: (&str, &str) = ("Die Legende", "👑");

/// `(min_rate, title, emoji)`, evaluated top-down; first satisfied wins.
pub const TITLE_THRESHOLDS: &[(u32, &str, &str)] = &[
    (90, "Fels in der Brandung", "🪨"),
    (80, "Der Wirtshaus-Veteran", "🍺"),
    (70, "Stammgast mit Ausnahmen", "✅"),
    (60, "Kommt wenn's passt", "🤷"),
    (50, "Der Spontane", "🎲"),
    (40, "Mystische Erscheinung", "👻"),
];

/// Below every threshold: titles keyed on the favorite excuse.
pub const CATEGORY_TITLES: &[(ExcuseCategory, &str, &str)] = &[
    (ExcuseCategory::Creative, "Ausreden-Künstler", "🎨"),
    (ExcuseCategory::NoMotivation, "Der Ehrliche", "😬"),
];

pub const FALLBACK_TITLE: (&str, &str) = ("Der Unsichtbare", "🫥");

/// Statistics for one member over one evaluation period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(flatten)]
    pub user: User,
    pub cancellation_count: usize,
    pub attendance_count: usize,
    /// Whole percent, 0..=100, truncated.
    pub attendance_rate: u32,
    pub max_attendance_streak: StreakResult,
    pub max_cancellation_streak: StreakResult,
    pub never_cancelled: bool,
    pub favorite_excuse_category: Option<ExcuseCategory>,
    /// 1-based position in the ranking; 0 until ranked.
    pub rank: usize,
    pub title: String,
    pub title_emoji: String,
    pub cancellations: Vec<Cancellation>,
}

impl UserStats {
    /// Number of this member's cancellations in `category`.
    pub fn count_in(&self, category: ExcuseCategory) -> usize {
        self.cancellations
            .iter()
            .filter(|c| c.category == category)
            .count()
    }
}

/// Attendance percentage, truncated toward zero; 0 for an empty calendar.
pub fn attendance_rate(attendance_count: usize, total_days: usize) -> u32 {
    if total_days == 0 {
        return 0;
    }
    // attendance_count <= total_days, so the result fits in 0..=100.
    ((attendance_count * 100) / total_days) as u32
}

/// The most frequent category among `cancellations`.
///
/// Ties resolve to the category that comes first in
/// [`ExcuseCategory::ALL`]. `None` when there are no cancellations.
pub fn favorite_category(cancellations: &[Cancellation]) -> Option<ExcuseCategory> {
    let mut best: Option<(ExcuseCategory, usize)> = None;

    for category in ExcuseCategory::ALL {
        let count = cancellations
            .iter()
            .filter(|c| c.category == category)
            .count();
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((category, count)),
        }
    }

    best.map(|(category, _)| category)
}

/// Resolve `(title, emoji)` for a member.
pub fn assign_title(
    attendance_rate: u32,
    never_cancelled: bool,
    favorite: Option<ExcuseCategory>,
) -> (&'static str, &'static str) {
    if never_cancelled {
        return LEGEND_TITLE;
    }

    if let Some(&(_, title, emoji)) = TITLE_THRESHOLDS
        .iter()
        .find(|(min_rate, _, _)| attendance_rate >= *min_rate)
    {
        return (title, emoji);
    }

    if let Some(favorite) = favorite {
        if let Some(&(_, title, emoji)) = CATEGORY_TITLES.iter().find(|(c, _, _)| *c == favorite) {
            return (title, emoji);
        }
    }

    FALLBACK_TITLE
}

/// Compute unranked stats for every member, in directory order.
///
/// `calendar` must be normalized (sorted, deduplicated) and `cancellations`
/// must already be restricted to calendar days with one entry per
/// `(user, date)`.
pub fn calculate_user_stats(
    users: &[RawUser],
    calendar: &[NaiveDate],
    cancellations: &[Cancellation],
) -> Vec<UserStats> {
    let total_days = calendar.len();

    let mut by_user: HashMap<&str, Vec<Cancellation>> = HashMap::new();
    for cancellation in cancellations {
        by_user
            .entry(cancellation.user_id.as_str())
            .or_default()
            .push(cancellation.clone());
    }

    users
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let own = by_user.get(raw.id.as_str()).cloned().unwrap_or_default();
            let absent: BTreeSet<NaiveDate> = own.iter().map(|c| c.date).collect();

            let cancellation_count = own.len();
            let attendance_count = total_days.saturating_sub(cancellation_count);
            let rate = attendance_rate(attendance_count, total_days);
            let never_cancelled = cancellation_count == 0;

            let (attendance_streak, cancellation_streak) = calculate_streaks(calendar, &absent);
            let favorite = favorite_category(&own);
            let (title, title_emoji) = assign_title(rate, never_cancelled, favorite);

            let display_emoji = raw
                .display_emoji
                .clone()
                .unwrap_or_else(|| USER_EMOJIS[index % USER_EMOJIS.len()].to_string());

            UserStats {
                user: User {
                    id: raw.id.clone(),
                    name: raw.name.clone(),
                    display_emoji,
                },
                cancellation_count,
                attendance_count,
                attendance_rate: rate,
                max_attendance_streak: attendance_streak,
                max_cancellation_streak: cancellation_streak,
                never_cancelled,
                favorite_excuse_category: favorite,
                rank: 0,
                title: title.to_string(),
                title_emoji: title_emoji.to_string(),
                cancellations: own,
            }
        })
        .collect()
}
