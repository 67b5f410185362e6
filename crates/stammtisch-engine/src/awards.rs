//! Superlative awards picked from the ranked member list.
//!
//! Each award is a fixed definition with a selector that returns a reference
//! into the ranked slice. The consistency and rising-star slots pick fixed
//! ranking positions rather than a measured statistic.

use serde::{Deserialize, Serialize};

use crate::category::ExcuseCategory;
use crate::user_stats::UserStats;

/// Selects a winner from the ranked stats, or `None` if nobody qualifies.
pub type Selector = fn(&[UserStats]) -> Option<&UserStats>;

/// A static award slot.
pub struct AwardDefinition {
    pub emoji: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color_tag: &'static str,
    pub selector: Selector,
}

/// An awarded slot with a snapshot of its winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub emoji: String,
    pub title: String,
    pub subtitle: String,
    pub winner: UserStats,
    pub color_tag: String,
}

/// Award slots in display order.
pub const AWARD_DEFINITIONS: &[AwardDefinition] = &[
    AwardDefinition {
        emoji: "👑",
        title: "Stammtisch-König",
        subtitle: "Höchste Anwesenheitsquote",
        color_tag: "from-yellow-500 to-amber-600",
        selector: select_highest_attendance,
    },
    AwardDefinition {
        emoji: "🔥",
        title: "Streak-Meister",
        subtitle: "Längste Anwesenheitsserie",
        color_tag: "from-orange-500 to-red-600",
        selector: select_longest_attendance_streak,
    },
    AwardDefinition {
        emoji: "🎨",
        title: "Kreativster Absager",
        subtitle: "Die besten Ausreden",
        color_tag: "from-purple-500 to-pink-600",
        selector: select_most_creative_excuser,
    },
    AwardDefinition {
        emoji: "📈",
        title: "Konsistenz-Champion",
        subtitle: "Zuverlässig wie ein Uhrwerk",
        color_tag: "from-green-500 to-emerald-600",
        selector: select_most_consistent,
    },
    AwardDefinition {
        emoji: "🌟",
        title: "Rising Star",
        subtitle: "Beste Entwicklung",
        color_tag: "from-blue-500 to-cyan-600",
        selector: select_rising_star,
    },
];

/// Evaluate every award definition against the ranked stats.
///
/// Definitions whose selector finds no winner are omitted.
pub fn select_awards(ranked: &[UserStats]) -> Vec<Award> {
    if ranked.is_empty() {
        return Vec::new();
    }

    AWARD_DEFINITIONS
        .iter()
        .filter_map(|def| {
            (def.selector)(ranked).map(|winner| Award {
                emoji: def.emoji.to_string(),
                title: def.title.to_string(),
                subtitle: def.subtitle.to_string(),
                winner: winner.clone(),
                color_tag: def.color_tag.to_string(),
            })
        })
        .collect()
}

/// Rank 1. The input is already sorted by rate.
pub fn select_highest_attendance(ranked: &[UserStats]) -> Option<&UserStats> {
    ranked.first()
}

/// Longest attendance streak; the first member seen wins ties.
///
/// Nobody qualifies when every streak is 0 (empty calendar).
pub fn select_longest_attendance_streak(ranked: &[UserStats]) -> Option<&UserStats> {
    first_strict_max(ranked, |u| u.max_attendance_streak.count)
}

/// Most `Creative` cancellations, falling back to the most cancellations of
/// any category when nobody has a creative one.
pub fn select_most_creative_excuser(ranked: &[UserStats]) -> Option<&UserStats> {
    first_strict_max(ranked, |u| u.count_in(ExcuseCategory::Creative))
        .or_else(|| first_strict_max(ranked, |u| u.cancellation_count))
}

/// Rank 2, or rank 1 when there is only one member.
pub fn select_most_consistent(ranked: &[UserStats]) -> Option<&UserStats> {
    ranked.get(1).or_else(|| ranked.first())
}

/// The middle of the ranking (index `len / 2`).
pub fn select_rising_star(ranked: &[UserStats]) -> Option<&UserStats> {
    ranked.get(ranked.len() / 2)
}

/// First entry whose metric is strictly greater than every earlier one,
/// ignoring zero.
fn first_strict_max(ranked: &[UserStats], metric: impl Fn(&UserStats) -> usize) -> Option<&UserStats> {
    let mut winner = None;
    let mut best = 0;
    for entry in ranked {
        let value = metric(entry);
        if value > best {
            best = value;
            winner = Some(entry);
        }
    }
    winner
}
