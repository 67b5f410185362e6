//! Global ordering of members.

use crate::user_stats::UserStats;

/// Sort by attendance rate (descending), then name (ascending), then id,
/// and assign 1-based ranks.
///
/// The id is a last resort for members sharing both rate and name, so the
/// order is total and identical across runs.
pub fn rank_users(mut stats: Vec<UserStats>) -> Vec<UserStats> {
    stats.sort_by(|a, b| {
        b.attendance_rate
            .cmp(&a.attendance_rate)
            .then_with(|| a.user.name.cmp(&b.user.name))
            .then_with(|| a.user.id.cmp(&b.user.id))
    });

    for (index, entry) in stats.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    stats
}

/// Display label for a rank: medals for the podium, `#N` otherwise.
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}
