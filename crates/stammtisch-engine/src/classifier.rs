//! Keyword-heuristic excuse classification.
//!
//! Maps a free-text absence message to an [`ExcuseCategory`]:
//!
//! 1. No message (or an empty one) is `NoMotivation`.
//! 2. Otherwise the lower-cased message is tested against each keyword list
//!    in [`ExcuseCategory::CLASSIFICATION_ORDER`]; the first category with a
//!    substring hit wins.
//! 3. Unmatched messages longer than [`CREATIVE_MIN_LEN`] bytes are
//!    `Creative`; shorter ones fall back to `NoMotivation`.

use crate::category::ExcuseCategory;

/// Unmatched messages strictly longer than this (in bytes) count as creative.
pub const CREATIVE_MIN_LEN: usize = 30;

/// Classify an absence message.
///
/// Pure and order-sensitive: a message hitting keywords of two categories
/// always resolves to the one checked first.
pub fn classify(message: Option<&str>) -> ExcuseCategory {
    let message = match message {
        Some(m) if !m.is_empty() => m,
        _ => return ExcuseCategory::NoMotivation,
    };

    let lowered = message.to_lowercase();

    for category in ExcuseCategory::CLASSIFICATION_ORDER {
        if category
            .keywords()
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return category;
        }
    }

    if message.len() > CREATIVE_MIN_LEN {
        ExcuseCategory::Creative
    } else {
        ExcuseCategory::NoMotivation
    }
}
