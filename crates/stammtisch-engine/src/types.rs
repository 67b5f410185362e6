//! Input records and the normalized absence event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::ExcuseCategory;

/// A directory entry as supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: String,
    pub name: String,
    /// Optional display emoji. A palette emoji is assigned when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_emoji: Option<String>,
}

impl RawUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_emoji: None,
        }
    }
}

/// A resolved member identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub display_emoji: String,
}

/// One raw absence row: "user X did not come on date D, saying M".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub message: Option<String>,
}

/// A classified absence on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub date: NaiveDate,
    pub user_id: String,
    pub user_name: String,
    /// The original message, or an empty string when none was given.
    pub message: String,
    pub category: ExcuseCategory,
}
