//! # stammtisch-engine
//!
//! Deterministic attendance analytics for a recurring weekly get-together.
//!
//! The engine is a pure batch transform: a member directory, a sparse log of
//! absence records and a calendar of event days go in; ranked per-member
//! statistics, aggregates and awards come out. No I/O, no global state, and
//! identical input always produces identical output.
//!
//! ## Modules
//!
//! - [`calendar`] — Event-day enumeration within a period
//! - [`category`] — The fixed excuse vocabulary and its keyword data
//! - [`classifier`] — Free-text message → excuse category
//! - [`cancellation`] — Raw absence records → classified cancellations
//! - [`streak`] — Longest attendance/absence runs
//! - [`user_stats`] — Per-member counts, rates, favorite excuse, title
//! - [`ranking`] — Deterministic global ordering
//! - [`aggregate`] — Global, category, month and monthly-attendance stats
//! - [`awards`] — Superlative award selection
//! - [`evaluator`] — One-call orchestration of all of the above
//! - [`types`] — Directory entries, absence records, cancellations
//! - [`mock`] — Seeded demo dataset
//! - [`error`] — Error types

pub mod aggregate;
pub mod awards;
pub mod calendar;
pub mod cancellation;
pub mod category;
pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod mock;
pub mod ranking;
pub mod streak;
pub mod types;
pub mod user_stats;

pub use aggregate::{CategoryStats, GlobalStats, MonthStats, MonthlyAttendanceStats};
pub use awards::{select_awards, Award};
pub use calendar::{build_calendar, parse_weekday, today_in, Period};
pub use category::ExcuseCategory;
pub use classifier::classify;
pub use error::EngineError;
pub use evaluator::{evaluate, evaluate_input, EvaluationInput, EvaluationResult};
pub use mock::{generate_input, MockConfig};
pub use ranking::rank_label;
pub use streak::StreakResult;
pub use types::{AbsenceRecord, Cancellation, RawUser, User};
pub use user_stats::UserStats;
