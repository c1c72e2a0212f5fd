//! Achievement system module.
//!
//! Achievements are a fixed catalog carried inside the player's progress
//! record. Each one unlocks at most once, when its condition first holds.

pub mod data;
pub mod evaluator;
pub mod types;

pub use data::{achievement_def, all_achievements};
pub use evaluator::{condition_met, evaluate, pending_unlocks};
pub use types::{Achievement, AchievementCondition, AchievementId};
