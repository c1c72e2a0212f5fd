//! Level table and the experience/level calculator.
//!
//! Levels are a fixed table of experience thresholds. Everything derived from
//! experience (level number, progress bar, remaining experience) goes through
//! the pure functions in [`logic`].

pub mod data;
pub mod logic;
pub mod types;

pub use data::LEVELS;
pub use logic::{
    experience_for_answer, experience_to_next_level, level_for_experience, level_info,
    level_progress_percent, max_level,
};
pub use types::{Difficulty, LevelDef};
