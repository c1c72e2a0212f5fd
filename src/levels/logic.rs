//! Experience and level calculations over the static level table.

use super::data::LEVELS;
use super::types::{Difficulty, LevelDef};

/// Experience awarded for an answer. Wrong answers earn nothing.
pub fn experience_for_answer(is_correct: bool, difficulty: Difficulty) -> u32 {
    if !is_correct {
        return 0;
    }
    difficulty.reward()
}

/// Level reached with the given cumulative experience.
///
/// Scans from the highest threshold down; level 1 is the floor.
pub fn level_for_experience(experience: u32) -> u32 {
    LEVELS
        .iter()
        .rev()
        .find(|def| def.required_exp <= experience)
        .map_or(1, |def| def.level)
}

/// Look up a level definition by number.
pub fn level_info(level: u32) -> Option<&'static LevelDef> {
    LEVELS.iter().find(|def| def.level == level)
}

/// Highest level in the table.
pub fn max_level() -> u32 {
    LEVELS.last().map_or(1, |def| def.level)
}

/// Experience still needed to reach the next level, or 0 at max level.
pub fn experience_to_next_level(experience: u32) -> u32 {
    let level = level_for_experience(experience);
    match level_info(level + 1) {
        Some(next) => next.required_exp.saturating_sub(experience),
        None => 0,
    }
}

/// Progress through the current level as a rounded percentage (0-100).
pub fn level_progress_percent(experience: u32) -> u32 {
    let level = level_for_experience(experience);
    let (Some(current), Some(next)) = (level_info(level), level_info(level + 1)) else {
        return 100;
    };

    let span = u64::from(next.required_exp - current.required_exp);
    let progress = u64::from(experience - current.required_exp);
    // Integer round-half-up of 100 * progress / span.
    ((200 * progress + span) / (2 * span)) as u32
}
