//! Achievement rule evaluation against a progress snapshot.

use super::types::{Achievement, AchievementCondition, AchievementId};
use crate::progress::types::UserProgress;

/// Whether `condition` currently holds for `progress`.
///
/// `ConsecutiveCorrect` is measured against the cumulative correct-answer
/// count: wrong answers do not reset it. `PerfectScore` never holds here; it
/// is unlocked only by the perfect score event.
pub fn condition_met(condition: &AchievementCondition, progress: &UserProgress) -> bool {
    match condition {
        AchievementCondition::CorrectAnswers {
            value,
            game_type: Some(game_type),
        } => progress
            .stats(game_type)
            .is_some_and(|stats| stats.correct_answers >= *value),
        AchievementCondition::CorrectAnswers {
            value,
            game_type: None,
        } => progress.total_correct_answers >= *value,
        AchievementCondition::ConsecutiveCorrect { value } => {
            progress.total_correct_answers >= *value
        }
        AchievementCondition::PerfectScore { .. } => false,
        AchievementCondition::GamesCompleted { value } => progress.total_games_played >= *value,
        AchievementCondition::LevelReached { value } => progress.level >= *value,
    }
}

/// Locked achievements whose condition now holds, in catalog order.
pub fn pending_unlocks(progress: &UserProgress) -> Vec<AchievementId> {
    progress
        .achievements
        .iter()
        .filter(|a| !a.unlocked && condition_met(&a.condition, progress))
        .map(|a| a.id)
        .collect()
}

/// Unlock every achievement whose condition now holds, stamping it with
/// `now` (ms). Returns the newly unlocked achievements only.
pub fn evaluate(progress: &mut UserProgress, now: i64) -> Vec<Achievement> {
    pending_unlocks(progress)
        .into_iter()
        .filter_map(|id| progress.unlock(id, now))
        .collect()
}
