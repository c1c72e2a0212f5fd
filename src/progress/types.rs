//! Progress records: the persisted root aggregate and per-game statistics.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::achievements::data::all_achievements;
use crate::achievements::types::{Achievement, AchievementId};
use crate::levels::level_for_experience;

/// Statistics for one game type (e.g. `"addition"`, `"clock_set"`).
///
/// Fields missing from a stored record default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameTypeStats {
    pub correct_answers: u32,
    pub total_answers: u32,
    pub best_score: u32,
    pub games_played: u32,
}

impl GameTypeStats {
    /// Share of correct answers (0.0 - 100.0), or `None` before any answer.
    pub fn accuracy(&self) -> Option<f32> {
        if self.total_answers == 0 {
            return None;
        }
        Some(self.correct_answers as f32 / self.total_answers as f32 * 100.0)
    }
}

/// The player's whole progression state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Always `level_for_experience(experience)`.
    pub level: u32,
    pub experience: u32,
    pub total_correct_answers: u32,
    pub total_games_played: u32,
    #[serde(deserialize_with = "known_achievements")]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub game_stats: BTreeMap<String, GameTypeStats>,
}

/// Stored achievements minus entries whose id is no longer in the catalog.
fn known_achievements<'de, D>(deserializer: D) -> Result<Vec<Achievement>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let mut achievements = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(id) = entry.get("id").and_then(serde_json::Value::as_str) {
            if AchievementId::from_id_str(id).is_none() {
                warn!("Dropping unknown stored achievement '{}'", id);
                continue;
            }
        }
        let achievement: Achievement =
            serde_json::from_value(entry).map_err(serde::de::Error::custom)?;
        achievements.push(achievement);
    }
    Ok(achievements)
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            total_correct_answers: 0,
            total_games_played: 0,
            achievements: all_achievements(),
            game_stats: BTreeMap::new(),
        }
    }
}

impl UserProgress {
    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievement(id).is_some_and(|a| a.unlocked)
    }

    /// Look up an achievement by id.
    pub fn achievement(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Unlock an achievement at `now` (ms). Returns a copy of it if newly
    /// unlocked.
    pub fn unlock(&mut self, id: AchievementId, now: i64) -> Option<Achievement> {
        let achievement = self.achievements.iter_mut().find(|a| a.id == id)?;
        achievement.unlock(now).then(|| achievement.clone())
    }

    /// Number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.achievements.len();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Statistics for a game type, if it has been played.
    pub fn stats(&self, game_type: &str) -> Option<&GameTypeStats> {
        self.game_stats.get(game_type)
    }

    /// Statistics for a game type, created with zeros on first use.
    pub(crate) fn stats_mut(&mut self, game_type: &str) -> &mut GameTypeStats {
        self.game_stats.entry(game_type.to_string()).or_default()
    }

    /// Repair a record read from storage: derive `level` from `experience`,
    /// rebuild `achievements` in catalog order (first stored entry per id
    /// wins, missing ones are added locked) and raise `total_answers` to at
    /// least `correct_answers`.
    ///
    /// Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let before = self.clone();

        self.level = level_for_experience(self.experience);

        let mut stored = std::mem::take(&mut self.achievements);
        self.achievements = all_achievements()
            .into_iter()
            .map(|def| match stored.iter().position(|a| a.id == def.id) {
                Some(idx) => stored.remove(idx),
                None => def,
            })
            .collect();

        for stats in self.game_stats.values_mut() {
            stats.total_answers = stats.total_answers.max(stats.correct_answers);
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_progress_is_zeroed() {
        let progress = UserProgress::default();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.experience, 0);
        assert_eq!(progress.total_correct_answers, 0);
        assert_eq!(progress.total_games_played, 0);
        assert!(progress.game_stats.is_empty());
        assert_eq!(progress.achievements.len(), AchievementId::ALL.len());
        assert_eq!(progress.unlocked_count(), 0);
    }

    #[test]
    fn test_unlock_once() {
        let mut progress = UserProgress::default();
        let unlocked = progress.unlock(AchievementId::Level5, 42);
        assert_eq!(unlocked.map(|a| a.unlocked_at), Some(Some(42)));
        assert!(progress.is_unlocked(AchievementId::Level5));
        assert!(progress.unlock(AchievementId::Level5, 99).is_none());
        assert_eq!(
            progress.achievement(AchievementId::Level5).and_then(|a| a.unlocked_at),
            Some(42)
        );
    }

    #[test]
    fn test_unlock_percentage() {
        let mut progress = UserProgress::default();
        assert_eq!(progress.unlock_percentage(), 0.0);
        progress.unlock(AchievementId::FirstCorrect, 1);
        assert!((progress.unlock_percentage() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stats_created_lazily() {
        let mut progress = UserProgress::default();
        assert!(progress.stats("clock_set").is_none());
        progress.stats_mut("clock_set").total_answers += 1;
        assert_eq!(progress.stats("clock_set").map(|s| s.total_answers), Some(1));
        assert_eq!(progress.stats("clock_set").map(|s| s.correct_answers), Some(0));
    }

    #[test]
    fn test_accuracy() {
        let stats = GameTypeStats {
            correct_answers: 3,
            total_answers: 4,
            ..Default::default()
        };
        assert_eq!(stats.accuracy(), Some(75.0));
        assert_eq!(GameTypeStats::default().accuracy(), None);
    }

    #[test]
    fn test_partial_stats_deserialize_with_defaults() {
        let stats: GameTypeStats =
            serde_json::from_str(r#"{"correctAnswers":2,"totalAnswers":3}"#).unwrap();
        assert_eq!(stats.best_score, 0);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_normalize_recomputes_level() {
        let mut progress = UserProgress {
            experience: 130,
            level: 1,
            ..Default::default()
        };
        assert!(progress.normalize());
        assert_eq!(progress.level, 3);
        assert!(!progress.normalize());
    }

    #[test]
    fn test_normalize_restores_missing_achievements_in_catalog_order() {
        let mut progress = UserProgress::default();
        progress.unlock(AchievementId::Games10, 7);
        progress
            .achievements
            .retain(|a| matches!(a.id, AchievementId::Games10 | AchievementId::Streak5));
        progress.achievements.reverse();

        assert!(progress.normalize());
        let ids: Vec<_> = progress.achievements.iter().map(|a| a.id).collect();
        assert_eq!(ids, AchievementId::ALL.to_vec());
        assert!(progress.is_unlocked(AchievementId::Games10));
        assert_eq!(progress.unlocked_count(), 1);
    }

    #[test]
    fn test_normalize_drops_duplicate_achievements() {
        let mut progress = UserProgress::default();
        let duplicate = progress.achievements[0].clone();
        progress.achievements.push(duplicate);
        progress.unlock(AchievementId::FirstCorrect, 5);

        assert!(progress.normalize());
        assert_eq!(progress.achievements.len(), AchievementId::ALL.len());
        let first: Vec<_> = progress
            .achievements
            .iter()
            .filter(|a| a.id == AchievementId::FirstCorrect)
            .collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].unlocked_at, Some(5));
    }

    #[test]
    fn test_normalize_raises_total_answers() {
        let mut progress = UserProgress::default();
        progress.stats_mut("addition").correct_answers = 5;
        progress.stats_mut("pattern").correct_answers = 2;
        progress.stats_mut("pattern").total_answers = 6;

        assert!(progress.normalize());
        assert_eq!(progress.stats("addition").map(|s| s.total_answers), Some(5));
        assert_eq!(progress.stats("pattern").map(|s| s.total_answers), Some(6));
        assert!(!progress.normalize());
    }

    #[test]
    fn test_unknown_stored_achievement_is_skipped() {
        let mut json = serde_json::to_value(UserProgress::default()).unwrap();
        let mut retired = json["achievements"][0].clone();
        retired["id"] = serde_json::json!("speed_demon");
        json["achievements"].as_array_mut().unwrap().push(retired);
        json["experience"] = serde_json::json!(1000);

        let progress: UserProgress = serde_json::from_value(json).unwrap();
        assert_eq!(progress.experience, 1000);
        assert_eq!(progress.achievements.len(), AchievementId::ALL.len());
    }
}
