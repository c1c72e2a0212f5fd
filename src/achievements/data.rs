//! Achievement catalog.

use super::types::{Achievement, AchievementCondition, AchievementId};

/// Locked definition of a single achievement.
pub fn achievement_def(id: AchievementId) -> Achievement {
    use AchievementCondition::*;

    let (name, description, emoji, condition) = match id {
        AchievementId::FirstCorrect => (
            "First Correct Answer",
            "Got the very first problem right!",
            "🎉",
            CorrectAnswers {
                value: 1,
                game_type: None,
            },
        ),
        AchievementId::Perfect10 => (
            "Perfect 10",
            "Answered all 10 questions correctly!",
            "💯",
            PerfectScore { value: 10 },
        ),
        AchievementId::Streak5 => (
            "Five in a Row",
            "Answered 5 problems in a row!",
            "🔥",
            ConsecutiveCorrect { value: 5 },
        ),
        AchievementId::Streak10 => (
            "Ten in a Row",
            "Answered 10 problems in a row!",
            "⚡",
            ConsecutiveCorrect { value: 10 },
        ),
        AchievementId::Level5 => (
            "Level 5",
            "Reached level 5!",
            "⭐",
            LevelReached { value: 5 },
        ),
        AchievementId::Level10 => (
            "Level 10",
            "Reached level 10!",
            "🏆",
            LevelReached { value: 10 },
        ),
        AchievementId::Games10 => (
            "Ten Games Finished",
            "Played 10 games all the way through!",
            "🎮",
            GamesCompleted { value: 10 },
        ),
        AchievementId::AdditionMaster => (
            "Addition Master",
            "Answered 50 addition problems correctly!",
            "➕",
            CorrectAnswers {
                value: 50,
                game_type: Some("addition".to_string()),
            },
        ),
        AchievementId::SubtractionMaster => (
            "Subtraction Master",
            "Answered 50 subtraction problems correctly!",
            "➖",
            CorrectAnswers {
                value: 50,
                game_type: Some("subtraction".to_string()),
            },
        ),
        AchievementId::MultiplicationMaster => (
            "Times Table Master",
            "Answered 50 times table problems correctly!",
            "✖️",
            CorrectAnswers {
                value: 50,
                game_type: Some("multiplication".to_string()),
            },
        ),
    };

    Achievement::new(id, name, description, emoji, condition)
}

/// The full catalog, all locked, in display order.
pub fn all_achievements() -> Vec<Achievement> {
    AchievementId::ALL.into_iter().map(achievement_def).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_and_complete() {
        let catalog = all_achievements();
        let ids: HashSet<_> = catalog.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), AchievementId::ALL.len());
    }

    #[test]
    fn test_catalog_starts_locked() {
        for achievement in all_achievements() {
            assert!(!achievement.unlocked, "{} should start locked", achievement.id);
            assert!(achievement.unlocked_at.is_none());
        }
    }

    #[test]
    fn test_def_matches_id() {
        for id in AchievementId::ALL {
            assert_eq!(achievement_def(id).id, id);
        }
    }

    #[test]
    fn test_master_achievements_are_scoped() {
        let scopes: Vec<_> = all_achievements()
            .into_iter()
            .filter_map(|a| a.condition.game_type().map(str::to_string))
            .collect();
        assert_eq!(scopes, vec!["addition", "subtraction", "multiplication"]);
    }

    #[test]
    fn test_perfect_score_threshold() {
        assert_eq!(
            achievement_def(AchievementId::Perfect10).condition,
            AchievementCondition::PerfectScore { value: 10 }
        );
    }
}
