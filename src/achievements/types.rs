//! Achievement types and data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for each achievement.
///
/// Serialized as the stable string id stored in saved progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AchievementId {
    #[serde(rename = "first_correct")]
    FirstCorrect,
    #[serde(rename = "perfect_10")]
    Perfect10,
    #[serde(rename = "streak_5")]
    Streak5,
    #[serde(rename = "streak_10")]
    Streak10,
    #[serde(rename = "level_5")]
    Level5,
    #[serde(rename = "level_10")]
    Level10,
    #[serde(rename = "games_10")]
    Games10,
    #[serde(rename = "addition_master")]
    AdditionMaster,
    #[serde(rename = "subtraction_master")]
    SubtractionMaster,
    #[serde(rename = "multiplication_master")]
    MultiplicationMaster,
}

impl AchievementId {
    /// All ids in catalog order.
    pub const ALL: [AchievementId; 10] = [
        AchievementId::FirstCorrect,
        AchievementId::Perfect10,
        AchievementId::Streak5,
        AchievementId::Streak10,
        AchievementId::Level5,
        AchievementId::Level10,
        AchievementId::Games10,
        AchievementId::AdditionMaster,
        AchievementId::SubtractionMaster,
        AchievementId::MultiplicationMaster,
    ];

    /// Stable string id.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstCorrect => "first_correct",
            AchievementId::Perfect10 => "perfect_10",
            AchievementId::Streak5 => "streak_5",
            AchievementId::Streak10 => "streak_10",
            AchievementId::Level5 => "level_5",
            AchievementId::Level10 => "level_10",
            AchievementId::Games10 => "games_10",
            AchievementId::AdditionMaster => "addition_master",
            AchievementId::SubtractionMaster => "subtraction_master",
            AchievementId::MultiplicationMaster => "multiplication_master",
        }
    }

    /// Look up an id by its stable string form.
    pub fn from_id_str(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == id)
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What has to happen for an achievement to unlock.
///
/// Stored with a `type` tag, e.g. `{"type": "correct_answers", "value": 50,
/// "gameType": "addition"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementCondition {
    /// Correct answers overall, or within one game type when scoped.
    CorrectAnswers {
        value: u32,
        #[serde(
            rename = "gameType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        game_type: Option<String>,
    },
    /// Correct answers in a row.
    ConsecutiveCorrect { value: u32 },
    /// Every question right in one session. Only unlocked by the perfect
    /// score event, never by a progress scan.
    PerfectScore { value: u32 },
    /// Finished game sessions.
    GamesCompleted { value: u32 },
    /// Level reached.
    LevelReached { value: u32 },
}

impl AchievementCondition {
    /// Game type the condition is scoped to, if any.
    pub fn game_type(&self) -> Option<&str> {
        match self {
            AchievementCondition::CorrectAnswers { game_type, .. } => game_type.as_deref(),
            _ => None,
        }
    }
}

/// An achievement with its current unlock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub condition: AchievementCondition,
    pub unlocked: bool,
    /// Unlock time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<i64>,
}

impl Achievement {
    /// A locked achievement.
    pub fn new(
        id: AchievementId,
        name: impl Into<String>,
        description: impl Into<String>,
        emoji: impl Into<String>,
        condition: AchievementCondition,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            emoji: emoji.into(),
            condition,
            unlocked: false,
            unlocked_at: None,
        }
    }

    /// Unlock at `now` (ms). Returns true if newly unlocked; an already
    /// unlocked achievement keeps its original timestamp.
    pub fn unlock(&mut self, now: i64) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.unlocked_at = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Achievement {
        Achievement::new(
            AchievementId::AdditionMaster,
            "Addition Master",
            "Answer 50 addition problems correctly",
            "➕",
            AchievementCondition::CorrectAnswers {
                value: 50,
                game_type: Some("addition".to_string()),
            },
        )
    }

    #[test]
    fn test_achievement_unlock() {
        let mut achievement = sample();
        assert!(!achievement.unlocked);
        assert!(achievement.unlock(1_000));
        assert!(achievement.unlocked);
        assert_eq!(achievement.unlocked_at, Some(1_000));

        // Second unlock keeps the first timestamp
        assert!(!achievement.unlock(2_000));
        assert_eq!(achievement.unlocked_at, Some(1_000));
    }

    #[test]
    fn test_id_strings_roundtrip() {
        for id in AchievementId::ALL {
            assert_eq!(AchievementId::from_id_str(id.as_str()), Some(id));
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
        assert_eq!(AchievementId::from_id_str("unknown"), None);
    }

    #[test]
    fn test_condition_wire_format() {
        let json = serde_json::to_value(&sample().condition).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "correct_answers", "value": 50, "gameType": "addition"})
        );

        let unscoped: AchievementCondition =
            serde_json::from_str(r#"{"type":"correct_answers","value":1}"#).unwrap();
        assert_eq!(
            unscoped,
            AchievementCondition::CorrectAnswers {
                value: 1,
                game_type: None
            }
        );

        let level: AchievementCondition =
            serde_json::from_str(r#"{"type":"level_reached","value":5}"#).unwrap();
        assert_eq!(level, AchievementCondition::LevelReached { value: 5 });
    }

    #[test]
    fn test_condition_accessors() {
        let condition = sample().condition;
        assert_eq!(condition.game_type(), Some("addition"));
        assert_eq!(
            AchievementCondition::GamesCompleted { value: 10 }.game_type(),
            None
        );
    }

    #[test]
    fn test_locked_achievement_omits_timestamp() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["unlocked"], false);
        assert!(json.get("unlockedAt").is_none());
        assert_eq!(json["id"], "addition_master");
    }
}
