//! Level and difficulty types.

use serde::{Deserialize, Serialize};

use crate::core::constants::{EXP_EASY, EXP_HARD, EXP_MEDIUM};

/// Static definition of a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDef {
    pub level: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    /// Minimum cumulative experience to be at this level.
    pub required_exp: u32,
}

/// Question difficulty reported by a game screen with each correct answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire name used by the game screens.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Experience awarded for a correct answer at this difficulty.
    pub fn reward(&self) -> u32 {
        match self {
            Difficulty::Easy => EXP_EASY,
            Difficulty::Medium => EXP_MEDIUM,
            Difficulty::Hard => EXP_HARD,
        }
    }
}
