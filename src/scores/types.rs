//! Score record type.

use serde::{Deserialize, Serialize};

/// One finished game session on the score board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Unique id, derived from the recording time.
    pub id: i64,
    pub name: String,
    pub score: u32,
    pub game_type: String,
    /// Calendar date the score was recorded (`YYYY-MM-DD`).
    pub date: String,
    /// Recording time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}
