//! Ranked score board persisted alongside progress.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::ScoreRecord;
use crate::core::constants::{SCORES_STORAGE_KEY, SCORE_BOARD_CAPACITY};
use crate::storage::{KeyValueStore, StorageError};
use crate::utils::clock::date_for_millis;
use crate::utils::persistence::{load_json_or_default, save_json};

const DEFAULT_PLAYER_NAME: &str = "Player";

/// Score records ranked by score (highest first), ties broken by who got
/// there first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBoard {
    records: Vec<ScoreRecord>,
}

impl ScoreBoard {
    /// Load the board from `store`; empty if absent or unreadable.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut board: Self = load_json_or_default(store, SCORES_STORAGE_KEY);
        board.rank();
        board
    }

    /// Save the board to `store`.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        save_json(store, SCORES_STORAGE_KEY, self).map_err(|e| {
            warn!("Failed to save score board: {}", e);
            e
        })
    }

    /// Record a finished session at `now` (ms).
    ///
    /// Returns the record's 0-based rank, or `None` if it did not make the
    /// board.
    pub fn record(&mut self, name: &str, game_type: &str, score: u32, now: i64) -> Option<usize> {
        let mut id = now;
        while self.records.iter().any(|r| r.id == id) {
            id += 1;
        }

        let name = name.trim();
        self.records.push(ScoreRecord {
            id,
            name: if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            },
            score,
            game_type: game_type.to_string(),
            date: date_for_millis(now),
            timestamp: now,
        });
        self.rank();
        self.records.iter().position(|r| r.id == id)
    }

    /// The best `n` records.
    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Best record for one game type.
    pub fn best_for(&self, game_type: &str) -> Option<&ScoreRecord> {
        self.records.iter().find(|r| r.game_type == game_type)
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort into rank order and drop everything past capacity.
    fn rank(&mut self) {
        self.records.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.timestamp.cmp(&b.timestamp))
                .then(a.id.cmp(&b.id))
        });
        self.records.truncate(SCORE_BOARD_CAPACITY);
    }
}
