//! Bomi Progress - progression and achievement engine for Bomi's math games.
//!
//! Game screens report answers and finished sessions to a [`ProgressStore`],
//! which turns them into experience, levels and achievement unlocks, keeps
//! the result in a key-value store, and hands back notification events.

pub mod achievements;
pub mod build_info;
pub mod config;
pub mod core;
pub mod levels;
pub mod progress;
pub mod scores;
pub mod storage;
pub mod utils;

pub use achievements::{Achievement, AchievementCondition, AchievementId};
pub use config::Config;
pub use levels::{Difficulty, LevelDef, LEVELS};
pub use progress::{GameTypeStats, ProgressEvents, ProgressStore, UserProgress};
pub use scores::{ScoreBoard, ScoreRecord};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
