//! The progress store: owner of the player's progress and its event API.

use tracing::{debug, info, warn};

use super::events::{Notifications, ProgressEvents};
use super::persistence::{load_progress, save_progress};
use super::types::UserProgress;
use crate::achievements::evaluator::evaluate;
use crate::achievements::types::{Achievement, AchievementId};
use crate::core::constants::{PERFECT_SCORE_MIN_QUESTIONS, PROGRESS_STORAGE_KEY};
use crate::levels::{
    experience_for_answer, experience_to_next_level, level_for_experience, level_info,
    level_progress_percent, Difficulty, LevelDef,
};
use crate::storage::KeyValueStore;
use crate::utils::clock::now_millis;

/// Owns the canonical [`UserProgress`] and persists every change.
///
/// Each event builds a complete new snapshot, saves it, runs the achievement
/// rules, saves again if anything unlocked, and only then replaces the
/// current snapshot. Storage failures are logged and never reach the caller;
/// the in-memory snapshot stays authoritative.
pub struct ProgressStore<S: KeyValueStore> {
    storage: S,
    key: String,
    progress: UserProgress,
    notifications: Notifications,
    clock: fn() -> i64,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Load progress from `storage` under the default key.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, PROGRESS_STORAGE_KEY)
    }

    /// Load progress from `storage` under `key`.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let progress = load_progress(&storage, &key);
        debug!(
            "Opened progress '{}' at level {} ({} exp)",
            key, progress.level, progress.experience
        );
        Self {
            storage,
            key,
            progress,
            notifications: Notifications::default(),
            clock: now_millis,
        }
    }

    /// Use `clock` (ms since epoch) for unlock timestamps.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    // =========================================================================
    // Read-only accessors
    // =========================================================================

    /// Current progress snapshot.
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Experience still needed for the next level (0 at max level).
    pub fn experience_to_next_level(&self) -> u32 {
        experience_to_next_level(self.progress.experience)
    }

    /// Progress through the current level (0-100).
    pub fn level_progress_percent(&self) -> u32 {
        level_progress_percent(self.progress.experience)
    }

    /// Definition of the current level.
    pub fn current_level(&self) -> Option<&'static LevelDef> {
        level_info(self.progress.level)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Level reached by a level-up not yet acknowledged.
    pub fn pending_level_up(&self) -> Option<u32> {
        self.notifications.level_up()
    }

    /// Next unlocked achievement not yet acknowledged.
    pub fn pending_achievement(&self) -> Option<&Achievement> {
        self.notifications.achievement()
    }

    /// The level-up notification was shown.
    pub fn acknowledge_level_up(&mut self) {
        self.notifications.acknowledge_level_up();
    }

    /// The front achievement notification was shown.
    pub fn acknowledge_achievement(&mut self) -> Option<Achievement> {
        self.notifications.acknowledge_achievement()
    }

    // =========================================================================
    // Event API
    // =========================================================================

    /// A question of `game_type` was answered correctly.
    pub fn on_correct_answer(&mut self, game_type: &str, difficulty: Difficulty) -> ProgressEvents {
        let prior_level = self.progress.level;
        let mut next = self.progress.clone();

        next.experience = next
            .experience
            .saturating_add(experience_for_answer(true, difficulty));
        next.level = level_for_experience(next.experience);
        next.total_correct_answers = next.total_correct_answers.saturating_add(1);
        let stats = next.stats_mut(game_type);
        stats.correct_answers = stats.correct_answers.saturating_add(1);
        stats.total_answers = stats.total_answers.saturating_add(1);

        debug!(
            "Correct answer in '{}' ({}): {} exp",
            game_type,
            difficulty.name(),
            next.experience
        );
        self.persist(&next);

        let unlocked = self.evaluate_achievements(&mut next);
        let leveled_up = next.level > prior_level;
        if leveled_up {
            info!("Level up: {} -> {}", prior_level, next.level);
        }

        self.finish(
            next,
            ProgressEvents {
                leveled_up,
                unlocked,
                ..Default::default()
            },
        )
    }

    /// A question of `game_type` was answered incorrectly.
    pub fn on_incorrect_answer(&mut self, game_type: &str) -> ProgressEvents {
        let mut next = self.progress.clone();
        let stats = next.stats_mut(game_type);
        stats.total_answers = stats.total_answers.saturating_add(1);

        debug!("Incorrect answer in '{}'", game_type);
        self.persist(&next);
        self.finish(next, ProgressEvents::default())
    }

    /// A game session of `game_type` finished with `score`.
    pub fn on_game_completed(&mut self, game_type: &str, score: u32) -> ProgressEvents {
        let mut next = self.progress.clone();
        next.total_games_played = next.total_games_played.saturating_add(1);
        let stats = next.stats_mut(game_type);
        stats.best_score = stats.best_score.max(score);
        stats.games_played = stats.games_played.saturating_add(1);

        debug!("Game '{}' completed with score {}", game_type, score);
        self.persist(&next);

        let unlocked = self.evaluate_achievements(&mut next);
        self.finish(
            next,
            ProgressEvents {
                unlocked,
                ..Default::default()
            },
        )
    }

    /// A session ended with `score` out of `total_questions`. Unlocks the
    /// perfect score achievement when every question of a long enough
    /// session was right.
    pub fn on_perfect_score(&mut self, score: u32, total_questions: u32) -> ProgressEvents {
        if score != total_questions || total_questions < PERFECT_SCORE_MIN_QUESTIONS {
            return ProgressEvents::quiet(self.progress.level);
        }

        let mut next = self.progress.clone();
        let Some(achievement) = next.unlock(AchievementId::Perfect10, (self.clock)()) else {
            return ProgressEvents::quiet(self.progress.level);
        };

        info!("Achievement unlocked: {}", achievement.id);
        self.persist(&next);
        self.finish(
            next,
            ProgressEvents {
                unlocked: vec![achievement],
                ..Default::default()
            },
        )
    }

    /// Replace all progress with the initial value. Pending notifications
    /// are dropped.
    pub fn reset_progress(&mut self) {
        let initial = UserProgress::default();
        info!("Resetting progress");
        self.persist(&initial);
        self.progress = initial;
        self.notifications.clear();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Unlock achievements on `next`, saving again if any unlocked.
    fn evaluate_achievements(&mut self, next: &mut UserProgress) -> Vec<Achievement> {
        let unlocked = evaluate(next, (self.clock)());
        if !unlocked.is_empty() {
            for achievement in &unlocked {
                info!("Achievement unlocked: {}", achievement.id);
            }
            self.persist(next);
        }
        unlocked
    }

    /// Install `next` as the current snapshot and queue its notifications.
    fn finish(&mut self, next: UserProgress, mut events: ProgressEvents) -> ProgressEvents {
        events.level = next.level;
        self.progress = next;
        self.notifications.push(&events);
        events
    }

    fn persist(&mut self, progress: &UserProgress) {
        if let Err(e) = save_progress(&mut self.storage, &self.key, progress) {
            warn!("Failed to save progress to '{}': {}", self.key, e);
        }
    }
}
