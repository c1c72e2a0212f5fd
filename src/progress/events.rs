//! Notification events produced by progress updates.

use std::collections::VecDeque;

use crate::achievements::types::Achievement;

/// What a single progress event caused, for the presentation layer to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressEvents {
    /// The event raised the player's level.
    pub leveled_up: bool,
    /// Level after the event.
    pub level: u32,
    /// Achievements unlocked by the event, in catalog order.
    pub unlocked: Vec<Achievement>,
}

impl ProgressEvents {
    /// Events for an update that changed neither level nor achievements.
    pub fn quiet(level: u32) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Nothing to notify.
    pub fn is_empty(&self) -> bool {
        !self.leveled_up && self.unlocked.is_empty()
    }
}

/// Notifications waiting to be shown and acknowledged.
///
/// Only the latest level-up is kept; unlocked achievements queue up in the
/// order they were unlocked.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    level_up: Option<u32>,
    achievements: VecDeque<Achievement>,
}

impl Notifications {
    /// Queue everything `events` reports.
    pub fn push(&mut self, events: &ProgressEvents) {
        if events.leveled_up {
            self.level_up = Some(events.level);
        }
        self.achievements.extend(events.unlocked.iter().cloned());
    }

    /// Level reached by the pending level-up, if any.
    pub fn level_up(&self) -> Option<u32> {
        self.level_up
    }

    /// Next achievement to show, if any.
    pub fn achievement(&self) -> Option<&Achievement> {
        self.achievements.front()
    }

    /// Clear the pending level-up.
    pub fn acknowledge_level_up(&mut self) {
        self.level_up = None;
    }

    /// Drop the front achievement, returning it.
    pub fn acknowledge_achievement(&mut self) -> Option<Achievement> {
        self.achievements.pop_front()
    }

    pub fn clear(&mut self) {
        self.level_up = None;
        self.achievements.clear();
    }
}
