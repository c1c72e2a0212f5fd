//! Player progression: the progress record, its persistence, and the event
//! API game screens report outcomes through.

pub mod events;
pub mod persistence;
pub mod store;
pub mod types;

pub use events::{Notifications, ProgressEvents};
pub use persistence::{load_progress, save_progress};
pub use store::ProgressStore;
pub use types::{GameTypeStats, UserProgress};
