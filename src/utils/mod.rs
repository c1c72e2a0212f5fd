//! Utility modules shared across the crate.

pub mod clock;
pub mod persistence;

pub use clock::{date_for_millis, now_millis};
pub use persistence::{load_json, load_json_or_default, save_json};
