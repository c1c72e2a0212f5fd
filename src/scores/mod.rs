//! Score board of finished game sessions, shown on the home screen.

pub mod board;
pub mod types;

pub use board::ScoreBoard;
pub use types::ScoreRecord;
