//! Core gameplay constants shared by the progression engine.

pub mod constants;

pub use constants::*;
