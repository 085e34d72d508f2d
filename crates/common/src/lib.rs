//! Shared types used across the stageloop crates.

mod types;

pub use types::ActorId;
