//! Stageloop core: the retained-mode actor runtime.
//!
//! A `Stage` owns every live actor and drives them through the per-frame
//! phases; a `FrameLoop` sequences the phases and the fixed-timestep block;
//! `Camera`s draw sort-key slices of the stage through an opaque render
//! target.
//!
//! # Invariants
//! - Actors appear in exactly one of {live list, pending spawns} at a time.
//! - Staged spawns and removals are reconciled only between phase passes,
//!   never while one is running.
//! - Actors flagged destroyed stay on the live list until reconciliation
//!   but receive no further dispatches.
//! - An actor's `on_destroy` runs at most once, before any list removal.

pub mod actor;
pub mod camera;
pub mod clock;
pub mod config;
pub mod frame;
pub mod stage;

pub use actor::{Actor, ActorBase, AsAny};
pub use camera::Camera;
pub use clock::FrameClock;
pub use config::{ConfigError, EngineConfig};
pub use frame::FrameLoop;
pub use stage::Stage;
pub use stageloop_common::ActorId;

pub fn crate_info() -> &'static str {
    "stageloop-core v0.1.0"
}
