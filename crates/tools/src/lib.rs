//! Developer tooling: stage inspection, easing curves, interpolation
//! helpers.
//!
//! # Invariants
//! - Inspection is read-only; nothing here mutates the stage.

mod ease;
mod inspector;
mod math;

pub use ease::Ease;
pub use inspector::{ActorInfo, StageInspector, StageSummary};
pub use math::{Vec2Ext, clamp01, inverse_lerp, lerp, smooth_step, smoother_step};

pub fn crate_info() -> &'static str {
    "stageloop-tools v0.1.0"
}
