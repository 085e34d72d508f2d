//! Render boundary: the interface actors draw through.
//!
//! # Invariants
//! - Targets consume pre-transformed draw commands; nothing here touches
//!   pixels or windows.
//! - A backend implements `RenderTarget`; the rest of the workspace never
//!   names a concrete backend.
//!
//! # Workaround
//! Ships `RecordingTarget` as the headless backend used by tests and the
//! CLI. The trait is stable; swap in a windowed implementation without
//! changing consumers.

mod color;
mod target;

pub use color::Color;
pub use target::{DrawCommand, NullTarget, Recorded, RecordingTarget, RenderTarget, View};

pub fn crate_info() -> &'static str {
    "stageloop-render v0.1.0"
}
