//! Input boundary: queryable per-frame input state.
//!
//! # Invariants
//! - The runtime never polls devices itself; a backend implements
//!   `InputDevice` and `Input::poll` samples it once per frame.
//! - Edge queries (pressed/released this frame) are derived purely from the
//!   last two samples, so results are stable for the whole frame unless
//!   explicitly depleted.

mod device;
mod snapshot;

pub use device::{InputDevice, Key, ManualDevice, MouseButton};
pub use snapshot::{Axis, Input};

pub fn crate_info() -> &'static str {
    "stageloop-input v0.1.0"
}
