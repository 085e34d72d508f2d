use glam::Vec2;

use crate::Color;

/// A camera's projection onto a target: which world rectangle fills the
/// viewport, and how it is rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// World-space point at the middle of the viewport.
    pub center: Vec2,
    /// World-space extent mapped onto the viewport.
    pub size: Vec2,
    /// Rotation around the center, in degrees.
    pub rotation: f32,
}

impl View {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            rotation: 0.0,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0))
    }
}

/// One pre-transformed draw operation, in world coordinates of the active
/// view. Backends rasterize these however they like.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        position: Vec2,
        content: String,
        size: f32,
        color: Color,
    },
}

/// Where draw commands go. Implemented by rendering backends; consumed
/// opaquely by everything else.
pub trait RenderTarget {
    /// Make `view` the active projection for subsequent commands.
    fn set_view(&mut self, view: View);

    /// Submit one draw command under the active view.
    fn submit(&mut self, command: DrawCommand);
}

/// A submitted command paired with the view that was active at submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub view: View,
    pub command: DrawCommand,
}

/// Headless target that records everything submitted to it.
///
/// Stands in for a real backend in tests and CLI runs: assertions can check
/// exactly what was drawn and under which view.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    active_view: Option<View>,
    records: Vec<Recorded>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Recorded] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records, keeping the active view.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// One-line description of what was recorded, for CLI output.
    pub fn summary(&self) -> String {
        let views = {
            let mut seen: Vec<View> = Vec::new();
            for r in &self.records {
                if !seen.contains(&r.view) {
                    seen.push(r.view);
                }
            }
            seen.len()
        };
        format!("{} draw commands across {} views", self.records.len(), views)
    }
}

impl RenderTarget for RecordingTarget {
    fn set_view(&mut self, view: View) {
        self.active_view = Some(view);
    }

    fn submit(&mut self, command: DrawCommand) {
        self.records.push(Recorded {
            view: self.active_view.unwrap_or_default(),
            command,
        });
    }
}

/// Target that discards everything. Useful when a frame must run but its
/// output is irrelevant.
#[derive(Debug, Default)]
pub struct NullTarget;

impl RenderTarget for NullTarget {
    fn set_view(&mut self, _view: View) {}

    fn submit(&mut self, _command: DrawCommand) {}
}
