use glam::Vec2;
use stageloop_render::{RenderTarget, View};

use crate::stage::Stage;

/// A view over one sort-key slice of the stage.
///
/// Owns nothing: drawing sets the target's view to this camera's projection
/// and asks the stage for a layered draw pass. Two cameras with disjoint
/// layer ranges split the same stage into world and UI passes without the
/// stage knowing about either.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// World-space center of the viewport.
    pub center: Vec2,
    /// World-space extent mapped onto the viewport.
    pub size: Vec2,
    /// View rotation in degrees.
    pub rotation: f32,
    /// Inclusive lower sort-key bound of the layer slice; `None` for
    /// unbounded.
    pub layer_start: Option<f32>,
    /// Exclusive upper sort-key bound of the layer slice; `None` for
    /// unbounded.
    pub layer_end: Option<f32>,
}

impl Camera {
    /// Camera over every layer.
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            rotation: 0.0,
            layer_start: None,
            layer_end: None,
        }
    }

    pub fn with_layers(mut self, layer_start: Option<f32>, layer_end: Option<f32>) -> Self {
        self.layer_start = layer_start;
        self.layer_end = layer_end;
        self
    }

    pub fn view(&self) -> View {
        View {
            center: self.center,
            size: self.size,
            rotation: self.rotation,
        }
    }

    /// Run this camera's draw pass over the stage.
    pub fn draw(&self, stage: &mut Stage, target: &mut dyn RenderTarget) {
        target.set_view(self.view());
        stage.draw_layer(target, self.layer_start, self.layer_end);
    }
}
