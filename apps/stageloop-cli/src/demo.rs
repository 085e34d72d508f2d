//! Demo actors for scripted runs: a player steered by input axes, drifting
//! props that despawn at the play-field edge, and a HUD line on the UI
//! layer.

use glam::Vec2;
use stageloop_core::{Actor, ActorBase, FrameClock, Stage};
use stageloop_input::{Axis, Input};
use stageloop_render::{Color, DrawCommand, RenderTarget};
use stageloop_tools::{Vec2Ext, clamp01};

/// Input-steered circle. Movement intent is smoothed toward the current
/// axis input, then integrated in `update`.
pub struct Player {
    base: ActorBase,
    speed: f32,
    move_input: Vec2,
    radius: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            base: ActorBase::new(0.0).with_position(position),
            speed: 200.0,
            move_input: Vec2::ZERO,
            radius: 20.0,
        }
    }
}

impl Actor for Player {
    fn base(&self) -> &ActorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ActorBase {
        &mut self.base
    }

    fn handle_input(&mut self, _stage: &mut Stage, clock: &FrameClock, input: &mut Input) {
        // Screen-space y points down, so vertical input is negated.
        let target = Vec2::new(input.axis(Axis::Horizontal), -input.axis(Axis::Vertical))
            .limit_length(1.0);
        self.move_input = self
            .move_input
            .lerp(target, clamp01(10.0 * clock.delta()));
    }

    fn update(&mut self, _stage: &mut Stage, clock: &FrameClock) {
        let next = self.position() + self.move_input * self.speed * clock.delta();
        self.set_position(next);
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.submit(DrawCommand::Circle {
            center: self.position(),
            radius: self.radius,
            color: Color::CYAN,
        });
    }
}

/// Prop that floats along a fixed velocity and destroys itself once it
/// leaves the play field.
pub struct Drifter {
    base: ActorBase,
    velocity: Vec2,
    bounds: Vec2,
}

impl Drifter {
    pub fn new(sort_key: f32, position: Vec2, velocity: Vec2, bounds: Vec2) -> Self {
        Self {
            base: ActorBase::new(sort_key).with_position(position),
            velocity,
            bounds,
        }
    }
}

impl Actor for Drifter {
    fn base(&self) -> &ActorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ActorBase {
        &mut self.base
    }

    fn on_destroy(&mut self) {
        tracing::debug!(actor = %self.id(), "drifter left the play field");
    }

    fn update(&mut self, _stage: &mut Stage, clock: &FrameClock) {
        let next = self.position() + self.velocity * clock.delta();
        if next.x < 0.0 || next.y < 0.0 || next.x > self.bounds.x || next.y > self.bounds.y {
            self.destroy();
            return;
        }
        self.set_position(next);
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.submit(DrawCommand::Rect {
            position: self.position() - Vec2::splat(4.0),
            size: Vec2::splat(8.0),
            color: Color::YELLOW,
        });
    }
}

/// One line of UI: the live-actor count, refreshed every frame even while
/// paused.
pub struct Hud {
    base: ActorBase,
    live_count: usize,
}

impl Hud {
    pub fn new(ui_layer: f32) -> Self {
        Self {
            base: ActorBase::new(ui_layer).with_position(Vec2::new(10.0, 20.0)),
            live_count: 0,
        }
    }
}

impl Actor for Hud {
    fn base(&self) -> &ActorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ActorBase {
        &mut self.base
    }

    fn force_update(&mut self, stage: &mut Stage, _clock: &FrameClock) {
        self.live_count = stage.len();
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.submit(DrawCommand::Text {
            position: self.position(),
            content: format!("actors: {}", self.live_count),
            size: 16.0,
            color: Color::WHITE,
        });
    }
}
