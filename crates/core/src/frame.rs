use stageloop_input::Input;
use stageloop_render::RenderTarget;

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::config::EngineConfig;
use crate::stage::Stage;

/// Sequences one frame of the runtime: clock, phase passes, fixed-step
/// catch-up, camera draws.
///
/// Phase order per frame:
/// 1. input handling (always)
/// 2. force update (always)
/// 3. update (skipped while paused)
/// 4. fixed update (zero or more times, from the accumulator)
/// 5. one draw pass per camera, in camera order
///
/// Pausing is a plain flag collaborators flip; it gates `update` and the
/// game-time counter, nothing else.
pub struct FrameLoop {
    clock: FrameClock,
    pub paused: bool,
    /// Per-frame bound on fixed-update catch-up; `None` is unbounded.
    pub max_catch_up_steps: Option<u32>,
    cameras: Vec<Camera>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Build a loop with the conventional camera pair: a world camera over
    /// sort keys below `ui_layer` and a UI camera over the rest.
    pub fn with_config(config: &EngineConfig) -> Self {
        let window = config.window_size();
        let world =
            Camera::new(config.camera_center, window).with_layers(None, Some(config.ui_layer));
        let ui = Camera::new(window * 0.5, window).with_layers(Some(config.ui_layer), None);
        Self {
            clock: FrameClock::new(config.fixed_step),
            paused: false,
            max_catch_up_steps: config.max_catch_up_steps,
            cameras: vec![world, ui],
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Cameras in draw order.
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn cameras_mut(&mut self) -> &mut Vec<Camera> {
        &mut self.cameras
    }

    /// Run one frame, measuring the delta from wall time.
    pub fn frame(&mut self, stage: &mut Stage, input: &mut Input, target: &mut dyn RenderTarget) {
        self.clock.tick();
        self.run_phases(stage, input, target);
    }

    /// Run one frame with an explicit delta. The path for tests and
    /// headless drivers.
    pub fn advance(
        &mut self,
        delta: f32,
        stage: &mut Stage,
        input: &mut Input,
        target: &mut dyn RenderTarget,
    ) {
        self.clock.advance(delta);
        self.run_phases(stage, input, target);
    }

    fn run_phases(&mut self, stage: &mut Stage, input: &mut Input, target: &mut dyn RenderTarget) {
        if !self.paused {
            self.clock.advance_game_time();
        }

        stage.handle_input_all(&self.clock, input);
        stage.force_update_all(&self.clock);
        if !self.paused {
            stage.update_all(&self.clock);
        }

        let steps = self.clock.drain_fixed_steps(self.max_catch_up_steps);
        for _ in 0..steps {
            stage.fixed_update_all(&self.clock);
        }

        for camera in &self.cameras {
            camera.draw(stage, target);
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
