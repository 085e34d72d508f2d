use std::any::Any;

use glam::Vec2;
use stageloop_common::ActorId;
use stageloop_input::Input;
use stageloop_render::RenderTarget;

use crate::clock::FrameClock;
use crate::stage::Stage;

/// Upcast to `Any` for typed stage queries. Blanket-implemented; actor
/// types never write this themselves.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// State every actor carries: identity, sort key, position, and the
/// monotonic destroyed flag. Concrete actor types embed one and hand it
/// back through [`Actor::base`].
#[derive(Debug, Clone)]
pub struct ActorBase {
    id: ActorId,
    sort_key: f32,
    pub(crate) position: Vec2,
    pub(crate) destroyed: bool,
    /// Set when the actor removed itself mid-dispatch; the stage drops it
    /// instead of re-inserting.
    pub(crate) remove_now: bool,
}

impl ActorBase {
    /// The sort key is fixed for the actor's lifetime: it decides dispatch
    /// order (highest first) and which camera layer the actor belongs to.
    pub fn new(sort_key: f32) -> Self {
        Self {
            id: ActorId::new(),
            sort_key,
            position: Vec2::ZERO,
            destroyed: false,
            remove_now: false,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn sort_key(&self) -> f32 {
        self.sort_key
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// A simulation object driven by the per-frame phases.
///
/// Every phase hook defaults to a no-op; concrete actors override the ones
/// they care about. Mutating hooks receive the stage (minus the actor being
/// dispatched) so they can spawn and destroy other actors, and the frame
/// clock for timing. `draw` is read-only and sees just the render target.
///
/// The provided lifecycle methods are the only writers of the embedded
/// [`ActorBase`] flags; overriding them would break the at-most-once
/// teardown guarantee.
pub trait Actor: AsAny {
    fn base(&self) -> &ActorBase;

    fn base_mut(&mut self) -> &mut ActorBase;

    /// Cleanup hook. Runs exactly once, before the actor leaves any list.
    fn on_destroy(&mut self) {}

    /// Fires synchronously after every [`Actor::set_position`] write.
    fn on_update_position(&mut self) {}

    /// First phase of the frame; read input here, act on it in `update`.
    fn handle_input(&mut self, _stage: &mut Stage, _clock: &FrameClock, _input: &mut Input) {}

    /// Runs every frame, even while paused.
    fn force_update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {}

    /// Runs zero or more times per frame at the fixed timestep.
    fn fixed_update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {}

    /// Runs once per unpaused frame.
    fn update(&mut self, _stage: &mut Stage, _clock: &FrameClock) {}

    /// Submit draw commands under the view the active camera set.
    fn draw(&self, _target: &mut dyn RenderTarget) {}

    fn id(&self) -> ActorId {
        self.base().id()
    }

    fn sort_key(&self) -> f32 {
        self.base().sort_key()
    }

    fn position(&self) -> Vec2 {
        self.base().position
    }

    /// Write the position and fire `on_update_position`.
    fn set_position(&mut self, position: Vec2) {
        self.base_mut().position = position;
        self.on_update_position();
    }

    fn is_destroyed(&self) -> bool {
        self.base().destroyed
    }

    /// Mark this actor destroyed and run its teardown. Idempotent. Removal
    /// from the live list is deferred to the next reconciliation; until
    /// then the actor is skipped by every dispatch.
    fn destroy(&mut self) {
        if self.base().destroyed {
            return;
        }
        self.base_mut().destroyed = true;
        self.on_destroy();
    }

    /// Like [`Actor::destroy`], but the stage removes the actor from the
    /// live list as soon as control returns to it instead of waiting for
    /// reconciliation. Use when the actor must be gone within the current
    /// pass. Idempotent.
    fn destroy_immediately(&mut self) {
        if self.base().destroyed {
            return;
        }
        self.base_mut().destroyed = true;
        self.base_mut().remove_now = true;
        self.on_destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        destroys: usize,
        position_updates: usize,
    }

    struct Widget {
        base: ActorBase,
        counter: Counter,
    }

    impl Widget {
        fn new(sort_key: f32) -> Self {
            Self {
                base: ActorBase::new(sort_key),
                counter: Counter::default(),
            }
        }
    }

    impl Actor for Widget {
        fn base(&self) -> &ActorBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ActorBase {
            &mut self.base
        }

        fn on_destroy(&mut self) {
            self.counter.destroys += 1;
        }

        fn on_update_position(&mut self) {
            self.counter.position_updates += 1;
        }
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut widget = Widget::new(0.0);
        widget.destroy();
        widget.destroy();
        assert!(widget.is_destroyed());
        assert_eq!(widget.counter.destroys, 1);
    }

    #[test]
    fn destroy_immediately_after_destroy_is_a_no_op() {
        let mut widget = Widget::new(0.0);
        widget.destroy();
        widget.destroy_immediately();
        assert_eq!(widget.counter.destroys, 1);
        assert!(!widget.base().remove_now);
    }

    #[test]
    fn set_position_fires_hook() {
        let mut widget = Widget::new(0.0);
        widget.set_position(Vec2::new(3.0, 4.0));
        widget.set_position(Vec2::new(5.0, 6.0));
        assert_eq!(widget.position(), Vec2::new(5.0, 6.0));
        assert_eq!(widget.counter.position_updates, 2);
    }

    #[test]
    fn with_position_does_not_fire_hook() {
        let widget = Widget {
            base: ActorBase::new(1.5).with_position(Vec2::ONE),
            counter: Counter::default(),
        };
        assert_eq!(widget.position(), Vec2::ONE);
        assert_eq!(widget.sort_key(), 1.5);
        assert_eq!(widget.counter.position_updates, 0);
    }

    #[test]
    fn downcast_through_as_any() {
        let widget = Widget::new(2.0);
        let dynamic: &dyn Actor = &widget;
        assert!(dynamic.as_any().downcast_ref::<Widget>().is_some());
    }
}
