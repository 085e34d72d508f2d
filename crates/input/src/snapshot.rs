use std::collections::HashMap;

use glam::Vec2;

use crate::device::{InputDevice, Key, MouseButton};

/// Last two samples of one button, enough to answer held/pressed/released.
#[derive(Debug, Default, Clone, Copy)]
struct ButtonState {
    was_pressed: bool,
    pressed: bool,
}

impl ButtonState {
    fn update(&mut self, pressed: bool) {
        self.was_pressed = self.pressed;
        self.pressed = pressed;
    }

    fn held(&self) -> bool {
        self.pressed
    }

    fn down(&self) -> bool {
        !self.was_pressed && self.pressed
    }

    fn up(&self) -> bool {
        self.was_pressed && !self.pressed
    }

    /// Spend the one-frame edge so later consumers this frame see it gone.
    fn deplete(&mut self) {
        self.was_pressed = self.pressed;
    }
}

/// Named movement axes answered from WASD and the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Per-frame input snapshot with edge detection.
///
/// `poll` samples an `InputDevice` once per frame; every query afterwards is
/// answered from the sampled state, so all consumers within a frame agree.
#[derive(Debug)]
pub struct Input {
    keys: HashMap<Key, ButtonState>,
    buttons: HashMap<MouseButton, ButtonState>,
    mouse_position: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self {
            keys: Key::ALL.iter().map(|k| (*k, ButtonState::default())).collect(),
            buttons: MouseButton::ALL
                .iter()
                .map(|b| (*b, ButtonState::default()))
                .collect(),
            mouse_position: Vec2::ZERO,
        }
    }

    /// Sample the device. Call exactly once per frame, before the frame's
    /// input handling runs.
    pub fn poll(&mut self, device: &dyn InputDevice) {
        for (key, state) in self.keys.iter_mut() {
            state.update(device.key_pressed(*key));
        }
        for (button, state) in self.buttons.iter_mut() {
            state.update(device.button_pressed(*button));
        }
        self.mouse_position = device.mouse_position();
    }

    /// True while the key is held.
    pub fn key(&self, key: Key) -> bool {
        self.keys[&key].held()
    }

    /// True only on the frame the key went down.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys[&key].down()
    }

    /// True only on the frame the key was released.
    pub fn key_up(&self, key: Key) -> bool {
        self.keys[&key].up()
    }

    /// Consume the key's one-frame edge for the rest of this frame.
    pub fn deplete_key(&mut self, key: Key) {
        if let Some(state) = self.keys.get_mut(&key) {
            state.deplete();
        }
    }

    pub fn button(&self, button: MouseButton) -> bool {
        self.buttons[&button].held()
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons[&button].down()
    }

    pub fn button_up(&self, button: MouseButton) -> bool {
        self.buttons[&button].up()
    }

    pub fn deplete_button(&mut self, button: MouseButton) {
        if let Some(state) = self.buttons.get_mut(&button) {
            state.deplete();
        }
    }

    /// Cursor position relative to the window, from the last poll.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Axis input in `{-1, 0, 1}`. Horizontal: D/Right positive, A/Left
    /// negative. Vertical: W/Up positive, S/Down negative.
    pub fn axis(&self, axis: Axis) -> f32 {
        let (positive, negative) = match axis {
            Axis::Horizontal => ((Key::D, Key::Right), (Key::A, Key::Left)),
            Axis::Vertical => ((Key::W, Key::Up), (Key::S, Key::Down)),
        };
        let mut value = 0.0;
        if self.key(positive.0) || self.key(positive.1) {
            value = 1.0;
        }
        if self.key(negative.0) || self.key(negative.1) {
            value = -1.0;
        }
        value
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
