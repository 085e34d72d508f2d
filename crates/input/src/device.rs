use std::collections::HashSet;

use glam::Vec2;

/// Keyboard keys the runtime understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Tab,
    LeftShift,
    LeftControl,
    LeftAlt,
}

impl Key {
    /// Every key, for snapshot prefill.
    pub const ALL: [Key; 37] = [
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Space,
        Key::Enter,
        Key::Escape,
        Key::Tab,
        Key::LeftShift,
        Key::LeftControl,
        Key::LeftAlt,
    ];
}

/// Mouse buttons the runtime understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];
}

/// Instantaneous device state, sampled once per frame by `Input::poll`.
///
/// Backends (a window event loop, an OS polling layer) implement this; the
/// rest of the workspace only sees the sampled snapshot.
pub trait InputDevice {
    fn key_pressed(&self, key: Key) -> bool;

    fn button_pressed(&self, button: MouseButton) -> bool;

    /// Cursor position relative to the window, in pixels.
    fn mouse_position(&self) -> Vec2;
}

/// Device driven by explicit `press`/`release` calls.
///
/// The backend for tests and headless runs; a windowed backend keeps the
/// same held-set shape fed from its event loop.
#[derive(Debug, Default)]
pub struct ManualDevice {
    keys_held: HashSet<Key>,
    buttons_held: HashSet<MouseButton>,
    mouse_position: Vec2,
}

impl ManualDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys_held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys_held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.keys_held.clear();
        self.buttons_held.clear();
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons_held.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_held.remove(&button);
    }

    pub fn move_mouse(&mut self, position: Vec2) {
        self.mouse_position = position;
    }
}

impl InputDevice for ManualDevice {
    fn key_pressed(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }
}
