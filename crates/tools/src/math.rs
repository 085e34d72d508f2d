use glam::Vec2;

/// Clamp to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// The `t` for which `lerp(a, b, t) == value`. Zero when `a == b`.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    (value - a) / (b - a)
}

/// Cubic hermite interpolation from `a` to `b`.
pub fn smooth_step(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * (3.0 - t * 2.0) * t * t
}

/// Quintic hermite interpolation from `a` to `b`; flatter at the ends than
/// [`smooth_step`].
pub fn smoother_step(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * ((t * (t * 6.0 - 15.0) + 10.0) * t * t * t)
}

/// Movement helpers on top of glam.
pub trait Vec2Ext {
    /// Step toward `target` by at most `max_step`, landing exactly on it
    /// when within reach.
    fn approach(self, target: Vec2, max_step: f32) -> Vec2;

    /// Scale down to `max` length if longer; shorter vectors pass through
    /// unchanged.
    fn limit_length(self, max: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn approach(self, target: Vec2, max_step: f32) -> Vec2 {
        let offset = target - self;
        if offset.length() <= max_step {
            return target;
        }
        self + offset.normalize_or_zero() * max_step
    }

    fn limit_length(self, max: f32) -> Vec2 {
        let length = self.length();
        if length > max && length > 0.0 {
            self * (max / length)
        } else {
            self
        }
    }
}
