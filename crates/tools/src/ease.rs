use std::f32::consts::PI;

/// Easing curves over a normalized `t` in `[0, 1]`.
///
/// Each maps 0 to 0 and 1 to 1; see <https://easings.net> for the shapes.
pub trait Ease {
    fn ease_in_quad(self) -> f32;
    fn ease_out_quad(self) -> f32;
    fn ease_in_out_quad(self) -> f32;
    fn ease_in_cubic(self) -> f32;
    fn ease_out_cubic(self) -> f32;
    fn ease_in_out_cubic(self) -> f32;
    fn ease_in_sine(self) -> f32;
    fn ease_out_sine(self) -> f32;
    fn ease_in_out_sine(self) -> f32;
    fn ease_in_back(self) -> f32;
    fn ease_out_back(self) -> f32;
    fn ease_in_bounce(self) -> f32;
    fn ease_out_bounce(self) -> f32;
}

impl Ease for f32 {
    fn ease_in_quad(self) -> f32 {
        self * self
    }

    fn ease_out_quad(self) -> f32 {
        self * (2.0 - self)
    }

    fn ease_in_out_quad(self) -> f32 {
        if self < 0.5 {
            2.0 * self * self
        } else {
            -1.0 + (4.0 - 2.0 * self) * self
        }
    }

    fn ease_in_cubic(self) -> f32 {
        self * self * self
    }

    fn ease_out_cubic(self) -> f32 {
        1.0 - (1.0 - self).powi(3)
    }

    fn ease_in_out_cubic(self) -> f32 {
        if self < 0.5 {
            4.0 * self * self * self
        } else {
            1.0 - (-2.0 * self + 2.0).powi(3) / 2.0
        }
    }

    fn ease_in_sine(self) -> f32 {
        1.0 - (self * PI / 2.0).cos()
    }

    fn ease_out_sine(self) -> f32 {
        (self * PI / 2.0).sin()
    }

    fn ease_in_out_sine(self) -> f32 {
        -(PI * self).cos() / 2.0 + 0.5
    }

    fn ease_in_back(self) -> f32 {
        const C1: f32 = 1.70158;
        const C3: f32 = C1 + 1.0;
        C3 * self * self * self - C1 * self * self
    }

    fn ease_out_back(self) -> f32 {
        const C1: f32 = 1.70158;
        const C3: f32 = C1 + 1.0;
        1.0 + C3 * (self - 1.0).powi(3) + C1 * (self - 1.0).powi(2)
    }

    fn ease_in_bounce(self) -> f32 {
        1.0 - (1.0 - self).ease_out_bounce()
    }

    fn ease_out_bounce(self) -> f32 {
        const N: f32 = 7.5625;
        const D: f32 = 2.75;
        if self < 1.0 / D {
            N * self * self
        } else if self < 2.0 / D {
            let t = self - 1.5 / D;
            N * t * t + 0.75
        } else if self < 2.5 / D {
            let t = self - 2.25 / D;
            N * t * t + 0.9375
        } else {
            let t = self - 2.625 / D;
            N * t * t + 0.984375
        }
    }
}
