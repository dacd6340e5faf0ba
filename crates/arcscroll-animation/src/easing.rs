/// Easing curves, named after their Jetpack Compose counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    LinearEasing,
    /// Slow start, linear finish. This is the platform "ease" curve used for
    /// pull-to-refresh progress.
    #[default]
    EaseIn,
    /// Fast start, slow finish.
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    /// Material deceleration curve.
    LinearOutSlowInEasing,
    /// Material acceleration curve.
    FastOutLinearEasing,
}

impl Easing {
    /// Map a linear fraction in `[0, 1]` onto the curve.
    ///
    /// Inputs outside the unit range are clamped, so `transform(0.0) == 0.0`
    /// and `transform(1.0) == 1.0` for every curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self.curve() {
            Some(curve) => curve.transform(fraction),
            None => fraction.clamp(0.0, 1.0),
        }
    }

    /// Control points backing this curve, `None` for [`Easing::LinearEasing`].
    pub fn curve(&self) -> Option<CubicBezier> {
        match self {
            Easing::LinearEasing => None,
            Easing::EaseIn => Some(CubicBezier::new(0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some(CubicBezier::new(0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some(CubicBezier::new(0.42, 0.0, 0.58, 1.0)),
            Easing::FastOutSlowInEasing => Some(CubicBezier::new(0.4, 0.0, 0.2, 1.0)),
            Easing::LinearOutSlowInEasing => Some(CubicBezier::new(0.0, 0.0, 0.2, 1.0)),
            Easing::FastOutLinearEasing => Some(CubicBezier::new(0.4, 0.0, 1.0, 1.0)),
        }
    }
}

const SOLVE_EPSILON: f32 = 1e-6;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;

/// Cubic bezier from (0, 0) to (1, 1) with two free control points.
///
/// The curve is stored in polynomial form so each evaluation is a couple of
/// multiply-adds; this runs once per accepted scroll sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(fraction);
        Self::sample(self.ay, self.by, self.cy, t).clamp(0.0, 1.0)
    }

    fn sample(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_x_derivative(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find the curve parameter whose x coordinate equals `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.ax, self.bx, self.cx, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = self.sample_x_derivative(t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        log::trace!("newton solve stalled at x={x}, bisecting");
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let error = Self::sample(self.ax, self.bx, self.cx, t) - x;
            if error.abs() < SOLVE_EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
