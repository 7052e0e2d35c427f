//! Easing functions for animations

use serde::{Deserialize, Serialize};

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// CSS `ease`
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in-out`, the curve used for layout transitions
    pub const EASE_IN_EASE_OUT: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

    /// Apply the easing function to a progress value.
    ///
    /// Progress outside `0.0..=1.0` is clamped first.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => {
                BezierCurve::new(x1, y1, x2, y2).solve(t as f64) as f32
            }
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Easing::Linear)
    }
}

/// Unit cubic bezier through (0,0) and (1,1) in polynomial form.
///
/// Evaluated in f64 so that per-frame sampling does not jitter.
struct BezierCurve {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl BezierCurve {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let (cx, cy) = (3.0 * x1 as f64, 3.0 * y1 as f64);
        let (bx, by) = (3.0 * (x2 as f64 - x1 as f64) - cx, 3.0 * (y2 as f64 - y1 as f64) - cy);
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x(&self, p: f64) -> f64 {
        ((self.ax * p + self.bx) * p + self.cx) * p
    }

    fn y(&self, p: f64) -> f64 {
        ((self.ay * p + self.by) * p + self.cy) * p
    }

    fn dx(&self, p: f64) -> f64 {
        (3.0 * self.ax * p + 2.0 * self.bx) * p + self.cx
    }

    /// Find the curve parameter whose x equals `x`, then return its y
    fn solve(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        if x <= 0.0 || x >= 1.0 {
            return x;
        }

        // Newton-Raphson converges in a few steps for well-behaved curves
        let mut p = x;
        for _ in 0..8 {
            let err = self.x(p) - x;
            if err.abs() < EPSILON {
                return self.y(p);
            }
            let slope = self.dx(p);
            if slope.abs() < EPSILON {
                break;
            }
            p -= err / slope;
        }

        // Bisection fallback for flat regions
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        p = x;
        for _ in 0..32 {
            let sample = self.x(p);
            if (sample - x).abs() < EPSILON {
                break;
            }
            if sample < x {
                lo = p;
            } else {
                hi = p;
            }
            p = 0.5 * (lo + hi);
        }
        self.y(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseInOutQuad,
            Easing::EASE,
            Easing::EASE_IN_EASE_OUT,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_ease_in_ease_out_is_symmetric() {
        let e = Easing::EASE_IN_EASE_OUT;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-4);
        let a = e.apply(0.25);
        let b = e.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-4);
        assert!(a < 0.25, "should start slow, got {a}");
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let e = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-4);
        }
    }
}
