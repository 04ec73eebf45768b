//! Motion tokens: easing curves and standard durations.

use std::time::Duration;

/// A CSS `cubic-bezier` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Progress at time `t`. `t` is clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        bezier(s, self.y1, self.y2)
    }

    /// Find the curve parameter whose x equals `x`. Newton first, bisection
    /// if the slope is too flat.
    fn solve_x(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        let mut s = x;
        for _ in 0..8 {
            let error = bezier(s, self.x1, self.x2) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= error / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        while hi - lo > EPSILON {
            let value = bezier(s, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

// One axis of a cubic Bézier with endpoints fixed at 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Named curves used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Standard,
    EaseOut,
    EaseIn,
    /// Fast start, long settle. Used for the yo-yo spin and page entrances.
    Snap,
}

impl Easing {
    pub const ALL: [Easing; 4] = [Self::Standard, Self::EaseOut, Self::EaseIn, Self::Snap];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::EaseOut => "ease-out",
            Self::EaseIn => "ease-in",
            Self::Snap => "snap",
        }
    }

    pub fn curve(&self) -> CubicBezier {
        match self {
            Self::Standard => CubicBezier::new(0.4, 0.0, 0.2, 1.0),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.2, 1.0),
            Self::EaseIn => CubicBezier::new(0.4, 0.0, 1.0, 1.0),
            Self::Snap => CubicBezier::new(0.16, 1.0, 0.3, 1.0),
        }
    }

    pub fn css(&self) -> String {
        self.curve().css()
    }

    pub fn sample(&self, t: f64) -> f64 {
        self.curve().sample(t)
    }
}

pub const DURATION_FAST: Duration = Duration::from_millis(150);
pub const DURATION_NORMAL: Duration = Duration::from_millis(250);
pub const DURATION_SLOW: Duration = Duration::from_millis(400);
pub const DURATION_SPIN: Duration = Duration::from_millis(900);

/// `transition` shorthand for `property` with the given duration and curve.
pub fn transition(property: &str, duration: Duration, easing: Easing) -> String {
    format!("{property} {}ms {}", duration.as_millis(), easing.css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_rendering() {
        assert_eq!(Easing::Standard.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(
            transition("opacity", DURATION_FAST, Easing::EaseOut),
            "opacity 150ms cubic-bezier(0, 0, 0.2, 1)"
        );
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
            assert_eq!(easing.sample(-3.0), 0.0);
            assert_eq!(easing.sample(7.5), 1.0);
        }
    }

    #[test]
    fn samples_stay_in_range_and_increase() {
        for easing in Easing::ALL {
            let mut previous = 0.0;
            for i in 0..=100 {
                let y = easing.sample(i as f64 / 100.0);
                assert!((0.0..=1.0).contains(&y), "{} out of range: {y}", easing.name());
                assert!(y + 1e-9 >= previous, "{} not monotonic at {i}", easing.name());
                previous = y;
            }
        }
    }

    #[test]
    fn linear_curve_is_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for t in [0.1, 0.25, 0.5, 0.9] {
            assert!((linear.sample(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.sample(0.5) > 0.5);
        assert!(Easing::EaseIn.sample(0.5) < 0.5);
    }

    #[test]
    fn durations_are_ordered() {
        assert!(DURATION_FAST < DURATION_NORMAL);
        assert!(DURATION_NORMAL < DURATION_SLOW);
    }
}
