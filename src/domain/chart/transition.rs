use super::entities::Geometry;
use std::time::Duration;

/// Default length of the axis and line animation
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(1000);

/// Cubic in-out easing
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Animation from the geometry on screen to a new frame's geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Geometry,
    pub to: Geometry,
    pub duration: Duration,
}

impl Transition {
    pub fn new(from: Geometry, to: Geometry, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    pub fn sample(&self, elapsed: Duration) -> Geometry {
        let t = ease_cubic_in_out(self.progress(elapsed));
        Geometry::interpolate(&self.from, &self.to, t)
    }
}
