/// Time-driven scroll interpolation.
///
/// Timestamps are animation-frame timestamps in milliseconds. The first
/// `step` pins the start time, so frames scheduled late still begin at
/// fraction 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    target: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

/// Result of one animation step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollFrame {
    pub position: f64,
    /// Completion in `[0, 1]`.
    pub fraction: f64,
    pub elapsed_ms: f64,
}

impl ScrollAnimation {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            target,
            duration_ms: duration_ms.max(0.0),
            started_at: None,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn step(&mut self, timestamp_ms: f64) -> ScrollFrame {
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let elapsed_ms = (timestamp_ms - started_at).max(0.0);
        let fraction = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).min(1.0)
        };

        ScrollFrame {
            position: self.start + (self.target - self.start) * fraction,
            fraction,
            elapsed_ms,
        }
    }

    /// Whether another frame should be requested after `frame`.
    pub fn wants_next_frame(&self, frame: &ScrollFrame) -> bool {
        frame.elapsed_ms < self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollAnimation;

    #[test]
    fn first_step_starts_at_origin() {
        let mut a = ScrollAnimation::new(0.0, 1000.0, 500.0);
        let f = a.step(12_345.0);
        assert_eq!(f.position, 0.0);
        assert_eq!(f.fraction, 0.0);
        assert!(a.wants_next_frame(&f));
    }

    #[test]
    fn interpolates_linearly() {
        let mut a = ScrollAnimation::new(100.0, 300.0, 1000.0);
        a.step(0.0);
        let f = a.step(250.0);
        assert_eq!(f.fraction, 0.25);
        assert_eq!(f.position, 150.0);
    }

    #[test]
    fn clamps_at_target_and_stops() {
        let mut a = ScrollAnimation::new(0.0, 800.0, 100.0);
        a.step(0.0);
        let f = a.step(250.0);
        assert_eq!(f.fraction, 1.0);
        assert_eq!(f.position, 800.0);
        assert!(!a.wants_next_frame(&f));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut a = ScrollAnimation::new(0.0, 40.0, 0.0);
        let f = a.step(5.0);
        assert_eq!(f.position, 40.0);
        assert!(!a.wants_next_frame(&f));
    }
}
