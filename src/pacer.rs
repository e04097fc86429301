//! Fixed-step pacing of logical ticks against wall-clock time.
use std::time::Duration;

/// Logical ticks per second at speed 1.0
pub const TICK_RATE: f64 = 531.0;
/// Longest stretch of wall time accounted in one call
pub const MAX_FRAME_TIME: Duration = Duration::from_secs(2);
/// Fastest supported simulation speed factor
pub const MAX_SPEED: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct Pacer {
    accumulator: f64,
    speed: f64,
}

impl Pacer {
    pub fn new(speed: f64) -> Result<Self, &'static str> {
        let mut pacer = Self {
            accumulator: 0.0,
            speed: 1.0,
        };
        pacer.set_speed(speed)?;
        Ok(pacer)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<(), &'static str> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err("Speed must be a positive number");
        }
        if speed > MAX_SPEED {
            return Err("Speed above supported maximum");
        }
        self.speed = speed;
        Ok(())
    }

    /// Seconds of simulated time per tick
    pub fn step(&self) -> f64 {
        1.0 / (TICK_RATE * self.speed)
    }

    /// Account `elapsed` wall time, returns the number of ticks now due
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let elapsed = elapsed.min(MAX_FRAME_TIME);
        self.accumulator += elapsed.as_secs_f64();

        let step = self.step();
        let ticks = (self.accumulator / step).floor();
        self.accumulator = (self.accumulator - ticks * step).max(0.0);
        // float to int casts saturate
        ticks as u64
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self {
            accumulator: 0.0,
            speed: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_at_normal_speed() {
        let mut pacer = Pacer::default();
        let ticks = pacer.advance(Duration::from_secs(1));
        assert!((530..=531).contains(&ticks), "{}", ticks);
    }

    #[test]
    fn remainder_carries_over() {
        let mut pacer = Pacer::default();
        assert_eq!(pacer.advance(Duration::from_millis(1)), 0);
        assert_eq!(pacer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn speed_scales_ticks() {
        let mut pacer = Pacer::new(2.0).unwrap();
        let ticks = pacer.advance(Duration::from_millis(500));
        assert!((530..=531).contains(&ticks), "{}", ticks);
    }

    #[test]
    fn full_speed_long_frame() {
        let mut pacer = Pacer::new(MAX_SPEED).unwrap();
        let expected = 2.0 * TICK_RATE * MAX_SPEED;
        let ticks = pacer.advance(Duration::from_secs(10)) as f64;
        assert!((ticks - expected).abs() <= 1.0, "{} vs {}", ticks, expected);

        // the remainder stays below a single step
        assert_eq!(pacer.advance(Duration::from_secs(0)), 0);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut slow = Pacer::default();
        let mut clamped = Pacer::default();
        assert_eq!(
            slow.advance(Duration::from_secs(2)),
            clamped.advance(Duration::from_secs(10))
        );
    }

    #[test]
    fn rejects_bad_speed() {
        assert!(Pacer::new(0.0).is_err());
        assert!(Pacer::new(-1.0).is_err());
        assert!(Pacer::new(f64::NAN).is_err());
        assert!(Pacer::new(MAX_SPEED * 2.0).is_err());
        let mut pacer = Pacer::default();
        assert!(pacer.set_speed(f64::INFINITY).is_err());
        assert_eq!(pacer.speed(), 1.0);
    }
}
