/// Outcome of a single timer decrement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Still counting down
    On,
    /// Was already at zero
    Off,
    /// Reached zero on this decrement
    Finished,
}

/// 8-bit down-counter backing the delay and sound registers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer(u8);

impl Timer {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn store(&mut self, value: u8) {
        self.0 = value;
    }

    #[inline]
    pub fn load(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0 != 0
    }

    /// Decrement by one, saturating at zero
    #[inline]
    pub fn decrement(&mut self) -> TimerState {
        if self.0 > 0 {
            self.0 -= 1;
            if self.0 == 0 {
                TimerState::Finished
            } else {
                TimerState::On
            }
        } else {
            TimerState::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_reports_state() {
        let mut timer = Timer::new();
        assert_eq!(timer.decrement(), TimerState::Off);
        assert_eq!(timer.load(), 0);

        timer.store(2);
        assert!(timer.is_active());
        assert_eq!(timer.decrement(), TimerState::On);
        assert_eq!(timer.decrement(), TimerState::Finished);
        assert!(!timer.is_active());
        assert_eq!(timer.decrement(), TimerState::Off);
        assert_eq!(timer.load(), 0);
    }
}
