//! Round countdown
//!
//! Whole-second countdown driven by explicit ticks, so the caller decides
//! where the seconds come from.

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds remaining
    Running(u32),
    /// Seconds remaining, exactly at the warning threshold
    Warning(u32),
    /// No time left
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    warning: u32,
}

impl Countdown {
    #[must_use]
    pub const fn new(duration: u32, warning: u32) -> Self {
        Self {
            remaining: duration,
            warning,
        }
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// At or below the warning threshold, but not yet expired
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.remaining > 0 && self.remaining <= self.warning
    }

    /// Take one second off the clock
    ///
    /// Ticking an expired countdown keeps returning `Expired`.
    pub const fn tick(&mut self) -> Tick {
        if self.remaining == 0 {
            return Tick::Expired;
        }

        self.remaining -= 1;

        if self.remaining == 0 {
            Tick::Expired
        } else if self.remaining == self.warning {
            Tick::Warning(self.remaining)
        } else {
            Tick::Running(self.remaining)
        }
    }

    /// Put `duration` seconds back on the clock
    pub const fn reset(&mut self, duration: u32) {
        self.remaining = duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry() {
        let mut countdown = Countdown::new(3, 0);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert!(countdown.is_expired());
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn warns_once_at_threshold() {
        let mut countdown = Countdown::new(60, 10);
        let ticks: Vec<Tick> = (0..60).map(|_| countdown.tick()).collect();

        let warnings = ticks
            .iter()
            .filter(|t| matches!(t, Tick::Warning(_)))
            .count();
        assert_eq!(warnings, 1);
        assert_eq!(ticks[49], Tick::Warning(10));
        assert_eq!(ticks[59], Tick::Expired);
    }

    #[test]
    fn warning_window() {
        let mut countdown = Countdown::new(12, 10);
        assert!(!countdown.is_warning());
        countdown.tick();
        countdown.tick();
        assert!(countdown.is_warning());
    }

    #[test]
    fn reset_restores_time() {
        let mut countdown = Countdown::new(2, 0);
        countdown.tick();
        countdown.tick();
        countdown.reset(5);
        assert_eq!(countdown.remaining(), 5);
        assert!(!countdown.is_expired());
    }
}
