//! Fixed-rate tick pacing

use std::thread;
use std::time::{Duration, Instant};

use log::warn;

/// Ticks this far behind schedule are dropped instead of replayed
const MAX_LAG_TICKS: u32 = 5;

/// Paces the outer loop, one call per simulation tick
pub trait Clock {
    fn wait_next_tick(&mut self);
}

/// Sleeps so ticks land on a fixed period
pub struct FixedRateClock {
    period: Duration,
    next_deadline: Instant,
}

impl FixedRateClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }
}

impl Clock for FixedRateClock {
    fn wait_next_tick(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.period;
            return;
        }

        let behind = now - self.next_deadline;
        if behind > self.period * MAX_LAG_TICKS {
            warn!("running {behind:?} behind schedule, resynchronising clock");
            self.next_deadline = now + self.period;
        } else {
            // Slightly late: run the next tick immediately to catch up
            self.next_deadline += self.period;
        }
    }
}

/// Never waits; runs the simulation as fast as possible
#[derive(Debug, Default)]
pub struct UnthrottledClock;

impl Clock for UnthrottledClock {
    fn wait_next_tick(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rate_clock_paces_ticks() {
        let period = Duration::from_millis(5);
        let mut clock = FixedRateClock::new(period);
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait_next_tick();
        }
        assert!(
            start.elapsed() >= period * 3,
            "Four ticks should take at least three periods"
        );
    }

    #[test]
    fn test_fixed_rate_clock_resyncs_after_stall() {
        let period = Duration::from_millis(20);
        let mut clock = FixedRateClock::new(period);
        thread::sleep(Duration::from_millis(200));

        clock.wait_next_tick();

        assert!(
            clock.next_deadline > Instant::now(),
            "Deadline should move into the future instead of replaying missed ticks"
        );
    }
}
