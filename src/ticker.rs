use std::time::{Duration, Instant};

/// Periodic tick schedule with at most one pending deadline.
///
/// Time is always passed in, never read, so the schedule behaves the same
/// under test as in the game loop.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(speed: u32) -> Self {
        Ticker {
            period: Self::period_for(speed),
            deadline: None,
        }
    }

    /// `1000 / speed` milliseconds.
    pub fn period_for(speed: u32) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(speed.max(1)))
    }

    /// Arms a fresh deadline one period from `now`. Any old deadline is dropped.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Cancels the pending deadline and schedules the next one at the new period.
    pub fn reschedule(&mut self, speed: u32, now: Instant) {
        self.stop();
        self.period = Self::period_for(speed);
        self.start(now);
    }

    /// Time left until the next tick, if one is scheduled.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes the pending deadline if it has passed.
    ///
    /// Yields at most one tick per call. A loop that fell more than a whole
    /// period behind is resynchronised to `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                let next = deadline + self.period;
                self.deadline = Some(if next <= now { now + self.period } else { next });
                true
            }
            _ => false,
        }
    }
}
