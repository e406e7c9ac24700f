use instant::Instant;
use std::time::Duration;

/// Admits at most one event per `interval`.
///
/// The first call always fires. A call fires when at least `interval` has
/// elapsed since the last call that fired; rejected calls do not move the
/// window.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    pub fn try_fire(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_fired {
            let elapsed = if now > last {
                now.duration_since(last)
            } else {
                Duration::ZERO
            };
            if elapsed < self.interval {
                return false;
            }
        }
        self.last_fired = Some(now);
        true
    }
}
