use std::time::Instant;

use chrono::Local;
use tasbih_core::capability::{Clock, Moment};

/// Monotonic milliseconds since start plus local wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Moment {
        let monotonic_ms = self.started.elapsed().as_millis() as u64;
        Moment::new(monotonic_ms, Local::now().naive_local())
    }
}
