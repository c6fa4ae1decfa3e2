use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

/// Wall-clock stopwatch around one benchmark phase.
#[derive(Debug)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    /// Flushes stdout so the phase label lands before the timed work, then
    /// captures the reference instant.
    pub fn start() -> Self {
        let _ = io::stdout().flush();
        Self { started: Instant::now() }
    }

    /// Elapsed whole milliseconds, with an optional per-item average.
    /// An average over zero items is left out.
    pub fn stop(self, avg_over: Option<usize>) -> Lap {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        Lap::new(elapsed_ms, avg_over)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Lap {
    pub elapsed_ms: u64,
    pub average_ms: Option<f64>,
}

impl Lap {
    pub fn new(elapsed_ms: u64, avg_over: Option<usize>) -> Self {
        let average_ms = match avg_over {
            Some(n) if n > 0 => Some(elapsed_ms as f64 / n as f64),
            _ => None,
        };
        Self { elapsed_ms, average_ms }
    }
}

impl fmt::Display for Lap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_ms {
            Some(avg) => write!(f, "{} ms / {:.2} ms avg", self.elapsed_ms, avg),
            None => write!(f, "{} ms", self.elapsed_ms),
        }
    }
}
