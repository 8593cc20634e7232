use std::time::Instant;

// ───── Body ─────────────────────────────────────────────────────────────── //

/// Process start time. Backed by a monotonic clock, so successive
/// readings of [`Uptime::seconds`] never go down.
#[derive(Debug, Clone, Copy)]
pub struct Uptime {
    started_at: Instant,
}

impl Uptime {
    pub fn start() -> Uptime {
        Uptime {
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since [`Uptime::start`].
    pub fn seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

// ───── Unit tests ───────────────────────────────────────────────────────── //
