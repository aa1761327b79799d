//! Deadline-based lamp latch.

/// Keeps the lamp on until an absolute monotonic deadline passes,
/// independent of whether the trigger condition still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightLatch {
    expires_at_ms: u64,
}

impl LightLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the deadline out to `deadline_ms`. Never moves it backward.
    pub fn extend_to(&mut self, deadline_ms: u64) {
        self.expires_at_ms = self.expires_at_ms.max(deadline_ms);
    }

    /// True while `now_ms` is strictly before the deadline.
    pub fn is_active(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms
    }

    pub fn expires_at_ms(&self) -> u64 {
        self.expires_at_ms
    }
}
