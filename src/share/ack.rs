use std::time::{Duration, Instant};

/// Transient "copied" indicator that clears itself after a fixed lifetime
#[derive(Debug, Clone)]
pub struct CopiedAck {
    lifetime: Duration,
    shown_at: Option<Instant>,
}

impl CopiedAck {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            shown_at: None,
        }
    }

    /// Show the indicator starting at `now`. A repeat copy restarts the clock.
    pub fn mark(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match self.shown_at {
            Some(at) => now.saturating_duration_since(at) < self.lifetime,
            None => false,
        }
    }

    /// Drop the indicator once expired. Returns true when it just cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && !self.is_visible(now) {
            self.shown_at = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_marked() {
        let ack = CopiedAck::new(Duration::from_millis(3000));
        assert!(!ack.is_visible(Instant::now()));
    }

    #[test]
    fn test_expires_after_lifetime() {
        let mut ack = CopiedAck::new(Duration::from_millis(3000));
        let start = Instant::now();
        ack.mark(start);

        assert!(ack.is_visible(start + Duration::from_millis(2999)));
        assert!(!ack.tick(start + Duration::from_millis(2999)));
        assert!(!ack.is_visible(start + Duration::from_millis(3000)));
        assert!(ack.tick(start + Duration::from_millis(3000)));
        assert!(!ack.tick(start + Duration::from_millis(4000)));
    }

    #[test]
    fn test_remark_restarts() {
        let mut ack = CopiedAck::new(Duration::from_millis(100));
        let start = Instant::now();
        ack.mark(start);
        ack.mark(start + Duration::from_millis(80));
        assert!(ack.is_visible(start + Duration::from_millis(150)));
    }
}
