use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter for one slice of view state. A result is applied only
/// while its ticket is still the latest one handed out; a newer fetch or an
/// unmount makes older results stale.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let g = RequestGeneration::new();
        let first = g.begin();
        assert!(g.is_current(first));
        let second = g.begin();
        assert!(!g.is_current(first));
        assert!(g.is_current(second));
    }

    #[test]
    fn test_invalidate_discards_in_flight() {
        let g = RequestGeneration::new();
        let t = g.begin();
        g.invalidate();
        assert!(!g.is_current(t));
    }
}
