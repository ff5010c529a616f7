//! Single-flight supersede guard
//!
//! Rapid repeated refreshes start overlapping loads. Each load takes a
//! ticket when it begins; a newer load supersedes older ones, and a
//! settled load applies its result only if its ticket is still current.
//! The latest request always wins, regardless of completion order.

/// Ticket identifying one started load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Monotonic load counter owned by one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSequence {
    current: u64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.current += 1;
        LoadTicket(self.current)
    }

    /// True while no newer load has begun since this ticket was taken.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_load_is_current() {
        let mut seq = LoadSequence::new();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn test_newer_load_supersedes_older() {
        let mut seq = LoadSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_latest_wins_regardless_of_settle_order() {
        let mut seq = LoadSequence::new();
        let older = seq.begin();
        let newer = seq.begin();
        // The newer load settles first and applies.
        assert!(seq.is_current(newer));
        // The older load settles later and must be discarded.
        assert!(!seq.is_current(older));
    }
}
