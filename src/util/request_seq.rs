//! Ticketing for overlapping async fetches.
//!
//! An effect that refetches on every input change can have several requests
//! in flight; they resolve in any order. Each run takes a ticket from the
//! component's `RequestSeq`, and a response is applied only while its ticket
//! is still the latest one issued.

#[cfg(test)]
#[path = "request_seq_test.rs"]
mod request_seq_test;

/// Monotonic request counter. Ticket 0 is never issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Counter state after issuing one more ticket.
    #[must_use]
    pub fn next(self) -> Self {
        Self { latest: self.latest.saturating_add(1) }
    }

    /// Most recently issued ticket.
    pub fn ticket(self) -> u64 {
        self.latest
    }

    /// Whether a response carrying `ticket` may still be applied.
    pub fn is_current(self, ticket: u64) -> bool {
        ticket != 0 && ticket == self.latest
    }
}
