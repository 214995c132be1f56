//! One-shot close/reopen sequencing.
//!
//! Freshly applied window styling only takes effect after the window has been
//! dismissed and shown again. That happens once per process:
//!
//! ```text
//! Idle ──begin()──▶ Pending(ticket) ──complete(ticket)──▶ Done
//!   ▲                     │
//!   └──────cancel()───────┘
//! ```
//!
//! `Done` is terminal. A cancelled ticket can never complete, so a timer that
//! outlives its window is a no-op.

/// Identifies one scheduled reopen. Doubles as its cancellation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReopenTicket {
    generation: u64,
}

impl ReopenTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReopenPhase {
    /// Nothing scheduled yet (or the last attempt was cancelled).
    #[default]
    Idle,
    /// Window dismissed, waiting for the delayed reopen.
    Pending(ReopenTicket),
    /// The reopen ran. Never left.
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct ReopenGate {
    phase: ReopenPhase,
    issued: u64,
}

impl ReopenGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence. Only an idle gate hands out a ticket.
    pub fn begin(&mut self) -> Option<ReopenTicket> {
        match self.phase {
            ReopenPhase::Idle => {
                self.issued += 1;
                let ticket = ReopenTicket {
                    generation: self.issued,
                };
                self.phase = ReopenPhase::Pending(ticket);
                Some(ticket)
            }
            ReopenPhase::Pending(_) | ReopenPhase::Done => None,
        }
    }

    /// Finish the sequence. Returns false for stale or cancelled tickets.
    pub fn complete(&mut self, ticket: ReopenTicket) -> bool {
        match self.phase {
            ReopenPhase::Pending(live) if live == ticket => {
                self.phase = ReopenPhase::Done;
                true
            }
            _ => false,
        }
    }

    /// Abandon a pending reopen. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            ReopenPhase::Pending(_) => {
                self.phase = ReopenPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self) -> ReopenPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, ReopenPhase::Pending(_))
    }

    /// True once the reopen has run. Never goes back to false.
    pub fn is_initialized(&self) -> bool {
        self.phase == ReopenPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_hands_out_a_single_ticket_while_pending() {
        let mut gate = ReopenGate::new();
        assert!(gate.begin().is_some());
        assert!(gate.begin().is_none());
        assert!(gate.is_pending());
    }

    #[test]
    fn done_is_terminal() {
        let mut gate = ReopenGate::new();
        let ticket = gate.begin().unwrap();
        assert!(gate.complete(ticket));
        assert!(!gate.cancel());
        assert!(gate.begin().is_none());
        assert!(gate.is_initialized());
    }

    #[test]
    fn cancelled_ticket_is_stale_after_restart() {
        let mut gate = ReopenGate::new();
        let first = gate.begin().unwrap();
        assert!(gate.cancel());
        let second = gate.begin().unwrap();
        assert_ne!(first, second);
        assert!(!gate.complete(first));
        assert!(gate.complete(second));
    }
}
