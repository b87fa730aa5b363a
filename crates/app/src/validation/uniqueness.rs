//! Tracking of asynchronous id uniqueness checks.
//!
//! Every issued check carries a [`CheckTicket`] naming the value it was issued
//! for and a generation number. Only the ticket of the latest check may
//! resolve the tracker, and only while the field still holds the ticket's
//! value; anything else is a stale result and is discarded.

use tracing::debug;

/// Result of asking the store whether an id is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniquenessOutcome {
    /// No product uses the id.
    Available,

    /// A product already uses the id.
    Taken,

    /// The store could not answer; treated as non-blocking.
    Inconclusive,
}

/// Identifies one issued uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTicket {
    generation: u64,
    value: String,
}

impl CheckTicket {
    /// The id value the check was issued for.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Issue order within the tracker; later checks have higher generations.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Current state of the uniqueness rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UniquenessStatus {
    /// No check applies to the current value.
    #[default]
    Idle,

    /// A check for the current value is outstanding.
    Pending(CheckTicket),

    /// The check for `value` resolved.
    Resolved {
        value: String,
        outcome: UniquenessOutcome,
    },
}

/// What happened to a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The check was current and its outcome now holds.
    Applied(UniquenessOutcome),

    /// A newer check or edit superseded it; the outcome was discarded.
    Stale,
}

/// Issues tickets and applies only the latest one's result.
#[derive(Debug, Clone, Default)]
pub struct UniquenessTracker {
    generation: u64,
    status: UniquenessStatus,
}

impl UniquenessTracker {
    /// Issue a check for `value`, superseding any outstanding one.
    pub fn begin(&mut self, value: impl Into<String>) -> CheckTicket {
        self.generation += 1;

        let ticket = CheckTicket {
            generation: self.generation,
            value: value.into(),
        };

        self.status = UniquenessStatus::Pending(ticket.clone());

        ticket
    }

    /// Drop any outstanding or resolved check; outstanding tickets become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.status = UniquenessStatus::Idle;
    }

    /// Apply a completed check if it is still current for `current_value`.
    pub fn resolve(
        &mut self,
        ticket: &CheckTicket,
        outcome: UniquenessOutcome,
        current_value: &str,
    ) -> Resolution {
        let is_current = matches!(&self.status, UniquenessStatus::Pending(pending) if pending == ticket)
            && ticket.value == current_value;

        if !is_current {
            debug!(
                id = %ticket.value,
                generation = ticket.generation,
                "discarding stale uniqueness result"
            );

            return Resolution::Stale;
        }

        self.status = UniquenessStatus::Resolved {
            value: ticket.value.clone(),
            outcome,
        };

        Resolution::Applied(outcome)
    }

    #[must_use]
    pub fn status(&self) -> &UniquenessStatus {
        &self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.status, UniquenessStatus::Pending(_))
    }

    /// The outstanding ticket, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&CheckTicket> {
        match &self.status {
            UniquenessStatus::Pending(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Whether the resolved check found `value` taken.
    #[must_use]
    pub fn is_taken(&self, value: &str) -> bool {
        matches!(
            &self.status,
            UniquenessStatus::Resolved { value: resolved, outcome: UniquenessOutcome::Taken }
                if resolved == value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_ticket_resolves() {
        let mut tracker = UniquenessTracker::default();
        let ticket = tracker.begin("abc");

        assert!(tracker.is_pending());
        assert_eq!(
            tracker.resolve(&ticket, UniquenessOutcome::Taken, "abc"),
            Resolution::Applied(UniquenessOutcome::Taken)
        );
        assert!(!tracker.is_pending());
        assert!(tracker.is_taken("abc"));
    }

    #[test]
    fn superseded_ticket_is_stale() {
        let mut tracker = UniquenessTracker::default();
        let first = tracker.begin("abc");
        let second = tracker.begin("xyz");

        assert_eq!(
            tracker.resolve(&first, UniquenessOutcome::Taken, "xyz"),
            Resolution::Stale
        );
        assert_eq!(tracker.pending(), Some(&second));
        assert!(!tracker.is_taken("xyz"));
    }

    #[test]
    fn ticket_for_a_value_no_longer_held_is_stale() {
        let mut tracker = UniquenessTracker::default();
        let ticket = tracker.begin("abc");

        assert_eq!(
            tracker.resolve(&ticket, UniquenessOutcome::Available, "abcd"),
            Resolution::Stale
        );
        assert!(tracker.is_pending());
    }

    #[test]
    fn same_value_reissued_still_supersedes() {
        let mut tracker = UniquenessTracker::default();
        let first = tracker.begin("abc");
        let second = tracker.begin("abc");

        assert_eq!(
            tracker.resolve(&first, UniquenessOutcome::Taken, "abc"),
            Resolution::Stale
        );
        assert_eq!(
            tracker.resolve(&second, UniquenessOutcome::Available, "abc"),
            Resolution::Applied(UniquenessOutcome::Available)
        );
    }

    #[test]
    fn clear_makes_outstanding_tickets_stale() {
        let mut tracker = UniquenessTracker::default();
        let ticket = tracker.begin("abc");

        tracker.clear();

        assert_eq!(
            tracker.resolve(&ticket, UniquenessOutcome::Taken, "abc"),
            Resolution::Stale
        );
        assert_eq!(tracker.status(), &UniquenessStatus::Idle);
    }
}
