//! Debounce bookkeeping, independent of any timer.
//!
//! The UI calls [`Debounced::input`] on every keystroke and gets a ticket
//! back, sleeps for the debounce interval, then calls [`Debounced::settle`]
//! with that ticket. Only the ticket from the most recent input settles;
//! earlier sleeps wake up to a stale ticket and do nothing. This gives the
//! same result as cancelling the previous timer without needing cancellable
//! timers.

/// Opaque handle returned by [`Debounced::input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Debounced<T> {
    generation: u64,
    pending: Option<T>,
    settled: T,
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T) -> Self {
        Self {
            generation: 0,
            pending: None,
            settled: initial,
        }
    }

    /// Record a new raw value, superseding any pending one.
    pub fn input(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Promote the pending value if `ticket` is still the latest input.
    ///
    /// Returns the newly settled value, or `None` when the ticket is stale or
    /// the value did not change.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        if value == self.settled {
            return None;
        }
        self.settled = value.clone();
        Some(value)
    }

    /// Drop any pending value and settle on `value` at once. The generation
    /// keeps counting, so sleeps started before the reset stay stale.
    pub fn reset(&mut self, value: T) {
        self.generation += 1;
        self.pending = None;
        self.settled = value;
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
