//! Debounced search state machine.
//!
//! The debounce is split in two: this module holds the synchronous state
//! transitions, while the UI layer owns the actual timers. `set_query`
//! hands back a [`DebounceTicket`]; the caller schedules a timer for the
//! quiet interval and calls [`SearchDebounce::expire`] with the ticket when
//! it fires. Only the newest ticket is honored, which gives single-slot
//! trailing-edge semantics without the state machine ever touching a clock.

pub use crate::config::DEBOUNCE_QUIET_MS;

/// Token identifying one scheduled debounce commit.
///
/// Stale tickets (superseded by a later `set_query`, `submit`, `clear`, or
/// external sync) expire to nothing, so a timer that outlives its component
/// can never produce a late commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Raw and committed search state.
///
/// `committed` only changes through [`expire`](Self::expire),
/// [`submit`](Self::submit), [`clear`](Self::clear), or
/// [`sync_external`](Self::sync_external); `raw` is live keystroke state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebounce {
    raw: String,
    committed: String,
    generation: u64,
    pending: Option<u64>,
}

impl SearchDebounce {
    /// Creates the state machine with an externally supplied initial value
    /// (typically the `search` query parameter from the URL).
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            raw: initial.clone(),
            committed: initial,
            generation: 0,
            pending: None,
        }
    }

    /// Live keystroke state, echoed back into the input field.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The last value that actually triggered a fetch or navigation.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// True while a scheduled commit has not yet fired or been cancelled.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the raw value and schedules a trailing-edge commit.
    ///
    /// Any previously scheduled commit is superseded; the returned ticket is
    /// the only one [`expire`](Self::expire) will honor.
    pub fn set_query(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.raw = text.into();
        self.generation += 1;
        self.pending = Some(self.generation);
        DebounceTicket(self.generation)
    }

    /// Fires a scheduled commit once its quiet interval has elapsed.
    ///
    /// Returns the committed (trimmed) value, or `None` when the ticket was
    /// superseded in the meantime.
    pub fn expire(&mut self, ticket: DebounceTicket) -> Option<String> {
        if self.pending != Some(ticket.0) {
            return None;
        }
        self.pending = None;
        Some(self.commit())
    }

    /// Commits the current raw value immediately, cancelling any pending
    /// scheduled commit so it cannot double-fire.
    pub fn submit(&mut self) -> String {
        self.pending = None;
        self.commit()
    }

    /// Empties raw and committed state and commits immediately.
    pub fn clear(&mut self) -> String {
        self.raw.clear();
        self.pending = None;
        self.commit()
    }

    /// Adopts an externally committed value (e.g. after navigation replaced
    /// the query parameter) without producing a new commit.
    pub fn sync_external(&mut self, value: &str) {
        if self.raw != value {
            self.raw = value.to_string();
        }
        self.committed = value.to_string();
        self.pending = None;
    }

    fn commit(&mut self) -> String {
        let trimmed = self.raw.trim().to_string();
        self.committed = trimmed.clone();
        trimmed
    }
}
