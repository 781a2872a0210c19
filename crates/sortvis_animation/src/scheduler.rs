//! Timer queue
//!
//! Cancellable one-shot timers on a virtual millisecond clock. Ids are
//! generational: once a timer fires or is cancelled its id never matches a
//! pending timer again, even when the slot is reused.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimerId;
}

struct PendingTimer {
    due_ms: u64,
    /// Scheduling order, breaks deadline ties
    seq: u64,
}

/// Pending one-shot timers ordered by deadline
pub struct TimerQueue {
    timers: SlotMap<TimerId, PendingTimer>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule a timer at an absolute virtual time
    pub fn schedule(&mut self, due_ms: u64) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(PendingTimer { due_ms, seq })
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Earliest deadline, if any timer is pending
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|t| t.due_ms).min()
    }

    /// Remove and return the earliest timer due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, u64)> {
        let (id, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(id, t)| (id, t.due_ms))?;
        self.timers.remove(id);
        Some((id, due_ms))
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
