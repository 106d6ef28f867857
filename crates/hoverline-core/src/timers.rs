//! Deterministic queue of fire-and-forget animation timeouts.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::animator::TimeoutRequest;

/// Pending timeouts ordered by due time, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BinaryHeap<Reverse<(u64, u64, u64)>>,
    sequence: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `request` relative to `now`.
    pub fn schedule(&mut self, now: u64, request: TimeoutRequest) {
        let due = now.saturating_add(request.delay_ms);
        self.pending
            .push(Reverse((due, self.sequence, request.generation)));
        self.sequence += 1;
    }

    /// Earliest due time, if any.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Remove and return the generations of every timeout due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Vec<u64> {
        let mut fired = Vec::new();
        while let Some(Reverse((due, _, generation))) = self.pending.peek().copied() {
            if due > now {
                break;
            }
            self.pending.pop();
            fired.push(generation);
        }
        fired
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(delay_ms: u64, generation: u64) -> TimeoutRequest {
        TimeoutRequest {
            delay_ms,
            generation,
        }
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, request(300, 1));
        queue.schedule(0, request(100, 2));
        queue.schedule(50, request(50, 3));

        assert_eq!(queue.next_due(), Some(100));
        // Same due time keeps scheduling order
        assert_eq!(queue.pop_due(100), vec![2, 3]);
        assert_eq!(queue.pop_due(299), Vec::<u64>::new());
        assert_eq!(queue.pop_due(300), vec![1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_cancels() {
        let mut queue = TimerQueue::new();
        queue.schedule(0, request(10, 1));
        queue.schedule(0, request(20, 2));
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.pop_due(1_000).is_empty());
        assert_eq!(queue.next_due(), None);
    }
}
