//! Cooperative one-shot timer queue.
//!
//! Time is a `Duration` measured from game start, supplied by the caller, so
//! the queue never reads a clock itself.  A callback that wants to run again
//! simply schedules itself anew, and stops by not doing so.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<T> {
    due: Duration,
    seq: u64,
    timer: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the earliest (then oldest) entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Scheduler {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Post `timer` to fire once `after` has elapsed past `now`.
    pub fn schedule(&mut self, now: Duration, after: Duration, timer: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due: now + after,
            seq,
            timer,
        });
    }

    /// Take the earliest timer whose due time is not after `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        if self.queue.peek()?.due > now {
            return None;
        }
        self.queue.pop().map(|e| e.timer)
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|e| e.due)
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
