//! Priority wait queue with membership tracking
//!
//! Wraps a binary heap of queue slots plus a name set so that duplicate
//! membership checks are O(1) instead of a heap scan.
//!
//! # Ordering
//!
//! Lower priority value is dequeued first. Ties are broken FIFO via a
//! monotonic sequence number assigned at enqueue time, so the pop order is
//! fully deterministic.
//!
//! # Staleness
//!
//! The priority is **captured at enqueue time**. If a client's priority is
//! boosted or penalized while the client sits in the queue, the queued entry
//! keeps its old position; the new priority only matters for the next
//! enqueue. The queue is never re-sorted.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// A single queued entry: the client's name plus the ordering keys
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueueSlot {
    /// Priority captured at enqueue time (lower = served earlier)
    priority: i32,

    /// Monotonic tie-break: among equal priorities, first in is first out
    seq: u64,

    name: String,
}

impl Ord for QueueSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for QueueSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-ordered wait queue of client names
///
/// A client appears at most once at any time; `push` on a present client is
/// a no-op returning false.
#[derive(Debug, Clone, Default)]
pub struct WaitQueue {
    /// Min-heap on (priority, seq)
    heap: BinaryHeap<Reverse<QueueSlot>>,

    /// Names currently queued (duplicate guard)
    members: HashSet<String>,

    next_seq: u64,
}

impl WaitQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: HashSet::new(),
            next_seq: 0,
        }
    }

    /// Insert a client under the given priority
    ///
    /// Returns false (and changes nothing) if the client is already queued.
    pub fn push(&mut self, name: &str, priority: i32) -> bool {
        if !self.members.insert(name.to_string()) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(QueueSlot {
            priority,
            seq,
            name: name.to_string(),
        }));
        true
    }

    /// Remove and return the best-priority client
    ///
    /// Returns the name and the priority the entry was queued under, or None
    /// if the queue is empty.
    pub fn pop(&mut self) -> Option<(String, i32)> {
        let Reverse(slot) = self.heap.pop()?;
        self.members.remove(&slot.name);
        Some((slot.name, slot.priority))
    }

    /// Check whether a client is currently queued
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Number of clients waiting
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Names of all clients currently waiting (unordered)
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|s| s.as_str())
    }
}
