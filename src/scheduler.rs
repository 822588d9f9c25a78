//! Deferred tasks on a manually advanced clock.
//!
//! Page turns are two continuations fired after fixed delays. They are
//! issued through [`Schedule`] and held by a [`Timeline`] until the host
//! moves time forward. Tasks come out ordered by due time, and tasks due at
//! the same instant come out in the order they were scheduled.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Milliseconds since the timeline was created.
pub type Millis = u64;

/// Something that can run a task after a delay.
pub trait Schedule<T> {
    fn now(&self) -> Millis;

    fn schedule(&mut self, delay: Millis, task: T);
}

#[derive(Debug)]
struct Entry<T> {
    due: Millis,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.due, self.seq) == (other.due, other.seq)
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

#[derive(Debug)]
pub struct Timeline<T> {
    now: Millis,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pop the earliest task due at or before `deadline`, moving the clock to
    /// its due time.
    ///
    /// Callers that handle a task may schedule new ones; popping one at a
    /// time lets those run in the same advance when they fall due.
    pub fn pop_due(&mut self, deadline: Millis) -> Option<T> {
        if self.next_due()? > deadline {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Move the clock to `deadline` once every task due by then was popped.
    pub fn settle_at(&mut self, deadline: Millis) {
        self.now = self.now.max(deadline);
    }

    /// Advance by `delta` and return every task that fell due, in order.
    pub fn advance(&mut self, delta: Millis) -> Vec<T> {
        let deadline = self.now.saturating_add(delta);
        let mut due = Vec::new();
        while let Some(task) = self.pop_due(deadline) {
            due.push(task);
        }
        self.settle_at(deadline);
        due
    }
}

impl<T> Schedule<T> for Timeline<T> {
    fn now(&self) -> Millis {
        self.now
    }

    fn schedule(&mut self, delay: Millis, task: T) {
        let entry = Entry {
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }
}
