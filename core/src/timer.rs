use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Handle for a scheduled entry. Tokens are unique per timeline and also
/// break ties between entries sharing a deadline (earlier schedule fires
/// first).
pub type TimerToken = u64;

#[derive(Debug, Clone)]
struct Entry<E> {
    fire_at: u64,
    token: TimerToken,
    payload: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.token == other.token
    }
}
impl<E> Eq for Entry<E> {}
impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fire_at
            .cmp(&other.fire_at)
            .then(self.token.cmp(&other.token))
    }
}

/// A virtual-millisecond clock with cancellable delayed callbacks.
///
/// Simulators own one timeline each and pump it from the frame loop:
/// `poll` surfaces due entries one at a time with the clock parked at the
/// entry's deadline, so anything scheduled in response lands strictly
/// after it; `settle` then moves the clock to the frame's end.
pub struct Timeline<E> {
    pub now_ms: u64,
    queue: BinaryHeap<Reverse<Entry<E>>>,
    cancelled: HashSet<TimerToken>,
    next_token: TimerToken,
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
            next_token: 1,
        }
    }

    pub fn schedule(&mut self, delay_ms: u64, payload: E) -> TimerToken {
        let token = self.next_token;
        self.next_token += 1;
        self.queue.push(Reverse(Entry {
            fire_at: self.now_ms + delay_ms,
            token,
            payload,
        }));
        token
    }

    /// A cancelled entry never surfaces from `poll`.
    pub fn cancel(&mut self, token: TimerToken) {
        self.cancelled.insert(token);
    }

    /// Next live entry due at or before `deadline_ms`, with the clock moved
    /// to its fire time. Returns None once the frame window is drained.
    pub fn poll(&mut self, deadline_ms: u64) -> Option<(TimerToken, E)> {
        while let Some(Reverse(head)) = self.queue.peek() {
            if head.fire_at > deadline_ms {
                return None;
            }
            let Reverse(entry) = self.queue.pop().expect("peeked entry");
            if self.cancelled.remove(&entry.token) {
                continue;
            }
            self.now_ms = entry.fire_at;
            return Some((entry.token, entry.payload));
        }
        None
    }

    /// Move the clock to the end of the frame window after draining it.
    pub fn settle(&mut self, deadline_ms: u64) {
        if deadline_ms > self.now_ms {
            self.now_ms = deadline_ms;
        }
    }

    /// Entries still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(e)| !self.cancelled.contains(&e.token))
            .count()
    }

    /// Teardown path: drop every pending entry.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cancelled.clear();
    }
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}
