use std::collections::vec_deque;
use std::collections::VecDeque;

use thiserror::Error;

/// Error returned when removing from a queue that has no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty")]
pub struct EmptyQueue;

/// FIFO queue holding at most a fixed number of elements.
///
/// Inserting into a full queue evicts the oldest entries until the new one
/// fits, so the queue never grows past its capacity. The capacity is fixed at
/// construction; the minimum is one.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    entries: VecDeque<T>,
    max_entries: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `max_entries` elements.
    ///
    /// A requested capacity of zero is clamped to one.
    pub fn new(max_entries: usize) -> Self {
        let max_entries = if max_entries == 0 {
            log::warn!("bounded queue requested with capacity 0, clamping to 1");
            1
        } else {
            max_entries
        };
        BoundedQueue {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends `item` at the back, evicting from the front until it fits.
    pub fn enqueue(&mut self, item: T) {
        while self.entries.len() + 1 > self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(item);
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        self.entries.pop_front().ok_or(EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.max_entries
    }

    /// Iterates the contents, oldest first, without consuming them.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Snapshot of the contents, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        BoundedQueue::new(1)
    }
}

impl<T> From<Vec<T>> for BoundedQueue<T> {
    /// Capacity is pinned to the source length, clamped to one when empty.
    fn from(items: Vec<T>) -> Self {
        let max_entries = items.len().max(1);
        BoundedQueue {
            entries: VecDeque::from(items),
            max_entries,
        }
    }
}

impl<T> FromIterator<T> for BoundedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BoundedQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_bounds_size() {
        let mut queue = BoundedQueue::new(3);
        for i in 0..10 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.to_vec(), vec![7, 8, 9]);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut queue = BoundedQueue::new(2);
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.to_vec(), vec![2, 3]);
    }

    #[test]
    fn dequeue_on_empty_fails() {
        let mut queue: BoundedQueue<u8> = BoundedQueue::new(1);
        assert_eq!(queue.dequeue(), Err(EmptyQueue));
    }

    #[test]
    fn fifo_order_survives_eviction() {
        let mut queue = BoundedQueue::new(3);
        for item in ["a", "b", "c", "d"] {
            queue.enqueue(item);
        }
        assert_eq!(queue.to_vec(), vec!["b", "c", "d"]);
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.to_vec(), vec!["c", "d"]);
    }

    #[test]
    fn from_vec_pins_capacity() {
        let mut queue = BoundedQueue::from(vec!['x', 'y', 'z']);
        assert_eq!(queue.capacity(), 3);
        queue.enqueue('w');
        assert_eq!(queue.to_vec(), vec!['y', 'z', 'w']);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut queue = BoundedQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.to_vec(), vec![2]);
    }

    #[test]
    fn empty_source_clamps_capacity() {
        let queue: BoundedQueue<u8> = BoundedQueue::from(Vec::new());
        assert_eq!(queue.capacity(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn default_holds_single_entry() {
        let mut queue = BoundedQueue::default();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(2));
        assert!(queue.is_empty());
    }

    #[test]
    fn collects_from_iterator() {
        let queue: BoundedQueue<_> = (0..4).collect();
        assert_eq!(queue.capacity(), 4);
        assert!(queue.is_full());
        assert_eq!(queue.to_vec(), vec![0, 1, 2, 3]);
    }
}
