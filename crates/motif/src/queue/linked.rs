use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::queue::{IntoIter, Iter};

/// A node in the queue's arena.
///
/// Occupied slots form the FIFO chain through `next`. Vacant slots form a
/// free list through `next_free` and are reused before the arena grows.
#[derive(Clone)]
pub(crate) enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Vacant { next_free: Option<usize> },
}

impl<T> Slot<T> {
    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Self::Occupied { value, .. } => Some(value),
            Self::Vacant { .. } => None,
        }
    }

    fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Occupied { value, .. } => Some(value),
            Self::Vacant { .. } => None,
        }
    }

    /// Marks the slot vacant and hands back its value and successor.
    ///
    /// Leaves an already vacant slot untouched and returns `None`.
    fn vacate(&mut self, next_free: Option<usize>) -> Option<(T, Option<usize>)> {
        match core::mem::replace(self, Self::Vacant { next_free }) {
            Self::Occupied { value, next } => Some((value, next)),
            vacant @ Self::Vacant { .. } => {
                *self = vacant;
                None
            }
        }
    }
}

/// An ordered first-in, first-out queue backed by a singly-linked list.
///
/// Nodes live in an index-based arena: every node owns its value and the index
/// of the node behind it, the queue keeps the index of the head, and `tail` is
/// a plain index used only to append in O(1). Nothing points backwards, so the
/// structure needs neither reference counting nor `unsafe`.
///
/// ## Guarantees
/// - ✅ [`enqueue`](Self::enqueue) is O(1) amortized, [`dequeue`](Self::dequeue)
///   and [`peek`](Self::peek) are O(1)
/// - ✅ Values come out in exactly the order they went in
/// - ✅ An empty queue answers `None`, never an error
/// - ❌ Not a concurrent queue; wrap it in a lock to share it
///
/// # Example
/// ```
/// use motif::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue without allocating.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` values before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Appends `value` at the tail of the queue.
    ///
    /// # Example
    /// ```
    /// use motif::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue("first");
    /// queue.enqueue("second");
    ///
    /// assert_eq!(queue.peek(), Some(&"first"));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = self.len)))]
    pub fn enqueue(&mut self, value: T) {
        let index = self.allocate(value);
        match self.tail {
            Some(tail) => {
                if let Slot::Occupied { next, .. } = &mut self.slots[tail] {
                    *next = Some(index);
                }
            }
            None => {
                debug_assert!(self.head.is_none(), "tail is absent but head is not");
                self.head = Some(index);
            }
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes and returns the value at the head of the queue.
    ///
    /// Returns `None` when the queue is empty.
    ///
    /// # Example
    /// ```
    /// use motif::Queue;
    ///
    /// let mut queue: Queue<u8> = [7, 8].into_iter().collect();
    ///
    /// assert_eq!(queue.dequeue(), Some(7));
    /// assert_eq!(queue.dequeue(), Some(8));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = self.len)))]
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let (value, next) = self.slots[head].vacate(self.free)?;
        self.free = Some(head);
        self.head = next;
        self.len -= 1;

        if self.head.is_none() {
            // Every slot is vacant now; restart the arena from scratch.
            self.tail = None;
            self.free = None;
            self.slots.clear();
        }
        Some(value)
    }

    /// Returns a reference to the value at the head without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|head| self.slots[head].value())
    }

    /// Returns a mutable reference to the value at the head without removing
    /// it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        self.slots[head].value_mut()
    }

    /// Returns `true` if the queue holds no values.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of values in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Drops every value and resets the queue, keeping the arena's allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    /// Returns a lazy iterator over the values in FIFO order.
    ///
    /// The iterator borrows the queue, so the queue cannot change until the
    /// iterator is dropped: it always walks the chain as it was when the
    /// iterator was created.
    ///
    /// # Example
    /// ```
    /// use motif::Queue;
    ///
    /// let queue: Queue<i32> = (1..=5).collect();
    /// let mut iter = queue.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.len(), 4);
    /// assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.head, self.len)
    }

    fn allocate(&mut self, value: T) -> usize {
        let slot = Slot::Occupied { value, next: None };
        if let Some(index) = self.free {
            if let Slot::Vacant { next_free } = self.slots[index] {
                self.free = next_free;
                self.slots[index] = slot;
                return index;
            }
            debug_assert!(false, "free list points at an occupied slot");
        }
        self.slots.push(slot);
        self.slots.len() - 1
    }

    /// Walks the chain and checks the head/tail/len invariant.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.len, 0),
            (Some(head), Some(tail)) => {
                let mut steps = 0;
                let mut cursor = head;
                while cursor != tail {
                    match &self.slots[cursor] {
                        Slot::Occupied {
                            next: Some(next), ..
                        } => cursor = *next,
                        _ => panic!("chain broken after {steps} steps"),
                    }
                    steps += 1;
                    assert!(steps < self.len, "chain longer than len");
                }
                assert_eq!(steps, self.len - 1, "tail reached in wrong step count");
                assert!(matches!(self.slots[tail], Slot::Occupied { next: None, .. }));
            }
            (head, tail) => panic!("inconsistent ends: head={head:?} tail={tail:?}"),
        }
    }

    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.slots.reserve(iter.size_hint().0);
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Queue<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
