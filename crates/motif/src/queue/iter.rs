use core::{fmt, iter::FusedIterator};

use crate::queue::{Queue, Slot};

/// A lazy forward iterator over a [`Queue`], created by [`Queue::iter`].
///
/// Each call to [`next`](Iterator::next) follows one link of the chain. Once
/// the tail has been yielded the iterator keeps returning `None`.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], head: Option<usize>, len: usize) -> Self {
        Self {
            slots,
            cursor: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        match &self.slots[index] {
            Slot::Occupied { value, next } => {
                self.cursor = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => {
                self.cursor = None;
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over a [`Queue`], created by
/// [`into_iter`](IntoIterator::into_iter).
///
/// Values are dequeued one at a time, so unconsumed values are dropped
/// together with the iterator.
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(queue: Queue<T>) -> Self {
        Self { queue }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}
