use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Backing, RingBuffer};

/// A borrowed iterator over the live items of a [`RingBuffer`], from oldest to newest.
pub struct Iter<'a, T, const CAP: usize, B: Backing<T>> {
    pub(crate) buf: &'a RingBuffer<T, CAP, B>,
    // Logical positions, counted from the front of the buffer.
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T, const CAP: usize, B: Backing<T>> Iterator for Iter<'a, T, CAP, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let item = self.buf.get(self.start);
        self.start += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, const CAP: usize, B: Backing<T>> DoubleEndedIterator for Iter<'_, T, CAP, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        self.buf.get(self.end)
    }
}

impl<T, const CAP: usize, B: Backing<T>> ExactSizeIterator for Iter<'_, T, CAP, B> {}

impl<T, const CAP: usize, B: Backing<T>> FusedIterator for Iter<'_, T, CAP, B> {}

impl<T, const CAP: usize, B: Backing<T>> Clone for Iter<'_, T, CAP, B> {
    fn clone(&self) -> Self {
        Iter {
            buf: self.buf,
            start: self.start,
            end: self.end,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T, const CAP: usize, B: Backing<T>> IntoIterator for &'a RingBuffer<T, CAP, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CAP, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
