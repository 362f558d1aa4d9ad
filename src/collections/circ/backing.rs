use std::collections::{LinkedList, VecDeque, linked_list, vec_deque};
use std::slice;

/// The storage that a [`RingBuffer`](super::RingBuffer) adapts into a FIFO queue.
///
/// A backing is a sequence of slots addressed by offset from its start. The RingBuffer only ever
/// replaces the values in existing slots or, if the backing is [`GROWABLE`](Backing::GROWABLE),
/// appends new slots to the end. It never removes slots, so the length of a backing only grows
/// while it is owned by a RingBuffer.
///
/// # Time Complexity
/// The RingBuffer's own bookkeeping is `O(1)`, but every read or write goes through
/// [`slot`](Backing::slot) or [`slot_mut`](Backing::slot_mut), so the complexity of those
/// determines the complexity of [`push`](super::RingBuffer::push),
/// [`front`](super::RingBuffer::front) and friends. They are `O(1)` for everything provided here
/// apart from [`LinkedList`], where they are `O(n)`.
pub trait Backing<T> {
    /// Borrowed iterator over every slot, in storage order.
    type Slots<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Mutable iterator over every slot, in storage order.
    type SlotsMut<'a>: Iterator<Item = &'a mut T>
    where
        Self: 'a,
        T: 'a;

    /// Whether [`append`](Backing::append) can add new slots to this backing. This is checked at
    /// compile time, so a fixed size backing never pays for the growth path.
    const GROWABLE: bool = false;

    /// Returns the number of slots currently in the backing.
    fn len(&self) -> usize;

    /// Returns true if the backing has no slots at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the largest number of slots this backing could ever hold. Defaults to the current
    /// length, which is correct for any backing that can't grow.
    fn max_len(&self) -> usize {
        self.len()
    }

    /// Returns a reference to the slot at `index`, or None if it is out of bounds.
    fn slot(&self, index: usize) -> Option<&T>;

    /// Returns a mutable reference to the slot at `index`, or None if it is out of bounds.
    fn slot_mut(&mut self, index: usize) -> Option<&mut T>;

    fn slots(&self) -> Self::Slots<'_>;

    fn slots_mut(&mut self) -> Self::SlotsMut<'_>;

    /// Adds a new slot containing `value` to the end of the backing. Backings that can't grow
    /// hand the value straight back.
    ///
    /// # Errors
    /// Returns the provided value if the backing can't be extended.
    fn append(&mut self, value: T) -> Result<(), T> {
        Err(value)
    }
}

impl<T, const N: usize> Backing<T> for [T; N] {
    type Slots<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;
    type SlotsMut<'a>
        = slice::IterMut<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        N
    }

    fn slot(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn slots(&self) -> Self::Slots<'_> {
        <[T]>::iter(self)
    }

    fn slots_mut(&mut self) -> Self::SlotsMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T> Backing<T> for Box<[T]> {
    type Slots<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;
    type SlotsMut<'a>
        = slice::IterMut<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn slot(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn slots(&self) -> Self::Slots<'_> {
        <[T]>::iter(self)
    }

    fn slots_mut(&mut self) -> Self::SlotsMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T> Backing<T> for Vec<T> {
    type Slots<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;
    type SlotsMut<'a>
        = slice::IterMut<'a, T>
    where
        T: 'a;

    const GROWABLE: bool = true;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn max_len(&self) -> usize {
        isize::MAX as usize
    }

    fn slot(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn slots(&self) -> Self::Slots<'_> {
        <[T]>::iter(self)
    }

    fn slots_mut(&mut self) -> Self::SlotsMut<'_> {
        <[T]>::iter_mut(self)
    }

    fn append(&mut self, value: T) -> Result<(), T> {
        self.push(value);
        Ok(())
    }
}

impl<T> Backing<T> for VecDeque<T> {
    type Slots<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;
    type SlotsMut<'a>
        = vec_deque::IterMut<'a, T>
    where
        T: 'a;

    const GROWABLE: bool = true;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn max_len(&self) -> usize {
        isize::MAX as usize
    }

    fn slot(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn slots(&self) -> Self::Slots<'_> {
        VecDeque::iter(self)
    }

    fn slots_mut(&mut self) -> Self::SlotsMut<'_> {
        VecDeque::iter_mut(self)
    }

    fn append(&mut self, value: T) -> Result<(), T> {
        self.push_back(value);
        Ok(())
    }
}

impl<T> Backing<T> for LinkedList<T> {
    type Slots<'a>
        = linked_list::Iter<'a, T>
    where
        T: 'a;
    type SlotsMut<'a>
        = linked_list::IterMut<'a, T>
    where
        T: 'a;

    const GROWABLE: bool = true;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn max_len(&self) -> usize {
        usize::MAX
    }

    // Walks from the head every time, the list keeps no index.
    fn slot(&self, index: usize) -> Option<&T> {
        LinkedList::iter(self).nth(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        LinkedList::iter_mut(self).nth(index)
    }

    fn slots(&self) -> Self::Slots<'_> {
        LinkedList::iter(self)
    }

    fn slots_mut(&mut self) -> Self::SlotsMut<'_> {
        LinkedList::iter_mut(self)
    }

    fn append(&mut self, value: T) -> Result<(), T> {
        self.push_back(value);
        Ok(())
    }
}

#[cfg(feature = "heapless")]
impl<T, const N: usize> Backing<T> for heapless::Vec<T, N> {
    type Slots<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;
    type SlotsMut<'a>
        = slice::IterMut<'a, T>
    where
        T: 'a;

    const GROWABLE: bool = true;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn max_len(&self) -> usize {
        N
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn slots(&self) -> Self::Slots<'_> {
        self.as_slice().iter()
    }

    fn slots_mut(&mut self) -> Self::SlotsMut<'_> {
        self.as_mut_slice().iter_mut()
    }

    fn append(&mut self, value: T) -> Result<(), T> {
        self.push(value)
    }
}
