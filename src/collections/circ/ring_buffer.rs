use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use log::{debug, trace};

use super::{
    Backing, BackingError, BackingTooLong, BackingTooShort, BufferEmpty, Iter, NoFreeSlot,
};
use crate::util::result::ResultExtension;

/// A FIFO queue holding at most `CAP` items, adapting the backing container `B` as its storage.
///
/// Items are [`push`](RingBuffer::push)ed onto the back and read from the front. Once the buffer
/// is full, every push evicts the oldest item and reuses its slot. Evicted or popped items aren't
/// dropped straight away: they stay in the backing until their slot is overwritten.
///
/// The backing decides how storage is obtained:
/// - A fixed size backing, such as the default `[T; CAP]`, must have exactly `CAP` slots from the
///   start. With an array, the whole buffer can live on the stack.
/// - A [`GROWABLE`](Backing::GROWABLE) backing, such as [`Vec`], is appended to until it reaches
///   `CAP` slots, after which its slots are reused.
///
/// Positions into the backing are stored as offsets from its start, so a clone or a move of the
/// buffer remains valid for the new backing without any rebasing.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `c`: The capacity of the RingBuffer.
/// - `s`: The cost of [`Backing::slot`] for the backing in use (`1` apart from linked lists).
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `is_empty`, `is_full` | `O(1)` |
/// | `push` | `O(s)` |
/// | `front`, `back`, `get` | `O(s)` |
/// | `advance_front`, `advance_back` | `O(1)` |
/// | `reset` | `O(1)` |
/// | `fill` | `O(c*s)` |
/// | `clone` | `O(c)` |
pub struct RingBuffer<T, const CAP: usize, B = [T; CAP]> {
    backing: B,
    len: usize,
    // Offset of the oldest item. Meaningless while the buffer is empty.
    front: usize,
    // Offset of the next slot to write. Equal to backing.len() while a growable backing is still
    // being appended to.
    back: usize,
    _phantom: PhantomData<T>,
}

impl<T, const CAP: usize> RingBuffer<T, CAP, [T; CAP]> {
    /// Creates a new, empty RingBuffer using the provided array as its storage. The array's current
    /// values are treated as free slots.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let buf = RingBuffer::from_array([0_u8; 4]);
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    pub const fn from_array(backing: [T; CAP]) -> RingBuffer<T, CAP, [T; CAP]> {
        RingBuffer {
            backing,
            len: 0,
            front: 0,
            back: 0,
            _phantom: PhantomData,
        }
    }
}

impl<T, const CAP: usize, B: Backing<T>> RingBuffer<T, CAP, B> {
    /// Creates a new, empty RingBuffer with the default value of the backing as its storage.
    ///
    /// # Panics
    /// Panics if the default backing can't be used with this capacity, see
    /// [`with_backing`](RingBuffer::with_backing).
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let buf: RingBuffer<u8, 8, Vec<u8>> = RingBuffer::new();
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.backing().len(), 0);
    /// ```
    pub fn new() -> RingBuffer<T, CAP, B>
    where
        B: Default,
    {
        Self::with_backing(B::default()).throw()
    }

    /// Creates a new, empty RingBuffer using the provided backing as its storage. Any slots the
    /// backing already contains are treated as free and will be overwritten, starting from the
    /// first.
    ///
    /// # Errors
    /// Returns [`BackingError::TooLong`] if the backing already has more than `CAP` slots, or
    /// [`BackingError::TooShort`] if it can never grow to `CAP` slots. The latter is always the
    /// case for a fixed size backing with fewer than `CAP` slots.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let buf = RingBuffer::<u8, 3, Box<[u8]>>::with_backing(vec![0, 0, 0].into_boxed_slice());
    /// assert!(buf.is_ok());
    ///
    /// let buf = RingBuffer::<u8, 3, Box<[u8]>>::with_backing(vec![0, 0].into_boxed_slice());
    /// assert!(buf.unwrap_err().is_too_short());
    ///
    /// let buf = RingBuffer::<u8, 3, Vec<u8>>::with_backing(vec![0; 4]);
    /// assert!(buf.unwrap_err().is_too_long());
    /// ```
    pub fn with_backing(backing: B) -> Result<RingBuffer<T, CAP, B>, BackingError> {
        let len = backing.len();
        if len > CAP {
            Err(BackingTooLong { len, cap: CAP })?
        }

        let max_len = backing.max_len();
        if max_len < CAP {
            Err(BackingTooShort { max_len, cap: CAP })?
        }

        Ok(RingBuffer {
            backing,
            len: 0,
            front: 0,
            back: 0,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of live items in the RingBuffer.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of items the RingBuffer can hold, which is always `CAP`.
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Returns true if the RingBuffer holds no items.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the RingBuffer holds `CAP` items, meaning that the next push will evict the
    /// front item. A RingBuffer with capacity 0 is both empty and full.
    pub const fn is_full(&self) -> bool {
        self.len == CAP
    }

    /// Returns a reference to the backing, for inspecting the storage in its own order.
    pub const fn backing(&self) -> &B {
        &self.backing
    }

    /// Returns a mutable iterator over every slot of the backing in storage order, live or not.
    /// Values can be replaced, but the slots themselves can't be added or removed.
    pub fn slots_mut(&mut self) -> B::SlotsMut<'_> {
        self.backing.slots_mut()
    }

    /// Consumes the RingBuffer, returning its backing.
    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Returns a reference to the item `index` positions behind the front, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::from_array([0; 3]);
    /// buf.extend([1, 2, 3, 4]);
    /// assert_eq!(buf.get(0), Some(&2));
    /// assert_eq!(buf.get(2), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.backing.slot(self.offset_of(index))
    }

    /// Returns a mutable reference to the item `index` positions behind the front, if there is one.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let offset = self.offset_of(index);
        self.backing.slot_mut(offset)
    }

    /// Returns a reference to the oldest item, or None if the RingBuffer is empty.
    ///
    /// To remove an item without cloning it through [`pop`](RingBuffer::pop), read it with this
    /// method and then call [`advance_front`](RingBuffer::advance_front).
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the oldest item, or None if the RingBuffer is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the next free slot, which is not the newest item but the slot the
    /// next item will be written into. Returns None if the RingBuffer is full, or if the free slot
    /// hasn't been appended to a growable backing yet.
    pub fn back(&self) -> Option<&T> {
        if self.is_full() {
            return None;
        }
        self.backing.slot(self.back)
    }

    /// Returns a mutable reference to the next free slot, see [`back`](RingBuffer::back).
    ///
    /// Together with [`advance_back`](RingBuffer::advance_back) this allows an item to be written
    /// in place rather than moved in with [`push`](RingBuffer::push).
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::from_array([String::new(), String::new()]);
    /// if let Some(slot) = buf.back_mut() {
    ///     slot.clear();
    ///     slot.push_str("written in place");
    ///     buf.advance_back();
    /// }
    /// assert_eq!(buf.front().map(String::as_str), Some("written in place"));
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_full() {
            return None;
        }
        self.backing.slot_mut(self.back)
    }

    /// Removes the oldest item from the RingBuffer. The item isn't dropped, it stays in its slot
    /// until that slot is written again.
    ///
    /// # Panics
    /// Panics if the RingBuffer is empty.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::from_array([0; 3]);
    /// buf.push(1);
    /// buf.push(2);
    /// buf.advance_front();
    /// assert_eq!(buf.front(), Some(&2));
    /// ```
    #[track_caller]
    pub fn advance_front(&mut self) {
        self.try_advance_front().throw()
    }

    /// Same as [`advance_front`](RingBuffer::advance_front).
    ///
    /// # Panics
    /// Panics if the RingBuffer is empty.
    #[track_caller]
    pub fn pop_front(&mut self) {
        self.advance_front()
    }

    /// Removes the oldest item from the RingBuffer, unless it is empty.
    ///
    /// # Errors
    /// Returns [`BufferEmpty`] if there is no item to remove.
    pub fn try_advance_front(&mut self) -> Result<(), BufferEmpty> {
        if self.is_empty() {
            Err(BufferEmpty)?
        }
        self.advance_front_unchecked();
        Ok(())
    }

    /// Commits the free slot returned by [`back_mut`](RingBuffer::back_mut) as the newest item.
    ///
    /// # Panics
    /// Panics if there is no free slot, either because the RingBuffer is full or because the slot
    /// hasn't been appended to a growable backing yet.
    #[track_caller]
    pub fn advance_back(&mut self) {
        self.try_advance_back().throw()
    }

    /// Commits the free slot returned by [`back_mut`](RingBuffer::back_mut) as the newest item, if
    /// there is one.
    ///
    /// # Errors
    /// Returns [`NoFreeSlot`] if the RingBuffer is full or the slot doesn't exist in the backing.
    pub fn try_advance_back(&mut self) -> Result<(), NoFreeSlot> {
        if self.is_full() || self.back >= self.backing.len() {
            Err(NoFreeSlot {
                len: self.len,
                cap: CAP,
            })?
        }
        self.advance_back_unchecked();
        Ok(())
    }

    /// Pushes an item onto the back of the RingBuffer. If the RingBuffer is full, the oldest item
    /// is evicted first and the new item is assigned into its slot.
    ///
    /// Pushing into a RingBuffer with capacity 0 drops the item.
    ///
    /// # Panics
    /// Only panics if the backing doesn't uphold the contract of [`Backing`], by refusing to grow
    /// below its [`max_len`](Backing::max_len) or by losing slots.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let mut buf: RingBuffer<u8, 3, Vec<u8>> = RingBuffer::new();
    /// for i in 1..=4 {
    ///     buf.push(i);
    /// }
    /// assert!(buf.is_full());
    /// assert_eq!(buf.front(), Some(&2));
    /// assert_eq!(buf.backing(), &vec![4, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.push_with(|| value)
    }

    /// Pushes the item returned by `f` onto the back of the RingBuffer, evicting the oldest item
    /// first if it is full. The item is only created once its slot is ready.
    ///
    /// # Panics
    /// Only panics if the backing doesn't uphold the contract of [`Backing`].
    pub fn push_with(&mut self, f: impl FnOnce() -> T) {
        if CAP == 0 {
            trace!("Dropping item pushed into a ring buffer with capacity 0");
            return;
        }

        if self.is_full() {
            trace!("Evicting item at slot {} to make room", self.front);
            self.advance_front_unchecked();
        }

        if B::GROWABLE && self.back == self.backing.len() {
            trace!("Appending slot {} to backing", self.back);
            if self.backing.append(f()).is_err() {
                panic!(
                    "Backing refused to grow to {} slots, despite reporting a max length of {}!",
                    self.back + 1,
                    self.backing.max_len()
                );
            }
        } else {
            match self.backing.slot_mut(self.back) {
                Some(slot) => *slot = f(),
                None => panic!(
                    "Backing lost slot {}, it now holds only {} slots!",
                    self.back,
                    self.backing.len()
                ),
            }
        }

        self.advance_back_unchecked();
    }

    /// Removes the oldest item from the RingBuffer and returns a clone of it, or None if the
    /// RingBuffer is empty.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let mut buf = RingBuffer::from_array([0; 2]);
    /// buf.extend([1, 2, 3]);
    /// assert_eq!(buf.pop(), Some(2));
    /// assert_eq!(buf.pop(), Some(3));
    /// assert_eq!(buf.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let item = self.front()?.clone();
        self.advance_front_unchecked();
        Some(item)
    }

    /// Resets the RingBuffer and then pushes clones of `value` until it is full.
    ///
    /// # Examples
    /// ```
    /// # use circ_buffer::collections::circ::RingBuffer;
    /// let mut buf: RingBuffer<u8, 4, Vec<u8>> = RingBuffer::new();
    /// buf.push(1);
    /// buf.fill(7);
    /// assert!(buf.is_full());
    /// assert!(buf.iter().all(|i| *i == 7));
    /// ```
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        debug!("Filling ring buffer with {CAP} items");
        self.reset();
        if CAP == 0 {
            return;
        }
        for _ in 1..CAP {
            self.push(value.clone());
        }
        self.push(value);
    }

    /// Logically empties the RingBuffer. Items are left in the backing, which keeps all of its
    /// slots, and are dropped as they get overwritten.
    pub fn reset(&mut self) {
        debug!("Resetting ring buffer holding {} items", self.len);
        self.len = 0;
        self.front = 0;
        self.back = 0;
    }

    /// Returns a borrowed iterator over the live items, from oldest to newest.
    pub const fn iter(&self) -> Iter<'_, T, CAP, B> {
        Iter {
            buf: self,
            start: 0,
            end: self.len,
            _phantom: PhantomData,
        }
    }

    fn offset_of(&self, index: usize) -> usize {
        let offset = self.front + index;
        let slots = self.backing.len();
        if offset >= slots { offset - slots } else { offset }
    }

    fn advance_front_unchecked(&mut self) {
        debug_assert!(!self.is_empty());
        self.len -= 1;
        if self.len == 0 {
            self.front = 0;
            self.back = 0;
        } else {
            self.front += 1;
            if self.front == self.backing.len() {
                self.front = 0;
            }
        }
    }

    // The slot at back must hold the value being committed.
    fn advance_back_unchecked(&mut self) {
        debug_assert!(!self.is_full());
        if self.len == 0 {
            self.front = self.back;
        }
        self.len += 1;

        let slots = self.backing.len();
        self.back += 1;
        // A growable backing keeps back on the append position until it holds CAP slots.
        if self.back == slots && !(B::GROWABLE && slots < CAP) {
            self.back = 0;
        }
    }
}

impl<T, const CAP: usize, B: Backing<T> + Default> Default for RingBuffer<T, CAP, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAP: usize, B: Clone> Clone for RingBuffer<T, CAP, B> {
    fn clone(&self) -> Self {
        RingBuffer {
            backing: self.backing.clone(),
            len: self.len,
            front: self.front,
            back: self.back,
            _phantom: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.backing.clone_from(&source.backing);
        self.len = source.len;
        self.front = source.front;
        self.back = source.back;
    }
}

impl<T, const CAP: usize, B: Backing<T>> Extend<T> for RingBuffer<T, CAP, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const CAP: usize, B: Backing<T> + Default> FromIterator<T> for RingBuffer<T, CAP, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<T, const CAP: usize, B, C> PartialEq<RingBuffer<T, CAP, C>> for RingBuffer<T, CAP, B>
where
    T: PartialEq,
    B: Backing<T>,
    C: Backing<T>,
{
    fn eq(&self, other: &RingBuffer<T, CAP, C>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const CAP: usize, B: Backing<T>> Eq for RingBuffer<T, CAP, B> {}

impl<T, const CAP: usize, B: Debug> Debug for RingBuffer<T, CAP, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("backing", &self.backing)
            .field("len", &self.len)
            .field("cap", &CAP)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// Writes every slot of the backing in storage order, opening a bracket before the front item and
/// closing it after the newest. An empty buffer opens and closes the bracket before the first slot.
///
/// ```
/// # use circ_buffer::collections::circ::RingBuffer;
/// let mut buf = RingBuffer::from_array([0; 4]);
/// assert_eq!(buf.to_string(), "[]0,0,0,0");
/// buf.extend([1, 2]);
/// assert_eq!(buf.to_string(), "[1,2],0,0");
/// buf.extend([3, 4, 5]);
/// assert_eq!(buf.to_string(), "5],[2,3,4");
/// ```
impl<T: Display, const CAP: usize, B: Backing<T>> Display for RingBuffer<T, CAP, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.backing.is_empty() {
            return write!(f, "[empty ring buffer]");
        }

        let newest = self.len.checked_sub(1).map(|i| self.offset_of(i));
        for (offset, item) in self.backing.slots().enumerate() {
            if offset != 0 {
                write!(f, ",")?;
            }
            match newest {
                None if offset == 0 => write!(f, "[]")?,
                Some(_) if offset == self.front => write!(f, "[")?,
                _ => {}
            }
            write!(f, "{item}")?;
            if newest == Some(offset) {
                write!(f, "]")?;
            }
        }
        Ok(())
    }
}
