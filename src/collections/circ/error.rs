use std::error;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when removing the front item of a RingBuffer that holds no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to advance the front of an empty ring buffer!")]
pub struct BufferEmpty;

/// Returned when committing the back slot of a RingBuffer that has no free slot to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoFreeSlot {
    pub len: usize,
    pub cap: usize,
}

impl fmt::Display for NoFreeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No free slot to commit in ring buffer holding {} of {} items!",
            self.len, self.cap
        )
    }
}

impl error::Error for NoFreeSlot {}

/// The backing already had more slots than the capacity of the RingBuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingTooLong {
    pub len: usize,
    pub cap: usize,
}

impl fmt::Display for BackingTooLong {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Backing with {} slots exceeds ring buffer capacity {}!",
            self.len, self.cap
        )
    }
}

impl error::Error for BackingTooLong {}

/// The backing can never hold as many slots as the capacity of the RingBuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingTooShort {
    pub max_len: usize,
    pub cap: usize,
}

impl fmt::Display for BackingTooShort {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Backing can hold at most {} slots, short of ring buffer capacity {}!",
            self.max_len, self.cap
        )
    }
}

impl error::Error for BackingTooShort {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum BackingError {
    TooLong(BackingTooLong),
    TooShort(BackingTooShort),
}
