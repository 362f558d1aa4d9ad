//! A module containing [`RingBuffer`] and associated types.
//!
//! The storage of a RingBuffer is abstracted by the [`Backing`] trait, which is implemented for
//! arrays, boxed slices, [`Vec`], [`VecDeque`](std::collections::VecDeque) and
//! [`LinkedList`](std::collections::LinkedList). The remaining types are the errors returned by the
//! fallible methods and [`Iter`] for borrowed iteration over the live items.

mod backing;
mod error;
mod iter;
mod ring_buffer;
mod tests;

pub use backing::*;
pub use error::*;
pub use iter::*;
pub use ring_buffer::*;
