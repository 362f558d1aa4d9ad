//! A small crate providing a capacity-bounded ring buffer that adapts an arbitrary backing
//! container into a FIFO queue.
//!
//! # Purpose
//! Most ring buffers own a fixed slab of memory. [`RingBuffer`](collections::circ::RingBuffer)
//! instead wraps whatever sequential container it is given: a plain array for a buffer that lives
//! entirely on the stack, a [`Vec`] that grows lazily up to the capacity before it starts reusing
//! its slots, or a [`LinkedList`](std::collections::LinkedList) if that is what the caller already
//! has. The container only needs to implement [`Backing`](collections::circ::Backing).
//!
//! # Error Handling
//! Removing from an empty buffer, or committing a manually written slot when there is no free slot,
//! is a logic error on the caller's side. Both can be checked for beforehand with
//! [`is_empty`](collections::circ::RingBuffer::is_empty) and
//! [`is_full`](collections::circ::RingBuffer::is_full), so the plain methods panic when their
//! preconditions don't hold. Each of them has a `try_` counterpart returning a [`Result`] for
//! callers that would rather branch on the error.
//!
//! Errors are strongly typed structs implementing [`Error`](std::error::Error), joined into enums
//! where a method can fail in more than one way.
//!
//! # Dependencies
//! `derive_more` removes the boilerplate from the error types and `log` is used for tracing what
//! the buffer does with its slots. Enabling the `heapless` feature adds a [`Backing`] impl for
//! `heapless::Vec`, which gives a growable buffer without any heap allocation.
//!
//! [`Backing`]: collections::circ::Backing

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
