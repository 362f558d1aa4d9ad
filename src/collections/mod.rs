//! Collection types built on top of other collections.
//!
//! # Purpose
//! Rather than managing their own allocations, the types here adapt existing containers, which
//! keeps them free of unsafe code and lets the caller pick the storage strategy.

#[cfg(feature = "circ")]
pub mod circ;
