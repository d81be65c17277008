// src/ctr/mod.rs

//! Counter-mode engine.
//!
//! Core API: [`transform_iov`] over a scatter/gather list, and [`transform`]
//! for one contiguous buffer. Both are their own inverse: the same call
//! encrypts and decrypts.

pub(crate) mod single;
pub(crate) mod transform;

pub use single::transform;
pub use transform::transform_iov;
