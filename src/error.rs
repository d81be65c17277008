//! # Error Types
//!
//! All recoverable failures of the provider surface as [`CtrError`].
//! Key-schedule expansion failure is deliberately *not* represented here:
//! it is a caller contract violation and panics.

use thiserror::Error;

/// The error type for all CTR provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CtrError {
    /// The key block length is not one the provider accepts.
    #[error("Bad key size: {len} bytes (expected {min}..={max})")]
    BadKeySize {
        /// Length of the rejected key block.
        len: usize,
        /// Provider's minimum key length.
        min: usize,
        /// Provider's maximum key length.
        max: usize,
    },

    /// Internal cryptographic failure.
    ///
    /// Used for:
    /// - random material whose length differs from the target key
    /// - a block primitive that reports a fault
    /// - the OS random source failing
    #[error("Crypto internal error: {0}")]
    CryptoInternal(String),

    /// Allocating per-stream state failed.
    #[error("Out of memory allocating cipher state")]
    OutOfMemory,

    /// An IV/counter was supplied with a length other than one block.
    #[error("Invalid IV length: {0} bytes (expected 16)")]
    InvalidIvLength(usize),

    /// Single-buffer output is shorter than its input.
    #[error("Output buffer too small: need {needed} bytes, got {got}")]
    OutputTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        got: usize,
    },

    /// No provider is registered under the requested identifier.
    #[error("Unsupported enctype: {0}")]
    UnsupportedEnctype(String),
}
