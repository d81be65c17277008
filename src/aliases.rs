//! # Zeroizing Type Aliases
//!
//! Buffers that wipe themselves on drop. Keystream, gathered payload blocks
//! and key bytes never live anywhere else.

use zeroize::Zeroizing;

/// Generic zeroizing stack buffer.
pub type SpanBuffer<const N: usize> = Zeroizing<[u8; N]>;

// Semantic sub-types
pub type Block16 = SpanBuffer<16>; // one AES block (gathered data, keystream)

/// Zeroizing heap buffer for variable-length secrets (key block contents).
pub type SecretBytes = Zeroizing<Vec<u8>>;
