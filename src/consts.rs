//! # Constants
//!
//! Block geometry, accepted key sizes and the counter block layout.

/// Cipher block size in bytes (AES, both key sizes).
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key length in bytes.
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key length in bytes.
pub const AES256_KEY_SIZE: usize = 32;

/// Size of the per-stream state blob returned by `init_state`.
pub const CIPHER_STATE_SIZE: usize = BLOCK_SIZE;

/// Mask applied to byte 0 of every counter block.
///
/// The top 3 bits carry a framing parameter owned by the enclosing protocol
/// (CCM's `L'` field) and are always cleared before use.
pub const FRAMING_MASK: u8 = 0x07;

/// Offset of the 24-bit big-endian block counter inside the counter block.
pub const COUNTER_OFFSET: usize = 13;

/// The block counter wraps modulo 2^24.
pub const COUNTER_MASK: u32 = 0x00FF_FFFF;
