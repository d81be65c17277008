// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs `keystream` into `block` in place.
///
/// Used by the CTR loop: the gathered block becomes the output block.
#[inline(always)]
pub fn xor_block_in_place(block: &mut [u8; BLOCK_SIZE], keystream: &[u8; BLOCK_SIZE]) {
    for (b, k) in block.iter_mut().zip(keystream.iter()) {
        *b ^= k;
    }
}
