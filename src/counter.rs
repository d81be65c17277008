//! # Counter Block
//!
//! The 16-byte IV / counter carried between CTR calls.
//!
//! ```text
//!  byte 0        bytes 1..13            bytes 13..16
//! +---------+------------------------+------------------+
//! |000 xxxxx|  nonce / salt (opaque) | 24-bit BE counter|
//! +---------+------------------------+------------------+
//! ```
//!
//! The top 3 bits of byte 0 belong to the enclosing protocol and are cleared
//! on every load. Incrementing touches only the last 3 bytes and wraps modulo
//! 2^24; the nonce never changes.

use crate::consts::{BLOCK_SIZE, COUNTER_MASK, COUNTER_OFFSET, FRAMING_MASK};
use crate::error::CtrError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CounterBlock([u8; BLOCK_SIZE]);

impl CounterBlock {
    /// The all-zero counter used when a caller supplies no IV.
    pub const ZERO: Self = Self([0u8; BLOCK_SIZE]);

    /// Load a counter from a raw IV, clearing the reserved framing bits.
    #[inline]
    pub const fn from_iv(iv: [u8; BLOCK_SIZE]) -> Self {
        let mut bytes = iv;
        bytes[0] &= FRAMING_MASK;
        Self(bytes)
    }

    /// Load a counter from a caller slice that must be exactly one block.
    pub fn from_slice(iv: &[u8]) -> Result<Self, CtrError> {
        let bytes: [u8; BLOCK_SIZE] = iv
            .try_into()
            .map_err(|_| CtrError::InvalidIvLength(iv.len()))?;
        Ok(Self::from_iv(bytes))
    }

    /// Counter for an optional caller IV: absent means [`CounterBlock::ZERO`].
    #[inline]
    pub fn from_optional(iv: Option<&CounterBlock>) -> Self {
        iv.map_or(Self::ZERO, |iv| Self::from_iv(iv.0))
    }

    /// The 24-bit block counter.
    #[inline]
    pub const fn block_number(&self) -> u32 {
        ((self.0[COUNTER_OFFSET] as u32) << 16)
            | ((self.0[COUNTER_OFFSET + 1] as u32) << 8)
            | (self.0[COUNTER_OFFSET + 2] as u32)
    }

    /// Overwrite the 24-bit block counter (higher bits of `n` are dropped).
    #[inline]
    pub fn set_block_number(&mut self, n: u32) {
        let n = n & COUNTER_MASK;
        self.0[COUNTER_OFFSET] = (n >> 16) as u8;
        self.0[COUNTER_OFFSET + 1] = (n >> 8) as u8;
        self.0[COUNTER_OFFSET + 2] = n as u8;
    }

    /// Step to the next block, wrapping modulo 2^24.
    #[inline]
    pub fn increment(&mut self) {
        self.set_block_number(self.block_number().wrapping_add(1));
    }

    /// Counter after `blocks` further blocks.
    #[must_use]
    pub fn advanced_by(mut self, blocks: u64) -> Self {
        let step = (blocks & u64::from(COUNTER_MASK)) as u32;
        self.set_block_number(self.block_number().wrapping_add(step));
        self
    }

    /// Framing-parameter bits of byte 0 (always zero after a load).
    #[inline]
    pub const fn framing_bits(&self) -> u8 {
        self.0[0] & !FRAMING_MASK
    }

    /// The opaque nonce bytes (everything except the counter field).
    #[inline]
    pub fn nonce(&self) -> &[u8] {
        &self.0[..COUNTER_OFFSET]
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; BLOCK_SIZE] {
        self.0
    }
}

impl From<[u8; BLOCK_SIZE]> for CounterBlock {
    fn from(iv: [u8; BLOCK_SIZE]) -> Self {
        Self::from_iv(iv)
    }
}

impl TryFrom<&[u8]> for CounterBlock {
    type Error = CtrError;

    fn try_from(iv: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(iv)
    }
}

impl AsRef<[u8]> for CounterBlock {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_masks_framing_bits() {
        let ctr = CounterBlock::from_iv([0xFF; 16]);
        assert_eq!(ctr.as_bytes()[0], 0x07);
        assert_eq!(ctr.framing_bits(), 0);
        assert_eq!(&ctr.as_bytes()[1..], &[0xFF; 15]);
    }

    #[test]
    fn block_number_is_big_endian_tail() {
        let mut iv = [0u8; 16];
        iv[13] = 0x01;
        iv[14] = 0x02;
        iv[15] = 0x03;
        assert_eq!(CounterBlock::from_iv(iv).block_number(), 0x010203);
    }

    #[test]
    fn increment_wraps_without_carry_into_nonce() {
        let mut iv = [0x05u8; 16];
        iv[13..].copy_from_slice(&[0xFF, 0xFF, 0xFF]);
        let mut ctr = CounterBlock::from_iv(iv);
        ctr.increment();
        assert_eq!(ctr.block_number(), 0);
        assert_eq!(ctr.nonce(), &[0x05u8; 13]);
    }

    #[test]
    fn advanced_by_matches_repeated_increment() {
        let mut iv = [0u8; 16];
        iv[15] = 0xF0;
        let start = CounterBlock::from_iv(iv);

        let mut stepped = start;
        for _ in 0..0x123 {
            stepped.increment();
        }
        assert_eq!(start.advanced_by(0x123), stepped);
        assert_eq!(start.advanced_by(1 << 24), start);
    }

    #[test]
    fn slice_length_is_checked() {
        assert_eq!(
            CounterBlock::from_slice(&[0u8; 15]),
            Err(CtrError::InvalidIvLength(15))
        );
        assert!(CounterBlock::try_from(&[0u8; 16][..]).is_ok());
    }

    #[test]
    fn absent_iv_is_zero() {
        assert_eq!(CounterBlock::from_optional(None), CounterBlock::ZERO);
        let ctr = CounterBlock::from_iv([0x80; 16]);
        assert_eq!(CounterBlock::from_optional(Some(&ctr)).as_bytes()[0], 0);
    }
}
