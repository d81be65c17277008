//! # Per-Stream State
//!
//! A carried counter that lets one logical CTR stream span many calls.
//! Allocated by `EncProvider::init_state`, released by `free_state`.

use crate::counter::CounterBlock;
use crate::consts::CIPHER_STATE_SIZE;
use crate::error::CtrError;
use zeroize::Zeroizing;

/// Opaque 16-byte stream state.
#[derive(Debug, PartialEq, Eq)]
pub struct CipherState {
    data: Zeroizing<Vec<u8>>,
}

impl CipherState {
    /// Allocate a zero-filled state blob.
    ///
    /// The allocation is fallible; failure maps to [`CtrError::OutOfMemory`].
    pub(crate) fn allocate() -> Result<Self, CtrError> {
        let mut data = Vec::new();
        data.try_reserve_exact(CIPHER_STATE_SIZE)
            .map_err(|_| CtrError::OutOfMemory)?;
        data.resize(CIPHER_STATE_SIZE, 0);
        Ok(Self {
            data: Zeroizing::new(data),
        })
    }

    /// The counter to pass as the IV of the next transform.
    pub fn counter(&self) -> Result<CounterBlock, CtrError> {
        CounterBlock::from_slice(&self.data)
    }

    /// Store the counter returned by a transform.
    pub fn store(&mut self, counter: CounterBlock) {
        self.data.copy_from_slice(counter.as_bytes());
    }

    /// Raw state bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
