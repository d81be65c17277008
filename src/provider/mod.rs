// src/provider/mod.rs

//! # Encryption Providers
//!
//! A provider is a capability record for one cipher variant: block size, key
//! length bounds, and a fixed operation set. A higher-level dispatch table
//! picks one by [`EncType`] and drives every algorithm through the same
//! [`EncProvider`] interface.
//!
//! This crate registers two providers, [`AES128_CTR`] and [`AES256_CTR`].

pub(crate) mod aes_ctr;
pub(crate) mod registry;

pub use aes_ctr::{AesCtrProvider, AES128_CTR, AES256_CTR};
pub use registry::{find_provider, find_provider_by_name, providers, EncType};

use crate::counter::CounterBlock;
use crate::crypto::rng::random_bytes;
use crate::error::CtrError;
use crate::iov::CryptoIov;
use crate::keyblock::{KeyBlock, KeyUsage};
use crate::state::CipherState;
use std::fmt;
use tracing::trace;

/// Static capabilities of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub enctype: EncType,
    pub block_size: usize,
    pub min_key_len: usize,
    pub max_key_len: usize,
}

impl ProviderInfo {
    /// Whether a key of `len` bytes is within this provider's bounds.
    #[inline]
    pub const fn accepts_key_len(&self, len: usize) -> bool {
        len >= self.min_key_len && len <= self.max_key_len
    }
}

/// The uniform operation set every encryption provider exposes.
///
/// `encrypt`/`decrypt` work on one contiguous buffer, `encrypt_iov`/
/// `decrypt_iov` on a scatter/gather list. Every transform returns the
/// counter/IV to carry into the next call of the same stream.
///
/// # Thread Safety
///
/// Providers are immutable statics (`Send + Sync`). Concurrent calls are safe
/// on disjoint keys, IVs, buffers and states.
pub trait EncProvider: Send + Sync + fmt::Debug {
    fn info(&self) -> &ProviderInfo;

    /// Single-buffer encryption. `output` is zeroed on failure.
    fn encrypt(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<CounterBlock, CtrError>;

    /// Single-buffer decryption. `output` is zeroed on failure.
    fn decrypt(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<CounterBlock, CtrError>;

    /// Validate `random_bits` against the target `key` length and copy them in.
    ///
    /// # Errors
    ///
    /// - [`CtrError::BadKeySize`] if `key.len()` is not a valid key size
    /// - [`CtrError::CryptoInternal`] if `random_bits.len() != key.len()`
    fn make_key(&self, random_bits: &[u8], key: &mut KeyBlock) -> Result<(), CtrError>;

    /// Allocate fresh per-stream state for `key`.
    fn init_state(&self, key: &KeyBlock, usage: KeyUsage) -> Result<CipherState, CtrError>;

    /// Release per-stream state. The bytes are wiped on drop.
    fn free_state(&self, state: CipherState) {
        trace!(enctype = %self.info().enctype, "freeing cipher state");
        drop(state);
    }

    /// In-place encryption of a scatter/gather list.
    fn encrypt_iov(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        data: &mut [CryptoIov<'_>],
    ) -> Result<CounterBlock, CtrError>;

    /// In-place decryption of a scatter/gather list.
    fn decrypt_iov(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        data: &mut [CryptoIov<'_>],
    ) -> Result<CounterBlock, CtrError>;

    /// Generate a fresh key of the provider's maximum length from the OS RNG.
    fn random_key(&self) -> Result<KeyBlock, CtrError> {
        let len = self.info().max_key_len;
        let random_bits = random_bytes(len)?;
        let mut key = KeyBlock::with_length(len);
        self.make_key(&random_bits, &mut key)?;
        Ok(key)
    }
}
