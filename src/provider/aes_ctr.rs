//! src/provider/aes_ctr.rs
//! AES-CTR providers: one generic implementation, two registered variants

use super::{EncProvider, EncType, ProviderInfo};
use crate::consts::{AES128_KEY_SIZE, AES256_KEY_SIZE, BLOCK_SIZE};
use crate::counter::CounterBlock;
use crate::crypto::BlockCipher;
use crate::ctr::{transform, transform_iov};
use crate::error::CtrError;
use crate::iov::CryptoIov;
use crate::keyblock::{KeyBlock, KeyUsage};
use crate::state::CipherState;
use aes::{Aes128Enc, Aes256Enc};
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// AES-128-CTR: 16-byte keys.
pub static AES128_CTR: AesCtrProvider<Aes128Enc> = AesCtrProvider::new(ProviderInfo {
    enctype: EncType::Aes128Ctr,
    block_size: BLOCK_SIZE,
    min_key_len: AES128_KEY_SIZE,
    max_key_len: AES128_KEY_SIZE,
});

/// AES-256-CTR: 32-byte keys.
pub static AES256_CTR: AesCtrProvider<Aes256Enc> = AesCtrProvider::new(ProviderInfo {
    enctype: EncType::Aes256Ctr,
    block_size: BLOCK_SIZE,
    min_key_len: AES256_KEY_SIZE,
    max_key_len: AES256_KEY_SIZE,
});

/// CTR provider over any [`BlockCipher`].
///
/// The two statics above are the registered instances; other primitives
/// (including fault-injecting test doubles) can be wrapped the same way.
pub struct AesCtrProvider<C> {
    info: ProviderInfo,
    _cipher: PhantomData<fn() -> C>,
}

impl<C: BlockCipher> AesCtrProvider<C> {
    pub const fn new(info: ProviderInfo) -> Self {
        Self {
            info,
            _cipher: PhantomData,
        }
    }
}

impl<C> fmt::Debug for AesCtrProvider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCtrProvider")
            .field("info", &self.info)
            .finish()
    }
}

impl<C: BlockCipher> EncProvider for AesCtrProvider<C> {
    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    fn encrypt(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<CounterBlock, CtrError> {
        transform::<C>(key, iv, input, output)
    }

    // CTR is its own inverse
    fn decrypt(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<CounterBlock, CtrError> {
        transform::<C>(key, iv, input, output)
    }

    /// Only this provider's own key size is accepted. A 32-byte key is
    /// rejected by AES-128-CTR and a 16-byte key by AES-256-CTR, although
    /// both are valid AES key sizes, so a key can never reach the wrong
    /// key schedule.
    fn make_key(&self, random_bits: &[u8], key: &mut KeyBlock) -> Result<(), CtrError> {
        if !self.info.accepts_key_len(key.len()) {
            return Err(CtrError::BadKeySize {
                len: key.len(),
                min: self.info.min_key_len,
                max: self.info.max_key_len,
            });
        }
        if random_bits.len() != key.len() {
            return Err(CtrError::CryptoInternal(format!(
                "random material is {} bytes, key is {}",
                random_bits.len(),
                key.len()
            )));
        }

        key.expose_secret_mut().copy_from_slice(random_bits);
        key.set_enctype(self.info.enctype);
        Ok(())
    }

    fn init_state(&self, _key: &KeyBlock, _usage: KeyUsage) -> Result<CipherState, CtrError> {
        let state = CipherState::allocate()?;
        trace!(enctype = %self.info.enctype, "allocated cipher state");
        Ok(state)
    }

    fn encrypt_iov(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        data: &mut [CryptoIov<'_>],
    ) -> Result<CounterBlock, CtrError> {
        transform_iov::<C>(key, iv, data)
    }

    fn decrypt_iov(
        &self,
        key: &KeyBlock,
        iv: Option<&CounterBlock>,
        data: &mut [CryptoIov<'_>],
    ) -> Result<CounterBlock, CtrError> {
        transform_iov::<C>(key, iv, data)
    }
}
