//! src/crypto/block.rs
//! Block cipher primitive seam: key schedule and single-block encrypt
//!
//! The CTR engine only ever runs the forward direction of the cipher, so the
//! trait exposes encryption alone. AES implementations come from the `aes`
//! crate; tests plug in fault-injecting primitives through the same trait.

use crate::consts::{AES128_KEY_SIZE, AES256_KEY_SIZE, BLOCK_SIZE};
use crate::error::CtrError;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Aes256Enc, Block as AesBlock};

/// A 128-bit block cipher usable as a CTR keystream generator.
///
/// # Contract
///
/// - `expand_key` is deterministic. An `Err` means the key material itself is
///   malformed; the CTR engine treats it as fatal.
/// - `encrypt_block` is deterministic and side-effect free.
pub trait BlockCipher: Sized {
    /// Key length this primitive expects, in bytes.
    const KEY_SIZE: usize;

    /// Expand raw key bytes into a key schedule.
    fn expand_key(key: &[u8]) -> Result<Self, CtrError>;

    /// Encrypt one block from `input` into `output`.
    fn encrypt_block(
        &self,
        input: &[u8; BLOCK_SIZE],
        output: &mut [u8; BLOCK_SIZE],
    ) -> Result<(), CtrError>;
}

macro_rules! impl_aes_block_cipher {
    ($cipher:ty, $key_size:expr) => {
        impl BlockCipher for $cipher {
            const KEY_SIZE: usize = $key_size;

            #[inline]
            fn expand_key(key: &[u8]) -> Result<Self, CtrError> {
                <$cipher as KeyInit>::new_from_slice(key).map_err(|_| {
                    CtrError::BadKeySize {
                        len: key.len(),
                        min: $key_size,
                        max: $key_size,
                    }
                })
            }

            #[inline(always)]
            fn encrypt_block(
                &self,
                input: &[u8; BLOCK_SIZE],
                output: &mut [u8; BLOCK_SIZE],
            ) -> Result<(), CtrError> {
                let mut aes_block = AesBlock::from(*input);
                BlockEncrypt::encrypt_block(self, &mut aes_block);
                output.copy_from_slice(aes_block.as_slice());
                Ok(())
            }
        }
    };
}

impl_aes_block_cipher!(Aes128Enc, AES128_KEY_SIZE);
impl_aes_block_cipher!(Aes256Enc, AES256_KEY_SIZE);
