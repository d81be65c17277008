// src/lib.rs

//! AES-128/256 in counter mode, as a pluggable encryption provider.
//!
//! The engine runs over scatter/gather buffer lists ([`CryptoIov`]) so that
//! callers can keep payload, padding and header/trailer material in separate
//! regions. A reserved `Header` buffer is never touched by the keystream.
//!
//! ```
//! use aes_ctr_provider::{find_provider, CounterBlock, EncProvider, EncType, KeyBlock};
//!
//! let provider = find_provider(EncType::Aes128Ctr);
//! let mut key = KeyBlock::with_length(16);
//! provider.make_key(&[7u8; 16], &mut key)?;
//!
//! let iv = CounterBlock::from_iv([0u8; 16]);
//! let mut ciphertext = [0u8; 20];
//! let next = provider.encrypt(&key, Some(&iv), b"attack at dawn!!....", &mut ciphertext)?;
//! assert_eq!(next.block_number(), 2);
//!
//! let mut plaintext = [0u8; 20];
//! provider.decrypt(&key, Some(&iv), &ciphertext, &mut plaintext)?;
//! assert_eq!(&plaintext, b"attack at dawn!!....");
//! # Ok::<(), aes_ctr_provider::CtrError>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod counter;
pub mod crypto;
pub mod ctr;
pub mod error;
pub mod iov;
pub mod keyblock;
pub mod provider;
pub mod state;
pub mod utils;

// High-level API
pub use counter::CounterBlock;
pub use error::CtrError;
pub use iov::{CryptoIov, IovRole};
pub use keyblock::{KeyBlock, KeyUsage};
pub use provider::{
    find_provider, find_provider_by_name, providers, EncProvider, EncType, ProviderInfo,
    AES128_CTR, AES256_CTR,
};
pub use state::CipherState;

// Engine entry points for callers that pick the primitive statically
pub use ctr::{transform, transform_iov};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch, transform_batch};
