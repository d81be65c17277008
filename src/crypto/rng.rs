// src/crypto/rng.rs
//! OS randomness for fresh key material.
//!
//! `make_key` only repackages bytes that are already random; this is where
//! those bytes come from when the caller does not supply its own.

use crate::aliases::SecretBytes;
use crate::error::CtrError;
use rand::{rngs::OsRng, TryRngCore};
use zeroize::Zeroizing;

/// Fill a fresh zeroizing buffer of `len` bytes from the OS RNG.
pub fn random_bytes(len: usize) -> Result<SecretBytes, CtrError> {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    OsRng
        .try_fill_bytes(bytes.as_mut_slice())
        .map_err(|e| CtrError::CryptoInternal(format!("OS random source failed: {e}")))?;
    Ok(bytes)
}
