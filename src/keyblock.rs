//! # Key Blocks
//!
//! Caller-owned key material. The engine borrows a [`KeyBlock`] for one call
//! and never keeps it. Contents are wiped on drop.

use crate::aliases::SecretBytes;
use crate::provider::EncType;
use std::fmt;
use zeroize::Zeroizing;

/// Key material plus the algorithm it was made for.
///
/// A freshly sized block ([`KeyBlock::with_length`]) is untagged; a provider's
/// `make_key` fills it and sets [`KeyBlock::enctype`].
#[derive(Clone, PartialEq, Eq)]
pub struct KeyBlock {
    enctype: Option<EncType>,
    contents: SecretBytes,
}

impl KeyBlock {
    /// Zeroed, untagged key block of `len` bytes, ready for `make_key`.
    pub fn with_length(len: usize) -> Self {
        Self {
            enctype: None,
            contents: Zeroizing::new(vec![0u8; len]),
        }
    }

    /// Wrap existing key bytes under a known algorithm.
    ///
    /// No length validation happens here; route untrusted material through
    /// `EncProvider::make_key` instead.
    pub fn from_bytes(enctype: EncType, bytes: &[u8]) -> Self {
        Self {
            enctype: Some(enctype),
            contents: Zeroizing::new(bytes.to_vec()),
        }
    }

    pub fn enctype(&self) -> Option<EncType> {
        self.enctype
    }

    pub(crate) fn set_enctype(&mut self, enctype: EncType) {
        self.enctype = Some(enctype);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Raw key bytes.
    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        &self.contents
    }

    #[inline]
    pub(crate) fn expose_secret_mut(&mut self) -> &mut [u8] {
        &mut self.contents
    }
}

impl fmt::Debug for KeyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBlock")
            .field("enctype", &self.enctype)
            .field("len", &self.contents.len())
            .finish_non_exhaustive()
    }
}

/// Key usage number passed through `init_state`.
///
/// AES-CTR ignores it; other providers behind the same dispatch table derive
/// per-usage keys from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyUsage(pub u32);
