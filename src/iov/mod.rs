// src/iov/mod.rs

//! Scatter/gather buffer lists.
//!
//! A message is described as an ordered list of [`CryptoIov`]s, each a
//! caller-owned byte region tagged with an [`IovRole`]. Block-oriented code
//! walks the list with an [`IovBlockState`] cursor, which gathers and
//! scatters fixed-size blocks across buffer boundaries and skips the roles
//! it was configured to skip.

pub(crate) mod block_state;

pub use block_state::{IovBlockOptions, IovBlockState};

/// What a buffer in a scatter/gather list carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IovRole {
    /// Placeholder, never processed.
    Empty,
    /// Reserved leading block (e.g. CCM `B0`), owned by the enclosing scheme.
    Header,
    /// Plaintext or ciphertext payload.
    Data,
    /// Authenticated but never encrypted.
    SignOnly,
    /// Padding that is encrypted along with the payload.
    Padding,
    /// Trailing material owned by the enclosing scheme.
    Trailer,
    /// Integrity tag.
    Checksum,
    /// Whole-message stream buffer.
    Stream,
}

/// One caller-owned region of a scatter/gather list.
#[derive(Debug)]
pub struct CryptoIov<'a> {
    pub role: IovRole,
    pub data: &'a mut [u8],
}

impl<'a> CryptoIov<'a> {
    #[inline]
    pub fn new(role: IovRole, data: &'a mut [u8]) -> Self {
        Self { role, data }
    }

    /// Payload buffer.
    #[inline]
    pub fn data(data: &'a mut [u8]) -> Self {
        Self::new(IovRole::Data, data)
    }

    /// Reserved header buffer, never touched by the keystream.
    #[inline]
    pub fn header(data: &'a mut [u8]) -> Self {
        Self::new(IovRole::Header, data)
    }

    #[inline]
    pub fn padding(data: &'a mut [u8]) -> Self {
        Self::new(IovRole::Padding, data)
    }

    #[inline]
    pub fn sign_only(data: &'a mut [u8]) -> Self {
        Self::new(IovRole::SignOnly, data)
    }

    #[inline]
    pub fn trailer(data: &'a mut [u8]) -> Self {
        Self::new(IovRole::Trailer, data)
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
