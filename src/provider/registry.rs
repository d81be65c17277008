//! src/provider/registry.rs
//! Algorithm identifiers and provider lookup

use super::{EncProvider, AES128_CTR, AES256_CTR};
use crate::error::CtrError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Algorithm identifier used by the dispatch layer to pick a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncType {
    Aes128Ctr,
    Aes256Ctr,
}

impl EncType {
    /// Every registered identifier, in registration order.
    pub const ALL: [EncType; 2] = [EncType::Aes128Ctr, EncType::Aes256Ctr];

    pub const fn name(self) -> &'static str {
        match self {
            EncType::Aes128Ctr => "aes128-ctr",
            EncType::Aes256Ctr => "aes256-ctr",
        }
    }
}

impl fmt::Display for EncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncType {
    type Err = CtrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncType::ALL
            .into_iter()
            .find(|enctype| enctype.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CtrError::UnsupportedEnctype(s.to_string()))
    }
}

/// The provider registered for `enctype`.
pub fn find_provider(enctype: EncType) -> &'static dyn EncProvider {
    debug!(%enctype, "provider lookup");
    match enctype {
        EncType::Aes128Ctr => &AES128_CTR,
        EncType::Aes256Ctr => &AES256_CTR,
    }
}

/// Look a provider up by its name (`"aes128-ctr"`, `"aes256-ctr"`).
pub fn find_provider_by_name(name: &str) -> Result<&'static dyn EncProvider, CtrError> {
    name.parse().map(find_provider)
}

/// All registered providers.
pub fn providers() -> impl Iterator<Item = &'static dyn EncProvider> {
    EncType::ALL.into_iter().map(find_provider)
}
