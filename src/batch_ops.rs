//! Parallel CTR over many independent messages (feature `batch-ops`).
//!
//! Each entry carries its own counter slot; on success the slot holds the
//! counter to continue that message's stream. Entries share one key.
//! `transform_batch` takes full scatter/gather lists; the `*_batch` pair below
//! it is the contiguous-buffer shorthand.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::iov::CryptoIov;
#[cfg(feature = "batch-ops")]
use crate::{CounterBlock, CtrError, EncProvider, KeyBlock};

/// Run CTR over every buffer list in `jobs` in parallel.
///
/// Roles are honored per list exactly as in [`EncProvider::encrypt_iov`].
/// Stops at the first error; lists already processed stay transformed.
#[cfg(feature = "batch-ops")]
pub fn transform_batch(
    provider: &dyn EncProvider,
    key: &KeyBlock,
    jobs: &mut [(Option<CounterBlock>, Vec<CryptoIov<'_>>)],
) -> Result<(), CtrError> {
    jobs.par_iter_mut().try_for_each(|(counter, data)| {
        *counter = Some(provider.encrypt_iov(key, counter.as_ref(), data)?);
        Ok(())
    })
}

#[cfg(feature = "batch-ops")]
pub fn encrypt_batch(
    provider: &dyn EncProvider,
    key: &KeyBlock,
    batch: &mut [(Option<CounterBlock>, Vec<u8>)],
) -> Result<(), CtrError> {
    batch.par_iter_mut().try_for_each(|(counter, buf)| {
        let mut data = [CryptoIov::data(buf.as_mut_slice())];
        *counter = Some(provider.encrypt_iov(key, counter.as_ref(), &mut data)?);
        Ok(())
    })
}

#[cfg(feature = "batch-ops")]
pub fn decrypt_batch(
    provider: &dyn EncProvider,
    key: &KeyBlock,
    batch: &mut [(Option<CounterBlock>, Vec<u8>)],
) -> Result<(), CtrError> {
    batch.par_iter_mut().try_for_each(|(counter, buf)| {
        let mut data = [CryptoIov::data(buf.as_mut_slice())];
        *counter = Some(provider.decrypt_iov(key, counter.as_ref(), &mut data)?);
        Ok(())
    })
}
