//! src/ctr/single.rs
//! Single-buffer CTR wrapper. Output is wiped on any failure.

use crate::counter::CounterBlock;
use crate::crypto::BlockCipher;
use crate::ctr::transform_iov;
use crate::error::CtrError;
use crate::iov::CryptoIov;
use crate::keyblock::KeyBlock;
use tracing::debug;
use zeroize::Zeroize;

/// Copy `input` into `output` and apply the CTR keystream to it.
///
/// `output` must be at least as long as `input`; only the first
/// `input.len()` bytes are written on success.
///
/// On any error the *entire* `output` buffer is zeroed before returning, so a
/// caller that ignores the result never sees partial plaintext or keystream.
pub fn transform<C: BlockCipher>(
    key: &KeyBlock,
    iv: Option<&CounterBlock>,
    input: &[u8],
    output: &mut [u8],
) -> Result<CounterBlock, CtrError> {
    let result = transform_into::<C>(key, iv, input, output);
    if let Err(e) = &result {
        debug!(error = %e, len = output.len(), "ctr transform failed, wiping output");
        output.zeroize();
    }
    result
}

#[inline]
fn transform_into<C: BlockCipher>(
    key: &KeyBlock,
    iv: Option<&CounterBlock>,
    input: &[u8],
    output: &mut [u8],
) -> Result<CounterBlock, CtrError> {
    if output.len() < input.len() {
        return Err(CtrError::OutputTooSmall {
            needed: input.len(),
            got: output.len(),
        });
    }

    let payload = &mut output[..input.len()];
    payload.copy_from_slice(input);

    let mut data = [CryptoIov::data(payload)];
    transform_iov::<C>(key, iv, &mut data)
}
