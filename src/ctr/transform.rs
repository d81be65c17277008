//! src/ctr/transform.rs
//! CTR keystream over a scatter/gather list, skipping header buffers

use crate::aliases::Block16;
use crate::counter::CounterBlock;
use crate::crypto::BlockCipher;
use crate::error::CtrError;
use crate::iov::{CryptoIov, IovBlockOptions, IovBlockState};
use crate::keyblock::KeyBlock;
use crate::utils::xor_block_in_place;
use tracing::trace;

/// Cursor options for the CTR engine: the reserved `B0` header is never
/// encrypted.
const CTR_IOV_OPTIONS: IovBlockOptions = IovBlockOptions::new().with_ignore_header(true);

/// Apply the CTR keystream to every `Data`/`Padding` buffer in `data`, in place.
///
/// The counter starts at `iv` (top 3 bits cleared) or at zero when `iv` is
/// `None`. One counter value is consumed per block, including a short final
/// block. The returned counter is the value to pass as `iv` to continue the
/// same stream.
///
/// # Panics
///
/// Panics if the key cannot be expanded by `C`. Key lengths are validated by
/// `EncProvider::make_key`; reaching this with a bad key is a caller bug, and
/// continuing would run on an undefined key schedule.
///
/// # Errors
///
/// Propagates a fault reported by the block primitive. Buffers may then hold
/// partially transformed bytes.
pub fn transform_iov<C: BlockCipher>(
    key: &KeyBlock,
    iv: Option<&CounterBlock>,
    data: &mut [CryptoIov<'_>],
) -> Result<CounterBlock, CtrError> {
    let cipher = match C::expand_key(key.expose_secret()) {
        Ok(cipher) => cipher,
        Err(e) => panic!(
            "CTR key schedule expansion failed for a {}-byte key (cipher expects {}): {e}",
            key.len(),
            C::KEY_SIZE
        ),
    };

    let mut counter = CounterBlock::from_optional(iv);
    let start = counter.block_number();

    let mut input_pos = IovBlockState::new(CTR_IOV_OPTIONS);
    let mut output_pos = IovBlockState::new(CTR_IOV_OPTIONS);

    let mut block = Block16::new([0u8; 16]);
    let mut keystream = Block16::new([0u8; 16]);
    let mut blocks: u64 = 0;
    let mut bytes: usize = 0;

    loop {
        let n = input_pos.get_block(data, &mut block[..]);
        if n == 0 {
            break;
        }

        cipher.encrypt_block(counter.as_bytes(), &mut keystream)?;
        xor_block_in_place(&mut block, &keystream);
        output_pos.put_block(data, &block[..], n);

        counter.increment();
        blocks += 1;
        bytes += n;
    }

    trace!(
        blocks,
        bytes,
        start,
        end = counter.block_number(),
        "ctr transform complete"
    );
    Ok(counter)
}
