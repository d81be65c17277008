//! tests/common.rs
//! Shared fixtures and an independent CTR reference model

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256, Block};
use aes_ctr_provider::{EncProvider, KeyBlock};

/// Fixed 128-bit test key (NIST SP 800-38A F.5.1 key)
#[allow(dead_code)]
pub const KEY_128: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

/// Fixed 256-bit test key (NIST SP 800-38A F.5.5 key)
#[allow(dead_code)]
pub const KEY_256: [u8; 32] = [
    0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe, 0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d, 0x77, 0x81,
    0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7, 0x2d, 0x98, 0x10, 0xa3, 0x09, 0x14, 0xdf, 0xf4,
];

/// IV with a non-trivial nonce and a counter close to a byte carry
#[allow(dead_code)]
pub const TEST_IV: [u8; 16] = [
    0x05, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7, 0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0x00, 0x00, 0xfe,
];

#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"Single block msgThe quick brown fox jumps over the lazy dog";

/// Build a tagged key through the provider's own validation path.
#[allow(dead_code)]
pub fn make_key(provider: &dyn EncProvider, bytes: &[u8]) -> KeyBlock {
    let mut key = KeyBlock::with_length(bytes.len());
    provider.make_key(bytes, &mut key).unwrap();
    key
}

/// Textbook CTR with the 3-bit framing mask and 24-bit wrapping counter.
///
/// Written directly against the `aes` crate so it shares no code with the
/// engine under test. Returns the transformed bytes and the final counter.
#[allow(dead_code)]
pub fn reference_ctr(key: &[u8], iv: [u8; 16], data: &[u8]) -> (Vec<u8>, [u8; 16]) {
    let mut ctr = iv;
    ctr[0] &= 0x07;

    let mut out = data.to_vec();
    for chunk in out.chunks_mut(16) {
        let mut block = Block::from(ctr);
        match key.len() {
            16 => Aes128::new_from_slice(key).unwrap().encrypt_block(&mut block),
            32 => Aes256::new_from_slice(key).unwrap().encrypt_block(&mut block),
            n => panic!("unsupported reference key length {n}"),
        }
        for (b, k) in chunk.iter_mut().zip(block.iter()) {
            *b ^= k;
        }

        let n = u32::from_be_bytes([0, ctr[13], ctr[14], ctr[15]]).wrapping_add(1) & 0x00FF_FFFF;
        ctr[13..].copy_from_slice(&n.to_be_bytes()[1..]);
    }
    (out, ctr)
}

/// Route library `tracing` events to the test harness (`RUST_LOG=trace`).
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
