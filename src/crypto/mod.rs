// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`block`]: the block cipher seam used by the CTR engine
//! - [`rng`]: OS randomness for key generation

pub mod block;
pub mod rng;

pub use block::BlockCipher;
