//! **This library is a study implementation. It has not been audited and should not protect
//! anything you value.**
//!
//! Timing-attack resistant PRESENT encryption.
//!
//! This crate implements the [PRESENT][present] block cipher (64-bit blocks, 80-bit keys,
//! 31 substitution-permutation rounds) in two interchangeable engines:
//!
//! - a scalar reference engine which processes one block at a time using the 16-entry
//!   S-box lookup table. Its table indices are data-dependent, so it makes no
//!   constant-time claims.
//! - a bitsliced engine which processes 32 blocks at a time by transposing them into
//!   64 bit-planes of 32 lanes each. The S-box becomes a Boolean circuit and the bit
//!   permutation a lane remap, so the whole path is free of data-dependent branches
//!   and memory indices.
//!
//! Both engines share the key schedule and produce identical ciphertexts.
//!
//! [present]: https://link.springer.com/chapter/10.1007/978-3-540-74735-2_31

#![cfg_attr(not(test), no_std)]

#[macro_use] mod util;

pub mod bitslice;
pub mod present;

pub use self::present::KeyRegister;

use core::cmp;

type Result<T> = core::result::Result<T, ()>;

/// A keyed cipher which can perform block encryption.
pub trait BlockCipher {
    /// Encrypt a prefix of the input data in place, returning the number of bytes
    /// encrypted.
    ///
    /// `blocks.len()` must be a multiple of the PRESENT block length (8 bytes).
    fn encrypt_blocks(&self, blocks: &mut [u8]) -> usize;
}

/// A `BlockCipher` which can work faster if allowed to encrypt blocks in parallel.
pub trait ParallelBlockCipher: BlockCipher {
    /// The maximum parallelism of this PRESENT implementation.
    const PARALLEL_BLOCKS: usize;

    /// The number of bytes which will be encrypted at one time if a slice with the given
    /// length is passed as an argument to `encrypt_blocks`.
    fn bytes_encrypted(len: usize) -> usize {
        cmp::min(len, Self::PARALLEL_BLOCKS * present::BLOCK_LEN)
    }
}
