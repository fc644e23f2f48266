//! PRESENT encryption with [bitslices][].
//!
//! [bitslices]: https://en.wikipedia.org/wiki/Bit_slicing

mod bitslice;
mod sbox;

pub use self::bitslice::{Bitslice, Lane, LANE_BYTES, WIDTH};

use crate::ParallelBlockCipher;
use crate::present::{key, ops::Present, KeyRegister, KEY_LEN};

/// A cipher which encrypts 32 blocks per `encrypt_blocks` call.
pub type Cipher = key::Cipher<Bitslice>;

impl ParallelBlockCipher for Cipher {
    const PARALLEL_BLOCKS: usize = Bitslice::num_blocks();
}

/// Encrypts 32 contiguous 64-bit blocks in place.
///
/// The key register is left in its post-round-31 state, exactly as after a scalar
/// encryption with the same starting key.
pub fn encrypt(blocks: &mut [u8; LANE_BYTES], key: &mut [u8; KEY_LEN]) {
    let mut state = Bitslice::from(*blocks);
    let mut reg = KeyRegister(*key);

    state.encrypt(&mut reg);

    *blocks = state.into();
    *key = reg.0;
}
