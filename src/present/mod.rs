//! Types and operations common to both PRESENT engines.
//!
//! This includes the 8-byte block, the 80-bit key register with its schedule, and the
//! round-layer traits shared by the scalar and bitsliced paths.

pub mod block;
pub mod key;
pub mod ops;
pub mod simple;

pub use self::block::{Block, BLOCK_LEN};
pub use self::key::{KeyRegister, KEY_LEN, ROUNDS};

/// The PRESENT S-box over 4-bit values.
pub const SBOX: [u8; 16] = [
    0xC, 0x5, 0x6, 0xB, 0x9, 0x0, 0xA, 0xD,
    0x3, 0xE, 0xF, 0x8, 0x4, 0x7, 0x1, 0x2,
];
