//! A reference implementation of PRESENT which encrypts one block at a time.
//!
//! The S-box here is a 16-entry lookup table indexed by key- and data-dependent
//! nibbles, so this engine makes no constant-time claims. Use the bitsliced engine
//! where that matters.

use crate::present::{key, ops::*, Block, KeyRegister, BLOCK_LEN, KEY_LEN, SBOX};

impl SboxLayer for Block {
    fn sbox_layer(&mut self) {
        let Block(block) = self;
        for byte in block {
            let lo = *byte & 0xF;
            let hi = *byte >> 4;
            *byte = SBOX[lo as usize] | (SBOX[hi as usize] << 4);
        }
    }
}

impl PboxLayer for Block {
    fn pbox_layer(&mut self) {
        let mut out = Block::default();

        for p in 0..8 * BLOCK_LEN {
            let bit = self.0[p / 8] >> (p % 8) & 1;
            let dst = permutation(p);
            out.0[dst / 8] |= bit << (dst % 8);
        }

        *self = out;
    }
}

impl AddRoundKey for Block {
    fn add_round_key(&mut self, rk: &key::RoundKey) {
        for (a, b) in self.iter_mut().zip(rk.iter()) {
            *a ^= b;
        }
    }
}

impl BlockRepr for Block {
    const NUM_BLOCKS: usize = 1;

    fn copy_to_slice(&self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.0[..dst.len()]);
    }
}

/// A cipher which encrypts one block per `encrypt_blocks` call.
pub type Cipher = key::Cipher<Block>;

/// Encrypts a single 64-bit block in place.
///
/// The key register is left in its post-round-31 state.
pub fn encrypt(block: &mut [u8; BLOCK_LEN], key: &mut [u8; KEY_LEN]) {
    let mut state = Block(*block);
    let mut reg = KeyRegister(*key);

    state.encrypt(&mut reg);

    *block = state.0;
    *key = reg.0;
}

#[cfg(test)]
pub(crate) mod tests {
    use try_from::TryFrom;

    use crate::BlockCipher;
    use crate::util::test::hex_to_buf;
    use super::*;

    pub struct Kat<'a> {
        pub key: &'a str,
        pub plain: &'a str,
        pub cipher: &'a str,
    }

    pub const KNOWN_ANSWER_TESTS: &[Kat] = &[
        Kat {
            key:    "00000000000000000000",
            plain:  "0000000000000000",
            cipher: "5579C1387B228445",
        },
        Kat {
            key:    "FFFFFFFFFFFFFFFFFFFF",
            plain:  "0000000000000000",
            cipher: "E72C46C0F5945049",
        },
        Kat {
            key:    "00000000000000000000",
            plain:  "FFFFFFFFFFFFFFFF",
            cipher: "A112FFC72F68417B",
        },
        Kat {
            key:    "FFFFFFFFFFFFFFFFFFFF",
            plain:  "FFFFFFFFFFFFFFFF",
            cipher: "3333DCD3213210D2",
        },
    ];

    #[test]
    fn known_answers() {
        for Kat { key, plain, cipher } in KNOWN_ANSWER_TESTS {
            let mut reg = [0; KEY_LEN];
            reg.copy_from_slice(&hex_to_buf(key));

            let mut block = [0; BLOCK_LEN];
            block.copy_from_slice(&hex_to_buf(plain));

            encrypt(&mut block, &mut reg);

            assert_eq!(&block[..], &hex_to_buf(cipher)[..]);
        }
    }

    #[test]
    fn cipher_facade_matches_the_raw_entry_point() {
        for Kat { key, plain, cipher } in KNOWN_ANSWER_TESTS {
            let key = KeyRegister::from_bytes(&hex_to_buf(key)).unwrap();
            let cipher_text = hex_to_buf(cipher);

            let ct: Cipher = key.into();
            let mut buf = hex_to_buf(plain);
            buf.extend_from_slice(&hex_to_buf(plain));

            // One block per call; two calls drain the buffer.
            let adv = ct.encrypt_blocks(&mut buf);
            assert_eq!(adv, BLOCK_LEN);
            let adv = ct.encrypt_blocks(&mut buf[adv..]);
            assert_eq!(adv, BLOCK_LEN);

            assert_eq!(&buf[..BLOCK_LEN], &cipher_text[..]);
            assert_eq!(&buf[BLOCK_LEN..], &cipher_text[..]);
        }
    }

    #[test]
    fn sbox_layer_is_a_bijection() {
        let mut seen = [false; 256];

        for b in 0..=255u8 {
            let mut block = Block([b; BLOCK_LEN]);
            block.sbox_layer();

            let Block(out) = block;
            assert!(out.iter().all(|&x| x == out[0]));
            assert!(!seen[out[0] as usize]);
            seen[out[0] as usize] = true;
        }
    }

    #[test]
    fn sbox_table_is_a_permutation_of_nibbles() {
        let mut seen = [false; 16];

        for &x in SBOX.iter() {
            assert!(x < 16);
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
        }
    }

    #[test]
    fn pbox_layer_moves_single_bits() {
        for p in 0..8 * BLOCK_LEN {
            let mut block = Block::default();
            block.0[p / 8] = 1 << (p % 8);

            block.pbox_layer();

            let q = permutation(p);
            let mut expected = Block::default();
            expected.0[q / 8] = 1 << (q % 8);
            assert_eq!(block, expected);
        }
    }

    #[test]
    fn add_round_key_is_an_involution() {
        let rk = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x23, 0x45, 0x67];
        let block = Block::try_from(&[0x55u8; BLOCK_LEN][..]).unwrap();

        let mut state = block;
        state.add_round_key(&rk);
        assert_ne!(state, block);
        state.add_round_key(&rk);
        assert_eq!(state, block);
    }
}
