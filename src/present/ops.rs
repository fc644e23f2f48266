use crate::present::key::{KeyRegister, RoundKey, ROUNDS};

/// A data type which stores some number of PRESENT blocks.
pub trait BlockRepr {
    /// The number of blocks stored.
    const NUM_BLOCKS: usize;

    /// Writes the stored blocks to the given slice. `dst.len()` must be at most
    /// `Self::NUM_BLOCKS * present::BLOCK_LEN`.
    fn copy_to_slice(&self, dst: &mut [u8]);
}

/// A PRESENT implementation.
pub trait Present: Sized + AddRoundKey {
    /// Performs one full substitution-permutation round.
    fn encrypt_round(&mut self, rk: &RoundKey);

    /// Performs a PRESENT encryption in-place.
    ///
    /// The key register is stepped once per round and left in its post-round-31 state.
    fn encrypt(&mut self, key: &mut KeyRegister) {
        for r in 1..=ROUNDS {
            self.encrypt_round(key.round_key());
            key.update(r);
        }

        self.add_round_key(key.round_key());
    }
}

impl<T> Present for T
    where T: SboxLayer + PboxLayer + AddRoundKey
{
    fn encrypt_round(&mut self, rk: &RoundKey) {
        self.add_round_key(rk);
        self.sbox_layer();
        self.pbox_layer();
    }
}

pub trait SboxLayer {
    /// Substitutes every 4-bit nibble of the state in-place.
    fn sbox_layer(&mut self);
}

pub trait PboxLayer {
    /// Applies the 64-bit bit permutation to the state in-place.
    fn pbox_layer(&mut self);
}

pub trait AddRoundKey {
    /// XORs a 64-bit round key into the state.
    fn add_round_key(&mut self, rk: &RoundKey);
}

/// The destination of bit `p` under the PRESENT bit permutation.
///
/// Bits 0 and 63 are fixed points.
pub const fn permutation(p: usize) -> usize {
    (p / 4) + 16 * (p % 4)
}
