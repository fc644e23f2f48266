use core::{cmp, fmt, mem};

use try_from::TryFrom;

use crate::present::{key, ops::*, BLOCK_LEN};

/// One word of bitsliced state, carrying a single bit position across all parallel
/// blocks.
pub type Lane = u32;

/// The number of blocks encrypted in parallel, one per lane bit.
pub const WIDTH: usize = 8 * mem::size_of::<Lane>();

/// The number of bytes in a full lane buffer (32 blocks of 8 bytes).
pub const LANE_BYTES: usize = WIDTH * BLOCK_LEN;

/// The number of lanes in the state, one per block bit.
pub(crate) const LANES: usize = 8 * BLOCK_LEN;

/// A `Bitslice` stores 32 independent PRESENT blocks across 64 lanes, using lane 0 to
/// store the least-significant bit of every block and lane 63 the most-significant.
///
/// Lane `j` collects one fixed bit position from all 32 blocks: bit `i` of lane `j`
/// equals bit `j mod 8` of byte `8*i + j/8` of the byte stream. This orientation holds
/// on entry to and exit from every round, so the round layers never see byte order.
///
/// Within a round the lanes are read in quartets: lanes `4k..4k+4` hold the 32 parallel
/// copies of nibble `k`, which is what lets the S-box run as a Boolean circuit over
/// whole lanes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bitslice(pub(crate) [Lane; LANES]);

impl Default for Bitslice {
    fn default() -> Self {
        Bitslice([0; LANES])
    }
}

impl Bitslice {
    /// The number of blocks which can be stored in a single `Bitslice`.
    pub const fn num_blocks() -> usize {
        WIDTH
    }

    /// The number of bytes which can be stored in a single `Bitslice`.
    pub const fn num_bytes() -> usize {
        LANE_BYTES
    }

    pub fn from_bytes(arr: [u8; LANE_BYTES]) -> Self {
        arr.into()
    }

    pub fn into_bytes(&self) -> [u8; LANE_BYTES] {
        (*self).into()
    }

    /// Creates a `Bitslice` from up to 256 bytes of data, padding missing blocks
    /// with zeros.
    pub fn from_slice(s: &[u8]) -> Self {
        let len = cmp::min(s.len(), Self::num_bytes());
        let mut buf = [0; LANE_BYTES];
        buf[..len].copy_from_slice(&s[..len]);
        buf.into()
    }
}

/// Transposes 32 byte-oriented blocks into bit-plane order.
impl From<[u8; LANE_BYTES]> for Bitslice {
    fn from(bytes: [u8; LANE_BYTES]) -> Self {
        let mut lanes = [0; LANES];

        for (i, block) in bytes.chunks_exact(BLOCK_LEN).enumerate() {
            for (j, lane) in lanes.iter_mut().enumerate() {
                let bit = block[j / 8] >> (j % 8) & 1;
                *lane |= (bit as Lane) << i;
            }
        }

        Bitslice(lanes)
    }
}

/// Transposes the bit-planes back into 32 byte-oriented blocks.
impl From<Bitslice> for [u8; LANE_BYTES] {
    fn from(Bitslice(lanes): Bitslice) -> Self {
        let mut bytes = [0; LANE_BYTES];

        for (i, block) in bytes.chunks_exact_mut(BLOCK_LEN).enumerate() {
            for (j, &lane) in lanes.iter().enumerate() {
                let bit = (lane >> i & 1) as u8;
                block[j / 8] |= bit << (j % 8);
            }
        }

        bytes
    }
}

impl TryFrom<&[u8]> for Bitslice {
    type Err = usize;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Err> {
        if bytes.len() != Self::num_bytes() {
            return Err(Self::num_bytes());
        }

        let mut buf = [0; LANE_BYTES];
        buf.copy_from_slice(bytes);
        Ok(buf.into())
    }
}

impl fmt::Debug for Bitslice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bytes = self.into_bytes();
        writeln!(f, "[")?;
        for block in bytes.chunks_exact(BLOCK_LEN) {
            write!(f, "    ")?;
            for byte in block.iter().rev() {
                write!(f, "{:02x}", byte)?;
            }
            writeln!(f, ",")?;
        }
        write!(f, "]")
    }
}

impl BlockRepr for Bitslice {
    const NUM_BLOCKS: usize = Self::num_blocks();

    fn copy_to_slice(&self, out: &mut [u8]) {
        let bytes = self.into_bytes();
        out.copy_from_slice(&bytes[..out.len()]);
    }
}

impl AddRoundKey for Bitslice {
    /// XORs the round key into all 32 blocks at once.
    ///
    /// Each round-key bit is replicated across a whole lane by indexing a two-entry
    /// plane table with the bit value, so no lane sees a branch.
    fn add_round_key(&mut self, rk: &key::RoundKey) {
        const PLANE: [Lane; 2] = [0, !0];

        for (j, lane) in self.0.iter_mut().enumerate() {
            let bit = rk[j / 8] >> (j % 8) & 1;
            *lane ^= PLANE[bit as usize];
        }
    }
}

impl PboxLayer for Bitslice {
    /// The bit permutation seen from bit-plane order: lane `p` moves to lane `P(p)`,
    /// with lane 63 a fixed point. A scratch array keeps unread lanes intact.
    fn pbox_layer(&mut self) {
        let mut out = [0; LANES];

        for (p, &lane) in self.0.iter().enumerate() {
            out[permutation(p)] = lane;
        }

        self.0 = out;
    }
}

#[cfg(test)]
impl IntoIterator for Bitslice {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(&self.into_bytes()[..])
            .into_iter()
    }
}
