use crate::present::ops::SboxLayer;
use super::bitslice::{Bitslice, Lane};

impl SboxLayer for Bitslice {
    /// Computes the PRESENT S-box in-place for all 32 blocks.
    ///
    /// Each quartet of lanes holds 32 parallel nibbles, bit 0 in the lowest lane. The
    /// lookup table is replaced by the algebraic normal form of the S-box, evaluated
    /// as four Boolean functions over whole lanes, so the layer issues no
    /// data-dependent loads.
    ///
    /// All four outputs depend on all four inputs, so the inputs are captured into
    /// locals before the quartet is overwritten.
    fn sbox_layer(&mut self) {
        for quad in self.0.chunks_exact_mut(4) {
            let (x0, x1, x2, x3) = (quad[0], quad[1], quad[2], quad[3]);

            quad[0] = sbox0(x0, x1, x2, x3);
            quad[1] = sbox1(x0, x1, x2, x3);
            quad[2] = sbox2(x0, x1, x2, x3);
            quad[3] = sbox3(x0, x1, x2, x3);
        }
    }
}

// y0 = x0 + x1·x2 + x2 + x3
fn sbox0(x0: Lane, x1: Lane, x2: Lane, x3: Lane) -> Lane {
    x0 ^ (x1 & x2) ^ x2 ^ x3
}

// y1 = x0·x1·x2 + x0·x1·x3 + x1·x3 + x1 + x0·x2·x3 + x2·x3 + x3
fn sbox1(x0: Lane, x1: Lane, x2: Lane, x3: Lane) -> Lane {
    (x0 & x1 & x2) ^ (x0 & x1 & x3) ^ (x1 & x3) ^ x1 ^ (x0 & x2 & x3) ^ (x2 & x3) ^ x3
}

// y2 = x0·x1 + x0·x1·x3 + x1·x3 + x2 + x0·x3 + x0·x2·x3 + x3 + 1
fn sbox2(x0: Lane, x1: Lane, x2: Lane, x3: Lane) -> Lane {
    !((x0 & x1) ^ (x0 & x1 & x3) ^ (x1 & x3) ^ x2 ^ (x0 & x3) ^ (x0 & x2 & x3) ^ x3)
}

// y3 = x0·x1·x2 + x0·x1·x3 + x0·x2·x3 + x0 + x1 + x1·x2 + x3 + 1
fn sbox3(x0: Lane, x1: Lane, x2: Lane, x3: Lane) -> Lane {
    !((x0 & x1 & x2) ^ (x0 & x1 & x3) ^ (x0 & x2 & x3) ^ x0 ^ x1 ^ (x1 & x2) ^ x3)
}
