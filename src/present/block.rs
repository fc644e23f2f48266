//! Operations on the 8-byte PRESENT block.

use core::fmt;

use try_from::TryFrom;

/// The number of bytes in a PRESENT block.
pub const BLOCK_LEN: usize = 8;

type BlockArray = [u8; BLOCK_LEN];

/// A byte array with the same length as a PRESENT block.
///
/// Byte 0 holds the least-significant byte of the 64-bit cipher state and bit 0 of each
/// byte is its least-significant bit. A block written as a big-endian hex numeral
/// therefore appears here in reverse byte order.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Block(pub BlockArray);

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl TryFrom<&[u8]> for Block {
    type Err = ();

    fn try_from(s: &[u8]) -> Result<Self, Self::Err> {
        slice_as_array_ref!(s, BLOCK_LEN)
            .map(|&b| Block(b))
    }
}

impl From<BlockArray> for Block {
    fn from(arr: BlockArray) -> Self {
        Block(arr)
    }
}

impl From<Block> for BlockArray {
    fn from(block: Block) -> Self {
        block.0
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl Block {
    /// Iterates over the bytes in a block.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &u8> {
        self.0.iter()
    }

    /// Iterates over the bytes in a block.
    pub fn iter_mut(&mut self) -> impl '_ + Iterator<Item = &mut u8> {
        self.0.iter_mut()
    }
}

#[cfg(test)]
impl IntoIterator for Block {
    type Item = u8;
    type IntoIter = crate::util::ArrayIter<BlockArray>;

    fn into_iter(self) -> Self::IntoIter {
        crate::util::ArrayIter::new(self.into())
    }
}
