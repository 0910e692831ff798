//! Block difficulty data structures.
//!
//! The block difficulty "target threshold" is stored in the block header as a
//! 32-bit `CompactDifficulty` in the Bitcoin "nBits" format. Okapi carries
//! the field opaquely; it is only round-tripped between the wire format and
//! the header.

use std::fmt;

/// A 32-bit "compact bits" value, which represents the difficulty threshold
/// for a block header.
///
/// This is a floating-point encoding, with a 24-bit signed mantissa, an 8-bit
/// exponent, an offset of 3, and a radix of 256. (IEEE 754 32-bit
/// floating-point values use a separate sign bit, an implicit leading
/// mantissa bit, an offset of 127, and a radix of 2.)
///
/// The precise bit pattern of a `CompactDifficulty` value is
/// consensus-critical, because it is part of the block header, and therefore
/// of the `block::Hash`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CompactDifficulty(pub(crate) u32);

impl CompactDifficulty {
    /// Returns the raw "nBits" value.
    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CompactDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("CompactDifficulty")
            // Use hex, because it's a float
            .field(&format_args!("{:#010x}", self.0))
            .finish()
    }
}

impl From<u32> for CompactDifficulty {
    fn from(bits: u32) -> Self {
        CompactDifficulty(bits)
    }
}

impl From<CompactDifficulty> for u32 {
    fn from(difficulty: CompactDifficulty) -> Self {
        difficulty.0
    }
}
