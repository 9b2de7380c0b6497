//! Fixed-width capability signatures

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Number of distinct roles a signature can encode
pub const MAX_ROLES: usize = u32::BITS as usize;

/// 32-bit capability signature
///
/// Each compiled role owns one bit; a role's signature is its own bit OR'd
/// with the signatures of every role it dominates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(u32);

impl Signature {
    /// Signature with no bits set
    pub const EMPTY: Signature = Signature(0);

    /// Signature holding only the bit at `index`
    ///
    /// Returns `None` when `index` is outside the signature width.
    pub fn bit(index: usize) -> Option<Self> {
        if index >= MAX_ROLES {
            return None;
        }
        Some(Signature(1u32 << index))
    }

    /// Wrap raw bits
    pub const fn from_bits(bits: u32) -> Self {
        Signature(bits)
    }

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every bit of `other` is also set in `self`
    pub fn contains(self, other: Signature) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if the bit at `index` is set
    pub fn has_bit(self, index: usize) -> bool {
        index < MAX_ROLES && self.0 & (1u32 << index) != 0
    }

    /// Number of set bits
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Signature {
    type Output = Signature;

    fn bitor(self, rhs: Signature) -> Signature {
        Signature(self.0 | rhs.0)
    }
}

impl BitOrAssign for Signature {
    fn bitor_assign(&mut self, rhs: Signature) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034b}", self.0)
    }
}
