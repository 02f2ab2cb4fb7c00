//! Character classes.
//!
//! The scanners in this crate work on bytes rather than on `char`s. A
//! [`CharSet`] is a lookup table answering whether a byte belongs to a
//! certain class. The classes are named after the core rules of ABNF as
//! defined in [RFC 5234] which is what the URI and domain name grammars are
//! written in.
//!
//! [RFC 5234]: https://tools.ietf.org/html/rfc5234

use core::fmt;

//------------ CharSet -------------------------------------------------------

/// A set of bytes.
///
/// The set is stored as a bitmap over all 256 byte values so that a
/// membership test is a single lookup.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct CharSet([u64; 4]);

impl CharSet {
    /// The empty set.
    pub const EMPTY: Self = CharSet([0; 4]);

    /// Creates a set containing exactly the given bytes.
    #[must_use]
    pub const fn from_bytes(mut bytes: &[u8]) -> Self {
        let mut res = Self::EMPTY;
        while let [head, tail @ ..] = bytes {
            res = res.with(*head);
            bytes = tail;
        }
        res
    }

    /// Creates a set containing the bytes from `first` to `last`.
    ///
    /// Both ends are included.
    #[must_use]
    pub const fn from_range(first: u8, last: u8) -> Self {
        let mut res = Self::EMPTY;
        let mut ch = first as usize;
        while ch <= last as usize {
            res = res.with(ch as u8);
            ch += 1;
        }
        res
    }

    /// Returns a set that also contains `ch`.
    #[must_use]
    pub const fn with(mut self, ch: u8) -> Self {
        self.0[(ch >> 6) as usize] |= 1u64 << (ch & 0x3F);
        self
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn or(mut self, other: Self) -> Self {
        let mut i = 0;
        while i < 4 {
            self.0[i] |= other.0[i];
            i += 1;
        }
        self
    }

    /// Returns whether `ch` is part of the set.
    #[inline]
    pub const fn contains(&self, ch: u8) -> bool {
        self.0[(ch >> 6) as usize] & (1u64 << (ch & 0x3F)) != 0
    }

    /// Returns the length of the prefix of `bytes` made of set members.
    pub fn span(&self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .position(|&ch| !self.contains(ch))
            .unwrap_or(bytes.len())
    }
}

//--- Debug

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set()
            .entries(
                (0..=u8::MAX)
                    .filter(|&ch| self.contains(ch))
                    .map(char::from),
            )
            .finish()
    }
}

//------------ Predefined Sets -----------------------------------------------

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: CharSet =
    CharSet::from_range(b'A', b'Z').or(CharSet::from_range(b'a', b'z'));

/// `DIGIT = %x30-39`
pub const DIGIT: CharSet = CharSet::from_range(b'0', b'9');

/// `ALPHA / DIGIT`
pub const ALPHA_DIGIT: CharSet = ALPHA.or(DIGIT);

/// `ALPHA / DIGIT / "-"`, the bytes allowed in a domain name label.
pub const LABEL: CharSet = ALPHA_DIGIT.with(b'-');

//============ Testing =======================================================
