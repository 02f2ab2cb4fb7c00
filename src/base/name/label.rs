//! Iterating over the labels of a domain name.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::{iter, str};

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a domain name.
///
/// The labels are returned from left to right, i.e., starting with the most
/// specific label. Iterating from the back starts with the top-level
/// domain.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    /// The part of the name not yet iterated over.
    ///
    /// This is empty once the iterator is exhausted.
    slice: &'a [u8],
}

impl<'a> Labels<'a> {
    /// Creates a new iterator from the octets of a checked domain name.
    pub(super) fn new(slice: &'a [u8]) -> Self {
        Labels { slice }
    }

    fn label(slice: &[u8]) -> &str {
        // Checked domain names are ASCII.
        str::from_utf8(slice).unwrap_or_default()
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slice.is_empty() {
            return None;
        }
        let (head, tail) = match self.slice.iter().position(|&ch| ch == b'.')
        {
            Some(dot) => (&self.slice[..dot], &self.slice[dot + 1..]),
            None => (self.slice, &b""[..]),
        };
        self.slice = tail;
        Some(Self::label(head))
    }
}

impl<'a> DoubleEndedIterator for Labels<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.slice.is_empty() {
            return None;
        }
        let (head, tail) = match self.slice.iter().rposition(|&ch| ch == b'.')
        {
            Some(dot) => (&self.slice[..dot], &self.slice[dot + 1..]),
            None => (&b""[..], self.slice),
        };
        self.slice = head;
        Some(Self::label(tail))
    }
}

impl<'a> iter::FusedIterator for Labels<'a> {}

//============ Testing =======================================================
