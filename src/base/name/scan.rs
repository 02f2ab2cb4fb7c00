//! Scanning domain names.
//!
//! This is a private module. Its public items are re-exported by the parent.

use super::super::chars::{ALPHA_DIGIT, LABEL};
use core::fmt;

/// Domain names have a maximum length of 255 octets.
pub const MAX_NAME_LEN: usize = 255;

/// Labels have a maximum length of 63 octets.
pub const MAX_LABEL_LEN: usize = 63;

/// The prefix marking a punycode encoded label.
pub const PUNYCODE_PREFIX: &[u8] = b"xn--";

//------------ parse_domain_name ---------------------------------------------

/// Scans `input` for a domain name in host name syntax.
///
/// A domain name is a sequence of labels separated by dots. Each label is
/// between one and 63 octets of letters, digits, and hyphens. It may
/// neither start nor end with a hyphen and two hyphens may only appear in
/// a row as part of the `xn--` prefix of punycode. A label may start with
/// a digit as allowed by [RFC 1123]. The whole name is at most 255 octets
/// and may not end in a dot.
///
/// Labels starting with `xn--` are accepted as punycode without checking
/// that the rest of the label actually decodes. Its remainder may contain
/// letters, digits, and any hyphens.
///
/// Returns the status and the position where scanning stopped. This is
/// the length of `input` if the name is valid. For
/// [`DomainNameStatus::InvalidCharacter`] it is the index of the offending
/// byte. For the other errors, it is the position scanning had reached
/// when the error was noticed.
///
/// [RFC 1123]: https://tools.ietf.org/html/rfc1123
pub fn parse_domain_name(input: &[u8]) -> (DomainNameStatus, usize) {
    let end = input.len();
    let first = match input.first() {
        Some(&first) => first,
        None => return (DomainNameStatus::EmptySubdomain, 0),
    };
    if end > MAX_NAME_LEN {
        return (DomainNameStatus::TooLong, 0);
    }
    match first {
        b'.' => return (DomainNameStatus::EmptySubdomain, 0),
        b'-' => return (DomainNameStatus::BeginWithHyphen, 0),
        _ => {}
    }

    let mut pos = 0;
    let mut label_start = 0;
    let mut has_punycode = false;
    while pos != end {
        if input[pos..].starts_with(PUNYCODE_PREFIX) {
            has_punycode = true;
            pos += PUNYCODE_PREFIX.len();
            pos += LABEL.span(&input[pos..]);
            continue;
        }

        let ch = input[pos];
        pos += 1;
        let next = input.get(pos).copied();
        match ch {
            b'.' => match next {
                None => return (DomainNameStatus::DotAtEnd, pos),
                Some(b'.') => return (DomainNameStatus::EmptySubdomain, pos),
                Some(b'-') => {
                    return (DomainNameStatus::BeginWithHyphen, pos)
                }
                Some(_) => {
                    if pos - 1 - label_start > MAX_LABEL_LEN {
                        return (DomainNameStatus::SubdomainTooLong, pos);
                    }
                    label_start = pos;

                    // The next label may be punycode.
                    continue;
                }
            },
            b'-' => match next {
                None | Some(b'.') => {
                    return (DomainNameStatus::EndWithHyphen, pos)
                }
                Some(b'-') => return (DomainNameStatus::DoubleHyphen, pos),
                Some(_) => {}
            },
            ch if ALPHA_DIGIT.contains(ch) => {}
            _ => return (DomainNameStatus::InvalidCharacter, pos - 1),
        }
        pos += ALPHA_DIGIT.span(&input[pos..]);
    }

    if end - label_start > MAX_LABEL_LEN {
        return (DomainNameStatus::SubdomainTooLong, end);
    }
    if has_punycode {
        (DomainNameStatus::ValidPunycode, end)
    } else {
        (DomainNameStatus::Valid, end)
    }
}

//------------ DomainNameStatus ----------------------------------------------

/// The result of scanning a domain name.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DomainNameStatus {
    /// The domain name is valid.
    Valid,

    /// The domain name is valid and has at least one punycode label.
    ValidPunycode,

    /// A byte that may not appear in a domain name was found.
    InvalidCharacter,

    /// The domain name is longer than 255 octets.
    TooLong,

    /// A label is longer than 63 octets.
    SubdomainTooLong,

    /// The domain name ends in a dot.
    DotAtEnd,

    /// A label starts with a hyphen.
    BeginWithHyphen,

    /// A label ends with a hyphen.
    EndWithHyphen,

    /// A label contains two hyphens in a row outside the punycode prefix.
    DoubleHyphen,

    /// The domain name is empty or contains an empty label.
    EmptySubdomain,
}

impl DomainNameStatus {
    /// Returns whether the status describes a valid domain name.
    pub fn is_valid(self) -> bool {
        matches!(
            self,
            DomainNameStatus::Valid | DomainNameStatus::ValidPunycode
        )
    }

    /// Returns a short description of the status.
    pub fn as_str(self) -> &'static str {
        use DomainNameStatus::*;

        match self {
            Valid => "valid domain name",
            ValidPunycode => "valid domain name containing punycode",
            InvalidCharacter => "domain name contains an invalid character",
            TooLong => "domain name longer than 255 bytes",
            SubdomainTooLong => "domain name label longer than 63 bytes",
            DotAtEnd => "domain name ends with a dot",
            BeginWithHyphen => "domain name label begins with a hyphen",
            EndWithHyphen => "domain name label ends with a hyphen",
            DoubleHyphen => "domain name label contains a double hyphen",
            EmptySubdomain => "empty domain name label",
        }
    }

    /// Returns the status’s name in snake case.
    pub fn name(self) -> &'static str {
        use DomainNameStatus::*;

        match self {
            Valid => "valid",
            ValidPunycode => "valid_punycode",
            InvalidCharacter => "invalid_character",
            TooLong => "too_long",
            SubdomainTooLong => "subdomain_too_long",
            DotAtEnd => "dot_at_end",
            BeginWithHyphen => "begin_with_hyphen",
            EndWithHyphen => "end_with_hyphen",
            DoubleHyphen => "double_hyphen",
            EmptySubdomain => "empty_subdomain",
        }
    }
}

//--- Display

impl fmt::Display for DomainNameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainNameStatus {}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for DomainNameStatus {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

//------------ DomainScan ----------------------------------------------------

/// A domain name scanned as the host part of an authority.
///
/// In an authority, a domain name may be followed by a colon and a port.
/// Scanning stops at that colon with an invalid character. This type
/// separates that case from real errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DomainScan {
    /// All of the input is a valid domain name.
    Valid {
        /// Whether at least one label is punycode.
        punycode: bool,
    },

    /// The input is a valid domain name followed by a colon.
    ///
    /// The value is the index of the colon.
    PortBoundary(usize),

    /// The input does not start with a valid domain name.
    Invalid {
        /// What went wrong.
        status: DomainNameStatus,

        /// Where it went wrong.
        pos: usize,
    },
}

impl DomainScan {
    /// Scans `input` as the host part of an authority.
    pub fn scan(input: &[u8]) -> Self {
        match parse_domain_name(input) {
            (DomainNameStatus::Valid, _) => DomainScan::Valid { punycode: false },
            (DomainNameStatus::ValidPunycode, _) => {
                DomainScan::Valid { punycode: true }
            }
            (DomainNameStatus::InvalidCharacter, pos)
                if input[pos] == b':' =>
            {
                // Scanning stopped early, so the name before the colon
                // hasn’t seen the checks for its end yet.
                match parse_domain_name(&input[..pos]) {
                    (status, _) if status.is_valid() => {
                        DomainScan::PortBoundary(pos)
                    }
                    (status, pos) => DomainScan::Invalid { status, pos },
                }
            }
            (status, pos) => DomainScan::Invalid { status, pos },
        }
    }

    /// Returns the length of the domain name if there is a valid one.
    pub fn name_len(self, input: &[u8]) -> Option<usize> {
        match self {
            DomainScan::Valid { .. } => Some(input.len()),
            DomainScan::PortBoundary(pos) => Some(pos),
            DomainScan::Invalid { .. } => None,
        }
    }
}

//============ Testing =======================================================
