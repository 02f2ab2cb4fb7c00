//! Parsing the textual representation of IP addresses.
//!
//! This is a private module. Its public items are re-exported by the parent.
//!
//! The parser follows the one of the Rust std library but works on byte
//! slices and doesn’t insist on consuming all of its input: host parsing
//! needs to know about an IPv4 address that is followed by a port.

use super::{Ipv4Addr, Ipv6Addr};
use core::fmt;

/// The longest textual IPv6 address without zone, e.g.,
/// `ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255`.
const IPV6_MAX_LEN: usize = 45;

//------------ parse_ipv4 ----------------------------------------------------

/// Parses an IPv4 address in dotted-quad notation.
///
/// Each of the four octets must be given in decimal with one to three
/// digits and no leading zeros.
///
/// If the address covers all of `input`, returns [`Ipv4Parse::Full`]. If
/// it is followed by the byte `sentinel`, returns [`Ipv4Parse::Prefix`]
/// with the index of the sentinel. Everything else, including an address
/// followed by any other byte, is [`Ipv4Parse::Invalid`].
pub fn parse_ipv4(input: &[u8], sentinel: u8) -> Ipv4Parse {
    let mut parser = Parser::new(input);
    let addr = match parser.read_ipv4_addr() {
        Some(addr) => addr,
        None => return Ipv4Parse::Invalid,
    };
    match parser.peek_byte() {
        None => Ipv4Parse::Full(addr),
        Some(ch) if ch == sentinel => {
            Ipv4Parse::Prefix(addr, parser.consumed(input))
        }
        Some(_) => Ipv4Parse::Invalid,
    }
}

//------------ Ipv4Parse -----------------------------------------------------

/// The outcome of [`parse_ipv4`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ipv4Parse {
    /// The whole input is an IPv4 address.
    Full(Ipv4Addr),

    /// The input starts with an IPv4 address followed by the sentinel.
    ///
    /// The second element is the index of the sentinel.
    Prefix(Ipv4Addr, usize),

    /// The input doesn’t start with an IPv4 address or there is something
    /// other than the sentinel after it.
    Invalid,
}

impl Ipv4Parse {
    /// Returns the address if one was found.
    pub fn addr(self) -> Option<Ipv4Addr> {
        match self {
            Ipv4Parse::Full(addr) | Ipv4Parse::Prefix(addr, _) => Some(addr),
            Ipv4Parse::Invalid => None,
        }
    }
}

//------------ parse_ipv6 ----------------------------------------------------

/// Parses an IPv6 address in its textual representation.
///
/// The address must cover all of `input`. It may use `::` to compress
/// zero groups and may end in an embedded IPv4 address. Zone identifiers
/// are not supported.
pub fn parse_ipv6(input: &[u8]) -> Result<Ipv6Addr, AddrParseError> {
    if input.is_empty() {
        return Err(AddrParseErrorKind::Empty.into());
    }
    if input.len() > IPV6_MAX_LEN {
        return Err(AddrParseErrorKind::TooLong.into());
    }
    let mut parser = Parser::new(input);
    let addr = parser
        .read_ipv6_addr()
        .ok_or(AddrParseErrorKind::Syntax)?;
    if parser.peek_byte().is_some() {
        return Err(AddrParseErrorKind::Trailing.into());
    }
    Ok(addr)
}

//------------ Parser --------------------------------------------------------

/// A number type the parser can read.
trait ReadNumber: Sized {
    const ZERO: Self;
    fn checked_step(self, radix: u8, digit: u8) -> Option<Self>;
}

macro_rules! impl_read_number {
    ($($t:ty)*) => ($(impl ReadNumber for $t {
        const ZERO: Self = 0;

        #[inline]
        fn checked_step(self, radix: u8, digit: u8) -> Option<Self> {
            self.checked_mul(radix.into())?.checked_add(digit.into())
        }
    })*)
}

impl_read_number! { u8 u16 }

struct Parser<'a> {
    /// The part of the input not yet consumed.
    state: &'a [u8],
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Parser { state: input }
    }

    /// Returns how many bytes of `input` have been consumed.
    fn consumed(&self, input: &[u8]) -> usize {
        input.len() - self.state.len()
    }

    /// Runs `inner` and restores the state if it fails.
    fn read_atomically<T, F>(&mut self, inner: F) -> Option<T>
    where
        F: FnOnce(&mut Parser<'a>) -> Option<T>,
    {
        let state = self.state;
        let res = inner(self);
        if res.is_none() {
            self.state = state;
        }
        res
    }

    fn peek_byte(&self) -> Option<u8> {
        self.state.first().copied()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let (&head, tail) = self.state.split_first()?;
        self.state = tail;
        Some(head)
    }

    #[must_use]
    fn read_given_byte(&mut self, target: u8) -> Option<()> {
        self.read_atomically(|p| {
            p.read_byte().filter(|&ch| ch == target).map(|_| ())
        })
    }

    /// Reads `sep` unless `index` is zero, then runs `inner`.
    fn read_separator<T, F>(
        &mut self,
        sep: u8,
        index: usize,
        inner: F,
    ) -> Option<T>
    where
        F: FnOnce(&mut Parser<'a>) -> Option<T>,
    {
        self.read_atomically(move |p| {
            if index > 0 {
                p.read_given_byte(sep)?;
            }
            inner(p)
        })
    }

    /// Reads a number of at most `max_digits` digits in `radix`.
    ///
    /// Fails if there are no digits, too many digits, the value doesn’t fit
    /// into `T`, or if there is a leading zero and `allow_zero_prefix` is
    /// false.
    fn read_number<T: ReadNumber>(
        &mut self,
        radix: u8,
        max_digits: usize,
        allow_zero_prefix: bool,
    ) -> Option<T> {
        self.read_atomically(move |p| {
            let has_leading_zero = p.peek_byte() == Some(b'0');
            let mut res = T::ZERO;
            let mut digit_count = 0;

            while let Some(digit) = p.read_atomically(|p| {
                char::from(p.read_byte()?).to_digit(radix.into())
            }) {
                // to_digit never returns anything above 35.
                res = res.checked_step(radix, digit as u8)?;
                digit_count += 1;
                if digit_count > max_digits {
                    return None;
                }
            }

            if digit_count == 0
                || (!allow_zero_prefix && has_leading_zero && digit_count > 1)
            {
                None
            } else {
                Some(res)
            }
        })
    }

    fn read_ipv4_addr(&mut self) -> Option<Ipv4Addr> {
        self.read_atomically(|p| {
            let mut octets = [0u8; 4];
            for (i, slot) in octets.iter_mut().enumerate() {
                // Octal octets are ambiguous, see RFC 6943, section 3.1.1.
                *slot = p.read_separator(b'.', i, |p| {
                    p.read_number(10, 3, false)
                })?;
            }
            Some(Ipv4Addr::from(octets))
        })
    }

    fn read_ipv6_addr(&mut self) -> Option<Ipv6Addr> {
        /// Reads colon separated groups into `groups`.
        ///
        /// Returns the number of groups read and whether the last two of
        /// them came from an embedded IPv4 address.
        fn read_groups(p: &mut Parser, groups: &mut [u16]) -> (usize, bool) {
            let limit = groups.len();
            for i in 0..limit {
                // An embedded IPv4 address needs two groups.
                if i + 1 < limit {
                    if let Some(addr) =
                        p.read_separator(b':', i, |p| p.read_ipv4_addr())
                    {
                        let [a, b, c, d] = addr.octets();
                        groups[i] = u16::from_be_bytes([a, b]);
                        groups[i + 1] = u16::from_be_bytes([c, d]);
                        return (i + 2, true);
                    }
                }
                match p.read_separator(b':', i, |p| p.read_number(16, 4, true))
                {
                    Some(group) => groups[i] = group,
                    None => return (i, false),
                }
            }
            (limit, false)
        }

        self.read_atomically(|p| {
            let mut head = [0u16; 8];
            let (head_len, head_ipv4) = read_groups(p, &mut head);
            if head_len == 8 {
                return Some(Ipv6Addr::from(head));
            }

            // The embedded IPv4 address must be last.
            if head_ipv4 {
                return None;
            }

            // Fewer than eight groups require a `::` which stands for at
            // least one zero group.
            p.read_given_byte(b':')?;
            p.read_given_byte(b':')?;

            let mut tail = [0u16; 7];
            let limit = 8 - (head_len + 1);
            let (tail_len, _) = read_groups(p, &mut tail[..limit]);
            head[(8 - tail_len)..].copy_from_slice(&tail[..tail_len]);
            Some(Ipv6Addr::from(head))
        })
    }
}

//------------ AddrParseError ------------------------------------------------

/// An IP address could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddrParseError {
    kind: AddrParseErrorKind,
}

impl AddrParseError {
    /// Returns what went wrong.
    pub fn kind(self) -> AddrParseErrorKind {
        self.kind
    }
}

impl From<AddrParseErrorKind> for AddrParseError {
    fn from(kind: AddrParseErrorKind) -> Self {
        AddrParseError { kind }
    }
}

impl fmt::Display for AddrParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self.kind {
            AddrParseErrorKind::Empty => "empty IP address",
            AddrParseErrorKind::TooLong => "IP address too long",
            AddrParseErrorKind::Syntax => "invalid IP address syntax",
            AddrParseErrorKind::Trailing => {
                "trailing characters after IP address"
            }
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddrParseError {}

//------------ AddrParseErrorKind --------------------------------------------

/// The reason an IP address could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum AddrParseErrorKind {
    /// The input was empty.
    Empty,

    /// The input is longer than any address can be.
    TooLong,

    /// The input doesn’t start with an address.
    Syntax,

    /// There is something left after the address.
    Trailing,
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ipv4_full() {
        assert_eq!(
            parse_ipv4(b"192.0.2.0", b':'),
            Ipv4Parse::Full(Ipv4Addr::new(192, 0, 2, 0))
        );
        assert_eq!(
            parse_ipv4(b"255.255.255.255", b':'),
            Ipv4Parse::Full(Ipv4Addr::BROADCAST)
        );
        assert_eq!(
            parse_ipv4(b"0.0.0.0", b':'),
            Ipv4Parse::Full(Ipv4Addr::UNSPECIFIED)
        );
    }

    #[test]
    fn ipv4_prefix() {
        assert_eq!(
            parse_ipv4(b"192.0.2.0:8080", b':'),
            Ipv4Parse::Prefix(Ipv4Addr::new(192, 0, 2, 0), 9)
        );
        assert_eq!(
            parse_ipv4(b"10.0.0.1:", b':'),
            Ipv4Parse::Prefix(Ipv4Addr::new(10, 0, 0, 1), 8)
        );
        assert_eq!(parse_ipv4(b"192.0.2.0/24", b':'), Ipv4Parse::Invalid);
        assert_eq!(
            parse_ipv4(b"192.0.2.0/24", b'/'),
            Ipv4Parse::Prefix(Ipv4Addr::new(192, 0, 2, 0), 9)
        );
    }

    #[test]
    fn ipv4_invalid() {
        assert_eq!(parse_ipv4(b"", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"192.2.1", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"192.2.1:8080", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"256.0.0.1", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"01.0.0.1", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"1.2.3.4567", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"1.2.3.4.5", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"1.2.3.domain", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"1.2.3.4a", b':'), Ipv4Parse::Invalid);
        assert_eq!(parse_ipv4(b"1..3.4", b':'), Ipv4Parse::Invalid);
    }

    #[test]
    fn ipv6() {
        assert_eq!(
            parse_ipv6(b"2001:db8::1"),
            Ok(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1))
        );
        assert_eq!(parse_ipv6(b"::"), Ok(Ipv6Addr::UNSPECIFIED));
        assert_eq!(parse_ipv6(b"::1"), Ok(Ipv6Addr::LOCALHOST));
        assert_eq!(
            parse_ipv6(b"1:2:3:4:5:6:7:8"),
            Ok(Ipv6Addr::new(1, 2, 3, 4, 5, 6, 7, 8))
        );
        assert_eq!(
            parse_ipv6(b"fe80::"),
            Ok(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0))
        );
        assert_eq!(
            parse_ipv6(b"::ffff:192.0.2.1"),
            Ok(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x0201))
        );
        assert_eq!(
            parse_ipv6(b"64:ff9b::192.0.2.33"),
            Ok(Ipv6Addr::new(0x64, 0xff9b, 0, 0, 0, 0, 0xc000, 0x0221))
        );
    }

    #[test]
    fn ipv6_errors() {
        let kind = |s: &[u8]| parse_ipv6(s).unwrap_err().kind();
        assert_eq!(kind(b""), AddrParseErrorKind::Empty);
        assert_eq!(
            kind(b"0000:0000:0000:0000:0000:0000:0000:0000:0000:0000"),
            AddrParseErrorKind::TooLong
        );
        assert_eq!(kind(b"hello"), AddrParseErrorKind::Syntax);
        assert_eq!(kind(b"1:2:3:4:5:6:7"), AddrParseErrorKind::Syntax);
        assert_eq!(kind(b"12345::1"), AddrParseErrorKind::Syntax);
        assert_eq!(kind(b"192.0.2.1::"), AddrParseErrorKind::Syntax);
        assert_eq!(kind(b"1:2:3:4:5:6:7:8:9"), AddrParseErrorKind::Trailing);
        assert_eq!(kind(b"1::2::3"), AddrParseErrorKind::Trailing);
        assert_eq!(kind(b"::1%eth0"), AddrParseErrorKind::Trailing);
    }
}
