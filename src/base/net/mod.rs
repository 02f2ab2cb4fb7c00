//! IP addresses.
//!
//! The address types themselves are those of `core::net`. What this module
//! adds is a parser for their textual representation that fits the needs of
//! host parsing: an IPv4 address may be followed by a separator and
//! whatever comes after it, and failures are reported with a reason.

pub use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub use self::parser::{
    parse_ipv4, parse_ipv6, AddrParseError, AddrParseErrorKind, Ipv4Parse,
};

mod parser;
