//! Basics.
//!
//! This module provides the types for parsing the host part of URI
//! authorities. They are arranged in submodules:
//!
//! * [chars] for the character sets used by the scanners,
//! * [net] for parsing IPv4 and IPv6 addresses,
//! * [name] for checking and representing domain names, and
//! * [host] for host authorities combining all of the above with a port.
//!
//! The most important types are re-exported here.
//!
//! # Support for `no_std`
//!
//! Nothing in this module needs an allocator. Parsing works on borrowed
//! byte slices and the parsed values reference them. The `std` feature
//! adds implementations of `std::error::Error` and owned octets
//! sequences for domain names via `octseq`.

pub use self::host::{Endpoint, HostAuthority, HostStatus};
pub use self::name::{parse_domain_name, DomainName, DomainNameStatus};
pub use self::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub mod chars;
pub mod host;
pub mod name;
pub mod net;
