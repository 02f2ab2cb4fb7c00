//! Parsing of URI host authorities and domain names.
//!
//! This crate provides the building blocks for making sense of the host
//! part of a URI authority, i.e., the `host[:port]` portion that appears
//! after the `//` of a URL or in the `Host` header of an HTTP request. A
//! host can be one of three things: a dotted IPv4 address, an IPv6 address
//! enclosed in square brackets, or a registered name following the rules
//! for domain names. Each of them may be followed by a port number.
//!
//! The central type is [`HostAuthority`][base::HostAuthority]. It takes a
//! string, decides which of the three grammars applies, and keeps the
//! result together with the port and a status describing what went wrong
//! if the string wasn’t acceptable. Constructing one never fails: invalid
//! input simply results in a value whose status says so.
//!
//! Domain names can also be checked on their own via
//! [`parse_domain_name`][base::name::parse_domain_name] and kept in a
//! [`DomainName`][base::DomainName].
//!
//! # Modules
//!
//! * [base] contains all the types and functions for parsing, and
#![cfg_attr(feature = "tracing", doc = "* [logging]")]
#![cfg_attr(not(feature = "tracing"), doc = "* logging")]
//!   sets up a log subscriber for tests and tools.
//!
//! # Reference of Feature Flags
//!
//! * `bytes`: Enables using the type `Bytes` from the
//!    [bytes](https://github.com/tokio-rs/bytes) crate as the storage of
//!    domain names.
//! * `serde`: Enables serialization and deserialization of domain names,
//!   host authorities, and status values via
//!   [serde](https://serde.rs/).
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//! * `tracing`: Emits trace events via
//!   [tracing](https://github.com/tokio-rs/tracing) while parsing host
//!   authorities and enables the
#![cfg_attr(feature = "tracing", doc = "  [logging]")]
#![cfg_attr(not(feature = "tracing"), doc = "  logging")]
//!   module.

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
extern crate core;

#[macro_use]
mod macros;

pub mod base;

#[cfg(feature = "tracing")]
pub mod logging;
