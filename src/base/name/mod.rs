//! Domain names.
//!
//! This module provides the means to check and keep domain names as they
//! appear in the host part of a URI.
//!
//! Main types: [`DomainName`], [`DomainScan`].<br/>
//! Main function: [`parse_domain_name`].
//!
//! In a URI, a host that is neither an IPv4 nor an IPv6 address is a
//! ‘registered name’ which, for all practical purposes, is a domain name.
//! Domain names are a sequence of *labels* separated by dots. Following
//! [RFC 1123], a label consists of letters, digits, and hyphens, may not
//! start or end with a hyphen, and is between one and 63 octets long. The
//! name as a whole is limited to 255 octets.
//!
//! Internationalized domain names are only supported in their ASCII form
//! where each label containing non-ASCII characters is replaced by its
//! punycode encoding prefixed with `xn--`. Such labels are recognized but
//! not decoded.
//!
//! [RFC 1123]: https://tools.ietf.org/html/rfc1123

pub use self::domain::{DomainName, DomainNameError, FromStrError};
pub use self::label::Labels;
pub use self::scan::{
    parse_domain_name, DomainNameStatus, DomainScan, MAX_LABEL_LEN,
    MAX_NAME_LEN,
};

mod domain;
mod label;
mod scan;
