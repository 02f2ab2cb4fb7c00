//! Host authorities.
//!
//! The host part of a URI authority is either an IP address or a domain
//! name, optionally followed by a port. The [`HostAuthority`] type parses
//! such a string and provides access to its parts. It never fails to parse
//! but records the outcome in a [`HostStatus`].
//!
//! ```
//! use hostauth::base::host::{HostAuthority, HostStatus};
//!
//! let host = HostAuthority::new("example.com:8080");
//! assert_eq!(host.status(), HostStatus::ValidWithPort);
//! assert_eq!(host.domain().unwrap().as_str(), "example.com");
//! assert_eq!(host.port(), Some(8080));
//! ```

pub use self::authority::{Endpoint, HostAuthority};
pub use self::port::{scan_port, MAX_PORT};
pub use self::status::HostStatus;

mod authority;
mod port;
mod status;
