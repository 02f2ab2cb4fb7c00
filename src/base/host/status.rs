//! The status of a host authority.
//!
//! This is a private module. Its public types are re-exported by the parent.

use core::fmt;

//------------ HostStatus ----------------------------------------------------

/// The outcome of parsing a host authority.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum HostStatus {
    /// The host is valid and has no port.
    Valid,

    /// The host is valid and is followed by a valid port.
    ValidWithPort,

    /// The host is neither an IP address nor a valid domain name.
    InvalidHost,

    /// The port isn’t a decimal number.
    InvalidPort,

    /// The port is a number but too large.
    InvalidPortRange,

    /// The host is a bracketed IPv6 address that can’t be parsed.
    InvalidIpv6,
}

impl HostStatus {
    /// Returns whether the status describes a valid host.
    pub fn is_valid(self) -> bool {
        matches!(self, HostStatus::Valid | HostStatus::ValidWithPort)
    }

    /// Returns whether the status describes a valid host with port.
    pub fn has_port(self) -> bool {
        matches!(self, HostStatus::ValidWithPort)
    }

    /// Returns a short description of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            HostStatus::Valid => "valid host",
            HostStatus::ValidWithPort => "valid host with port",
            HostStatus::InvalidHost => "invalid host",
            HostStatus::InvalidPort => "invalid port",
            HostStatus::InvalidPortRange => {
                "port is not in the range from 0 to 65535"
            }
            HostStatus::InvalidIpv6 => "invalid IPv6 address",
        }
    }

    /// Returns the status’s name in snake case.
    pub fn name(self) -> &'static str {
        match self {
            HostStatus::Valid => "valid",
            HostStatus::ValidWithPort => "valid_with_port",
            HostStatus::InvalidHost => "invalid_host",
            HostStatus::InvalidPort => "invalid_port",
            HostStatus::InvalidPortRange => "invalid_port_range",
            HostStatus::InvalidIpv6 => "invalid_ipv6",
        }
    }
}

//--- Display

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HostStatus {}

//--- Serialize

#[cfg(feature = "serde")]
impl serde::Serialize for HostStatus {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;

    fn message<E: std::error::Error>(err: E) -> std::string::String {
        format!("{}", err)
    }

    #[test]
    fn is_error() {
        assert_eq!(
            message(HostStatus::InvalidPortRange),
            "port is not in the range from 0 to 65535"
        );
        assert_eq!(message(HostStatus::InvalidIpv6), "invalid IPv6 address");
    }

    #[test]
    fn predicates() {
        assert!(HostStatus::Valid.is_valid());
        assert!(!HostStatus::Valid.has_port());
        assert!(HostStatus::ValidWithPort.has_port());
        assert!(!HostStatus::InvalidPort.is_valid());
        assert_eq!(HostStatus::ValidWithPort.name(), "valid_with_port");
    }
}
