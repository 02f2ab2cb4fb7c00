//! Host authorities.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::super::chars::DIGIT;
use super::super::name::{DomainName, DomainScan};
use super::super::net::{
    parse_ipv4, parse_ipv6, AddrParseError, IpAddr, Ipv4Addr, Ipv4Parse,
    Ipv6Addr,
};
use super::port::scan_port;
use super::status::HostStatus;
use core::{cmp, fmt, hash};

//------------ HostAuthority -------------------------------------------------

/// The host part of a URI authority with an optional port.
///
/// A value is created from a string via [`new`][Self::new] which
/// determines whether the string contains an IPv4 address, an IPv6 address
/// in square brackets, or a domain name, each optionally followed by a
/// colon and a port number.
///
/// Creating a value never fails. Instead, the [`status`][Self::status]
/// tells whether the string was acceptable and, if not, what was wrong
/// with it. If the host itself was fine but the port wasn’t, the host is
/// still available.
///
/// If the host is a domain name, the value references the original string
/// and thus can’t outlive it. Use [`OctetsFrom`] on the
/// [`DomainName`] if you need to keep the name around for longer.
///
/// Values compare equal if their endpoints, ports, and statuses are equal.
/// Domain names are compared ignoring ASCII case.
///
/// [`OctetsFrom`]: octseq::octets::OctetsFrom
#[derive(Clone, Copy, Debug)]
pub struct HostAuthority<'a> {
    /// The host, if one could be determined.
    endpoint: Endpoint<'a>,

    /// The port. Only meaningful if `status` is `ValidWithPort`.
    port: u16,

    /// The outcome of parsing.
    status: HostStatus,

    /// Why the IPv6 address couldn’t be parsed.
    ipv6_error: Option<AddrParseError>,
}

/// # Creating Values
///
impl<'a> HostAuthority<'a> {
    /// Parses a host authority from a string.
    ///
    /// The string can be of the form `host`, `host:port`, `[ipv6]`, or
    /// `[ipv6]:port`. The host is taken as an IPv6 address if it starts
    /// with an opening bracket. If it starts with a digit, it is tried as
    /// an IPv4 address first and as a domain name if that fails, since
    /// labels may start with a digit. Everything else is a domain name.
    pub fn new(host: &'a str) -> Self {
        let res = Self::parse(host.as_bytes());
        trace!(
            host,
            status = res.status.name(),
            "parsed host authority"
        );
        res
    }

    fn parse(input: &'a [u8]) -> Self {
        match input.first() {
            None => Self::invalid(HostStatus::InvalidHost),
            Some(b'[') => Self::from_ip_literal(&input[1..]),
            Some(&ch) if DIGIT.contains(ch) => Self::try_ipv4(input)
                .unwrap_or_else(|| Self::from_domain(input)),
            Some(_) => Self::from_domain(input),
        }
    }

    /// Parses the remainder of an IP literal after the opening bracket.
    fn from_ip_literal(input: &'a [u8]) -> Self {
        let close = match input.iter().rposition(|&ch| ch == b']') {
            Some(close) => close,
            None => {
                trace!("IPv6 literal without closing bracket");
                return Self::invalid(HostStatus::InvalidIpv6);
            }
        };
        match parse_ipv6(&input[..close]) {
            Ok(addr) => Self::valid(Endpoint::Ipv6(addr))
                .with_port_suffix(&input[close + 1..]),
            Err(err) => {
                trace!(error = %err, "invalid IPv6 literal");
                HostAuthority {
                    ipv6_error: Some(err),
                    ..Self::invalid(HostStatus::InvalidIpv6)
                }
            }
        }
    }

    /// Tries to parse the input as an IPv4 address with optional port.
    ///
    /// Returns `None` if the input isn’t an IPv4 address so that it can be
    /// tried as a domain name.
    fn try_ipv4(input: &'a [u8]) -> Option<Self> {
        match parse_ipv4(input, b':') {
            Ipv4Parse::Full(addr) => Some(Self::valid(Endpoint::Ipv4(addr))),
            Ipv4Parse::Prefix(addr, colon) => Some(
                Self::valid(Endpoint::Ipv4(addr))
                    .with_port_suffix(&input[colon..]),
            ),
            Ipv4Parse::Invalid => {
                trace!("not an IPv4 address, trying domain name");
                None
            }
        }
    }

    fn from_domain(input: &'a [u8]) -> Self {
        let scan = DomainScan::scan(input);
        let len = match scan.name_len(input) {
            Some(len) => len,
            None => {
                trace!(scan = ?scan, "invalid domain name");
                return Self::invalid(HostStatus::InvalidHost);
            }
        };
        let (name, suffix) = input.split_at(len);
        // SAFETY: The scan has accepted `name`.
        let name = unsafe { DomainName::from_octets_unchecked(name) };
        Self::valid(Endpoint::Domain(name)).with_port_suffix(suffix)
    }

    fn valid(endpoint: Endpoint<'a>) -> Self {
        HostAuthority {
            endpoint,
            port: 0,
            status: HostStatus::Valid,
            ipv6_error: None,
        }
    }

    fn invalid(status: HostStatus) -> Self {
        HostAuthority {
            endpoint: Endpoint::Empty,
            port: 0,
            status,
            ipv6_error: None,
        }
    }

    /// Updates the port and status from what follows the host.
    ///
    /// The endpoint stays even if the port is bad.
    fn with_port_suffix(mut self, suffix: &[u8]) -> Self {
        match scan_port(suffix) {
            Ok(None) => {}
            Ok(Some(port)) => {
                self.port = port;
                self.status = HostStatus::ValidWithPort;
            }
            Err(status) => {
                trace!(status = status.name(), "invalid port suffix");
                self.status = status;
            }
        }
        self
    }
}

/// # Status
///
impl<'a> HostAuthority<'a> {
    /// Returns the outcome of parsing.
    pub fn status(&self) -> HostStatus {
        self.status
    }

    /// Returns whether the host is valid.
    ///
    /// This is true if both the host and the port, if present, are valid.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// Appends a description of the status to `out`.
    ///
    /// For an invalid IPv6 address, the reason the address couldn’t be
    /// parsed is included.
    pub fn status_string<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> fmt::Result {
        out.write_str(self.status.as_str())?;
        if let Some(err) = self.ipv6_error {
            write!(out, ": {}", err)?;
        }
        Ok(())
    }
}

/// # Port
///
impl<'a> HostAuthority<'a> {
    /// Returns whether a valid port was given.
    pub fn has_port(&self) -> bool {
        self.status.has_port()
    }

    /// Returns the port if a valid one was given.
    pub fn port(&self) -> Option<u16> {
        if self.has_port() {
            Some(self.port)
        } else {
            None
        }
    }

    /// Returns the port or `default` if no valid port was given.
    pub fn port_or(&self, default: u16) -> u16 {
        self.port().unwrap_or(default)
    }
}

/// # Endpoint
///
impl<'a> HostAuthority<'a> {
    /// Returns the endpoint.
    ///
    /// The endpoint may be present even if the status is not valid when
    /// only the port was bad.
    pub fn endpoint(&self) -> Endpoint<'a> {
        self.endpoint
    }

    /// Returns whether the host is an IP address.
    pub fn is_ip(&self) -> bool {
        self.is_ipv4() || self.is_ipv6()
    }

    /// Returns whether the host is an IPv4 address.
    pub fn is_ipv4(&self) -> bool {
        matches!(self.endpoint, Endpoint::Ipv4(_))
    }

    /// Returns whether the host is an IPv6 address.
    pub fn is_ipv6(&self) -> bool {
        matches!(self.endpoint, Endpoint::Ipv6(_))
    }

    /// Returns whether the host is a domain name.
    pub fn is_domain(&self) -> bool {
        matches!(self.endpoint, Endpoint::Domain(_))
    }

    /// Returns the IPv4 address if the host is one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.endpoint {
            Endpoint::Ipv4(addr) => Some(addr),
            _ => None,
        }
    }

    /// Returns the IPv4 address or `default` if the host isn’t one.
    pub fn ipv4_or(&self, default: Ipv4Addr) -> Ipv4Addr {
        self.ipv4().unwrap_or(default)
    }

    /// Returns the IPv6 address if the host is one.
    pub fn ipv6(&self) -> Option<Ipv6Addr> {
        match self.endpoint {
            Endpoint::Ipv6(addr) => Some(addr),
            _ => None,
        }
    }

    /// Returns the IPv6 address or `default` if the host isn’t one.
    pub fn ipv6_or(&self, default: Ipv6Addr) -> Ipv6Addr {
        self.ipv6().unwrap_or(default)
    }

    /// Returns the IP address if the host is one.
    pub fn address(&self) -> Option<IpAddr> {
        match self.endpoint {
            Endpoint::Ipv4(addr) => Some(addr.into()),
            Endpoint::Ipv6(addr) => Some(addr.into()),
            _ => None,
        }
    }

    /// Returns the domain name if the host is one.
    pub fn domain(&self) -> Option<DomainName<&'a [u8]>> {
        match self.endpoint {
            Endpoint::Domain(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the domain name or `default` if the host isn’t one.
    pub fn domain_or(
        &self,
        default: DomainName<&'a [u8]>,
    ) -> DomainName<&'a [u8]> {
        self.domain().unwrap_or(default)
    }

    fn cmp_key(&self) -> (Endpoint<'a>, Option<u16>, HostStatus) {
        (self.endpoint, self.port(), self.status)
    }
}

//--- PartialEq and Eq

impl<'a> PartialEq for HostAuthority<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_key() == other.cmp_key()
    }
}

impl<'a> Eq for HostAuthority<'a> {}

impl<'a> PartialEq<u16> for HostAuthority<'a> {
    fn eq(&self, other: &u16) -> bool {
        self.port() == Some(*other)
    }
}

impl<'a> PartialEq<str> for HostAuthority<'a> {
    fn eq(&self, other: &str) -> bool {
        *self == HostAuthority::new(other)
    }
}

impl<'a, 'b> PartialEq<&'b str> for HostAuthority<'a> {
    fn eq(&self, other: &&'b str) -> bool {
        *self == HostAuthority::new(other)
    }
}

//--- PartialOrd and Ord

impl<'a> PartialOrd for HostAuthority<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for HostAuthority<'a> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.cmp_key().cmp(&other.cmp_key())
    }
}

impl<'a> PartialOrd<u16> for HostAuthority<'a> {
    /// Compares the port with a port number.
    ///
    /// A value without a port is less than any port number.
    fn partial_cmp(&self, other: &u16) -> Option<cmp::Ordering> {
        Some(self.port().cmp(&Some(*other)))
    }
}

impl<'a> PartialOrd<str> for HostAuthority<'a> {
    fn partial_cmp(&self, other: &str) -> Option<cmp::Ordering> {
        Some(self.cmp(&HostAuthority::new(other)))
    }
}

impl<'a, 'b> PartialOrd<&'b str> for HostAuthority<'a> {
    fn partial_cmp(&self, other: &&'b str) -> Option<cmp::Ordering> {
        Some(self.cmp(&HostAuthority::new(other)))
    }
}

//--- Hash

impl<'a> hash::Hash for HostAuthority<'a> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.cmp_key().hash(state)
    }
}

//--- Display

impl<'a> fmt::Display for HostAuthority<'a> {
    /// Formats the host authority in its canonical form.
    ///
    /// IPv6 addresses are enclosed in brackets. A port is only included if
    /// it was valid.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.endpoint, f)?;
        if let Some(port) = self.port() {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

//--- Serialize

#[cfg(feature = "serde")]
impl<'a> serde::Serialize for HostAuthority<'a> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//------------ Endpoint ------------------------------------------------------

/// The host of a host authority.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Endpoint<'a> {
    /// No host could be determined.
    #[default]
    Empty,

    /// An IPv4 address.
    Ipv4(Ipv4Addr),

    /// An IPv6 address.
    Ipv6(Ipv6Addr),

    /// A domain name referencing the original string.
    Domain(DomainName<&'a [u8]>),
}

impl<'a> Endpoint<'a> {
    /// Returns whether there is no host.
    pub fn is_empty(&self) -> bool {
        matches!(self, Endpoint::Empty)
    }
}

//--- Display

impl<'a> fmt::Display for Endpoint<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Endpoint::Empty => Ok(()),
            Endpoint::Ipv4(addr) => fmt::Display::fmt(&addr, f),
            Endpoint::Ipv6(addr) => write!(f, "[{}]", addr),
            Endpoint::Domain(name) => fmt::Display::fmt(&name, f),
        }
    }
}

//============ Testing =======================================================
