//! Parsing the port suffix of a host authority.
//!
//! This is a private module.

use super::super::chars::DIGIT;
use super::status::HostStatus;

/// The largest port number.
pub const MAX_PORT: u32 = u16::MAX as u32;

/// Scans what follows the host in a host authority for a port.
///
/// The `suffix` is everything after the host. If it is empty, there is no
/// port and `Ok(None)` is returned. Otherwise it has to start with a colon
/// followed by a decimal number of at least one digit.
///
/// A suffix not starting with a colon results in
/// [`HostStatus::InvalidHost`] since it really is garbage after the host.
/// Anything but digits after the colon, no digits at all, or a number too
/// large for a `u32` is [`HostStatus::InvalidPort`]. A number that fits but
/// exceeds 65535 is [`HostStatus::InvalidPortRange`].
pub fn scan_port(suffix: &[u8]) -> Result<Option<u16>, HostStatus> {
    let digits = match suffix.split_first() {
        None => return Ok(None),
        Some((&b':', digits)) => digits,
        Some(_) => return Err(HostStatus::InvalidHost),
    };
    if digits.is_empty() {
        return Err(HostStatus::InvalidPort);
    }

    let mut res = 0u32;
    for &ch in digits {
        if !DIGIT.contains(ch) {
            return Err(HostStatus::InvalidPort);
        }
        res = res
            .checked_mul(10)
            .and_then(|res| res.checked_add(u32::from(ch - b'0')))
            .ok_or(HostStatus::InvalidPort)?;
    }
    if res > MAX_PORT {
        return Err(HostStatus::InvalidPortRange);
    }
    Ok(Some(res as u16))
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn absent() {
        assert_eq!(scan_port(b""), Ok(None));
    }

    #[test]
    fn valid() {
        assert_eq!(scan_port(b":80"), Ok(Some(80)));
        assert_eq!(scan_port(b":0"), Ok(Some(0)));
        assert_eq!(scan_port(b":65535"), Ok(Some(65535)));
        assert_eq!(scan_port(b":008080"), Ok(Some(8080)));
    }

    #[test]
    fn not_a_port() {
        assert_eq!(scan_port(b"80"), Err(HostStatus::InvalidHost));
        assert_eq!(scan_port(b"/path"), Err(HostStatus::InvalidHost));
    }

    #[test]
    fn invalid() {
        assert_eq!(scan_port(b":"), Err(HostStatus::InvalidPort));
        assert_eq!(scan_port(b":invalid"), Err(HostStatus::InvalidPort));
        assert_eq!(scan_port(b":80a"), Err(HostStatus::InvalidPort));
        assert_eq!(scan_port(b":+80"), Err(HostStatus::InvalidPort));
        assert_eq!(scan_port(b":-1"), Err(HostStatus::InvalidPort));
        assert_eq!(scan_port(b": 80"), Err(HostStatus::InvalidPort));
        assert_eq!(scan_port(b":80:81"), Err(HostStatus::InvalidPort));
        assert_eq!(
            scan_port(b":99999999999"),
            Err(HostStatus::InvalidPort)
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(scan_port(b":65536"), Err(HostStatus::InvalidPortRange));
        assert_eq!(
            scan_port(b":4294967295"),
            Err(HostStatus::InvalidPortRange)
        );
    }
}
