use std::net::{Ipv4Addr, Ipv6Addr};

use rstest::rstest;

use hostauth::base::host::{HostAuthority, HostStatus};
use hostauth::base::name::{parse_domain_name, DomainNameStatus};

//----------- Dispatch -------------------------------------------------------

#[rstest]
#[case("example.org:80", HostStatus::ValidWithPort, Some("example.org"))]
#[case("example.com", HostStatus::Valid, Some("example.com"))]
#[case("example.com:invalid", HostStatus::InvalidPort, Some("example.com"))]
#[case("example.com:", HostStatus::InvalidPort, Some("example.com"))]
#[case("example.com:65536", HostStatus::InvalidPortRange, Some("example.com"))]
#[case("example.com:4294967296", HostStatus::InvalidPort, Some("example.com"))]
#[case("192.2.1:8080", HostStatus::ValidWithPort, Some("192.2.1"))]
#[case("1.2.3.4.5", HostStatus::Valid, Some("1.2.3.4.5"))]
#[case("256.1.1.1", HostStatus::Valid, Some("256.1.1.1"))]
#[case("01.2.3.4", HostStatus::Valid, Some("01.2.3.4"))]
#[case("xn--bcher-kva.example:443", HostStatus::ValidWithPort, Some("xn--bcher-kva.example"))]
#[case("", HostStatus::InvalidHost, None)]
#[case("-example.com", HostStatus::InvalidHost, None)]
#[case("example.com.", HostStatus::InvalidHost, None)]
#[case("example-:80", HostStatus::InvalidHost, None)]
#[case("example.:80", HostStatus::InvalidHost, None)]
#[case("exa_mple.com", HostStatus::InvalidHost, None)]
#[case("example..com", HostStatus::InvalidHost, None)]
fn domain_hosts(
    #[case] input: &str,
    #[case] status: HostStatus,
    #[case] domain: Option<&str>,
) {
    let host = HostAuthority::new(input);
    assert_eq!(host.status(), status, "{input}");
    assert_eq!(
        host.domain().map(|name| name.to_string()).as_deref(),
        domain,
        "{input}"
    );
    assert!(!host.is_ip(), "{input}");
}

#[rstest]
#[case("192.0.2.0:8080", Ipv4Addr::new(192, 0, 2, 0), Some(8080))]
#[case("127.0.0.1", Ipv4Addr::LOCALHOST, None)]
#[case("0.0.0.0:0", Ipv4Addr::UNSPECIFIED, Some(0))]
#[case("255.255.255.255:65535", Ipv4Addr::BROADCAST, Some(65535))]
fn ipv4_hosts(
    #[case] input: &str,
    #[case] addr: Ipv4Addr,
    #[case] port: Option<u16>,
) {
    let host = HostAuthority::new(input);
    assert!(host.is_valid());
    assert!(host.is_ipv4());
    assert_eq!(host.ipv4(), Some(addr));
    assert_eq!(host.port(), port);
}

#[rstest]
#[case("[2001:db8::1]:80", Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1), Some(80))]
#[case("[::1]", Ipv6Addr::LOCALHOST, None)]
#[case("[::]:443", Ipv6Addr::UNSPECIFIED, Some(443))]
#[case("[::ffff:192.0.2.1]", Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x201), None)]
fn ipv6_hosts(
    #[case] input: &str,
    #[case] addr: Ipv6Addr,
    #[case] port: Option<u16>,
) {
    let host = HostAuthority::new(input);
    assert!(host.is_valid());
    assert!(host.is_ipv6());
    assert_eq!(host.ipv6(), Some(addr));
    assert_eq!(host.port(), port);
}

#[rstest]
#[case("[::1")]
#[case("[]")]
#[case("[::1::2]:80")]
#[case("[example.com]")]
#[case("[192.0.2.1]")]
fn bad_ipv6_hosts(#[case] input: &str) {
    let host = HostAuthority::new(input);
    assert_eq!(host.status(), HostStatus::InvalidIpv6);
    assert!(host.endpoint().is_empty());
    assert!(!host.is_ip());
}

#[test]
fn domain_scanner_statuses() {
    assert_eq!(
        parse_domain_name(b"-example.com").0,
        DomainNameStatus::BeginWithHyphen
    );
    assert_eq!(
        parse_domain_name(b"example.com.").0,
        DomainNameStatus::DotAtEnd
    );
}

//----------- Properties -----------------------------------------------------

const INPUTS: &[&str] = &[
    "",
    "example.com",
    "example.com:80",
    "Example.COM:8080",
    "192.0.2.1",
    "192.0.2.1:53",
    "192.2.1:8080",
    "[::1]",
    "[2001:db8::]:443",
    "[::1",
    "[::1]x",
    "example.com:x",
    "10.0.0.1:99999",
    "-bad",
    "bad-",
    "bad..name",
    "xn--nxasmq6b.example",
    ":80",
];

#[test]
fn valid_hosts_have_exactly_one_endpoint() {
    for input in INPUTS {
        let host = HostAuthority::new(input);
        let kinds = [host.is_ipv4(), host.is_ipv6(), host.is_domain()];
        let count = kinds.iter().filter(|kind| **kind).count();
        if host.is_valid() {
            assert_eq!(count, 1, "{input}");
        } else {
            assert!(count <= 1, "{input}");
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    for input in INPUTS {
        assert_eq!(HostAuthority::new(input), HostAuthority::new(input));
    }
}

#[test]
fn valid_domains_have_proper_lengths() {
    for input in INPUTS {
        let (status, len) = parse_domain_name(input.as_bytes());
        if status.is_valid() {
            assert_eq!(len, input.len());
            assert!((1..=255).contains(&input.len()), "{input}");
            for label in input.split('.') {
                assert!((1..=63).contains(&label.len()), "{input}");
            }
        }
    }
}

#[rstest]
fn port_suffix_round_trips(
    #[values("example.com", "3com.net", "192.0.2.1", "[2001:db8::1]")]
    host: &str,
    #[values(0, 1, 80, 8080, 65535)] port: u16,
) {
    let input = format!("{host}:{port}");
    let parsed = HostAuthority::new(&input);
    assert!(parsed.has_port(), "{input}");
    assert_eq!(parsed.port(), Some(port));
    assert_eq!(parsed.to_string(), input);

    let padded = format!("{host}:000{port}");
    assert_eq!(HostAuthority::new(&padded).port(), Some(port));
}

#[rstest]
#[case("example.com", "com")]
#[case("www.example.org", "org")]
#[case("localhost", "localhost")]
#[case("192.2.1", "1")]
fn tld_is_last_label(#[case] input: &str, #[case] tld: &str) {
    let host = HostAuthority::new(input);
    assert_eq!(host.domain().unwrap().tld(), tld);
    assert_eq!(
        tld,
        input.rsplit_once('.').map(|(_, tail)| tail).unwrap_or(input)
    );
}

//----------- Conversions ----------------------------------------------------

#[test]
fn domain_outlives_input() {
    use octseq::octets::OctetsInto;

    let name = {
        let input = String::from("www.example.com:80");
        let host = HostAuthority::new(&input);
        let name: hostauth::base::DomainName<Vec<u8>> =
            host.domain().unwrap().octets_into();
        name
    };
    assert_eq!(name.as_str(), "www.example.com");
    assert_eq!(name.label_count(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn serialize_json() {
    use hostauth::base::DomainName;

    assert_eq!(
        serde_json::to_string(&HostAuthority::new("[::1]:80")).unwrap(),
        r#""[::1]:80""#
    );
    assert_eq!(
        serde_json::to_string(&HostStatus::InvalidPortRange).unwrap(),
        r#""invalid_port_range""#
    );
    assert_eq!(
        serde_json::to_string(&DomainNameStatus::DotAtEnd).unwrap(),
        r#""dot_at_end""#
    );

    let name: DomainName<Vec<u8>> =
        serde_json::from_str(r#""example.com""#).unwrap();
    assert_eq!(name.as_str(), "example.com");
    assert_eq!(serde_json::to_string(&name).unwrap(), r#""example.com""#);
    assert!(
        serde_json::from_str::<DomainName<Vec<u8>>>(r#""-bad""#).is_err()
    );
}

#[cfg(feature = "tracing")]
#[test]
fn parse_with_logging() {
    hostauth::logging::init_logging();
    let host = HostAuthority::new("192.2.1:8080");
    assert!(host.is_domain());
}
