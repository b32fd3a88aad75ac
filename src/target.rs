//! Resolves the computer to wake, given either an IPv4 address or a
//! hostname on the command line.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

use crate::error::WakeError;

/// Where the wake-up packet goes. `addr` is filled in by exactly one of the
/// two input paths; `name` keeps what the user typed for the final message.
#[derive(Debug)]
pub struct Target {
    name: String,
    addr: SocketAddr,
}

impl Target {
    /// Validates the mutually exclusive `--ip`/`--hostname` pair and
    /// resolves it to a socket address on the given port.
    pub fn resolve(ip: Option<&str>, hostname: Option<&str>, port: u16) -> Result<Self, WakeError> {
        match (ip, hostname) {
            (Some(ip), None) => {
                let parsed: Ipv4Addr = ip
                    .parse()
                    .map_err(|_| WakeError::InvalidIpAddress(ip.to_string()))?;
                Ok(Target {
                    name: ip.to_string(),
                    addr: SocketAddr::from((parsed, port)),
                })
            }
            (None, Some(hostname)) => {
                let unresolvable = || WakeError::UnresolvableHostname(hostname.to_string());
                let addrs: Vec<SocketAddr> = (hostname, port)
                    .to_socket_addrs()
                    .map_err(|_| unresolvable())?
                    .collect();
                // prefer an IPv4 address when the resolver offers both families
                let addr = addrs
                    .iter()
                    .find(|addr| addr.is_ipv4())
                    .or_else(|| addrs.first())
                    .copied()
                    .ok_or_else(unresolvable)?;
                Ok(Target {
                    name: hostname.to_string(),
                    addr,
                })
            }
            _ => Err(WakeError::InvalidArguments(
                "exactly one of --ip or --hostname must be given",
            )),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[test]
fn test_target_requires_exactly_one() {
    assert!(matches!(
        Target::resolve(None, None, 80),
        Err(WakeError::InvalidArguments(_))
    ));
    assert!(matches!(
        Target::resolve(Some("192.168.1.255"), Some("somehost"), 80),
        Err(WakeError::InvalidArguments(_))
    ));
}

#[test]
fn test_target_valid_ip() {
    let target = Target::resolve(Some("192.168.1.255"), None, 80).unwrap();
    assert_eq!(target.addr().to_string(), "192.168.1.255:80");
    assert_eq!(target.to_string(), "192.168.1.255");
}

#[test]
fn test_target_invalid_ip() {
    assert!(matches!(
        Target::resolve(Some("192.168.1"), None, 80),
        Err(WakeError::InvalidIpAddress(_))
    ));
    assert!(matches!(
        Target::resolve(Some("not an ip"), None, 80),
        Err(WakeError::InvalidIpAddress(_))
    ));
}

#[test]
fn test_target_ipv6_literal_rejected() {
    assert!(matches!(
        Target::resolve(Some("::1"), None, 80),
        Err(WakeError::InvalidIpAddress(_))
    ));
}

#[test]
fn test_target_resolvable_hostname() {
    let target = Target::resolve(None, Some("localhost"), 9).unwrap();
    assert_eq!(target.addr().port(), 9);
    assert_eq!(target.to_string(), "localhost");
}

#[test]
fn test_target_unresolvable_hostname() {
    assert!(matches!(
        Target::resolve(None, Some("no-such-host.invalid"), 80),
        Err(WakeError::UnresolvableHostname(_))
    ));
}
