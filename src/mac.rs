//! Parses an IEEE EUI-48 hardware address (commonly called a MAC address)
//! from its colon- or hyphen-delimited hex notation.

use std::fmt;
use std::str::FromStr;

use crate::error::WakeError;

/// A six-octet link-layer address, normalized to raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddr {
    /// Prints the normalized form: lowercase hex, colon separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for MacAddr {
    type Err = WakeError;

    /// Accepts six 2-digit hex groups separated uniformly by `:` or `-`,
    /// case-insensitive.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || WakeError::InvalidHardwareAddress(input.to_string());

        // the delimiter must be used consistently, mixing is rejected
        let delimiter = match (input.contains(':'), input.contains('-')) {
            (true, false) => ':',
            (false, true) => '-',
            _ => return Err(invalid()),
        };

        let mut octets = [0u8; 6];
        let mut count = 0;
        for (index, group) in input.split(delimiter).enumerate() {
            if index >= octets.len() {
                return Err(invalid());
            }
            // from_str_radix tolerates a sign prefix, so check the digits first
            if group.len() != 2 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            octets[index] = u8::from_str_radix(group, 16).map_err(|_| invalid())?;
            count = index + 1;
        }
        if count != octets.len() {
            return Err(invalid());
        }

        Ok(MacAddr(octets))
    }
}

#[test]
fn test_mac_gibberish() {
    assert!("hello".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_invalid_alphabet() {
    assert!("zz:bb:cc:dd:ee:ff".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_too_short() {
    assert!("ab-cd".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_too_long() {
    assert!("ab-cd-ab-cd-ab-cd-ab-cd-ab".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_mixed_separators() {
    assert!("aa-bb:cc-dd-ee-ff".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_no_separators() {
    assert!("aabbccddeeff".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_sign_prefix() {
    assert!("aa:bb:cc:dd:ee:+f".parse::<MacAddr>().is_err());
}

#[test]
fn test_mac_delimiters_equivalent() {
    let colon = "aa:bb:cc:dd:ee:ff".parse::<MacAddr>().unwrap();
    let hyphen = "aa-bb-cc-dd-ee-ff".parse::<MacAddr>().unwrap();
    assert_eq!(colon, hyphen);
}

#[test]
fn test_mac_case_insensitive() {
    let upper = "AA:BB:CC:DD:EE:FF".parse::<MacAddr>().unwrap();
    let lower = "aa:bb:cc:dd:ee:ff".parse::<MacAddr>().unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.octets(), [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
}

#[test]
fn test_mac_display_normalizes() {
    let mac = "AA-0B-cC-dD-Ee-F0".parse::<MacAddr>().unwrap();
    assert_eq!(mac.to_string(), "aa:0b:cc:dd:ee:f0");
}
