//! Constructs a WakeOnLAN packet (so called "Magic Packet Technology")
//! and broadcasts it to the target over UDP.

use std::io;
use std::net::UdpSocket;

use crate::mac::MacAddr;
use crate::target::Target;

/// Default UDP port the wake-up packet is sent to.
pub const WAKE_PORT: u16 = 80;

const MAGIC_PACKET_LEN: usize = 102;

/// The 102-byte wake-up payload: six bytes of 0xFF followed by the hardware
/// address repeated sixteen times. Immutable once built.
pub struct MagicPacket([u8; MAGIC_PACKET_LEN]);

impl MagicPacket {
    pub fn new(mac: &MacAddr) -> Self {
        let mut packet = [0xFFu8; MAGIC_PACKET_LEN];
        let octets = mac.octets();

        // fill the packet with 16 occurrences of the MAC
        // starting at the 7th byte so that the first 6
        // bytes stay as 0xFF
        for chunk in packet[6..].chunks_exact_mut(octets.len()) {
            chunk.copy_from_slice(&octets);
        }

        MagicPacket(packet)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Sends the packet once to the target with the broadcast flag set on
    /// the socket. Returns the number of bytes written. The socket is
    /// released as soon as this returns.
    pub fn send(&self, target: &Target) -> io::Result<usize> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_broadcast(true)?;
        socket.send_to(&self.0, target.addr())
    }
}

#[test]
fn test_magic_layout() {
    let mac = "aa:bb:cc:dd:ee:ff".parse::<MacAddr>().unwrap();
    let pkt = MagicPacket::new(&mac);

    assert_eq!(pkt.as_bytes().len(), MAGIC_PACKET_LEN);

    // starts with padding
    let cmp = [255, 255, 255, 255, 255, 255];
    assert_eq!(&pkt.as_bytes()[..6], &cmp);

    // follows with mac
    let cmp = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
    assert_eq!(&pkt.as_bytes()[6..12], &cmp);

    // ends with mac
    assert_eq!(&pkt.as_bytes()[MAGIC_PACKET_LEN - 6..], &cmp);
}

#[test]
fn test_magic_repeats_mac_sixteen_times() {
    let mac = "01:02:03:04:05:06".parse::<MacAddr>().unwrap();
    let pkt = MagicPacket::new(&mac);

    let repeats: Vec<_> = pkt.as_bytes()[6..].chunks_exact(6).collect();
    assert_eq!(repeats.len(), 16);
    for chunk in repeats {
        assert_eq!(chunk, [1, 2, 3, 4, 5, 6]);
    }
}

#[test]
fn test_magic_deterministic() {
    let mac = "aa-bb-cc-dd-ee-ff".parse::<MacAddr>().unwrap();
    let first = MagicPacket::new(&mac);
    let second = MagicPacket::new(&mac);
    assert_eq!(first.as_bytes(), second.as_bytes());
}
