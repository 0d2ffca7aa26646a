//! SNTP (RFC 4330) client packet helpers.
//!
//! The firmware sends [`request_packet`] over UDP port 123 and hands the
//! reply to [`parse_unix_seconds`]; everything else about time sync lives
//! here so it can be tested on the host.

use thiserror_no_std::Error;

pub const NTP_PORT: u16 = 123;
pub const PACKET_LEN: usize = 48;

/// Seconds between the NTP era start (1900) and the Unix epoch (1970).
const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// LI = 0, VN = 3, Mode = 3 (client).
const CLIENT_HEADER: u8 = 0x1B;
const MODE_SERVER: u8 = 4;
const TRANSMIT_SECS: core::ops::Range<usize> = 40..44;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SntpError {
    #[error("reply shorter than 48 bytes")]
    Truncated,
    #[error("reply is not in server mode")]
    NotServer,
    #[error("server is unsynchronised (kiss-o'-death)")]
    KissOfDeath,
    #[error("transmit timestamp predates the Unix epoch")]
    BeforeEpoch,
}

/// A client request with every field but the header left zero.
pub const fn request_packet() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0] = CLIENT_HEADER;
    packet
}

/// Unix seconds from the transmit timestamp of a server reply.
pub fn parse_unix_seconds(reply: &[u8]) -> Result<u64, SntpError> {
    if reply.len() < PACKET_LEN {
        return Err(SntpError::Truncated);
    }
    if reply[0] & 0x07 != MODE_SERVER {
        return Err(SntpError::NotServer);
    }
    // Stratum 0 marks a kiss-o'-death reply.
    if reply[1] == 0 {
        return Err(SntpError::KissOfDeath);
    }

    let mut secs = [0u8; 4];
    secs.copy_from_slice(&reply[TRANSMIT_SECS]);
    u64::from(u32::from_be_bytes(secs))
        .checked_sub(NTP_UNIX_OFFSET)
        .ok_or(SntpError::BeforeEpoch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(unix: u64) -> [u8; PACKET_LEN] {
        let mut packet = [0u8; PACKET_LEN];
        packet[0] = 0x24; // LI 0, VN 4, mode 4
        packet[1] = 2;
        let ntp = (unix + NTP_UNIX_OFFSET) as u32;
        packet[TRANSMIT_SECS].copy_from_slice(&ntp.to_be_bytes());
        packet
    }

    #[test]
    fn test_request_header() {
        let packet = request_packet();
        assert_eq!(packet[0], 0x1B);
        assert!(packet[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_parse_transmit_time() {
        assert_eq!(parse_unix_seconds(&reply(1_704_133_800)), Ok(1_704_133_800));
    }

    #[test]
    fn test_rejects_bad_replies() {
        assert_eq!(parse_unix_seconds(&[0x24; 12]), Err(SntpError::Truncated));

        let mut client = reply(0);
        client[0] = 0x1B;
        assert_eq!(parse_unix_seconds(&client), Err(SntpError::NotServer));

        let mut kod = reply(0);
        kod[1] = 0;
        assert_eq!(parse_unix_seconds(&kod), Err(SntpError::KissOfDeath));

        let mut early = reply(0);
        early[TRANSMIT_SECS].copy_from_slice(&[0, 0, 0, 1]);
        assert_eq!(parse_unix_seconds(&early), Err(SntpError::BeforeEpoch));
    }
}
