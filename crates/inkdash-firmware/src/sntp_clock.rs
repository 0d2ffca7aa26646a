//! Wall-clock time from an SNTP server.

use core::net::Ipv4Addr;

use embassy_net::dns::DnsQueryType;
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{IpAddress, Stack};
use embassy_time::{Duration, Instant, WithTimeout};
use inkdash_core::cycle::Clock;
use inkdash_core::sntp::{self, NTP_PORT, PACKET_LEN};
use log::{info, warn};

use crate::app_state::{AppError, message};

const LOCAL_PORT: u16 = 50_123;
const REPLY_TIMEOUT_SECS: u64 = 5;
const ATTEMPTS: u32 = 3;

/// Synchronises once per wake, then counts forward on the embassy timer.
pub struct SntpClock {
    stack: Stack<'static>,
    server: &'static str,
    synced: Option<(u64, Instant)>,
}

impl SntpClock {
    pub fn new(stack: Stack<'static>, server: &'static str) -> Self {
        Self {
            stack,
            server,
            synced: None,
        }
    }

    pub async fn sync(&mut self) -> Result<u64, AppError> {
        let mut last_error = AppError::TimeSync(message("no attempt made"));
        for attempt in 1..=ATTEMPTS {
            match self.query().await {
                Ok(secs) => {
                    info!("Time synced from {}: {}", self.server, secs);
                    self.synced = Some((secs, Instant::now()));
                    return Ok(secs);
                }
                Err(err) => {
                    warn!("SNTP attempt {} failed: {}", attempt, err);
                    last_error = err;
                }
            }
        }
        Err(last_error)
    }

    async fn server_address(&self) -> Result<IpAddress, AppError> {
        if let Ok(ip) = self.server.parse::<Ipv4Addr>() {
            return Ok(IpAddress::Ipv4(ip));
        }
        let addresses = self
            .stack
            .dns_query(self.server, DnsQueryType::A)
            .await
            .map_err(|err| AppError::TimeSync(message(format_args!("DNS: {:?}", err))))?;
        addresses
            .first()
            .copied()
            .ok_or_else(|| AppError::TimeSync(message("DNS returned no address")))
    }

    async fn query(&self) -> Result<u64, AppError> {
        let address = self.server_address().await?;

        let mut rx_meta = [PacketMetadata::EMPTY; 1];
        let mut tx_meta = [PacketMetadata::EMPTY; 1];
        let mut rx_buffer = [0u8; 2 * PACKET_LEN];
        let mut tx_buffer = [0u8; 2 * PACKET_LEN];
        let mut socket = UdpSocket::new(
            self.stack,
            &mut rx_meta,
            &mut rx_buffer,
            &mut tx_meta,
            &mut tx_buffer,
        );
        socket
            .bind(LOCAL_PORT)
            .map_err(|err| AppError::TimeSync(message(format_args!("bind: {:?}", err))))?;

        socket
            .send_to(&sntp::request_packet(), (address, NTP_PORT))
            .await
            .map_err(|err| AppError::TimeSync(message(format_args!("send: {:?}", err))))?;

        let mut reply = [0u8; PACKET_LEN];
        let (len, _) = socket
            .recv_from(&mut reply)
            .with_timeout(Duration::from_secs(REPLY_TIMEOUT_SECS))
            .await
            .map_err(|_| AppError::TimeSync(message("no reply")))?
            .map_err(|err| AppError::TimeSync(message(format_args!("recv: {:?}", err))))?;

        sntp::parse_unix_seconds(&reply[..len]).map_err(|err| AppError::TimeSync(message(err)))
    }
}

impl Clock for SntpClock {
    async fn unix_seconds(&mut self) -> Option<u64> {
        if self.synced.is_none()
            && let Err(err) = self.sync().await
        {
            warn!("{}", err);
        }
        let (secs, at) = self.synced?;
        Some(secs + at.elapsed().as_secs())
    }
}
