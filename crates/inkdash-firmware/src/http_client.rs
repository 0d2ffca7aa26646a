//! Feed fetching over embassy-net TCP.

use alloc::vec;
use alloc::vec::Vec;
use core::net::Ipv4Addr;

use embassy_net::dns::DnsQueryType;
use embassy_net::tcp::TcpSocket;
use embassy_net::{IpAddress, Stack};
use embassy_time::{Duration, WithTimeout};
use inkdash_core::cycle::FeedSource;
use inkdash_core::error::FetchError;
use inkdash_core::feeds::FeedKind;
use inkdash_core::http::{self, HttpUrl, MAX_FEED_BYTES, MAX_RESPONSE_BYTES};
use log::{debug, warn};

const SOCKET_RX_BYTES: usize = 4096;
const SOCKET_TX_BYTES: usize = 1024;
const READ_CHUNK_BYTES: usize = 512;

/// One request per feed, each on a fresh socket.
pub struct HttpFeedSource {
    stack: Stack<'static>,
    rx_buffer: Vec<u8>,
    tx_buffer: Vec<u8>,
}

impl HttpFeedSource {
    pub fn new(stack: Stack<'static>) -> Self {
        Self {
            stack,
            rx_buffer: vec![0; SOCKET_RX_BYTES],
            tx_buffer: vec![0; SOCKET_TX_BYTES],
        }
    }

    async fn resolve(&self, host: &str) -> Result<IpAddress, FetchError> {
        if let Ok(ip) = host.parse::<Ipv4Addr>() {
            return Ok(IpAddress::Ipv4(ip));
        }
        let addresses = self
            .stack
            .dns_query(host, DnsQueryType::A)
            .await
            .map_err(|_| FetchError::Dns)?;
        addresses.first().copied().ok_or(FetchError::Dns)
    }

    async fn exchange(&mut self, url: &HttpUrl<'_>) -> Result<Vec<u8>, FetchError> {
        let address = self.resolve(url.host).await?;

        let mut socket = TcpSocket::new(self.stack, &mut self.rx_buffer, &mut self.tx_buffer);
        socket
            .connect((address, url.port))
            .await
            .map_err(|_| FetchError::Connect)?;

        let request = http::get_request(url);
        let mut sent = 0;
        while sent < request.len() {
            sent += socket
                .write(&request.as_bytes()[sent..])
                .await
                .map_err(|_| FetchError::Connect)?;
        }

        let mut raw = Vec::with_capacity(2048);
        let mut chunk = [0u8; READ_CHUNK_BYTES];
        loop {
            let read = socket
                .read(&mut chunk)
                .await
                .map_err(|_| FetchError::MalformedResponse)?;
            if read == 0 {
                break;
            }
            if raw.len() + read > MAX_RESPONSE_BYTES {
                socket.abort();
                return Err(FetchError::BodyTooLarge {
                    limit: MAX_FEED_BYTES,
                });
            }
            raw.extend_from_slice(&chunk[..read]);
        }
        socket.close();
        debug!("{}:{} answered {} bytes", url.host, url.port, raw.len());

        Ok(http::parse_response(&raw)?.into_owned())
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch(
        &mut self,
        kind: FeedKind,
        url: &HttpUrl<'_>,
        timeout_secs: u32,
    ) -> Result<Vec<u8>, FetchError> {
        if !self.stack.is_config_up() {
            return Err(FetchError::NotConnected);
        }

        let result = match self
            .exchange(url)
            .with_timeout(Duration::from_secs(timeout_secs.into()))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        };
        if let Err(err) = &result {
            warn!("{} feed failed: {}", kind.tag(), err);
        }
        result
    }
}
