//! Minimal HTTP/1.1 client pieces for the feed endpoints.
//!
//! The feeds are served by a proxy on the local network, so only plain
//! `http://` GET requests with `Connection: close` are needed. The firmware
//! owns the socket; this module builds the request and splits the response.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::{FetchError, UrlError};

/// Largest accepted response body.
pub const MAX_FEED_BYTES: usize = 16 * 1024;

/// Receive buffer size: body limit plus room for the status line and headers.
pub const MAX_RESPONSE_BYTES: usize = MAX_FEED_BYTES + 2048;

pub const DEFAULT_HTTP_PORT: u16 = 80;

/// A parsed `http://host[:port]/path` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpUrl<'a> {
    pub host: &'a str,
    pub port: u16,
    /// Path and query, always starting with `/`.
    pub path: &'a str,
}

impl<'a> HttpUrl<'a> {
    pub fn parse(url: &'a str) -> Result<Self, UrlError> {
        let rest = url
            .trim()
            .strip_prefix("http://")
            .ok_or(UrlError::UnsupportedScheme)?;

        let (authority, path) = match rest.find('/') {
            Some(i) => rest.split_at(i),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, port.parse().map_err(|_| UrlError::InvalidPort)?),
            None => (authority, DEFAULT_HTTP_PORT),
        };
        if host.is_empty() {
            return Err(UrlError::MissingHost);
        }

        Ok(Self { host, port, path })
    }
}

/// Build the GET request for `url`.
pub fn get_request(url: &HttpUrl<'_>) -> String {
    let mut request = String::with_capacity(96 + url.host.len() + url.path.len());
    // Writing to a String cannot fail.
    let _ = write!(
        request,
        "GET {} HTTP/1.1\r\nHost: {}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
        url.path, url.host
    );
    request
}

/// Split a complete response into its body.
///
/// Non-200 statuses become [`FetchError::Http`]. Chunked bodies are decoded
/// (hence the `Cow`), and `Content-Length` trims trailing bytes.
pub fn parse_response(raw: &[u8]) -> Result<Cow<'_, [u8]>, FetchError> {
    let header_end = find(raw, b"\r\n\r\n").ok_or(FetchError::MalformedResponse)?;
    let head = core::str::from_utf8(&raw[..header_end]).map_err(|_| FetchError::MalformedResponse)?;
    let body = &raw[header_end + 4..];

    let mut lines = head.split("\r\n");
    let status = lines
        .next()
        .and_then(parse_status)
        .ok_or(FetchError::MalformedResponse)?;
    if status != 200 {
        return Err(FetchError::Http { status });
    }

    let mut chunked = false;
    let mut content_length = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if name.eq_ignore_ascii_case("transfer-encoding") {
            chunked = value.eq_ignore_ascii_case("chunked");
        } else if name.eq_ignore_ascii_case("content-length") {
            content_length = Some(
                value
                    .parse::<usize>()
                    .map_err(|_| FetchError::MalformedResponse)?,
            );
        }
    }

    if chunked {
        return decode_chunked(body).map(Cow::Owned);
    }

    let body = match content_length {
        Some(len) if len > MAX_FEED_BYTES => {
            return Err(FetchError::BodyTooLarge {
                limit: MAX_FEED_BYTES,
            });
        }
        Some(len) => body.get(..len).ok_or(FetchError::MalformedResponse)?,
        None => body,
    };
    if body.len() > MAX_FEED_BYTES {
        return Err(FetchError::BodyTooLarge {
            limit: MAX_FEED_BYTES,
        });
    }
    Ok(Cow::Borrowed(body))
}

/// `HTTP/1.x 200 OK` to `200`.
fn parse_status(line: &str) -> Option<u16> {
    let mut parts = line.split_ascii_whitespace();
    if !parts.next()?.starts_with("HTTP/1.") {
        return None;
    }
    parts.next()?.parse().ok()
}

fn decode_chunked(mut data: &[u8]) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    loop {
        let line_end = find(data, b"\r\n").ok_or(FetchError::MalformedResponse)?;
        let size_line =
            core::str::from_utf8(&data[..line_end]).map_err(|_| FetchError::MalformedResponse)?;
        // Chunk extensions after ';' are ignored.
        let size_hex = size_line.split(';').next().unwrap_or("").trim();
        let size =
            usize::from_str_radix(size_hex, 16).map_err(|_| FetchError::MalformedResponse)?;
        data = &data[line_end + 2..];

        if size == 0 {
            return Ok(body);
        }
        if body.len() + size > MAX_FEED_BYTES {
            return Err(FetchError::BodyTooLarge {
                limit: MAX_FEED_BYTES,
            });
        }
        let chunk = data.get(..size).ok_or(FetchError::MalformedResponse)?;
        body.extend_from_slice(chunk);
        data = data
            .get(size..)
            .and_then(|rest| rest.strip_prefix(b"\r\n"))
            .ok_or(FetchError::MalformedResponse)?;
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let url = HttpUrl::parse("http://192.168.1.20:5000/bigcalendar?days=4").unwrap();
        assert_eq!(url.host, "192.168.1.20");
        assert_eq!(url.port, 5000);
        assert_eq!(url.path, "/bigcalendar?days=4");

        let bare = HttpUrl::parse("http://dash.local").unwrap();
        assert_eq!((bare.port, bare.path), (80, "/"));
    }

    #[test]
    fn test_parse_url_errors() {
        assert_eq!(
            HttpUrl::parse("https://dash.local/weather"),
            Err(UrlError::UnsupportedScheme)
        );
        assert_eq!(HttpUrl::parse("http:///weather"), Err(UrlError::MissingHost));
        assert_eq!(
            HttpUrl::parse("http://dash.local:http/"),
            Err(UrlError::InvalidPort)
        );
    }

    #[test]
    fn test_request_line() {
        let url = HttpUrl::parse("http://dash.local:5000/weather").unwrap();
        let request = get_request(&url);
        assert!(request.starts_with("GET /weather HTTP/1.1\r\nHost: dash.local\r\n"));
        assert!(request.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_plain_body_with_content_length() {
        let raw = b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\n\r\n{}trailing";
        assert_eq!(&*parse_response(raw).unwrap(), b"{}");
    }

    #[test]
    fn test_chunked_body() {
        let raw = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n4\r\n{\"a\"\r\n3;x=y\r\n:1}\r\n0\r\n\r\n";
        let body = parse_response(raw).unwrap();
        assert!(matches!(body, Cow::Owned(_)));
        assert_eq!(&*body, b"{\"a\":1}");
    }

    #[test]
    fn test_status_and_framing_errors() {
        assert_eq!(
            parse_response(b"HTTP/1.1 404 Not Found\r\n\r\n"),
            Err(FetchError::Http { status: 404 })
        );
        assert_eq!(
            parse_response(b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\n{}"),
            Err(FetchError::MalformedResponse)
        );
        assert_eq!(
            parse_response(b"garbage"),
            Err(FetchError::MalformedResponse)
        );
        assert_eq!(
            parse_response(b"HTTP/1.1 200 OK\r\nContent-Length: 99999\r\n\r\n"),
            Err(FetchError::BodyTooLarge {
                limit: MAX_FEED_BYTES
            })
        );
    }
}
