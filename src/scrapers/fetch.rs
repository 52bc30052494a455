//! Single-shot HTTP fetcher.
//!
//! One GET per URL with a fixed timeout and user agent. Any transport error or
//! non-2xx status is a [`FetchError`]; nothing is retried.
//!
//! Bodies are decoded with the first charset found in: a byte order mark, the
//! `Content-Type` header, a `<meta>` tag near the top of the page. UTF-8
//! otherwise.

use crate::error::FetchError;
use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Timeout used by the full scrape pass.
pub const SCRAPE_TIMEOUT_SECS: u64 = 60;

/// Timeout used when re-fetching a short list of failed identifiers.
pub const RESCRAPE_TIMEOUT_SECS: u64 = 20;

/// How far into the body a `<meta charset>` declaration is looked for.
const META_SCAN_BYTES: usize = 2048;

static HEADER_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).unwrap());

// Matches both <meta charset="..."> and the http-equiv content="...; charset=..." form.
static META_CHARSET_RE: Lazy<regex::bytes::Regex> = Lazy::new(|| {
    regex::bytes::Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_.:\-]+)"#).unwrap()
});

pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Fetcher { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the decoded body.
    #[instrument(level = "debug", skip_all, fields(%url))]
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let response = self.client.get(parsed).send().await?.error_for_status()?;
        let status = response.status();
        let header_charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_from_content_type)
            .map(str::to_string);
        let bytes = response.bytes().await?;
        debug!(%status, bytes = bytes.len(), charset = ?header_charset, "Fetched page");
        Ok(decode_html(&bytes, header_charset.as_deref()))
    }
}

fn charset_from_content_type(content_type: &str) -> Option<&str> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn charset_from_meta(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(META_SCAN_BYTES)];
    META_CHARSET_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
}

/// Decode a page body to text; undecodable sequences become U+FFFD.
pub fn decode_html(bytes: &[u8], header_charset: Option<&str>) -> String {
    let encoding = header_charset
        .into_iter()
        .chain(charset_from_meta(bytes))
        .find_map(|label| {
            let found = Encoding::for_label(label.trim().as_bytes());
            if found.is_none() {
                warn!(charset = label, "Unknown charset label; ignoring");
            }
            found
        })
        .unwrap_or(UTF_8);

    // A byte order mark overrides the chosen encoding.
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = used.name(), "Page contained malformed sequences");
    }
    text.into_owned()
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Minimal HTTP/1.1 server that answers every request with one canned response.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `status` + `body` as UTF-8 HTML on a random local port; returns the base URL.
    pub async fn serve(status: &'static str, body: &'static str) -> String {
        serve_bytes(status, "text/html; charset=utf-8", body.as_bytes()).await
    }

    /// Like [`serve`], with raw body bytes and an explicit `Content-Type`.
    pub async fn serve_bytes(
        status: &'static str,
        content_type: &'static str,
        body: &'static [u8],
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let head = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(body).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }
}
