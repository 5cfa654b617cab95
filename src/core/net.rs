// src/core/net.rs

// One blocking HTTP GET per page. No retries; a fresh client per request so
// nothing is pooled between the two pages.

use std::time::{Duration, Instant};

use reqwest::{StatusCode, blocking::Client};
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};
use crate::record::RequestMeta;

/// Body plus the bits of the exchange that end up under `requests`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResult {
    pub body: String,
    /// Send until response headers arrived.
    pub elapsed_microseconds: u64,
    /// Raw body size, before UTF-8 decoding.
    pub byte_length: usize,
}

impl FetchResult {
    pub fn meta(&self) -> RequestMeta {
        RequestMeta {
            response_microseconds: self.elapsed_microseconds,
            response_length: self.byte_length,
        }
    }
}

pub fn http_get(url: &str) -> Result<FetchResult> {
    let request_err = |source| Error::Request { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(0)
        .build()
        .map_err(request_err)?;

    let t = Instant::now();
    let resp = client.get(url).send().map_err(request_err)?;
    let elapsed = t.elapsed();

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(Error::Status { url: s!(url), status: status.as_u16() });
    }

    let bytes = resp.bytes().map_err(request_err)?;
    debug!("GET {url}: {} bytes, headers in {:?}, total {:?}", bytes.len(), elapsed, t.elapsed());

    Ok(FetchResult {
        body: String::from_utf8_lossy(&bytes).into_owned(),
        elapsed_microseconds: micros(elapsed),
        byte_length: bytes.len(),
    })
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
