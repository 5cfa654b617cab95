// src/config/options.rs
use super::consts::*;
use crate::engine::types::Policy;

/// Which of the two modem pages a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    ConnectionStatus,
    SoftwareInfo,
}

impl PageKind {
    pub fn path(&self) -> &'static str {
        match self {
            PageKind::ConnectionStatus => STATUS_PATH,
            PageKind::SoftwareInfo => INFO_PATH,
        }
    }

    /// Key used in the `requests` section and in error messages.
    pub fn key(&self) -> &'static str {
        match self {
            PageKind::ConnectionStatus => STATUS_REQUEST_KEY,
            PageKind::SoftwareInfo => INFO_REQUEST_KEY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Scheme + host of the modem, no trailing slash.
    pub base_url: String,
    pub policy: Policy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            policy: Policy::default(),
        }
    }
}

impl ScrapeOptions {
    pub fn url(&self, page: PageKind) -> String {
        join!(self.base_url.trim_end_matches('/'), page.path())
    }
}
