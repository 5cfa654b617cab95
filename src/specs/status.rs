// src/specs/status.rs
use std::time::Instant;

use tracing::debug;

use crate::config::options::PageKind;
use crate::core::html::Document;
use crate::core::normalize::normalize_status_page;
use crate::engine::{self, ChannelRow, Policy, TableSpec};
use crate::error::Result;
use crate::record::{ChannelMap, DownstreamChannel, StatusRecord, UpstreamChannel};

use super::labels;

const PAGE: PageKind = PageKind::ConnectionStatus;

/// Startup procedure: Procedure | Status | Comment.
pub const STARTUP: TableSpec = TableSpec { name: "startup", index: 0, header_rows: 0, cells: 3 };
/// Heading row + caption row, then one row per channel.
pub const DOWNSTREAM: TableSpec = TableSpec { name: "downstream", index: 1, header_rows: 2, cells: 8 };
pub const UPSTREAM: TableSpec = TableSpec { name: "upstream", index: 2, header_rows: 2, cells: 7 };

/// Channel ID | Lock Status | Modulation | Frequency | Power | SNR/MER | Corrected | Uncorrectables
impl ChannelRow for DownstreamChannel {
    const SPEC: TableSpec = DOWNSTREAM;
    const KEY_COLUMN: usize = 0;

    fn from_cells(c: &[&str]) -> Self {
        Self {
            lock_status: s!(c[1]),
            modulation: s!(c[2]),
            frequency: s!(c[3]),
            power: s!(c[4]),
            snr: s!(c[5]),
            corrected: s!(c[6]),
            uncorrectable: s!(c[7]),
        }
    }
}

/// Channel | Channel ID | Lock Status | US Channel Type | Frequency | Width | Power
///
/// Keyed by Channel ID; the leading "Channel" column is a display counter.
impl ChannelRow for UpstreamChannel {
    const SPEC: TableSpec = UPSTREAM;
    const KEY_COLUMN: usize = 1;

    fn from_cells(c: &[&str]) -> Self {
        Self {
            channel: s!(c[0]),
            lock_status: s!(c[2]),
            channel_type: s!(c[3]),
            frequency: s!(c[4]),
            width: s!(c[5]),
            power: s!(c[6]),
        }
    }
}

/// Everything the connection status page contributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusPage {
    pub status: StatusRecord,
    pub downstream: ChannelMap<DownstreamChannel>,
    pub upstream: ChannelMap<UpstreamChannel>,
}

/// Repair the raw page, then parse it.
pub fn document(html: &str) -> Document {
    Document::parse(&normalize_status_page(html))
}

/// Raw page HTML in, repaired and extracted. Split out for offline tests.
pub fn parse_doc(html: &str, policy: &Policy) -> Result<StatusPage> {
    let t = Instant::now();
    let doc = document(html);
    let page = extract(&doc, policy)?;
    debug!(
        "Status: {} tables, {} downstream, {} upstream, parsed in {:?}",
        doc.len(),
        page.downstream.len(),
        page.upstream.len(),
        t.elapsed()
    );
    Ok(page)
}

/// Extract from an already repaired document.
pub fn extract(doc: &Document, policy: &Policy) -> Result<StatusPage> {
    let mut status = StatusRecord::new();
    if let Some(table) = engine::locate(doc, PAGE, &STARTUP, policy)? {
        let rows = engine::data_rows(table, &STARTUP, policy)?;
        labels::apply_rows(STARTUP.name, &rows, &mut status, policy)?;
    }

    Ok(StatusPage {
        status,
        downstream: engine::channels(doc, PAGE, policy)?,
        upstream: engine::channels(doc, PAGE, policy)?,
    })
}
