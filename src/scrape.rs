// src/scrape.rs
// Fetch both pages, then parse them and fold them into one record.
use tracing::info;

use crate::{
    config::{ScrapeOptions, options::PageKind},
    core::net,
    error::Result,
    record::{OutputRecord, RequestMeta, StatusRecord},
    specs::{
        status::{self, StatusPage},
        swinfo,
    },
};

/// One full poll: connection status page, then software info page.
/// Both are fetched before either is parsed, so a transport failure on the
/// second page is reported ahead of a layout error on the first.
pub fn collect(opts: &ScrapeOptions) -> Result<OutputRecord> {
    let status_res = net::http_get(&opts.url(PageKind::ConnectionStatus))?;
    let info_res = net::http_get(&opts.url(PageKind::SoftwareInfo))?;

    let status_page = status::parse_doc(&status_res.body, &opts.policy)?;
    let info_fields = swinfo::parse_doc(&info_res.body, &opts.policy)?;

    let record = assemble(
        &[
            (PageKind::ConnectionStatus, status_res.meta()),
            (PageKind::SoftwareInfo, info_res.meta()),
        ],
        status_page,
        info_fields,
    );
    info!(
        "Collected {} status fields, {} downstream, {} upstream",
        record.status.len(),
        record.downstream.len(),
        record.upstream.len()
    );
    Ok(record)
}

/// Merge per-page results. Info fields overwrite status fields of the same
/// name; the pages are not cross-checked against each other.
pub fn assemble(
    requests: &[(PageKind, RequestMeta)],
    status_page: StatusPage,
    info_fields: StatusRecord,
) -> OutputRecord {
    let StatusPage { mut status, downstream, upstream } = status_page;
    status.extend(info_fields);

    OutputRecord {
        requests: requests.iter().map(|(page, meta)| (page.key(), *meta)).collect(),
        status,
        downstream,
        upstream,
    }
}
