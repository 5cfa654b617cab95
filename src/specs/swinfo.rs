// src/specs/swinfo.rs
// Software info page. Served well-formed, so no repairs before parsing.
use std::time::Instant;

use tracing::debug;

use crate::config::options::PageKind;
use crate::core::html::Document;
use crate::engine::{self, Policy, TableSpec};
use crate::error::Result;
use crate::record::StatusRecord;

use super::labels;

const PAGE: PageKind = PageKind::SoftwareInfo;

/// Information: label | value (hardware/software versions, MAC, serial…).
pub const INFO: TableSpec = TableSpec { name: "info", index: 0, header_rows: 0, cells: 2 };
/// Status: up time etc. Must be present; nothing in it is recorded.
pub const SECONDARY: TableSpec = TableSpec { name: "info_status", index: 1, header_rows: 0, cells: 2 };

/// The page as served; none of the status page's repairs apply here.
pub fn document(html: &str) -> Document {
    Document::parse(html)
}

/// Status fields found on the page, to be laid over the status page's.
pub fn parse_doc(html: &str, policy: &Policy) -> Result<StatusRecord> {
    let t = Instant::now();
    let doc = document(html);
    let fields = extract(&doc, policy)?;
    debug!("Info: {} tables, {} fields, parsed in {:?}", doc.len(), fields.len(), t.elapsed());
    Ok(fields)
}

pub fn extract(doc: &Document, policy: &Policy) -> Result<StatusRecord> {
    let mut fields = StatusRecord::new();
    let info = engine::locate(doc, PAGE, &INFO, policy)?;
    engine::locate(doc, PAGE, &SECONDARY, policy)?;

    if let Some(table) = info {
        let rows = engine::data_rows(table, &INFO, policy)?;
        labels::apply_rows(INFO.name, &rows, &mut fields, policy)?;
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const PAGE_HTML: &str = "\
        <table><tr><th colspan=2>Information</th></tr>\
        <tr><td>Hardware Version</td><td>6</td></tr>\
        <tr><td>Software Version</td><td>AB01.01.009.32.01_122319_183.0A.NSH</td></tr>\
        <tr><td>Boot State</td><td>OK</td><td>ignored: three cells</td></tr>\
        </table>\
        <table><tr><td>Up Time</td><td>5 days 03h:12m:08s.00</td></tr></table>";

    #[test]
    fn software_version_becomes_firmware_version() {
        let f = parse_doc(PAGE_HTML, &Policy::default()).unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f["firmware_version"], "AB01.01.009.32.01_122319_183.0A.NSH");
    }

    #[test]
    fn secondary_table_is_required() {
        let html = "<table><tr><td>Software Version</td><td>x</td></tr></table>";
        let err = parse_doc(html, &Policy::default()).unwrap_err();
        assert!(matches!(err, Error::MissingTable { page: "swinfo", index: 1, found: 1 }));
    }
}
