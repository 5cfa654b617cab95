// src/specs/labels.rs
// Row labels the status tables use, and where each one lands in the record.
//
// The same table serves the 3-cell startup rows and the 2-cell software info
// rows; only the startup rows carry a remark column. Which labels show up in
// which table depends on firmware, so both tables are checked against the
// full list.

use crate::engine::types::{Irregularity, Policy};
use crate::error::{Error, Result};
use crate::record::StatusRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusLabel {
    /// Exact first-cell text.
    pub label: &'static str,
    pub field: &'static str,
    /// Field fed from the third cell, when the row has one.
    pub remark: Option<&'static str>,
}

const fn label(label: &'static str, field: &'static str, remark: Option<&'static str>) -> StatusLabel {
    StatusLabel { label, field, remark }
}

pub static STATUS_LABELS: [StatusLabel; 7] = [
    label("Acquire Downstream Channel", "acquire_downstream_channel", Some("acquire_downstream_channel_state")),
    label("Connectivity State", "connectivity_state", Some("connectivity_state_comment")),
    label("Boot State", "boot_state", Some("boot_state_comment")),
    label("Configuration File", "config_file_state", None),
    label("Security", "security_state", Some("security_specification")),
    label("DOCSIS Network Access Enabled", "docsis_state", None),
    label("Software Version", "firmware_version", None),
];

pub fn lookup(text: &str) -> Option<&'static StatusLabel> {
    STATUS_LABELS.iter().find(|l| l.label == text)
}

/// Write label/value(/remark) rows into `out`. Rows must already have the
/// table's exact width; a third cell, if present, is the remark.
pub fn apply_rows(
    table: &'static str,
    rows: &[Vec<&str>],
    out: &mut StatusRecord,
    policy: &Policy,
) -> Result<()> {
    for cells in rows {
        let (Some(&text), Some(&value)) = (cells.first(), cells.get(1)) else {
            continue;
        };
        let Some(l) = lookup(text) else {
            if policy.aborts(Irregularity::UnknownLabel) {
                return Err(Error::UnknownLabel { table, label: s!(text) });
            }
            continue;
        };
        out.insert(l.field, s!(value));
        if let (Some(field), Some(&remark)) = (l.remark, cells.get(2)) {
            out.insert(field, s!(remark));
        }
    }
    Ok(())
}
