// src/record.rs
//! Output shapes. Everything the modem reports is kept as the raw cell text
//! (units included, e.g. `"603000000 Hz"`, `"0.6 dBmV"`), with entities
//! decoded and leading/trailing ASCII whitespace trimmed. `&nbsp;` comes
//! through as U+00A0, so a cell holding only `&nbsp;` reads `"\u{a0}"`.
//!
//! Maps are insertion-ordered: channels appear in page order, status fields
//! in first-seen order. A repeated key keeps its slot and takes the new value.

use indexmap::IndexMap;
use serde::Serialize;

/// Field name → value. Names are the fixed ones from the label table.
pub type StatusRecord = IndexMap<&'static str, String>;

/// Channel id → channel record.
pub type ChannelMap<T> = IndexMap<String, T>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RequestMeta {
    pub response_microseconds: u64,
    pub response_length: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DownstreamChannel {
    pub lock_status: String,
    pub modulation: String,
    pub frequency: String,
    pub power: String,
    pub snr: String,
    pub corrected: String,
    pub uncorrectable: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpstreamChannel {
    pub channel: String,
    pub lock_status: String,
    pub channel_type: String,
    pub frequency: String,
    pub width: String,
    pub power: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub requests: IndexMap<&'static str, RequestMeta>,
    pub status: StatusRecord,
    pub downstream: ChannelMap<DownstreamChannel>,
    pub upstream: ChannelMap<UpstreamChannel>,
}

impl OutputRecord {
    /// Single-line JSON, as the metrics agent expects one document per run.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
