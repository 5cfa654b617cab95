// src/specs/mod.rs
//! # Page specs
//!
//! One module per modem page. Each spec encodes *which table holds what* and
//! *how its rows map onto record fields*, nothing else.
//!
//! ## What lives here
//! - **Table layouts** as `TableSpec` constants (index in the page, heading
//!   rows to skip, exact data-row width).
//! - **Column → field mapping** for channel tables (`ChannelRow` impls) and the
//!   label table for the status rows (`labels`).
//! - **Offline entry points** (`parse_doc`) taking raw page HTML, so every page
//!   can be tested against captured fixtures without a modem.
//!
//! ## What does **not** live here
//! - **HTTP** – `core::net`.
//! - **Markup repair** – `core::normalize` (the status spec calls it, but the
//!   rules live there).
//! - **Merging pages into one record** – `scrape`.
//!
//! ## Typical call chain
//! ```text
//! cli::run → scrape::collect → core::net::http_get
//!                           ↘ specs::<page>::parse_doc → record::OutputRecord
//! ```
//!
//! ## Conventions & invariants
//! - Tables are picked by **position only**; the firmware's ids/classes are not
//!   stable. A missing table fails the run.
//! - A row is either taken whole or dropped: no partial channel records.
//! - Values are stored **as displayed** (units and all).
pub mod labels;
pub mod status;
pub mod swinfo;
