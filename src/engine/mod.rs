// src/engine/mod.rs
pub mod engine;
pub mod types;

pub use self::engine::{channels, data_rows, locate};
pub use types::{ChannelRow, Disposition, Irregularity, Policy, TableSpec};
