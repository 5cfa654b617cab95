// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;
pub mod record;
pub mod scrape;
pub mod specs;

pub use error::{Error, Result};
pub use record::OutputRecord;
