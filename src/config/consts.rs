// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://192.168.100.1";
pub const STATUS_PATH: &str = "/cmconnectionstatus.html";
pub const INFO_PATH: &str = "/cmswinfo.html";
pub const USER_AGENT: &str = concat!("cm_scrape/", env!("CARGO_PKG_VERSION"));

// Keys under "requests" in the output record
pub const STATUS_REQUEST_KEY: &str = "connectionstatus";
pub const INFO_REQUEST_KEY: &str = "swinfo";

// Markup repair
pub const BONDED_PATCH_MAX: usize = 2; // downstream + upstream tables
pub const EMPHASIS_TAG: &str = "strong";
