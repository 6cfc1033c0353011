// src/config/consts.rs

// Profile URL shape
pub const PROFILE_HOST_MARKER: &str = "linkedin.com";
pub const PROFILE_PATH_MARKER: &str = "/in/";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "PROFILE_SCRAPE_LOG";

// Processing
pub const REQUEST_PAUSE_MS: u64 = 1000; // simulated rate limit, per valid URL
pub const MAX_CERTS_PER_PROFILE: usize = 3;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_PREFIX: &str = "linkedin_profiles";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
pub const PROFILES_SHEET: &str = "LinkedIn_Profiles";
pub const SUMMARY_SHEET: &str = "Summary";
