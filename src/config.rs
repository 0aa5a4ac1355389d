//! Resource locations for the rate table and branding image
//!
//! Paths resolve from environment variables with shipped defaults, so
//! deployments can relocate resources without a rebuild.

use std::env;
use std::path::PathBuf;

/// Default location of the per-mille rate table
pub const DEFAULT_RATE_TABLE_PATH: &str = "data/per_mille_rates.csv";

/// Default location of the letterhead logo
pub const DEFAULT_BRANDING_PATH: &str = "data/company_logo.png";

/// Rate table location: `RATE_TABLE_PATH` if set, else the shipped default
pub fn rate_table_path() -> PathBuf {
    env::var("RATE_TABLE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_RATE_TABLE_PATH))
}

/// Branding image location: `BRANDING_PATH` if set, else the shipped default
pub fn branding_path() -> PathBuf {
    env::var("BRANDING_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BRANDING_PATH))
}
