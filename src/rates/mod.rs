//! Per-mille rate table and its CSV loading

mod table;
pub mod loader;

pub use loader::{load_rate_table, load_rate_table_from_reader};
pub use table::{RateKey, RateRow, RateTable};
