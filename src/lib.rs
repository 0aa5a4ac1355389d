//! Quotation System - Premium rater for the Platinum Life product
//!
//! This library provides:
//! - Age-keyed per mille rate table loading and lookup
//! - Premium calculation (base premium, PHCF levy, stamp duty)
//! - One-page PDF quotation rendering with company branding
//! - A two-screen session flow (form, quotation, download)

pub mod config;
pub mod error;
pub mod quote;
pub mod rates;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use error::QuoteError;
pub use quote::{PremiumBreakdown, PresenterInfo, Quotation, QuotationInput};
pub use rates::{load_rate_table, RateKey, RateRow, RateTable};
pub use render::{render_quotation, QUOTATION_FILENAME, QUOTATION_MIME};
pub use session::QuoteSession;
