//! Quotation document rendering
//!
//! Turns a priced [`Quotation`](crate::quote::Quotation) into the one-page
//! Platinum Life PDF. Split into:
//! - `format`: KShs money formatting shared with the console output
//! - `layout`: fixed A4 page composition into drawable elements
//! - `pdf`: lopdf encoding of those elements

use std::path::Path;

use log::warn;

use crate::error::QuoteError;
use crate::quote::Quotation;

pub mod format;
pub mod layout;
mod pdf;

pub use format::kshs;
pub use layout::{compose, Element, Font, Rgb};

/// File name offered when the quotation is downloaded
pub const QUOTATION_FILENAME: &str = "Platinum_Life_Quotation.pdf";

/// Content type of the rendered document
pub const QUOTATION_MIME: &str = "application/pdf";

/// Render a quotation into PDF bytes
///
/// `branding` points at the letterhead logo; a missing or unreadable image
/// is logged and skipped rather than failing the document.
pub fn render_quotation(quotation: &Quotation, branding: Option<&Path>) -> Result<Vec<u8>, QuoteError> {
    if !quotation.breakdown.is_consistent() {
        return Err(QuoteError::render("premium breakdown does not reconcile"));
    }

    let branding = branding.filter(|path| {
        if path.exists() {
            true
        } else {
            warn!(
                "branding image {} not found, rendering without letterhead",
                path.display()
            );
            false
        }
    });

    let elements = layout::compose(quotation);
    pdf::encode(&elements, branding)
}
