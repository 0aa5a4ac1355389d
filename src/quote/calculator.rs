//! Premium calculation for the Platinum Life product
//!
//! The computation is pure decimal arithmetic over one rate row:
//! base premium from the per-mille rate, the PHCF levy on top of it, and a
//! flat stamp duty. Stored amounts keep full precision; two-decimal rounding
//! happens only at display time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::input::{PresenterInfo, QuotationInput};
use crate::error::QuoteError;
use crate::rates::{RateKey, RateRow, RateTable};

/// PHCF levy rate applied to the base premium (0.25%)
pub const PHCF_RATE: Decimal = dec!(0.0025);

/// Flat stamp duty per policy, in KShs
pub const STAMP_DUTY: Decimal = dec!(40);

/// Monthly premium components for one quotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Per-mille rate applied to the sum assured
    pub base: Decimal,

    /// PHCF levy on the base premium
    pub phcf: Decimal,

    /// Flat stamp duty
    pub stamp_duty: Decimal,

    /// Sum of the three components
    pub total: Decimal,
}

impl PremiumBreakdown {
    /// True when the components reconcile and none is negative
    pub fn is_consistent(&self) -> bool {
        self.total == self.base + self.phcf + self.stamp_duty
            && !self.base.is_sign_negative()
            && !self.phcf.is_sign_negative()
            && !self.stamp_duty.is_sign_negative()
    }
}

/// An immutable quotation: the inputs plus the computed premium
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub input: QuotationInput,
    pub presenter: PresenterInfo,
    pub breakdown: PremiumBreakdown,

    /// When the quotation was computed (UTC)
    pub quoted_at: DateTime<Utc>,
}

/// Compute the premium breakdown from a rate row
///
/// Pure and side-effect free; safe to call repeatedly with the same inputs.
pub fn calculate(input: &QuotationInput, row: &RateRow) -> PremiumBreakdown {
    let rate = row.rate(RateKey {
        gender: input.gender,
        smoker_status: input.smoker_status,
        education: input.education,
    });

    let base = rate * Decimal::from(input.sum_assured) / dec!(1000);
    let phcf = PHCF_RATE * base;
    let total = base + phcf + STAMP_DUTY;

    PremiumBreakdown {
        base,
        phcf,
        stamp_duty: STAMP_DUTY,
        total,
    }
}

/// Validate the input, look up the rate, and assemble a full quotation
///
/// A missing rate aborts the whole computation; no placeholder breakdown is
/// ever produced.
pub fn quote(
    table: &RateTable,
    input: QuotationInput,
    presenter: PresenterInfo,
) -> Result<Quotation, QuoteError> {
    input.validate()?;
    let row = table.lookup(input.age)?;
    let breakdown = calculate(&input, row);

    Ok(Quotation {
        input,
        presenter,
        breakdown,
        quoted_at: Utc::now(),
    })
}
