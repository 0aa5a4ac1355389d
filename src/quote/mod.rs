//! Quotation domain: client input, premium calculation, assembled quotations

mod calculator;
mod input;

pub use calculator::{calculate, quote, PremiumBreakdown, Quotation, PHCF_RATE, STAMP_DUTY};
pub use input::{
    EducationLevel, Gender, PresenterInfo, QuotationInput, SmokerStatus, MAX_AGE, MAX_SUM_ASSURED,
    MIN_AGE, MIN_SUM_ASSURED,
};
