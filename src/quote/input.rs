//! Client input for a premium quotation
//!
//! Field values mirror the quotation form: the three rating enums serialize
//! with the same labels the rate sheet columns use ("Non Smoker",
//! "Non Tertiary"), so JSON payloads and CSV headers stay consistent.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Lowest age last birthday the product accepts
pub const MIN_AGE: u8 = 18;

/// Highest age last birthday the product accepts
pub const MAX_AGE: u8 = 55;

/// Lowest sum assured the product accepts, in whole KShs
pub const MIN_SUM_ASSURED: u64 = 1_000_000;

/// Highest sum assured the product accepts, in whole KShs
pub const MAX_SUM_ASSURED: u64 = 35_000_000;

/// Gender of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smoker status of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum SmokerStatus {
    Smoker,
    #[serde(rename = "Non Smoker")]
    NonSmoker,
}

impl SmokerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SmokerStatus::Smoker => "Smoker",
            SmokerStatus::NonSmoker => "Non Smoker",
        }
    }
}

impl fmt::Display for SmokerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest education level of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum EducationLevel {
    Tertiary,
    #[serde(rename = "Non Tertiary")]
    NonTertiary,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Tertiary => "Tertiary",
            EducationLevel::NonTertiary => "Non Tertiary",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the client enters on the quotation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationInput {
    /// Client full name, free text
    pub client_name: String,

    /// Age last birthday
    pub age: u8,

    /// Gender of the client
    pub gender: Gender,

    /// Smoker status of the client
    pub smoker_status: SmokerStatus,

    /// Highest education level of the client
    pub education: EducationLevel,

    /// Sum assured in whole KShs
    pub sum_assured: u64,
}

impl QuotationInput {
    /// Check the product's accepted ranges
    pub fn validate(&self) -> Result<(), QuoteError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(QuoteError::invalid_input(format!(
                "age {} outside accepted range {}-{}",
                self.age, MIN_AGE, MAX_AGE
            )));
        }
        if !(MIN_SUM_ASSURED..=MAX_SUM_ASSURED).contains(&self.sum_assured) {
            return Err(QuoteError::invalid_input(format!(
                "sum assured {} outside accepted range {}-{}",
                self.sum_assured, MIN_SUM_ASSURED, MAX_SUM_ASSURED
            )));
        }
        Ok(())
    }
}

/// Presenter fields shown on the quotation document
///
/// All three are optional and never affect the premium. Absent fields render
/// as blank lines to be filled in by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterInfo {
    /// Presenter full name
    #[serde(default)]
    pub presenter_name: Option<String>,

    /// Distribution channel the quotation goes out through
    #[serde(default)]
    pub distribution_channel: Option<String>,

    /// Presenter's agent code
    #[serde(default)]
    pub presenter_code: Option<String>,
}

impl PresenterInfo {
    /// Treat empty and whitespace-only entries as absent
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            presenter_name: clean(self.presenter_name),
            distribution_channel: clean(self.distribution_channel),
            presenter_code: clean(self.presenter_code),
        }
    }
}
