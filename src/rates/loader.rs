//! Load the per-mille rate table from its CSV resource
//!
//! The header row carries the original rate-sheet column names, one column
//! per gender/smoker/education combination.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::Reader;
use log::info;
use rust_decimal::Decimal;

use super::{RateRow, RateTable};
use crate::error::QuoteError;

/// Raw CSV row matching the rate-sheet columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Male Smoker Tertiary")]
    male_smoker_tertiary: String,
    #[serde(rename = "Male Smoker Non Tertiary")]
    male_smoker_non_tertiary: String,
    #[serde(rename = "Male Non Smoker Tertiary")]
    male_non_smoker_tertiary: String,
    #[serde(rename = "Male Non Smoker Non Tertiary")]
    male_non_smoker_non_tertiary: String,
    #[serde(rename = "Female Smoker Tertiary")]
    female_smoker_tertiary: String,
    #[serde(rename = "Female Smoker Non Tertiary")]
    female_smoker_non_tertiary: String,
    #[serde(rename = "Female Non Smoker Tertiary")]
    female_non_smoker_tertiary: String,
    #[serde(rename = "Female Non Smoker Non Tertiary")]
    female_non_smoker_non_tertiary: String,
}

impl CsvRow {
    fn into_rate_row(self) -> Result<RateRow, QuoteError> {
        let age = self.age;
        Ok(RateRow {
            age,
            male_smoker_tertiary: parse_rate(age, "Male Smoker Tertiary", &self.male_smoker_tertiary)?,
            male_smoker_non_tertiary: parse_rate(
                age,
                "Male Smoker Non Tertiary",
                &self.male_smoker_non_tertiary,
            )?,
            male_non_smoker_tertiary: parse_rate(
                age,
                "Male Non Smoker Tertiary",
                &self.male_non_smoker_tertiary,
            )?,
            male_non_smoker_non_tertiary: parse_rate(
                age,
                "Male Non Smoker Non Tertiary",
                &self.male_non_smoker_non_tertiary,
            )?,
            female_smoker_tertiary: parse_rate(
                age,
                "Female Smoker Tertiary",
                &self.female_smoker_tertiary,
            )?,
            female_smoker_non_tertiary: parse_rate(
                age,
                "Female Smoker Non Tertiary",
                &self.female_smoker_non_tertiary,
            )?,
            female_non_smoker_tertiary: parse_rate(
                age,
                "Female Non Smoker Tertiary",
                &self.female_non_smoker_tertiary,
            )?,
            female_non_smoker_non_tertiary: parse_rate(
                age,
                "Female Non Smoker Non Tertiary",
                &self.female_non_smoker_non_tertiary,
            )?,
        })
    }
}

/// Parse one per-mille rate cell, rejecting negatives
fn parse_rate(age: u8, column: &str, raw: &str) -> Result<Decimal, QuoteError> {
    let rate = Decimal::from_str(raw.trim()).map_err(|e| {
        QuoteError::malformed(format!("age {}: bad {} value {:?}: {}", age, column, raw, e))
    })?;
    if rate.is_sign_negative() {
        return Err(QuoteError::malformed(format!(
            "age {}: negative {} rate {}",
            age, column, rate
        )));
    }
    Ok(rate)
}

/// Load the rate table from a CSV file
pub fn load_rate_table<P: AsRef<Path>>(path: P) -> Result<RateTable, QuoteError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| QuoteError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_rate_table_from_reader(file).map_err(|e| match e {
        QuoteError::MalformedRates(message) => {
            QuoteError::malformed(format!("{}: {}", path.display(), message))
        }
        other => other,
    })?;
    info!("loaded {} rate rows from {}", table.len(), path.display());
    Ok(table)
}

/// Load the rate table from any reader (e.g., string buffer, network stream)
pub fn load_rate_table_from_reader<R: Read>(reader: R) -> Result<RateTable, QuoteError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let raw: CsvRow = result.map_err(|e| QuoteError::malformed(e.to_string()))?;
        rows.push(raw.into_rate_row()?);
    }

    RateTable::from_rows(rows)
}
