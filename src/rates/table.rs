//! Per-mille rate table keyed by age last birthday
//!
//! Every supported age carries eight rates, one per combination of gender,
//! smoker status, and education level. The table is built once at startup
//! and never mutated afterwards; lookups are by exact age, with no
//! interpolation between rows.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::quote::{EducationLevel, Gender, SmokerStatus};

/// Composite key selecting one of the eight rate columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateKey {
    pub gender: Gender,
    pub smoker_status: SmokerStatus,
    pub education: EducationLevel,
}

impl RateKey {
    /// All eight keys, in rate-sheet column order
    pub const ALL: [RateKey; 8] = [
        RateKey {
            gender: Gender::Male,
            smoker_status: SmokerStatus::Smoker,
            education: EducationLevel::Tertiary,
        },
        RateKey {
            gender: Gender::Male,
            smoker_status: SmokerStatus::Smoker,
            education: EducationLevel::NonTertiary,
        },
        RateKey {
            gender: Gender::Male,
            smoker_status: SmokerStatus::NonSmoker,
            education: EducationLevel::Tertiary,
        },
        RateKey {
            gender: Gender::Male,
            smoker_status: SmokerStatus::NonSmoker,
            education: EducationLevel::NonTertiary,
        },
        RateKey {
            gender: Gender::Female,
            smoker_status: SmokerStatus::Smoker,
            education: EducationLevel::Tertiary,
        },
        RateKey {
            gender: Gender::Female,
            smoker_status: SmokerStatus::Smoker,
            education: EducationLevel::NonTertiary,
        },
        RateKey {
            gender: Gender::Female,
            smoker_status: SmokerStatus::NonSmoker,
            education: EducationLevel::Tertiary,
        },
        RateKey {
            gender: Gender::Female,
            smoker_status: SmokerStatus::NonSmoker,
            education: EducationLevel::NonTertiary,
        },
    ];
}

/// One age's monthly per-mille rates across all eight client combinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRow {
    /// Age last birthday this row covers
    pub age: u8,

    pub male_smoker_tertiary: Decimal,
    pub male_smoker_non_tertiary: Decimal,
    pub male_non_smoker_tertiary: Decimal,
    pub male_non_smoker_non_tertiary: Decimal,
    pub female_smoker_tertiary: Decimal,
    pub female_smoker_non_tertiary: Decimal,
    pub female_non_smoker_tertiary: Decimal,
    pub female_non_smoker_non_tertiary: Decimal,
}

impl RateRow {
    /// Select the per-mille rate for one client combination
    ///
    /// The match is exhaustive over all eight combinations; there is no
    /// fallback rate.
    pub fn rate(&self, key: RateKey) -> Decimal {
        use EducationLevel::{NonTertiary, Tertiary};
        use Gender::{Female, Male};
        use SmokerStatus::{NonSmoker, Smoker};

        match (key.gender, key.smoker_status, key.education) {
            (Male, Smoker, Tertiary) => self.male_smoker_tertiary,
            (Male, Smoker, NonTertiary) => self.male_smoker_non_tertiary,
            (Male, NonSmoker, Tertiary) => self.male_non_smoker_tertiary,
            (Male, NonSmoker, NonTertiary) => self.male_non_smoker_non_tertiary,
            (Female, Smoker, Tertiary) => self.female_smoker_tertiary,
            (Female, Smoker, NonTertiary) => self.female_smoker_non_tertiary,
            (Female, NonSmoker, Tertiary) => self.female_non_smoker_tertiary,
            (Female, NonSmoker, NonTertiary) => self.female_non_smoker_non_tertiary,
        }
    }
}

/// Immutable age-keyed rate table
#[derive(Debug, Clone)]
pub struct RateTable {
    rows: HashMap<u8, RateRow>,
}

impl RateTable {
    /// Build a table from rows, enforcing age uniqueness
    pub fn from_rows(rows: Vec<RateRow>) -> Result<Self, QuoteError> {
        let mut map = HashMap::with_capacity(rows.len());
        for row in rows {
            let age = row.age;
            if map.insert(age, row).is_some() {
                return Err(QuoteError::malformed(format!("duplicate age {}", age)));
            }
        }
        Ok(Self { rows: map })
    }

    /// Find the row covering an exact age
    pub fn lookup(&self, age: u8) -> Result<&RateRow, QuoteError> {
        self.rows.get(&age).ok_or(QuoteError::NoMatchingRate { age })
    }

    /// Number of ages covered
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest and highest covered ages, if any rows exist
    pub fn age_span(&self) -> Option<(u8, u8)> {
        let min = self.rows.keys().min()?;
        let max = self.rows.keys().max()?;
        Some((*min, *max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Row with eight distinct rates so selection mistakes are visible
    fn distinct_row(age: u8) -> RateRow {
        RateRow {
            age,
            male_smoker_tertiary: dec!(8.01),
            male_smoker_non_tertiary: dec!(8.02),
            male_non_smoker_tertiary: dec!(8.03),
            male_non_smoker_non_tertiary: dec!(8.04),
            female_smoker_tertiary: dec!(8.05),
            female_smoker_non_tertiary: dec!(8.06),
            female_non_smoker_tertiary: dec!(8.07),
            female_non_smoker_non_tertiary: dec!(8.08),
        }
    }

    #[test]
    fn test_rate_selection_covers_all_eight_columns() {
        let row = distinct_row(30);
        let rates: Vec<Decimal> = RateKey::ALL.iter().map(|key| row.rate(*key)).collect();

        assert_eq!(
            rates,
            vec![
                dec!(8.01),
                dec!(8.02),
                dec!(8.03),
                dec!(8.04),
                dec!(8.05),
                dec!(8.06),
                dec!(8.07),
                dec!(8.08),
            ]
        );

        // Injective: no two keys share a column
        let mut deduped = rates.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 8);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let table = RateTable::from_rows(vec![distinct_row(30), distinct_row(31)]).unwrap();

        let first = table.lookup(30).unwrap().clone();
        let second = table.lookup(30).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.age, 30);
    }

    #[test]
    fn test_lookup_missing_age() {
        let table = RateTable::from_rows(vec![distinct_row(30)]).unwrap();

        match table.lookup(55) {
            Err(QuoteError::NoMatchingRate { age }) => assert_eq!(age, 55),
            other => panic!("expected NoMatchingRate, got {:?}", other),
        }
    }

    #[test]
    fn test_from_rows_rejects_duplicate_age() {
        let result = RateTable::from_rows(vec![distinct_row(30), distinct_row(30)]);
        assert!(matches!(result, Err(QuoteError::MalformedRates(_))));
    }

    #[test]
    fn test_age_span() {
        let table = RateTable::from_rows(vec![distinct_row(22), distinct_row(40)]).unwrap();
        assert_eq!(table.age_span(), Some((22, 40)));
        assert_eq!(table.len(), 2);
    }
}
