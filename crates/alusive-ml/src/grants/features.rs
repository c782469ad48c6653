//! Feature engineering and schema alignment for the grant classifier.
//!
//! The encoder mirrors how the training frame was built: raw numerics, four derived ratios,
//! and `"<Field>_<Value>"` dummy columns for each categorical answer. The resulting columns
//! are then reconciled against [`FEATURE_COLUMNS`], which is the contract shared with the
//! trained model.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::domain::{
    ApplicantRecord, CategoricalField, EncodingPolicy, Standing, UnknownCategoryPolicy,
    ZeroHouseholdPolicy,
};

/// Ordered column names the grant model was trained on.
pub const FEATURE_COLUMNS: [&str; 23] = [
    "Fee balance (USD)",
    "Total Monthly Income",
    "Students in Household",
    "Household Size",
    "Household Supporters",
    "Household Dependants",
    "ALU Grant Amount",
    "Grant Requested",
    "Amount Affordable",
    "fee_to_income",
    "dependants_per_supporter",
    "requested_to_affordable",
    "household_income_per_person",
    "Academic Standing_No",
    "Academic Standing_Yes",
    "Disciplinary Standing_No",
    "Disciplinary Standing_Yes",
    "Financial Standing_No",
    "Financial Standing_Yes",
    "ALU Grant Status_No",
    "ALU Grant Status_Yes",
    "Previous Alusive Grant Status_No",
    "Previous Alusive Grant Status_Yes",
];

pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// Ratios computed from the raw record before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFeatureSet {
    pub dependants_per_supporter: f64,
    pub fee_to_income: f64,
    pub household_income_per_person: f64,
    pub requested_to_affordable: f64,
}

impl DerivedFeatureSet {
    /// Offsets the supporter, income, and affordability denominators by one. Household size
    /// is used as-is, so a zero household yields a non-finite per-person income.
    pub fn compute(record: &ApplicantRecord) -> Self {
        let supporters = f64::from(record.household_supporters);
        let dependants = f64::from(record.household_dependants);

        Self {
            dependants_per_supporter: dependants / (supporters + 1.0),
            fee_to_income: record.fee_balance / (record.total_monthly_income + 1.0),
            household_income_per_person: record.total_monthly_income
                / f64::from(record.household_size),
            requested_to_affordable: record.grant_requested / (record.amount_affordable + 1.0),
        }
    }

    fn columns(&self) -> [(&'static str, f64); 4] {
        [
            ("fee_to_income", self.fee_to_income),
            ("dependants_per_supporter", self.dependants_per_supporter),
            ("requested_to_affordable", self.requested_to_affordable),
            ("household_income_per_person", self.household_income_per_person),
        ]
    }
}

/// Fixed-order row consumed by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl EncodedFeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a schema column by name.
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| self.values[index])
    }

    /// Column names paired with their values, in schema order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }
}

/// Input problems detected while building the feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error("unrecognized value '{value}' for {field}; expected 'Yes' or 'No'")]
    UnrecognizedCategory { field: &'static str, value: String },
    #[error("household_size must be at least 1 to compute income per person")]
    ZeroHouseholdSize,
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },
}

/// Build the schema-aligned feature row for a single applicant.
pub fn encode_record(
    record: &ApplicantRecord,
    policy: &EncodingPolicy,
) -> Result<EncodedFeatureVector, EncodingError> {
    for (field, value) in record.amounts() {
        if !value.is_finite() || value < 0.0 {
            return Err(EncodingError::InvalidAmount { field, value });
        }
    }

    if record.household_size == 0 && policy.zero_household == ZeroHouseholdPolicy::Reject {
        return Err(EncodingError::ZeroHouseholdSize);
    }

    let derived = DerivedFeatureSet::compute(record);

    let mut columns: HashMap<String, f64> = HashMap::with_capacity(FEATURE_COUNT);
    for (name, value) in record.numeric_columns() {
        columns.insert(name.to_string(), value);
    }
    for (name, value) in derived.columns() {
        columns.insert(name.to_string(), value);
    }
    for field in CategoricalField::ALL {
        let raw = record.categorical(field);
        if Standing::parse(raw).is_none()
            && policy.unknown_category == UnknownCategoryPolicy::Reject
        {
            return Err(EncodingError::UnrecognizedCategory {
                field: field.json_name(),
                value: raw.to_string(),
            });
        }
        columns.insert(indicator_column(field, raw), 1.0);
    }

    Ok(align_to_schema(columns))
}

fn indicator_column(field: CategoricalField, value: &str) -> String {
    format!("{}_{}", field.schema_name(), value)
}

/// Missing schema columns become zero; columns outside the schema are dropped.
fn align_to_schema(mut columns: HashMap<String, f64>) -> EncodedFeatureVector {
    let mut values = [0.0; FEATURE_COUNT];
    for (slot, name) in values.iter_mut().zip(FEATURE_COLUMNS) {
        if let Some(value) = columns.remove(name) {
            *slot = value;
        }
    }

    if !columns.is_empty() {
        let mut dropped: Vec<String> = columns.into_keys().collect();
        dropped.sort();
        debug!(?dropped, "dropped columns outside the grant feature schema");
    }

    EncodedFeatureVector { values }
}
