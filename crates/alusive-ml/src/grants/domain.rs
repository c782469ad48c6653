use serde::{Deserialize, Serialize};

/// Applicant attributes captured at the moment of grant evaluation.
///
/// Categorical answers stay as the raw labels submitted by the applicant; the encoder parses
/// them into [`Standing`] under the configured [`UnknownCategoryPolicy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub academic_standing: String,
    pub disciplinary_standing: String,
    pub financial_standing: String,
    pub alu_grant_status: String,
    pub previous_alusive_grant: String,
    pub fee_balance: f64,
    pub total_monthly_income: f64,
    pub students_in_household: u32,
    pub household_size: u32,
    pub household_supporters: u32,
    pub household_dependants: u32,
    pub alu_grant_amount: f64,
    pub grant_requested: f64,
    pub amount_affordable: f64,
}

impl ApplicantRecord {
    /// Raw label submitted for a categorical field.
    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::AcademicStanding => &self.academic_standing,
            CategoricalField::DisciplinaryStanding => &self.disciplinary_standing,
            CategoricalField::FinancialStanding => &self.financial_standing,
            CategoricalField::AluGrantStatus => &self.alu_grant_status,
            CategoricalField::PreviousAlusiveGrant => &self.previous_alusive_grant,
        }
    }

    /// Numeric attributes keyed by their training-schema column names, in schema order.
    pub fn numeric_columns(&self) -> [(&'static str, f64); 9] {
        [
            ("Fee balance (USD)", self.fee_balance),
            ("Total Monthly Income", self.total_monthly_income),
            ("Students in Household", f64::from(self.students_in_household)),
            ("Household Size", f64::from(self.household_size)),
            ("Household Supporters", f64::from(self.household_supporters)),
            ("Household Dependants", f64::from(self.household_dependants)),
            ("ALU Grant Amount", self.alu_grant_amount),
            ("Grant Requested", self.grant_requested),
            ("Amount Affordable", self.amount_affordable),
        ]
    }

    /// Monetary attributes that must be finite and non-negative.
    pub(crate) fn amounts(&self) -> [(&'static str, f64); 5] {
        [
            ("fee_balance", self.fee_balance),
            ("total_monthly_income", self.total_monthly_income),
            ("alu_grant_amount", self.alu_grant_amount),
            ("grant_requested", self.grant_requested),
            ("amount_affordable", self.amount_affordable),
        ]
    }
}

/// The five yes/no questions on the grant application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    AcademicStanding,
    DisciplinaryStanding,
    FinancialStanding,
    AluGrantStatus,
    PreviousAlusiveGrant,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 5] = [
        CategoricalField::AcademicStanding,
        CategoricalField::DisciplinaryStanding,
        CategoricalField::FinancialStanding,
        CategoricalField::AluGrantStatus,
        CategoricalField::PreviousAlusiveGrant,
    ];

    /// Column prefix used by the one-hot indicators in the training schema.
    pub const fn schema_name(self) -> &'static str {
        match self {
            CategoricalField::AcademicStanding => "Academic Standing",
            CategoricalField::DisciplinaryStanding => "Disciplinary Standing",
            CategoricalField::FinancialStanding => "Financial Standing",
            CategoricalField::AluGrantStatus => "ALU Grant Status",
            CategoricalField::PreviousAlusiveGrant => "Previous Alusive Grant Status",
        }
    }

    /// Field name in the request payload.
    pub const fn json_name(self) -> &'static str {
        match self {
            CategoricalField::AcademicStanding => "academic_standing",
            CategoricalField::DisciplinaryStanding => "disciplinary_standing",
            CategoricalField::FinancialStanding => "financial_standing",
            CategoricalField::AluGrantStatus => "alu_grant_status",
            CategoricalField::PreviousAlusiveGrant => "previous_alusive_grant",
        }
    }
}

/// Closed vocabulary shared by every categorical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    Yes,
    No,
}

impl Standing {
    /// Labels are case-sensitive, matching the values the model was trained on.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }
}

/// What to do with a categorical label outside the `Yes`/`No` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategoryPolicy {
    /// Fail the request with an unrecognized-category error.
    #[default]
    Reject,
    /// Encode the field with both indicator columns set to zero.
    Collapse,
}

impl UnknownCategoryPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "collapse" => Some(Self::Collapse),
            _ => None,
        }
    }
}

/// What to do when `household_size` is zero and the per-person income has no defined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroHouseholdPolicy {
    /// Fail the request before the model is consulted.
    #[default]
    Reject,
    /// Let the non-finite ratio flow into the feature vector.
    Propagate,
}

impl ZeroHouseholdPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "propagate" => Some(Self::Propagate),
            _ => None,
        }
    }
}

/// Edge-case handling applied while building the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncodingPolicy {
    pub unknown_category: UnknownCategoryPolicy,
    pub zero_household: ZeroHouseholdPolicy,
}

/// Model output returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantPrediction {
    pub predicted_category: i64,
    pub probabilities: Vec<f64>,
    pub grant_message: String,
}
