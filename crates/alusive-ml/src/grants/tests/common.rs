use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::grants::domain::{ApplicantRecord, EncodingPolicy};
use crate::grants::features::FEATURE_COLUMNS;
use crate::grants::model::{ForestModel, GrantClassifier, ModelError};
use crate::grants::service::GrantPredictor;

const FOREST_FIXTURE: &str = include_str!("../../../tests/fixtures/grant_forest.json");

pub(super) fn scenario_record() -> ApplicantRecord {
    ApplicantRecord {
        academic_standing: "Yes".to_string(),
        disciplinary_standing: "No".to_string(),
        financial_standing: "Yes".to_string(),
        alu_grant_status: "No".to_string(),
        previous_alusive_grant: "No".to_string(),
        fee_balance: 1000.0,
        total_monthly_income: 500.0,
        students_in_household: 1,
        household_size: 4,
        household_supporters: 2,
        household_dependants: 1,
        alu_grant_amount: 0.0,
        grant_requested: 700.0,
        amount_affordable: 400.0,
    }
}

pub(super) fn fixture_model() -> ForestModel {
    ForestModel::from_reader(FOREST_FIXTURE.as_bytes()).expect("fixture forest loads")
}

pub(super) fn fixture_predictor() -> GrantPredictor<ForestModel> {
    GrantPredictor::new(Arc::new(fixture_model()), EncodingPolicy::default())
        .expect("fixture matches schema")
}

/// Classifier returning a fixed label and distribution regardless of input.
pub(super) struct FixedClassifier {
    pub(super) label: i64,
    pub(super) probabilities: Vec<f64>,
    pub(super) width: usize,
    pub(super) names: Option<Vec<String>>,
}

impl FixedClassifier {
    pub(super) fn predicting(label: i64) -> Self {
        Self {
            label,
            probabilities: vec![0.2, 0.3, 0.5],
            width: FEATURE_COLUMNS.len(),
            names: None,
        }
    }
}

impl GrantClassifier for FixedClassifier {
    fn n_features(&self) -> usize {
        self.width
    }

    fn classes(&self) -> &[i64] {
        &[0, 1, 2]
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Ok(self.probabilities.clone())
    }

    fn class_for(&self, _probabilities: &[f64]) -> Result<i64, ModelError> {
        Ok(self.label)
    }
}

/// Forest wrapper counting how often a distribution is computed.
pub(super) struct CountingClassifier {
    pub(super) inner: ForestModel,
    pub(super) proba_calls: AtomicUsize,
}

impl CountingClassifier {
    pub(super) fn wrapping(inner: ForestModel) -> Self {
        Self {
            inner,
            proba_calls: AtomicUsize::new(0),
        }
    }
}

impl GrantClassifier for CountingClassifier {
    fn n_features(&self) -> usize {
        self.inner.n_features()
    }

    fn classes(&self) -> &[i64] {
        self.inner.classes()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.inner.feature_names()
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.proba_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.predict_proba(features)
    }
}

/// Classifier whose inference always fails.
pub(super) struct BrokenClassifier;

impl GrantClassifier for BrokenClassifier {
    fn n_features(&self) -> usize {
        FEATURE_COLUMNS.len()
    }

    fn classes(&self) -> &[i64] {
        &[]
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::EmptyDistribution)
    }
}
