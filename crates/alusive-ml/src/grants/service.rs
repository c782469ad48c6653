use std::sync::Arc;

use tracing::debug;

use super::domain::{ApplicantRecord, EncodingPolicy, GrantPrediction};
use super::features::{encode_record, EncodedFeatureVector, EncodingError, FEATURE_COLUMNS};
use super::messages::grant_message_or_invalid;
use super::model::{GrantClassifier, ModelError};

/// Grant pipeline: encodes an applicant, consults the classifier, and maps the advisory message.
#[derive(Debug)]
pub struct GrantPredictor<M> {
    model: Arc<M>,
    policy: EncodingPolicy,
}

impl<M> GrantPredictor<M>
where
    M: GrantClassifier,
{
    /// Fails when the model was trained on a different feature schema than the one served.
    pub fn new(model: Arc<M>, policy: EncodingPolicy) -> Result<Self, GrantError> {
        let actual = model.n_features();
        if actual != FEATURE_COLUMNS.len() {
            return Err(GrantError::SchemaMismatch {
                expected: FEATURE_COLUMNS.len(),
                actual,
            });
        }

        if let Some(names) = model.feature_names() {
            for (index, (expected, found)) in FEATURE_COLUMNS.iter().zip(names).enumerate() {
                if *expected != found.as_str() {
                    return Err(GrantError::FeatureNameMismatch {
                        index,
                        expected: *expected,
                        found: found.clone(),
                    });
                }
            }
        }

        Ok(Self { model, policy })
    }

    /// Schema-aligned feature row for a record, without scoring it.
    pub fn encode(&self, record: &ApplicantRecord) -> Result<EncodedFeatureVector, GrantError> {
        Ok(encode_record(record, &self.policy)?)
    }

    /// Predict the grant category for an applicant.
    pub fn predict(&self, record: &ApplicantRecord) -> Result<GrantPrediction, GrantError> {
        let features = self.encode(record)?;
        let row = features.as_slice();

        let probabilities = self.model.predict_proba(row)?;
        let predicted_category = self.model.class_for(&probabilities)?;
        let grant_message = grant_message_or_invalid(predicted_category).to_string();

        debug!(
            predicted_category,
            ?probabilities,
            "grant prediction complete"
        );

        Ok(GrantPrediction {
            predicted_category,
            probabilities,
            grant_message,
        })
    }
}

/// Error raised by the grant pipeline.
#[derive(Debug, thiserror::Error)]
pub enum GrantError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("model expects {actual} features but the serving schema has {expected}")]
    SchemaMismatch { expected: usize, actual: usize },
    #[error("model feature {index} is '{found}' but the serving schema expects '{expected}'")]
    FeatureNameMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },
    #[error("grant model failed: {0}")]
    Model(#[from] ModelError),
}

impl GrantError {
    /// Whether the failure stems from the submitted record rather than the service.
    pub fn is_input_error(&self) -> bool {
        matches!(self, GrantError::Encoding(_))
    }
}
