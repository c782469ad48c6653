//! Grant-category prediction: feature engineering, schema alignment, and model inference.

pub mod batch;
pub mod domain;
pub mod features;
pub mod messages;
pub mod model;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{ApplicantBatchError, ApplicantBatchImporter, ApplicantRow};
pub use domain::{
    ApplicantRecord, CategoricalField, EncodingPolicy, GrantPrediction, Standing,
    UnknownCategoryPolicy, ZeroHouseholdPolicy,
};
pub use features::{
    encode_record, DerivedFeatureSet, EncodedFeatureVector, EncodingError, FEATURE_COLUMNS,
    FEATURE_COUNT,
};
pub use messages::{grant_message, INVALID_CATEGORY_MESSAGE};
pub use model::{DecisionTree, ForestModel, GrantClassifier, ModelError, ModelLoadError};
pub use router::grant_router;
pub use service::{GrantError, GrantPredictor};
