use super::common::*;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::grants::domain::{EncodingPolicy, UnknownCategoryPolicy, ZeroHouseholdPolicy};
use crate::grants::features::{EncodingError, FEATURE_COLUMNS};
use crate::grants::messages::INVALID_CATEGORY_MESSAGE;
use crate::grants::model::ModelError;
use crate::grants::service::{GrantError, GrantPredictor};

#[test]
fn scenario_record_yields_a_complete_prediction() {
    let predictor = fixture_predictor();

    let prediction = predictor
        .predict(&scenario_record())
        .expect("scenario predicts");

    assert!((0..=2).contains(&prediction.predicted_category));
    assert_eq!(prediction.probabilities.len(), 3);
    let total: f64 = prediction.probabilities.iter().sum();
    assert!((total - 1.0).abs() < 1e-6, "probabilities sum to {total}");
    assert!(!prediction.grant_message.is_empty());
}

#[test]
fn scenario_record_lands_in_the_top_tier() {
    let prediction = fixture_predictor()
        .predict(&scenario_record())
        .expect("scenario predicts");

    assert_eq!(prediction.predicted_category, 2);
    let expected = [0.1, 0.3, 0.6];
    for (actual, expected) in prediction.probabilities.iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-9);
    }
    assert!(prediction.grant_message.contains("$1000"));
}

#[test]
fn predictions_are_deterministic() {
    let predictor = fixture_predictor();
    let first = predictor.predict(&scenario_record()).expect("first run");
    let second = predictor.predict(&scenario_record()).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn probabilities_cover_every_trained_class() {
    let predictor = fixture_predictor();
    let mut record = scenario_record();

    for (fee_balance, household_size, academic) in
        [(0.0, 1, "No"), (50.0, 9, "Yes"), (9000.0, 2, "No")]
    {
        record.fee_balance = fee_balance;
        record.household_size = household_size;
        record.academic_standing = academic.to_string();

        let prediction = predictor.predict(&record).expect("predicts");
        assert_eq!(prediction.probabilities.len(), 3);
        let total: f64 = prediction.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}

#[test]
fn encoded_vector_always_has_schema_width() {
    let policy = EncodingPolicy {
        unknown_category: UnknownCategoryPolicy::Collapse,
        zero_household: ZeroHouseholdPolicy::Propagate,
    };
    let predictor =
        GrantPredictor::new(Arc::new(fixture_model()), policy).expect("fixture matches schema");

    let mut record = scenario_record();
    for label in ["Yes", "No", "Unknown", ""] {
        record.previous_alusive_grant = label.to_string();
        let vector = predictor.encode(&record).expect("encodes");
        assert_eq!(vector.len(), FEATURE_COLUMNS.len());
    }
}

#[test]
fn unmapped_category_uses_invalid_message() {
    let predictor = GrantPredictor::new(
        Arc::new(FixedClassifier::predicting(7)),
        EncodingPolicy::default(),
    )
    .expect("stub matches schema");

    let prediction = predictor
        .predict(&scenario_record())
        .expect("prediction still succeeds");

    assert_eq!(prediction.predicted_category, 7);
    assert_eq!(prediction.grant_message, INVALID_CATEGORY_MESSAGE);
    assert_eq!(prediction.probabilities, vec![0.2, 0.3, 0.5]);
}

#[test]
fn schema_width_mismatch_fails_fast() {
    let mut stub = FixedClassifier::predicting(0);
    stub.width = 22;

    match GrantPredictor::new(Arc::new(stub), EncodingPolicy::default()) {
        Err(GrantError::SchemaMismatch { expected, actual }) => {
            assert_eq!(expected, 23);
            assert_eq!(actual, 22);
        }
        Err(other) => panic!("expected schema mismatch, got {other:?}"),
        Ok(_) => panic!("expected schema mismatch"),
    }
}

#[test]
fn reordered_feature_names_fail_fast() {
    let mut names: Vec<String> = FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect();
    names.swap(9, 10);
    let mut stub = FixedClassifier::predicting(0);
    stub.names = Some(names);

    match GrantPredictor::new(Arc::new(stub), EncodingPolicy::default()) {
        Err(GrantError::FeatureNameMismatch {
            index, expected, ..
        }) => {
            assert_eq!(index, 9);
            assert_eq!(expected, "fee_to_income");
        }
        Err(other) => panic!("expected feature name mismatch, got {other:?}"),
        Ok(_) => panic!("expected feature name mismatch"),
    }
}

#[test]
fn unrecognized_category_is_an_input_error() {
    let mut record = scenario_record();
    record.alu_grant_status = "Pending".to_string();

    let err = fixture_predictor().predict(&record).expect_err("rejects");
    assert!(err.is_input_error());
    assert!(matches!(
        err,
        GrantError::Encoding(EncodingError::UnrecognizedCategory { field: "alu_grant_status", .. })
    ));
}

#[test]
fn zero_household_can_reach_the_model_when_propagated() {
    let policy = EncodingPolicy {
        zero_household: ZeroHouseholdPolicy::Propagate,
        ..EncodingPolicy::default()
    };
    let predictor =
        GrantPredictor::new(Arc::new(fixture_model()), policy).expect("fixture matches schema");
    let mut record = scenario_record();
    record.household_size = 0;

    let vector = predictor.encode(&record).expect("encodes");
    assert!(!vector
        .get("household_income_per_person")
        .expect("column present")
        .is_finite());

    let prediction = predictor.predict(&record).expect("predicts");
    assert_eq!(prediction.probabilities.len(), 3);
}

#[test]
fn model_failures_are_not_input_errors() {
    let predictor = GrantPredictor::new(Arc::new(BrokenClassifier), EncodingPolicy::default())
        .expect("stub matches schema");

    let err = predictor
        .predict(&scenario_record())
        .expect_err("inference fails");
    assert!(!err.is_input_error());
    assert!(matches!(err, GrantError::Model(ModelError::EmptyDistribution)));
}

#[test]
fn each_prediction_scores_the_forest_once() {
    let model = Arc::new(CountingClassifier::wrapping(fixture_model()));
    let predictor = GrantPredictor::new(Arc::clone(&model), EncodingPolicy::default())
        .expect("fixture matches schema");

    let prediction = predictor.predict(&scenario_record()).expect("predicts");

    assert_eq!(prediction.predicted_category, 2);
    assert_eq!(model.proba_calls.load(Ordering::SeqCst), 1);
}
