use crate::infra::{load_faq_matcher, load_grant_predictor};
use alusive_ml::config::AppConfig;
use alusive_ml::error::AppError;
use alusive_ml::grants::{
    ApplicantBatchImporter, ApplicantRecord, ApplicantRow, GrantClassifier, GrantPrediction,
    GrantPredictor,
};
use alusive_ml::telemetry;
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// JSON file holding one applicant record
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the configured grant model artifact
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export whose headers match the applicant JSON field names
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Override the configured grant model artifact
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question to answer
    pub(crate) question: String,
}

/// One line of batch output.
#[derive(Debug, Serialize)]
pub(crate) struct BatchRow {
    pub(crate) row: usize,
    #[serde(flatten)]
    pub(crate) outcome: BatchOutcome,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum BatchOutcome {
    Prediction(GrantPrediction),
    Error { error: String },
}

fn load_config(model: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = model {
        config.grants.model_path = path;
    }
    telemetry::init(&config.telemetry, config.environment)?;
    Ok(config)
}

pub(crate) fn run_grant_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = load_config(args.model)?;
    let predictor = load_grant_predictor(&config)?;

    let record: ApplicantRecord = serde_json::from_reader(File::open(&args.input)?)?;
    let prediction = predictor.predict(&record)?;

    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}

pub(crate) fn run_grant_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = load_config(args.model)?;
    let predictor = load_grant_predictor(&config)?;
    let rows = ApplicantBatchImporter::from_path(&args.csv)?;

    let mut failures = 0usize;
    for (index, row) in rows.iter().enumerate() {
        let outcome = score_row(&predictor, row);
        if matches!(outcome, BatchOutcome::Error { .. }) {
            failures += 1;
        }
        let row = BatchRow {
            row: index + 1,
            outcome,
        };
        println!("{}", serde_json::to_string(&row)?);
    }

    eprintln!(
        "scored {} applicants ({} failed)",
        rows.len() - failures,
        failures
    );
    Ok(())
}

fn score_row<M>(predictor: &GrantPredictor<M>, row: &ApplicantRow) -> BatchOutcome
where
    M: GrantClassifier,
{
    let result = match row {
        Ok(record) => predictor.predict(record).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };
    match result {
        Ok(prediction) => BatchOutcome::Prediction(prediction),
        Err(error) => BatchOutcome::Error { error },
    }
}

pub(crate) fn run_chat_ask(args: AskArgs) -> Result<(), AppError> {
    let config = load_config(None)?;
    let matcher = load_faq_matcher(&config)?;
    let answer = matcher.answer(&args.question)?;

    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
