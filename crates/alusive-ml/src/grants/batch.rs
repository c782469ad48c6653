use std::io::Read;
use std::path::Path;

use super::domain::ApplicantRecord;

#[derive(Debug)]
pub enum ApplicantBatchError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ApplicantBatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicantBatchError::Io(err) => write!(f, "failed to read applicant CSV: {}", err),
            ApplicantBatchError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
        }
    }
}

impl std::error::Error for ApplicantBatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApplicantBatchError::Io(err) => Some(err),
            ApplicantBatchError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ApplicantBatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ApplicantBatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One data row of an applicant export; a malformed row does not stop the rest of the batch.
pub type ApplicantRow = Result<ApplicantRecord, ApplicantBatchError>;

/// Reads applicant records from a CSV export whose headers match the request field names.
pub struct ApplicantBatchImporter;

impl ApplicantBatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantRow>, ApplicantBatchError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Fails only when the file or its header line cannot be read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantRow>, ApplicantBatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        csv_reader.headers()?;

        let rows = csv_reader
            .deserialize::<ApplicantRecord>()
            .map(|row| row.map_err(ApplicantBatchError::from))
            .collect();
        Ok(rows)
    }
}
