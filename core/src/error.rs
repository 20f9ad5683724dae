use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Data unavailable: cannot read {path}: {reason}")]
    DataUnavailable { path: String, reason: String },

    #[error("Data unavailable: required column '{name}' missing from header")]
    MissingColumn { name: String },

    #[error("Data unavailable: line {line}, column '{column}': cannot parse '{value}' as an integer")]
    InvalidField {
        line: u64,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// True for every failure that originates in acquiring or parsing the
    /// source table, as opposed to writing the report.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            ReportError::DataUnavailable { .. }
                | ReportError::MissingColumn { .. }
                | ReportError::InvalidField { .. }
                | ReportError::Csv(_)
        )
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
