use crate::domain::form::FormField;
use crate::domain::lifecycle::LifecyclePhase;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Required fields are empty: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),
    #[error("Submit is not available while the order is {0}")]
    SubmitUnavailable(LifecyclePhase),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl From<toml::de::Error> for OrderError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message, drop the echoed input
        OrderError::ConfigError(err.message().to_string())
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, OrderError>;
