use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Response from {path} is missing '{field}'.")]
    MissingField { path: String, field: &'static str },
    #[error("Response from {path} has an unusable '{field}': {value}")]
    InvalidField {
        path: String,
        field: &'static str,
        value: String,
    },
}
