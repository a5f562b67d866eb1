use thiserror::Error;

/// Errors that can occur when decoding kudo fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KudoError {
    #[error("Unknown contribution type: {0}")]
    UnknownContributionType(String),
}
