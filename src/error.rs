// Library error types

use thiserror::Error;

/// Input was not a well-formed JSON array of server records.
#[derive(Debug, Error)]
#[error("failed to decode json: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
