use thiserror::Error;

/// Everything that can stop a scan from producing a score.
///
/// Callers of the binary never see the variant; `ScanResponse::failure`
/// flattens it to the `Display` message.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("No input data received")]
    EmptyInput,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Input must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Field '{field}' must be a string")]
    InvalidField { field: &'static str },

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ScanError {
    /// Short machine-friendly label, used only in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::EmptyInput => "empty_input",
            ScanError::Io(_) => "io",
            ScanError::MalformedJson(_) => "malformed_json",
            ScanError::NotAnObject(_) => "not_an_object",
            ScanError::InvalidField { .. } => "invalid_field",
            ScanError::Internal(_) => "internal",
        }
    }
}
