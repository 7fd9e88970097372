use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreconError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Report generation error: {0}")]
    ReportError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PreconError {
    fn from(e: serde_json::Error) -> Self {
        PreconError::SerializationError(e.to_string())
    }
}
