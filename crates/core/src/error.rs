use thiserror::Error;

/// Domain-level errors.
///
/// Decode problems never surface as errors (malformed sub-structures fall
/// back to empty defaults so one bad record cannot break a list view), so
/// the only variant is input validation, raised before any external call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A create/update payload failed validation.
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
