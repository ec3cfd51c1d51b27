/// Domain-level errors raised before any SQL executes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A query parameter failed validation. Names the offending field so
    /// callers can surface it without parsing the message.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
}

impl CoreError {
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::InvalidParameter { field, .. } => field,
        }
    }
}
