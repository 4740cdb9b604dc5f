use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation for a single input, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }

    /// Record an error when a required string is empty.
    pub fn require_non_empty(&mut self, field: &'static str, value: &str) {
        if value.is_empty() {
            self.push(field, "must not be empty");
        }
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn contains(&self, field: &str) -> bool { self.0.iter().any(|e| e.field == field) }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ModelError> {
        if self.is_empty() { Ok(value) } else { Err(ModelError::Validation(self)) }
    }
}

impl From<FieldError> for FieldErrors {
    fn from(e: FieldError) -> Self { Self(vec![e]) }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 { f.write_str("; ")?; }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}
