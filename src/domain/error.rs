use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("field `{field}` must not be empty")]
    Required { field: &'static str },
}

impl DomainError {
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }
}

/// Reject values that are empty or whitespace-only.
pub fn ensure_filled(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(())
}
