//! Error types for the configuration system

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse config text
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Config contains invalid values
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Builds a validation error from every field-level failure
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        ConfigError::ValidationError(message)
    }
}

/// Validation error for a specific config field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the field (e.g., "scanner.status_clear_delay_ms")
    pub field: String,

    /// Human-readable error message
    pub message: String,

    /// The invalid value, if available
    pub value: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Creates a validation error with the invalid value
    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: Some(value.to_string()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)?;
        if let Some(ref value) = self.value {
            write!(f, " (got: {})", value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("lookup.user_agent", "must not be empty");
        assert_eq!(err.to_string(), "Field 'lookup.user_agent': must not be empty");
    }

    #[test]
    fn test_validation_error_with_value() {
        let err = ValidationError::with_value(
            "scanner.status_clear_delay_ms",
            "must be between 500 and 10000",
            "50",
        );
        assert_eq!(
            err.to_string(),
            "Field 'scanner.status_clear_delay_ms': must be between 500 and 10000 (got: 50)"
        );
    }

    #[test]
    fn test_from_validation_joins_messages() {
        let err = ConfigError::from_validation(&[
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]);
        let text = err.to_string();
        assert!(text.contains("Field 'a': first"));
        assert!(text.contains("Field 'b': second"));
    }
}
