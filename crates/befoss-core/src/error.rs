//! Error types for the licence wizard.
//!
//! Only [`BefossError::Validation`] is recoverable: an interactive prompt shows the
//! message and asks again. Every other variant ends the run.

use thiserror::Error;

/// Main error type for befoss operations.
#[derive(Error, Debug)]
pub enum BefossError {
    /// A prompt answer failed its validator.
    #[error("{0}")]
    Validation(String),

    /// The licence key is not registered in the catalog.
    #[error("Licence '{0}' is not in the catalog")]
    NotFound(String),

    /// A template failed to parse or referenced a missing field.
    #[error("Could not render template: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Reading or writing an output file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The prompt provider itself failed (non-interactive terminal, aborted input).
    #[error("Prompt failed: {0}")]
    Provider(#[source] std::io::Error),
}

impl BefossError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        BefossError::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the wizard may recover by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BefossError::Validation(_))
    }
}

/// Result type alias for befoss operations.
pub type Result<T> = std::result::Result<T, BefossError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_errors_are_recoverable() {
        assert!(BefossError::Validation("too short".into()).is_recoverable());
        assert!(!BefossError::NotFound("zed".into()).is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!BefossError::io("Could not create LICENCE", io).is_recoverable());
    }

    #[test]
    fn io_error_message_includes_context() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BefossError::io("Could not create LICENCE", io);
        assert_eq!(err.to_string(), "Could not create LICENCE: denied");
    }
}
