//! Error types for the ORIM generator.

use orim_define::DefineError;
use strum::Display;
use thiserror::Error;

/// Broad classification of a [`GeneratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// The model descriptor or configuration is unusable as given.
    Configuration,
    /// A field could not be turned into code.
    Generation,
    /// Reading configuration from disk failed.
    Io,
}

/// Errors that can occur while assembling a generation context.
///
/// Every error is local to one model; other models are unaffected.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No field's upper-case identifier is `ID`.
    #[error("Model '{model}' has no identity field (a field whose upper-case name is 'ID')")]
    MissingIdentityField { model: String },

    /// More than one field's upper-case identifier is `ID`.
    #[error("Model '{model}' declares more than one identity field")]
    DuplicateIdentityField { model: String },

    /// The identity field opens the default-value aggregate, so it has to
    /// be processed before any other field.
    #[error("Model '{model}': field '{field}' is declared before the identity field")]
    IdentityNotFirst { model: String, field: String },

    /// Two fields share a raw name.
    #[error("Model '{model}' declares field '{field}' more than once")]
    DuplicateField { model: String, field: String },

    /// Two distinct raw names derive the same mixed-case identifier, so
    /// their key constants, accessors and validators would clash.
    #[error(
        "Naming collision in model '{model}': fields '{first}' and '{second}' both map to '{identifier}'"
    )]
    NamingCollision {
        model: String,
        /// The earlier of the two fields.
        first: String,
        /// The field that collides with it.
        second: String,
        /// The shared mixed-case identifier.
        identifier: String,
    },

    /// A field's pattern is not a valid ECMAScript regular expression.
    #[error("Invalid pattern for field '{field}' of model '{model}': {source}")]
    InvalidPattern {
        model: String,
        field: String,
        #[source]
        source: regress::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to read a configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::config::GeneratorConfig`]
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to parse a model descriptor document
    #[error(transparent)]
    ParseError(#[from] DefineError),

    /// The template renderer rejected the context
    #[error("Template rendering failed: {0}")]
    RenderError(String),
}

impl GeneratorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeneratorError::MissingIdentityField { .. }
            | GeneratorError::DuplicateIdentityField { .. }
            | GeneratorError::IdentityNotFirst { .. }
            | GeneratorError::DuplicateField { .. }
            | GeneratorError::NamingCollision { .. }
            | GeneratorError::ConfigError(_)
            | GeneratorError::ConfigParse(_)
            | GeneratorError::ParseError(_) => ErrorKind::Configuration,
            GeneratorError::InvalidPattern { .. } | GeneratorError::RenderError(_) => {
                ErrorKind::Generation
            }
            GeneratorError::ConfigRead { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_identity_is_configuration_kind() {
        let err = GeneratorError::MissingIdentityField {
            model: "User".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("'User'"));
    }

    #[test]
    fn invalid_pattern_names_field_and_model() {
        let source = regress::Regex::new("(").unwrap_err();
        let err = GeneratorError::InvalidPattern {
            model: "User".to_string(),
            field: "zip".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Generation);
        let message = err.to_string();
        assert!(message.contains("'zip'"));
        assert!(message.contains("'User'"));
    }

    #[test]
    fn config_read_is_io_kind() {
        let err = GeneratorError::ConfigRead {
            path: "orim.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(ErrorKind::Io.to_string(), "Io");
    }
}
