use thiserror::Error;

/// A configuration snapshot that cannot be evaluated.
///
/// Never retriable: the settings have to be fixed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("required config key `{0}` is missing and has no default")]
    MissingKey(String),

    #[error("config key `{key}` has invalid value `{value}`, expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
