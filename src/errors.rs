use std::path::PathBuf;

use thiserror::Error;

use crate::provider::{supported_names, Provider};

/// Errors that can occur while resolving LLM configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `LLM_PROVIDER` is unset or empty.
    #[error(
        "LLM_PROVIDER environment variable is not set. Set it to OPEN_AI, ANTHROPIC, or GEMINI"
    )]
    MissingProvider,

    /// `LLM_PROVIDER` names a provider outside the supported set.
    #[error("unsupported LLM provider: {value}. Must be one of: {}", supported_names())]
    UnsupportedProvider { value: String },

    /// The API-key variable for the selected provider is unset or empty.
    #[error("{var} environment variable is not set. This is required for the {provider} provider")]
    MissingApiKey {
        provider: Provider,
        var: &'static str,
    },

    /// A variable is set but its value is not valid UTF-8.
    #[error("{var} environment variable is set but is not valid UTF-8")]
    NotUnicode { var: &'static str },

    /// An environment file could not be read or parsed.
    #[error("env file error: {}: {message}", .path.display())]
    EnvFile { path: PathBuf, message: String },
}

/// Convenience alias for `Result<T, ConfigError>`.
pub type Result<T> = std::result::Result<T, ConfigError>;
