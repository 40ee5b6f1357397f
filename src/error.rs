use thiserror::Error;

use crate::{exit_codes::NeutronExitCode, neutron_api::ApiError};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// A required body field was not supplied
    #[error("Missing required field '{field}' for {resource}")]
    MissingRequiredField { resource: String, field: String },
    /// More than one resource carries the requested name
    #[error("Multiple {resource} matches found for name '{name}', use an ID to be more specific: {}", .ids.join(", "))]
    AmbiguousName {
        resource: String,
        name: String,
        ids: Vec<String>,
    },
    /// A name was given where only an ID is accepted
    #[error("Invalid {resource} identifier '{value}': names are not accepted, use the ID")]
    InvalidIdentifier { resource: String, value: String },
    /// The server does not know the resource
    #[error("Unable to find {resource} with name or id '{id}'")]
    NotFound { resource: String, id: String },
    /// Any other failure of an API call
    #[error("Failed to {operation} {resource}: {source}")]
    RemoteRequest {
        resource: String,
        operation: String,
        #[source]
        source: ApiError,
    },
    /// The API client could not be set up
    #[error("API client error: {0}")]
    ApiError(#[from] ApiError),
    /// A mandatory command-line argument was not supplied
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Malformed `key=value` argument
    #[error("Invalid argument '{0}', expected KEY=VALUE")]
    InvalidKeyValue(String),
}

impl CliError {
    /// Wrap an API failure with the resource and operation it happened in.
    ///
    /// A not-found answer becomes [`CliError::NotFound`] naming `id`.
    pub fn remote(resource: &str, operation: &str, id: &str, source: ApiError) -> CliError {
        if source.is_not_found() {
            CliError::NotFound {
                resource: resource.to_string(),
                id: id.to_string(),
            }
        } else {
            CliError::RemoteRequest {
                resource: resource.to_string(),
                operation: operation.to_string(),
                source,
            }
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> NeutronExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => NeutronExitCode::UsageError,
            CliError::ConfigurationError(_) => NeutronExitCode::ConfigError,
            CliError::FormattingError(_) => NeutronExitCode::DataError,
            CliError::MissingRequiredField { .. } => NeutronExitCode::UsageError,
            CliError::AmbiguousName { .. } => NeutronExitCode::UsageError,
            CliError::InvalidIdentifier { .. } => NeutronExitCode::UsageError,
            CliError::InvalidKeyValue(_) => NeutronExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => NeutronExitCode::UsageError,
            CliError::NotFound { .. } => NeutronExitCode::NotFound,
            CliError::RemoteRequest { source, .. } | CliError::ApiError(source) => {
                NeutronExitCode::from_api_error(source)
            }
        }
    }
}
