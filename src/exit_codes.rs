//! Custom exit codes for the eayun-neutron application
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

use crate::neutron_api::ApiError;

/// Custom exit codes for eayun-neutron
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeutronExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// Data format error (65) - Input data was incorrect
    DataError = 65,

    /// Addressee unknown (67) - Resource not found
    NotFound = 67,

    /// Configuration error (78) - Application configuration issue
    ConfigError = 78,

    /// Authentication error (100) - Token rejected
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl NeutronExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_api_error(error: &ApiError) -> NeutronExitCode {
        match error {
            ApiError::HttpError(_) => NeutronExitCode::NetworkError,
            ApiError::JsonError(_) | ApiError::UnexpectedResponse(_) => NeutronExitCode::DataError,
            ApiError::UrlError(_) => NeutronExitCode::ConfigError,
            ApiError::NotFound { .. } => NeutronExitCode::NotFound,
            ApiError::Unauthorized { .. } => NeutronExitCode::AuthError,
            ApiError::Remote { .. } => NeutronExitCode::ApiError,
        }
    }
}

impl From<NeutronExitCode> for i32 {
    fn from(code: NeutronExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(NeutronExitCode::Success.code(), 0);
        assert_eq!(i32::from(NeutronExitCode::ConfigError), 78);
        assert_eq!(
            NeutronExitCode::from_api_error(&ApiError::Unauthorized {
                status: 401,
                message: String::new()
            }),
            NeutronExitCode::AuthError
        );
    }
}
