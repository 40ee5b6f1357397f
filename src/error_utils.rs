//! Error handling utilities for the eayun-neutron CLI.
//!
//! This module provides consistent error reporting across commands so that
//! every failure ends up as a single line on stderr.

use crate::error::CliError;
use crate::exit_codes::NeutronExitCode;
use tracing::debug;

/// Report an error consistently with user-facing output.
pub fn report_error(error: &CliError) {
    debug!("{:?}", error);
    eprintln!("ERROR: {}", error);
    if let Some(hint) = hint_for(error) {
        eprintln!("{}", hint);
    }
}

/// Report a warning consistently with both logging and user-facing output.
pub fn report_warning<E: std::fmt::Display>(warning: &E) {
    tracing::warn!("{}", warning);
    eprintln!("Warning: {}", warning);
}

/// A follow-up line for errors the user can usually fix on their own.
pub fn hint_for(error: &CliError) -> Option<&'static str> {
    match error.exit_code() {
        NeutronExitCode::AuthError => {
            Some("Check the token given with --os-token, OS_TOKEN or 'config set --token'.")
        }
        NeutronExitCode::NetworkError => {
            Some("Check that the Neutron endpoint is reachable (--os-url or OS_URL).")
        }
        _ => None,
    }
}
