//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Resource nouns are generated from the resource descriptors; the remaining
//! command groups live in their own files.

use clap::{ArgMatches, Command};

pub mod config;
pub mod params;
pub mod resource;

pub use params::{
    COMMAND_CONFIG, COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST, COMMAND_PATH, COMMAND_SET,
    COMMAND_SHOW, COMMAND_UPDATE, PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_OS_TOKEN,
    PARAMETER_OS_URL, PARAMETER_PRETTY, PARAMETER_VERBOSE,
};

/// Build the complete command tree.
pub fn build_cli_command() -> Command {
    let mut command = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::verbose_parameter())
        .arg(params::os_url_parameter())
        .arg(params::os_token_parameter());

    for descriptor in crate::resources::all() {
        command = command.subcommand(resource::resource_command(descriptor));
    }

    command.subcommand(config::config_command())
}

/// Create and configure all CLI commands and parse the process arguments.
///
/// # Returns
///
/// An `ArgMatches` instance containing the parsed command-line arguments.
pub fn create_cli_commands() -> ArgMatches {
    build_cli_command().get_matches()
}
