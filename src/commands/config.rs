//! Configuration command definitions.
//!
//! This module defines CLI commands related to configuration management.

use crate::commands::params::{
    output_parameters, COMMAND_CONFIG, COMMAND_PATH, COMMAND_SET, COMMAND_SHOW,
    PARAMETER_ENDPOINT_URL, PARAMETER_PAGE_SIZE, PARAMETER_TIMEOUT, PARAMETER_TOKEN,
};
use clap::{Arg, ArgGroup, Command};

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Configuration management")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show the configuration, with the token masked")
                .args(output_parameters()),
        )
        .subcommand(Command::new(COMMAND_PATH).about("Show configuration file path"))
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Change configuration values")
                .arg(
                    Arg::new(PARAMETER_ENDPOINT_URL)
                        .long(PARAMETER_ENDPOINT_URL)
                        .num_args(1)
                        .value_name("URL")
                        .help("Neutron endpoint URL, e.g. http://controller:9696"),
                )
                .arg(
                    Arg::new(PARAMETER_TOKEN)
                        .long(PARAMETER_TOKEN)
                        .num_args(1)
                        .help("Authentication token; an empty value removes it"),
                )
                .arg(
                    Arg::new(PARAMETER_TIMEOUT)
                        .long(PARAMETER_TIMEOUT)
                        .num_args(1)
                        .value_name("SECONDS")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .help("HTTP request timeout in seconds"),
                )
                .arg(
                    Arg::new(PARAMETER_PAGE_SIZE)
                        .long(PARAMETER_PAGE_SIZE)
                        .num_args(1)
                        .value_name("SIZE")
                        .value_parser(clap::value_parser!(u32).range(1..))
                        .help("Default page size of list commands"),
                )
                .group(
                    ArgGroup::new("values")
                        .args([
                            PARAMETER_ENDPOINT_URL,
                            PARAMETER_TOKEN,
                            PARAMETER_TIMEOUT,
                            PARAMETER_PAGE_SIZE,
                        ])
                        .multiple(true)
                        .required(true),
                ),
        )
}
