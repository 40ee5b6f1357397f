//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across the resource
//! commands. It provides a centralized place to define parameter names and
//! common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};

// CRUD operations
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_DELETE: &str = "delete";

// Config commands
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SET: &str = "set";

// Global parameter names
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_OS_URL: &str = "os-url";
pub const PARAMETER_OS_TOKEN: &str = "os-token";

// Parameter names
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_ID: &str = "resource_id";
pub const PARAMETER_FIELD: &str = "field";
pub const PARAMETER_SORT_KEY: &str = "sort-key";
pub const PARAMETER_SORT_DIR: &str = "sort-dir";
pub const PARAMETER_PAGE_SIZE: &str = "page-size";
pub const PARAMETER_FILTER: &str = "filter";
pub const PARAMETER_ATTR: &str = "attr";
pub const PARAMETER_SHOW_DETAILS: &str = "show-details";

// Bespoke action parameters
pub const PARAMETER_ACL: &str = "es_acl";
pub const PARAMETER_SUBNETS: &str = "subnets";
pub const PARAMETER_L7RULE_ID: &str = "l7rule_id";
pub const PARAMETER_L7POLICY: &str = "l7policy";

// Config parameters
pub const PARAMETER_ENDPOINT_URL: &str = "endpoint-url";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_TIMEOUT: &str = "timeout";

pub const ENV_FORMAT: &str = "EAYUN_NEUTRON_FORMAT";
pub const ENV_OS_URL: &str = "OS_URL";
pub const ENV_OS_TOKEN: &str = "OS_TOKEN";

/// Create the format parameter.
///
/// This parameter is used across multiple commands for output formatting.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env(ENV_FORMAT)
        .default_value("json")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Format the output pretty")
}

pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Format the output with headers")
}

/// The three output formatting parameters, in the order they are shown.
pub fn output_parameters() -> [Arg; 3] {
    [
        format_parameter(),
        format_pretty_parameter(),
        format_with_headers_parameter(),
    ]
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

pub fn os_url_parameter() -> Arg {
    Arg::new(PARAMETER_OS_URL)
        .long(PARAMETER_OS_URL)
        .alias("os_url")
        .num_args(1)
        .env(ENV_OS_URL)
        .global(true)
        .value_name("URL")
        .help("Neutron endpoint URL, overrides the configured endpoint_url")
}

pub fn os_token_parameter() -> Arg {
    Arg::new(PARAMETER_OS_TOKEN)
        .long(PARAMETER_OS_TOKEN)
        .alias("os_token")
        .num_args(1)
        .env(ENV_OS_TOKEN)
        .hide_env_values(true)
        .global(true)
        .value_name("TOKEN")
        .help("Authentication token, overrides the configured token")
}

/// Positional name or ID of the resource an operation acts on.
pub fn resource_id_parameter(value_name: &str, help: String) -> Arg {
    Arg::new(PARAMETER_ID)
        .required(true)
        .value_name(value_name.to_string())
        .help(help)
}

pub fn field_parameter() -> Arg {
    Arg::new(PARAMETER_FIELD)
        .short('F')
        .long(PARAMETER_FIELD)
        .action(ArgAction::Append)
        .value_name("FIELD")
        .help("Specify the field(s) to be returned by server, can be repeated")
}

pub fn sort_key_parameter() -> Arg {
    Arg::new(PARAMETER_SORT_KEY)
        .long(PARAMETER_SORT_KEY)
        .alias("sort_key")
        .action(ArgAction::Append)
        .value_name("FIELD")
        .help("Sorts the list by the specified fields, can be repeated")
}

pub fn sort_dir_parameter() -> Arg {
    Arg::new(PARAMETER_SORT_DIR)
        .long(PARAMETER_SORT_DIR)
        .alias("sort_dir")
        .action(ArgAction::Append)
        .value_parser(["asc", "desc"])
        .help("Sorts the list in the specified direction, can be repeated")
}

pub fn page_size_parameter() -> Arg {
    Arg::new(PARAMETER_PAGE_SIZE)
        .short('P')
        .long(PARAMETER_PAGE_SIZE)
        .alias("page_size")
        .num_args(1)
        .value_name("SIZE")
        .value_parser(clap::value_parser!(u32).range(1..))
        .help("Specify retrieve unit of each request, then split one request to several requests")
}

pub fn filter_parameter() -> Arg {
    Arg::new(PARAMETER_FILTER)
        .long(PARAMETER_FILTER)
        .action(ArgAction::Append)
        .value_name("KEY=VALUE")
        .help("Only list resources whose attribute KEY equals VALUE, can be repeated")
}

pub fn attr_parameter() -> Arg {
    Arg::new(PARAMETER_ATTR)
        .long(PARAMETER_ATTR)
        .action(ArgAction::Append)
        .value_name("KEY=VALUE")
        .help("Additional attribute to update, can be repeated")
}

pub fn show_details_parameter() -> Arg {
    Arg::new(PARAMETER_SHOW_DETAILS)
        .short('D')
        .long(PARAMETER_SHOW_DETAILS)
        .alias("show_details")
        .action(ArgAction::SetTrue)
        .help("Show detailed information")
}
