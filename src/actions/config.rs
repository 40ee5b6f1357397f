//! The `config` commands.

use crate::{
    actions::output_format,
    commands::params::{PARAMETER_ENDPOINT_URL, PARAMETER_PAGE_SIZE, PARAMETER_TIMEOUT, PARAMETER_TOKEN},
    configuration::Configuration,
    error::CliError,
    format::Formattable,
};
use clap::ArgMatches;
use std::path::Path;
use tracing::debug;

/// Render the configuration with the token masked.
pub fn show_configuration(configuration: &Configuration, matches: &ArgMatches) -> Result<String, CliError> {
    let format = output_format(matches)?;
    Ok(configuration.redacted().format(&format)?)
}

pub fn configuration_path() -> Result<String, CliError> {
    let path = Configuration::get_default_configuration_file_path()?;
    Ok(path.display().to_string())
}

/// Apply the given values to `configuration` and save it to `path`.
pub fn set_configuration(
    mut configuration: Configuration,
    matches: &ArgMatches,
    path: &Path,
) -> Result<String, CliError> {
    if let Some(endpoint_url) = matches.get_one::<String>(PARAMETER_ENDPOINT_URL) {
        configuration.set_endpoint_url(endpoint_url)?;
    }
    if let Some(token) = matches.get_one::<String>(PARAMETER_TOKEN) {
        if token.is_empty() {
            configuration.clear_token();
        } else {
            configuration.set_token(token);
        }
    }
    if let Some(timeout) = matches.get_one::<u64>(PARAMETER_TIMEOUT) {
        configuration.set_timeout_secs(*timeout);
    }
    if let Some(page_size) = matches.get_one::<u32>(PARAMETER_PAGE_SIZE) {
        configuration.set_page_size(*page_size);
    }

    debug!("Saving configuration to {}", path.display());
    configuration.save(path)?;
    Ok(format!("Configuration saved to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::config_command;

    fn sub_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["config"];
        argv.extend_from_slice(args);
        let matches = config_command().try_get_matches_from(argv).unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn test_set_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let message = set_configuration(
            Configuration::default(),
            &sub_matches(&[
                "set",
                "--endpoint-url",
                "http://controller:9696",
                "--token",
                "secret",
                "--page-size",
                "25",
            ]),
            &path,
        )
        .unwrap();
        assert!(message.starts_with("Configuration saved to"));

        let saved = Configuration::load_from_file(&path).unwrap();
        assert_eq!(saved.page_size(), Some(25));
        assert_eq!(saved.token(), Some("secret"));

        let shown = show_configuration(&saved, &sub_matches(&["show"])).unwrap();
        assert!(shown.contains("http://controller:9696"));
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn test_empty_token_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let mut configuration = Configuration::default();
        configuration.set_token("old");

        set_configuration(configuration, &sub_matches(&["set", "--token", ""]), &path).unwrap();

        assert_eq!(Configuration::load_from_file(&path).unwrap().token(), None);
    }

    #[test]
    fn test_set_rejects_invalid_url() {
        let dir = tempfile::tempdir().unwrap();
        let err = set_configuration(
            Configuration::default(),
            &sub_matches(&["set", "--endpoint-url", "controller"]),
            &dir.path().join("config.yml"),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfigurationError(_)));
    }
}
