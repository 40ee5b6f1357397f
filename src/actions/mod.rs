//! Command implementations.
//!
//! Each action reads its arguments from clap matches, talks to Neutron
//! through a [`crate::neutron_api::NeutronClient`] and returns the text to
//! print, so that the same code runs against the real API and test doubles.

use crate::commands::params::{PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_PRETTY};
use crate::error::CliError;
use crate::format::{OutputFormat, OutputFormatOptions};
use clap::ArgMatches;

pub mod associations;
pub mod config;
pub mod resources;

/// The output format selected by the `--format`, `--pretty` and `--headers` flags.
pub fn output_format(matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    let format_str = matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(String::as_str)
        .unwrap_or(crate::format::JSON);

    let options = OutputFormatOptions {
        with_headers: matches.get_flag(PARAMETER_HEADERS),
        pretty: matches.get_flag(PARAMETER_PRETTY),
    };

    Ok(OutputFormat::from_string_with_options(format_str, options)?)
}

/// All values of a repeatable string argument.
pub fn many_strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Split repeated `KEY=VALUE` arguments.
pub fn key_value_pairs(matches: &ArgMatches, id: &str) -> Result<Vec<(String, String)>, CliError> {
    many_strings(matches, id)
        .into_iter()
        .map(|raw| match raw.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(CliError::InvalidKeyValue(raw)),
        })
        .collect()
}

/// The single value of an argument clap has already made mandatory.
pub fn required_string<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str, CliError> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingRequiredArgument(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::params::attr_parameter;
    use clap::Command;

    fn attrs(args: &[&str]) -> Result<Vec<(String, String)>, CliError> {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        let matches = Command::new("test")
            .arg(attr_parameter())
            .try_get_matches_from(argv)
            .unwrap();
        key_value_pairs(&matches, "attr")
    }

    #[test]
    fn test_key_value_pairs() {
        assert_eq!(
            attrs(&["--attr", "name=web", "--attr", "note=a=b"]).unwrap(),
            vec![
                ("name".to_string(), "web".to_string()),
                ("note".to_string(), "a=b".to_string())
            ]
        );
        assert!(attrs(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_key_value_pairs_reject_missing_key() {
        assert!(matches!(
            attrs(&["--attr", "=x"]),
            Err(CliError::InvalidKeyValue(_))
        ));
        assert!(matches!(
            attrs(&["--attr", "novalue"]),
            Err(CliError::InvalidKeyValue(_))
        ));
    }
}
