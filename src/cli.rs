use crate::{
    actions::{associations, config as config_actions, resources as resource_actions},
    commands::{
        COMMAND_CONFIG, COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST, COMMAND_PATH, COMMAND_SET,
        COMMAND_SHOW, COMMAND_UPDATE, PARAMETER_OS_TOKEN, PARAMETER_OS_URL,
    },
    configuration::Configuration,
    error::CliError,
    error_utils::report_warning,
    neutron_api::{NeutronApiClient, NeutronClient},
    resources::{self, ResourceDescriptor},
};
use clap::ArgMatches;
use tracing::debug;

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    let message = match sub_matches.subcommand() {
        Some(m) => m.0,
        None => "unknown",
    };

    message.to_string()
}

/// Execute the parsed command line and return what should be printed.
pub async fn execute_command(matches: &ArgMatches) -> Result<String, CliError> {
    match matches.subcommand() {
        Some((COMMAND_CONFIG, sub_matches)) => execute_config_command(sub_matches),
        Some((noun, sub_matches)) => {
            let descriptor = resources::find(noun)
                .ok_or_else(|| CliError::UnsupportedSubcommand(noun.to_string()))?;
            let configuration = Configuration::load_or_default()?.with_overrides(
                matches.get_one::<String>(PARAMETER_OS_URL),
                matches.get_one::<String>(PARAMETER_OS_TOKEN),
            )?;
            let client = NeutronApiClient::from_configuration(&configuration)?;

            execute_resource_command(&client, descriptor, sub_matches, configuration.page_size())
                .await
        }
        None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            matches,
        ))),
    }
}

fn execute_config_command(sub_matches: &ArgMatches) -> Result<String, CliError> {
    match sub_matches.subcommand() {
        Some((COMMAND_SHOW, sub_matches)) => {
            let configuration = Configuration::load_or_default()?;
            config_actions::show_configuration(&configuration, sub_matches)
        }
        Some((COMMAND_PATH, _)) => config_actions::configuration_path(),
        Some((COMMAND_SET, sub_matches)) => {
            let path = Configuration::get_default_configuration_file_path()?;
            // A corrupt file is rewritten from defaults
            let configuration = Configuration::load_or_default().unwrap_or_else(|e| {
                report_warning(&format!("{}; starting from defaults", e));
                Configuration::default()
            });
            config_actions::set_configuration(configuration, sub_matches, &path)
        }
        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            sub_matches,
        ))),
    }
}

/// Dispatch the operation of one resource noun.
pub async fn execute_resource_command(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    sub_matches: &ArgMatches,
    default_page_size: Option<u32>,
) -> Result<String, CliError> {
    let Some((operation, op_matches)) = sub_matches.subcommand() else {
        return Err(CliError::UnsupportedSubcommand(descriptor.command.to_string()));
    };
    debug!("Executing {} {}", descriptor.command, operation);

    match operation {
        COMMAND_LIST => {
            resource_actions::list_resources(client, descriptor, op_matches, default_page_size)
                .await
        }
        COMMAND_SHOW => resource_actions::show_resource(client, descriptor, op_matches).await,
        COMMAND_CREATE => resource_actions::create_resource(client, descriptor, op_matches).await,
        COMMAND_UPDATE => resource_actions::update_resource(client, descriptor, op_matches).await,
        COMMAND_DELETE => resource_actions::delete_resource(client, descriptor, op_matches).await,
        other => {
            let action = descriptor
                .actions
                .iter()
                .find(|a| a.command_name() == other)
                .copied()
                .ok_or_else(|| {
                    CliError::UnsupportedSubcommand(format!("{} {}", descriptor.command, other))
                })?;
            associations::run_action(client, descriptor, action, op_matches).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli_command;
    use crate::testing::FakeClient;
    use serde_json::json;

    async fn dispatch(client: &FakeClient, args: &[&str]) -> Result<String, CliError> {
        let mut argv = vec!["eayun-neutron"];
        argv.extend_from_slice(args);
        let matches = build_cli_command().try_get_matches_from(argv).unwrap();
        let (noun, sub_matches) = matches.subcommand().unwrap();
        let descriptor = resources::find(noun).unwrap();
        execute_resource_command(client, descriptor, sub_matches, None).await
    }

    #[tokio::test]
    async fn test_dispatch_crud() {
        let client = FakeClient::new();

        let output = dispatch(&client, &["pptp-credential", "create", "alice", "s3cret"])
            .await
            .unwrap();
        assert!(output.starts_with("Created a new pptp_credential:"));
        assert_eq!(
            client.last_call().body.unwrap(),
            json!({"pptp_credential": {"username": "alice", "password": "s3cret"}})
        );

        let output = dispatch(&client, &["portmapping", "delete", "pm-1"]).await.unwrap();
        assert_eq!(output, "Deleted portmapping: pm-1");
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let client = FakeClient::new();

        let output = dispatch(&client, &["l7rule", "disassociate", "r-1", "p-1"])
            .await
            .unwrap();

        assert_eq!(output, "Disassociated l7rule r-1");
    }

    #[tokio::test]
    async fn test_dispatch_list_alias() {
        let client = FakeClient::new().with_page(vec![json!({"id": "1"})], None);

        let output = dispatch(&client, &["qos-filter", "ls", "-F", "id"]).await.unwrap();

        assert_eq!(output, r#"[{"id":"1"}]"#);
    }
}
