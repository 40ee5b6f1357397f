//! Bespoke actions: bindings and associations that are not plain CRUD.

use crate::{
    body::{
        associate_rule_body, is_present, subnet_ids_body, unattach_qos_filter_body,
        unbind_qos_body, ParsedInvocation,
    },
    commands::params::PARAMETER_SUBNETS,
    error::CliError,
    neutron_api::NeutronClient,
    resolution_utils::{identifier_for, resolve_name_or_id},
    resources::{lbaas::L7POLICY_COLLECTION, Action, ResourceDescriptor},
};
use clap::ArgMatches;
use tracing::debug;

/// Run `action` of `descriptor` and return its confirmation line.
pub async fn run_action(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    action: Action,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    let fields = action.fields();
    let invocation = ParsedInvocation::from_matches(fields, matches);
    let argument = |index: usize| -> Result<String, CliError> {
        fields
            .get(index)
            .and_then(|field| invocation.get_str(field.name))
            .map(str::to_string)
            .ok_or_else(|| {
                CliError::MissingRequiredArgument(
                    fields.get(index).map(|f| f.name).unwrap_or("?").to_string(),
                )
            })
    };

    debug!("Running {} {}", descriptor.command, action.command_name());

    match action {
        Action::UnbindQos | Action::UnattachQosFilter => {
            let token = argument(0)?;
            let id = identifier_for(client, descriptor, &token).await?;
            let body = if action == Action::UnbindQos {
                unbind_qos_body()
            } else {
                unattach_qos_filter_body()
            };
            client
                .update(&descriptor.collection, &id, &body)
                .await
                .map_err(|e| CliError::remote(descriptor.display, "update", &token, e))?;
            Ok(format!("Updated {}: {}", descriptor.display, token))
        }
        Action::BindSubnets | Action::UnbindSubnets => {
            let token = argument(0)?;
            let subnets = invocation
                .get(PARAMETER_SUBNETS)
                .filter(|value| is_present(value))
                .cloned()
                .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_SUBNETS.to_string()))?;
            let id = identifier_for(client, descriptor, &token).await?;
            let body = subnet_ids_body(&subnets);

            if action == Action::BindSubnets {
                client
                    .bind_subnets(&id, &body)
                    .await
                    .map_err(|e| CliError::remote(descriptor.display, "bind", &token, e))?;
                Ok(format!("Bound EayunStack ACL {} to subnets.", token))
            } else {
                client
                    .unbind_subnets(&id, &body)
                    .await
                    .map_err(|e| CliError::remote(descriptor.display, "unbind", &token, e))?;
                Ok(format!("Unbound EayunStack ACL {} from subnets.", token))
            }
        }
        Action::AssociateRule | Action::DisassociateRule => {
            let rule_id = argument(0)?;
            let policy_token = argument(1)?;
            let policy_id = resolve_name_or_id(client, &L7POLICY_COLLECTION, &policy_token).await?;

            if action == Action::AssociateRule {
                client
                    .associate_rule(&policy_id, &associate_rule_body(&rule_id))
                    .await
                    .map_err(|e| CliError::remote("l7policy", "associate", &policy_token, e))?;
                Ok(format!("Associated l7rule {}", rule_id))
            } else {
                client
                    .disassociate_rule(&policy_id, &rule_id)
                    .await
                    .map_err(|e| CliError::remote("l7policy", "disassociate", &policy_token, e))?;
                Ok(format!("Disassociated l7rule {}", rule_id))
            }
        }
    }
}
