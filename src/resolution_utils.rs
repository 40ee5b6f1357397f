//! Resolution utilities for the eayun-neutron CLI.
//!
//! Users may refer to most resources by name. Before a request that needs an
//! identifier, the name is looked up in the resource's collection and
//! replaced by the matching ID.

use crate::body::ParsedInvocation;
use crate::error::CliError;
use crate::neutron_api::{ListQuery, NeutronClient};
use crate::resources::{Collection, FieldSpec, ResourceDescriptor};
use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

/// Resolve a name or ID of a resource in `collection` to its ID.
///
/// The collection is listed filtered by `name`, requesting only `id`.
/// Exactly one match yields its ID. No match yields the input unchanged, so
/// an ID passes straight through and an unknown name fails later with the
/// server's own not-found answer. Several matches are ambiguous.
///
/// # Arguments
/// * `client` - The Neutron API client
/// * `collection` - The collection the token names a member of
/// * `name_or_id` - The name or ID given on the command line
pub async fn resolve_name_or_id(
    client: &dyn NeutronClient,
    collection: &Collection,
    name_or_id: &str,
) -> Result<String, CliError> {
    debug!("Resolving {} '{}'", collection.resource, name_or_id);

    let page = client
        .list(collection, &ListQuery::by_name(name_or_id), None)
        .await
        .map_err(|e| CliError::remote(collection.resource, "list", name_or_id, e))?;

    let ids: Vec<String> = page
        .items
        .iter()
        .filter_map(|item| item.get("id").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    match ids.len() {
        0 => {
            trace!("No {} named '{}', using it as ID", collection.resource, name_or_id);
            Ok(name_or_id.to_string())
        }
        1 => {
            debug!("Resolved '{}' to ID '{}'", name_or_id, ids[0]);
            Ok(ids[0].clone())
        }
        _ => Err(CliError::AmbiguousName {
            resource: collection.resource.to_string(),
            name: name_or_id.to_string(),
            ids,
        }),
    }
}

/// Accept `value` only if it is a literal UUID.
pub fn require_uuid(descriptor: &ResourceDescriptor, value: &str) -> Result<String, CliError> {
    Uuid::parse_str(value)
        .map(|_| value.to_string())
        .map_err(|_| CliError::InvalidIdentifier {
            resource: descriptor.display.to_string(),
            value: value.to_string(),
        })
}

/// The identifier of the resource `token` refers to.
///
/// Names are resolved for kinds that allow them; the others take UUIDs only.
pub async fn identifier_for(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    token: &str,
) -> Result<String, CliError> {
    if descriptor.allow_names {
        resolve_name_or_id(client, &descriptor.collection, token).await
    } else {
        require_uuid(descriptor, token)
    }
}

/// Replace the names in fields that refer to other resources by their IDs.
pub async fn resolve_field_references(
    client: &dyn NeutronClient,
    fields: &[FieldSpec],
    invocation: &mut ParsedInvocation,
) -> Result<(), CliError> {
    for field in fields {
        let Some(collection) = field.resolve else {
            continue;
        };
        let Some(token) = invocation.get_str(field.name).map(str::to_string) else {
            continue;
        };
        let id = resolve_name_or_id(client, collection, &token).await?;
        invocation.set(field.name, Value::String(id));
    }
    Ok(())
}
