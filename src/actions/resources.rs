//! The list/show/create/update/delete operations shared by every resource.

use crate::{
    actions::{key_value_pairs, many_strings, output_format, required_string},
    body::{build_body, merge_extra_attributes, ParsedInvocation},
    commands::params::{
        PARAMETER_ATTR, PARAMETER_FIELD, PARAMETER_FILTER, PARAMETER_ID, PARAMETER_PAGE_SIZE,
        PARAMETER_SHOW_DETAILS, PARAMETER_SORT_DIR, PARAMETER_SORT_KEY,
    },
    error::CliError,
    error_utils,
    format::{Formattable, Listing, Record},
    neutron_api::{ListQuery, NeutronClient},
    resolution_utils::{identifier_for, resolve_field_references},
    resources::ResourceDescriptor,
    shaping::shape,
};
use clap::ArgMatches;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// List every resource of a kind, following pagination links.
pub async fn list_resources(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    matches: &ArgMatches,
    default_page_size: Option<u32>,
) -> Result<String, CliError> {
    let format = output_format(matches)?;
    let fields = many_strings(matches, PARAMETER_FIELD);

    let query = ListQuery {
        fields: fields.clone(),
        filters: key_value_pairs(matches, PARAMETER_FILTER)?,
        sort_keys: many_strings(matches, PARAMETER_SORT_KEY),
        sort_dirs: many_strings(matches, PARAMETER_SORT_DIR),
        page_size: matches
            .get_one::<u32>(PARAMETER_PAGE_SIZE)
            .copied()
            .or(default_page_size),
    };

    let mut items = Vec::new();
    let mut marker: Option<String> = None;
    let mut seen = HashSet::new();
    loop {
        let page = client
            .list(&descriptor.collection, &query, marker.as_deref())
            .await
            .map_err(|e| CliError::remote(descriptor.display, "list", "", e))?;
        trace!("Received {} {} items", page.items.len(), descriptor.display);
        items.extend(page.items);

        match page.next_marker {
            Some(next) if seen.insert(next.clone()) => marker = Some(next),
            Some(next) => {
                warn!("Stopped paging {}: marker {} came back", descriptor.display, next);
                break;
            }
            None => break,
        }
    }

    let columns = if !fields.is_empty() {
        fields
    } else if matches.get_flag(PARAMETER_SHOW_DETAILS) {
        Vec::new()
    } else {
        descriptor.list_columns.iter().map(|c| c.to_string()).collect()
    };

    let listing = Listing::new(columns, items);
    debug!(
        "Listed {} {} resources with columns {:?}",
        listing.len(),
        descriptor.display,
        listing.columns()
    );
    Ok(listing.format(&format)?)
}

/// Show one resource.
pub async fn show_resource(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    let format = output_format(matches)?;
    let token = required_string(matches, PARAMETER_ID)?;
    let id = identifier_for(client, descriptor, token).await?;
    let fields = many_strings(matches, PARAMETER_FIELD);

    let envelope = client
        .show(&descriptor.collection, &id, &fields)
        .await
        .map_err(|e| CliError::remote(descriptor.display, "show", token, e))?;

    let record = Record::from_envelope(shape(descriptor, envelope), descriptor.wire_key());
    Ok(record.format(&format)?)
}

/// Create a resource from the create fields of `descriptor`.
pub async fn create_resource(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    let format = output_format(matches)?;
    let mut invocation = ParsedInvocation::from_matches(descriptor.create_fields, matches);
    resolve_field_references(client, descriptor.create_fields, &mut invocation).await?;
    let body = build_body(descriptor, descriptor.create_fields, &invocation)?;

    let envelope = client
        .create(&descriptor.collection, &body)
        .await
        .map_err(|e| CliError::remote(descriptor.display, "create", "", e))?;

    let record = Record::from_envelope(shape(descriptor, envelope), descriptor.wire_key());
    Ok(format!(
        "Created a new {}:\n{}",
        descriptor.display,
        record.format(&format)?
    ))
}

/// Update the supplied attributes of a resource.
pub async fn update_resource(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    let token = required_string(matches, PARAMETER_ID)?;
    let id = identifier_for(client, descriptor, token).await?;

    let mut invocation = ParsedInvocation::from_matches(descriptor.update_fields, matches);
    resolve_field_references(client, descriptor.update_fields, &mut invocation).await?;
    let mut body = build_body(descriptor, descriptor.update_fields, &invocation)?;
    merge_extra_attributes(
        &mut body,
        descriptor.wire_key(),
        &key_value_pairs(matches, PARAMETER_ATTR)?,
    );

    client
        .update(&descriptor.collection, &id, &body)
        .await
        .map_err(|e| CliError::remote(descriptor.display, "update", token, e))?;

    Ok(format!("Updated {}: {}", descriptor.display, token))
}

/// Delete a resource; deleting one that does not exist only warns.
pub async fn delete_resource(
    client: &dyn NeutronClient,
    descriptor: &ResourceDescriptor,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    let token = required_string(matches, PARAMETER_ID)?;
    let id = identifier_for(client, descriptor, token).await?;

    match client.delete(&descriptor.collection, &id).await {
        Ok(()) => Ok(format!("Deleted {}: {}", descriptor.display, token)),
        Err(e) if e.is_not_found() => {
            error_utils::report_warning(&CliError::remote(descriptor.display, "delete", token, e));
            Ok(String::new())
        }
        Err(e) => Err(CliError::remote(descriptor.display, "delete", token, e)),
    }
}
