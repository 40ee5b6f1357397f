//! Resource command definitions.
//!
//! Every resource noun gets the same operations, built from its
//! [`ResourceDescriptor`]: the field tables become positional arguments,
//! options and switches, bespoke actions become extra subcommands.

use crate::commands::params::{
    attr_parameter, field_parameter, filter_parameter, output_parameters, page_size_parameter,
    resource_id_parameter, show_details_parameter, sort_dir_parameter, sort_key_parameter,
    COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST, COMMAND_SHOW, COMMAND_UPDATE,
};
use crate::resources::{Action, FieldKind, FieldSpec, ResourceDescriptor};
use clap::{Arg, ArgAction, Command};

/// Create the command of one resource noun with all its subcommands.
pub fn resource_command(descriptor: &ResourceDescriptor) -> Command {
    let mut command = Command::new(descriptor.command)
        .about(descriptor.about)
        .subcommand_required(true)
        .subcommand(list_command(descriptor))
        .subcommand(show_command(descriptor))
        .subcommand(create_command(descriptor))
        .subcommand(update_command(descriptor))
        .subcommand(delete_command(descriptor));

    for action in descriptor.actions {
        command = command.subcommand(action_command(action));
    }
    command
}

fn list_command(descriptor: &ResourceDescriptor) -> Command {
    Command::new(COMMAND_LIST)
        .about(format!("List {} resources", descriptor.display))
        .visible_alias("ls")
        .args(output_parameters())
        .arg(field_parameter())
        .arg(filter_parameter())
        .arg(sort_key_parameter())
        .arg(sort_dir_parameter())
        .arg(page_size_parameter())
        .arg(show_details_parameter())
}

fn show_command(descriptor: &ResourceDescriptor) -> Command {
    Command::new(COMMAND_SHOW)
        .about(format!("Show information of a given {}", descriptor.display))
        .arg(resource_id_parameter(
            &id_value_name(descriptor),
            id_help(descriptor, "look up"),
        ))
        .args(output_parameters())
        .arg(field_parameter())
}

fn create_command(descriptor: &ResourceDescriptor) -> Command {
    Command::new(COMMAND_CREATE)
        .about(format!("Create a {}", descriptor.display))
        .args(descriptor.create_fields.iter().map(field_argument))
        .args(output_parameters())
}

fn update_command(descriptor: &ResourceDescriptor) -> Command {
    Command::new(COMMAND_UPDATE)
        .about(format!("Update a given {}", descriptor.display))
        .arg(resource_id_parameter(
            &id_value_name(descriptor),
            id_help(descriptor, "update"),
        ))
        .args(descriptor.update_fields.iter().map(field_argument))
        .arg(attr_parameter())
}

fn delete_command(descriptor: &ResourceDescriptor) -> Command {
    Command::new(COMMAND_DELETE)
        .about(format!("Delete a given {}", descriptor.display))
        .arg(resource_id_parameter(
            &id_value_name(descriptor),
            id_help(descriptor, "delete"),
        ))
}

fn action_command(action: &Action) -> Command {
    Command::new(action.command_name())
        .about(action.about())
        .args(action.fields().iter().map(field_argument))
}

fn id_value_name(descriptor: &ResourceDescriptor) -> String {
    descriptor.display.to_uppercase()
}

fn id_help(descriptor: &ResourceDescriptor, verb: &str) -> String {
    if descriptor.allow_names {
        format!("ID or name of {} to {}", descriptor.display, verb)
    } else {
        format!("ID of {} to {}", descriptor.display, verb)
    }
}

/// The clap argument reading one field.
pub fn field_argument(field: &FieldSpec) -> Arg {
    let arg = Arg::new(field.name).help(field.help);

    let arg = match field.kind {
        FieldKind::Positional | FieldKind::CommaList => {
            arg.required(true).value_name(field.value_name())
        }
        FieldKind::Option => arg
            .long(field.name)
            .num_args(1)
            .required(field.required)
            .value_name(field.value_name()),
        FieldKind::InvertedSwitch => arg.long(field.name).action(ArgAction::SetTrue),
    };

    let arg = match field.alias {
        Some(alias) => arg.alias(alias),
        None => arg,
    };

    match field.choices {
        Some(choices) => arg.value_parser(choices.to_vec()),
        None => arg,
    }
}
