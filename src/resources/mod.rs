//! Static descriptors for the EayunStack Neutron extension resources.
//!
//! Every resource kind the CLI knows about is described once by a
//! [`ResourceDescriptor`]. The generic command builder, the body builder and
//! the response shaper are all driven by these tables, so adding a resource
//! means adding a descriptor rather than new command code.

pub mod es_acl;
pub mod lbaas;
pub mod portmapping;
pub mod pptp;
pub mod qos;

use crate::commands::params::{
    PARAMETER_ACL, PARAMETER_L7POLICY, PARAMETER_L7RULE_ID, PARAMETER_SUBNETS,
};

/// A REST collection: the wire-schema key of a single object, the key of the
/// list envelope and the path of the collection below the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    /// Wire-schema key, e.g. `qos_queue`.
    pub resource: &'static str,
    /// Key of the list envelope, e.g. `qos_queues`.
    pub plural: &'static str,
    /// Collection path, e.g. `/eayun_qos/qos_queues`.
    pub path: &'static str,
    /// Endpoint resource name when it differs from the wire key.
    pub shadow: Option<&'static str>,
}

impl Collection {
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    /// Name used for the endpoint in logs and error context.
    pub fn endpoint_name(&self) -> &'static str {
        self.shadow.unwrap_or(self.resource)
    }
}

/// How a field is read from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Positional argument, always required.
    Positional,
    /// `--flag VALUE` option.
    Option,
    /// Switch that stores `false` when given and `true` otherwise
    /// (e.g. `--admin-state-down` feeding `admin_state_up`).
    InvertedSwitch,
    /// Positional argument holding a comma separated list.
    CommaList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Argument id and key in the parsed invocation.
    pub name: &'static str,
    /// Key of the value in the request body.
    pub wire_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub help: &'static str,
    /// Hidden underscore spelling kept for backward compatibility.
    pub alias: Option<&'static str>,
    pub choices: Option<&'static [&'static str]>,
    pub metavar: Option<&'static str>,
    /// Collection the value names; resolved to an id before the body is built.
    pub resolve: Option<&'static Collection>,
}

impl FieldSpec {
    pub const fn positional(name: &'static str, wire_key: &'static str, help: &'static str) -> Self {
        FieldSpec {
            name,
            wire_key,
            kind: FieldKind::Positional,
            required: true,
            help,
            alias: None,
            choices: None,
            metavar: None,
            resolve: None,
        }
    }

    pub const fn option(name: &'static str, wire_key: &'static str, help: &'static str) -> Self {
        FieldSpec {
            name,
            wire_key,
            kind: FieldKind::Option,
            required: false,
            help,
            alias: None,
            choices: None,
            metavar: None,
            resolve: None,
        }
    }

    pub const fn switch_off(name: &'static str, wire_key: &'static str, help: &'static str) -> Self {
        FieldSpec {
            name,
            wire_key,
            kind: FieldKind::InvertedSwitch,
            required: true,
            help,
            alias: None,
            choices: None,
            metavar: None,
            resolve: None,
        }
    }

    pub const fn comma_list(name: &'static str, wire_key: &'static str, help: &'static str) -> Self {
        FieldSpec {
            name,
            wire_key,
            kind: FieldKind::CommaList,
            required: true,
            help,
            alias: None,
            choices: None,
            metavar: None,
            resolve: None,
        }
    }

    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }

    pub const fn metavar(mut self, metavar: &'static str) -> Self {
        self.metavar = Some(metavar);
        self
    }

    pub const fn resolve(mut self, collection: &'static Collection) -> Self {
        self.resolve = Some(collection);
        self
    }

    /// Default metavar: the uppercased field name.
    pub fn value_name(&self) -> String {
        self.metavar
            .map(str::to_string)
            .unwrap_or_else(|| self.name.to_uppercase())
    }
}

/// Bespoke, non-CRUD commands a resource exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `qos unbind`: clear the QoS target.
    UnbindQos,
    /// `qos-filter unattach`: detach the filter from its queue.
    UnattachQosFilter,
    /// `es-acl bind-subnets`.
    BindSubnets,
    /// `es-acl unbind-subnets`.
    UnbindSubnets,
    /// `l7rule associate`.
    AssociateRule,
    /// `l7rule disassociate`.
    DisassociateRule,
}

impl Action {
    pub fn command_name(&self) -> &'static str {
        match self {
            Action::UnbindQos => "unbind",
            Action::UnattachQosFilter => "unattach",
            Action::BindSubnets => "bind-subnets",
            Action::UnbindSubnets => "unbind-subnets",
            Action::AssociateRule => "associate",
            Action::DisassociateRule => "disassociate",
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Action::UnbindQos => "Unbind a given qos from its target",
            Action::UnattachQosFilter => "Unattach a given qos filter from its queue",
            Action::BindSubnets => "Bind a given EayunStack ACL to subnets",
            Action::UnbindSubnets => "Unbind a given EayunStack ACL from subnets",
            Action::AssociateRule => "Create a mapping between a l7rule and a l7policy",
            Action::DisassociateRule => "Remove a mapping from a l7rule to l7policy",
        }
    }

    /// Arguments of the action, in command-line order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Action::UnbindQos => &UNBIND_QOS_FIELDS,
            Action::UnattachQosFilter => &UNATTACH_QOS_FILTER_FIELDS,
            Action::BindSubnets => &BIND_SUBNETS_FIELDS,
            Action::UnbindSubnets => &UNBIND_SUBNETS_FIELDS,
            Action::AssociateRule => &ASSOCIATE_RULE_FIELDS,
            Action::DisassociateRule => &DISASSOCIATE_RULE_FIELDS,
        }
    }
}

const UNBIND_QOS_FIELDS: [FieldSpec; 1] =
    [FieldSpec::positional("qos", "id", "ID or name of qos to unbind").metavar("QOS")];

const UNATTACH_QOS_FILTER_FIELDS: [FieldSpec; 1] =
    [FieldSpec::positional("qos_filter", "id", "ID of qos filter to unattach").metavar("QOS_FILTER")];

const BIND_SUBNETS_FIELDS: [FieldSpec; 2] = [
    FieldSpec::positional(PARAMETER_ACL, "id", "ID or name of EayunStack ACL to bind").metavar("ES_ACL"),
    FieldSpec::comma_list(
        PARAMETER_SUBNETS,
        "subnet_ids",
        "Subnets to bind this EayunStack ACL to, separated by commas",
    ),
];

const UNBIND_SUBNETS_FIELDS: [FieldSpec; 2] = [
    FieldSpec::positional(PARAMETER_ACL, "id", "ID or name of EayunStack ACL to unbind").metavar("ES_ACL"),
    FieldSpec::comma_list(
        PARAMETER_SUBNETS,
        "subnet_ids",
        "Subnets to unbind this EayunStack ACL from, separated by commas",
    ),
];

const ASSOCIATE_RULE_FIELDS: [FieldSpec; 2] = [
    FieldSpec::positional(PARAMETER_L7RULE_ID, "id", "l7rule to associate"),
    FieldSpec::positional(
        PARAMETER_L7POLICY,
        "l7policy_id",
        "ID or name of the l7policy to be associated with the l7rule",
    ),
];

const DISASSOCIATE_RULE_FIELDS: [FieldSpec; 2] = [
    FieldSpec::positional(PARAMETER_L7RULE_ID, "id", "L7rule to disassociate"),
    FieldSpec::positional(
        PARAMETER_L7POLICY,
        "l7policy_id",
        "ID or name of the l7policy to be disassociated with the l7rule",
    ),
];

/// Static metadata for one resource kind.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    /// CLI noun, e.g. `qos-queue`.
    pub command: &'static str,
    /// Display name used in confirmation lines, e.g. `qos_queue`.
    pub display: &'static str,
    pub collection: Collection,
    /// Whether show/update/delete accept names as well as UUIDs.
    pub allow_names: bool,
    pub list_columns: &'static [&'static str],
    /// Response keys whose sub-object lists are displayed as id lists.
    pub ids_only: &'static [&'static str],
    pub create_fields: &'static [FieldSpec],
    pub update_fields: &'static [FieldSpec],
    pub actions: &'static [Action],
    pub about: &'static str,
}

impl ResourceDescriptor {
    pub fn wire_key(&self) -> &'static str {
        self.collection.resource
    }
}

/// All resource kinds exposed as CLI nouns, in help order.
pub fn all() -> &'static [ResourceDescriptor] {
    &REGISTRY
}

/// Look up a descriptor by its CLI noun.
pub fn find(command: &str) -> Option<&'static ResourceDescriptor> {
    REGISTRY.iter().find(|d| d.command == command)
}

static REGISTRY: [ResourceDescriptor; 9] = [
    qos::QOS,
    qos::QOS_QUEUE,
    qos::QOS_FILTER,
    es_acl::ES_ACL,
    es_acl::ES_ACL_RULE,
    lbaas::L7POLICY,
    lbaas::L7RULE,
    portmapping::PORTMAPPING,
    pptp::PPTP_CREDENTIAL,
];
