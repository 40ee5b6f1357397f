//! Layer-7 policies and rules of the LBaaS v1 extension.

use super::{Action, Collection, FieldSpec, ResourceDescriptor};

/// LBaaS pools. Not a CLI noun; only used to resolve `--pool-id` names.
pub const POOL_COLLECTION: Collection = Collection {
    resource: "pool",
    plural: "pools",
    path: "/lb/pools",
    shadow: None,
};

pub const L7POLICY_COLLECTION: Collection = Collection {
    resource: "l7policy",
    plural: "l7policies",
    path: "/lb/l7policies",
    shadow: None,
};

pub const L7RULE_COLLECTION: Collection = Collection {
    resource: "l7rule",
    plural: "l7rules",
    path: "/lb/l7rules",
    shadow: None,
};

const ADMIN_STATE_DOWN: FieldSpec =
    FieldSpec::switch_off("admin-state-down", "admin_state_up", "Set admin state up to false");

pub const L7POLICY: ResourceDescriptor = ResourceDescriptor {
    command: "l7policy",
    display: "l7policy",
    collection: L7POLICY_COLLECTION,
    allow_names: true,
    list_columns: &[
        "id",
        "name",
        "pool_id",
        "priority",
        "action",
        "key",
        "value",
        "admin_state_up",
        "status",
    ],
    ids_only: &[],
    create_fields: &[
        ADMIN_STATE_DOWN,
        FieldSpec::option("priority", "priority", "The priority (valid in [0,255]) for l7policy")
            .required(),
        FieldSpec::option("pool-id", "pool_id", "The pool this l7policy belongs to")
            .metavar("POOL")
            .resolve(&POOL_COLLECTION),
        FieldSpec::option("action", "action", "Exec action on the l7policy if l7rule match")
            .required()
            .choices(&["block", "redirect", "addHeader"]),
        FieldSpec::option("tenant-id", "tenant_id", "The owner tenant ID").alias("tenant_id"),
        FieldSpec::option("key", "key", "The key of the l7policy action keyword"),
        FieldSpec::option("value", "value", "The value of the l7policy action values"),
    ],
    update_fields: &[
        FieldSpec::option("name", "name", "Name of this l7policy"),
        FieldSpec::option("priority", "priority", "The priority (valid in [0,255]) for l7policy"),
        FieldSpec::option("pool-id", "pool_id", "The pool this l7policy belongs to")
            .metavar("POOL")
            .resolve(&POOL_COLLECTION),
        FieldSpec::option("action", "action", "Exec action on the l7policy if l7rule match")
            .choices(&["block", "redirect", "addHeader"]),
        FieldSpec::option("key", "key", "The key of the l7policy action keyword"),
        FieldSpec::option("value", "value", "The value of the l7policy action values"),
    ],
    actions: &[],
    about: "Manage LBaaS l7policies",
};

pub const L7RULE: ResourceDescriptor = ResourceDescriptor {
    command: "l7rule",
    display: "l7rule",
    collection: L7RULE_COLLECTION,
    allow_names: true,
    list_columns: &[
        "id",
        "type",
        "key",
        "value",
        "compare_type",
        "compare_value",
        "admin_state_up",
    ],
    ids_only: &[],
    create_fields: &[
        ADMIN_STATE_DOWN,
        FieldSpec::option("type", "type", "The type of l7rule")
            .required()
            .choices(&["backendServerId"]),
        FieldSpec::option("key", "key", "The keyword for l7rule type"),
        FieldSpec::option("value", "value", "The value of the l7rule type"),
        FieldSpec::option("compare-type", "compare_type", "The compare type of l7rule type")
            .required()
            .choices(&["integerEq"]),
        FieldSpec::option(
            "compare-value",
            "compare_value",
            "The compare value of l7rule compare-type value",
        )
        .required(),
    ],
    update_fields: &[
        FieldSpec::option("key", "key", "The keyword for l7rule type"),
        FieldSpec::option("value", "value", "The value of the l7rule type"),
        FieldSpec::option(
            "compare-value",
            "compare_value",
            "The compare value of l7rule compare-type value",
        ),
    ],
    actions: &[Action::AssociateRule, Action::DisassociateRule],
    about: "Manage LBaaS l7rules",
};
