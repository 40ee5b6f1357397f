use super::{Action, Collection, FieldSpec, ResourceDescriptor};

pub const ES_ACL_COLLECTION: Collection = Collection {
    resource: "es_acl",
    plural: "es_acls",
    path: "/es_acl/es_acls",
    shadow: None,
};

pub const ES_ACL_RULE_COLLECTION: Collection = Collection {
    resource: "es_acl_rule",
    plural: "es_acl_rules",
    path: "/es_acl/es_acl_rules",
    shadow: None,
};

const TENANT_ID: FieldSpec =
    FieldSpec::option("tenant-id", "tenant_id", "The owner tenant ID").alias("tenant_id");

pub const ES_ACL: ResourceDescriptor = ResourceDescriptor {
    command: "es-acl",
    display: "es_acl",
    collection: ES_ACL_COLLECTION,
    allow_names: true,
    list_columns: &["id", "name", "subnets", "ingress_rules", "egress_rules"],
    ids_only: &[],
    create_fields: &[
        FieldSpec::option("name", "name", "Name of this EayunStack ACL"),
        TENANT_ID,
    ],
    update_fields: &[FieldSpec::option("name", "name", "Name of this EayunStack ACL")],
    actions: &[Action::BindSubnets, Action::UnbindSubnets],
    about: "Manage EayunStack ACLs",
};

pub const ES_ACL_RULE: ResourceDescriptor = ResourceDescriptor {
    command: "es-acl-rule",
    display: "es_acl_rule",
    collection: ES_ACL_RULE_COLLECTION,
    allow_names: true,
    list_columns: &[
        "id",
        "name",
        "acl_id",
        "position",
        "direction",
        "protocol",
        "source_ip_address",
        "destination_ip_address",
        "source_port",
        "destination_port",
        "action",
    ],
    ids_only: &[],
    create_fields: &[
        FieldSpec::positional("direction", "direction", "Direction of this EayunStack ACL rule"),
        FieldSpec::positional("action", "action", "Action of this EayunStack ACL rule"),
        TENANT_ID,
        FieldSpec::option("name", "name", "Name of this EayunStack ACL rule"),
        FieldSpec::option(
            "acl-id",
            "acl_id",
            "Which EayunStack ACL should this EayunStack ACL rule belong to",
        ),
        FieldSpec::option(
            "position",
            "position",
            "The position of this EayunStack ACL rule in its ACL",
        ),
        FieldSpec::option(
            "protocol",
            "protocol",
            "What protocol this EayunStack ACL rule applies to",
        ),
        FieldSpec::option("src-ip", "source_ip_address", "Source IP address of this EayunStack ACL rule"),
        FieldSpec::option(
            "dst-ip",
            "destination_ip_address",
            "Destination IP address of this EayunStack ACL rule",
        ),
        FieldSpec::option("src-port", "source_port", "Source port (range) of this EayunStack ACL rule"),
        FieldSpec::option(
            "dst-port",
            "destination_port",
            "Destination port (range) of this EayunStack ACL rule",
        ),
    ],
    update_fields: &[
        FieldSpec::option("name", "name", "Name of this EayunStack ACL rule"),
        FieldSpec::option(
            "acl-id",
            "acl_id",
            "Which EayunStack ACL should this EayunStack ACL rule belong to",
        ),
        FieldSpec::option(
            "position",
            "position",
            "The position of this EayunStack ACL rule in its ACL",
        ),
        FieldSpec::option("direction", "direction", "Direction of this EayunStack ACL rule"),
        FieldSpec::option(
            "protocol",
            "protocol",
            "What protocol this EayunStack ACL rule applies to",
        ),
        FieldSpec::option("src-ip", "source_ip_address", "Source IP address of this EayunStack ACL rule"),
        FieldSpec::option(
            "dst-ip",
            "destination_ip_address",
            "Destination IP address of this EayunStack ACL rule",
        ),
        FieldSpec::option("src-port", "source_port", "Source port (range) of this EayunStack ACL rule"),
        FieldSpec::option(
            "dst-port",
            "destination_port",
            "Destination port (range) of this EayunStack ACL rule",
        ),
        FieldSpec::option("action", "action", "Action of this EayunStack ACL rule"),
    ],
    actions: &[],
    about: "Manage EayunStack ACL rules",
};
