use super::{Collection, FieldSpec, ResourceDescriptor};

pub const PORTMAPPING: ResourceDescriptor = ResourceDescriptor {
    command: "portmapping",
    display: "portmapping",
    collection: Collection {
        resource: "portmapping",
        plural: "portmappings",
        path: "/portmappings",
        shadow: None,
    },
    allow_names: true,
    list_columns: &[
        "id",
        "name",
        "status",
        "router_id",
        "destination_ip",
        "protocol",
        "admin_state_up",
        "tenant_id",
        "destination_port",
        "router_port",
    ],
    ids_only: &[],
    create_fields: &[
        FieldSpec::positional("router_id", "router_id", "The id of the router to be port-mapped"),
        FieldSpec::positional("router_port", "router_port", "The router's port number to be mapped"),
        FieldSpec::positional(
            "destination_ip",
            "destination_ip",
            "The destination ip to be redirected to",
        ),
        FieldSpec::positional(
            "destination_port",
            "destination_port",
            "The destination port to be redirected to",
        ),
        FieldSpec::option("name", "name", "The portmapping's name"),
        FieldSpec::option(
            "protocol",
            "protocol",
            "The protocol to be matched by this portmapping, \"TCP\" or \"UDP\", default: TCP",
        ),
    ],
    update_fields: &[FieldSpec::option("name", "name", "The portmapping's name")],
    actions: &[],
    about: "Manage router port mappings",
};
