use super::{Action, Collection, FieldSpec, ResourceDescriptor};

pub const QOS_COLLECTION: Collection = Collection {
    resource: "qos",
    plural: "qoss",
    path: "/eayun_qos/qoss",
    shadow: Some("eayun_qos"),
};

pub const QOS_QUEUE_COLLECTION: Collection = Collection {
    resource: "qos_queue",
    plural: "qos_queues",
    path: "/eayun_qos/qos_queues",
    shadow: Some("eayun_qos_queue"),
};

pub const QOS_FILTER_COLLECTION: Collection = Collection {
    resource: "qos_filter",
    plural: "qos_filters",
    path: "/eayun_qos/qos_filters",
    shadow: Some("eayun_qos_filter"),
};

const QOS_CREATE: &[FieldSpec] = &[
    FieldSpec::positional("direction", "direction", "Direction of this qos: \"ingress\" or \"egress\""),
    FieldSpec::positional("rate", "rate", "Rate of this qos"),
    FieldSpec::positional("default_rate", "default_rate", "Rate of default queue of this qos"),
    FieldSpec::option("name", "name", "Name of this qos"),
    FieldSpec::option("description", "description", "Description of this qos"),
    FieldSpec::option("target-type", "target_type", "Target type of this qos: \"router\" or \"port\"")
        .alias("target_type"),
    FieldSpec::option("target-id", "target_id", "Target id of this qos").alias("target_id"),
    FieldSpec::option("burst", "burst", "Burst of this qos"),
    FieldSpec::option("cburst", "cburst", "Cburst of this qos"),
    FieldSpec::option("default-burst", "default_burst", "Burst of default queue of this qos")
        .alias("default_burst"),
    FieldSpec::option("default-cburst", "default_cburst", "Cburst of default queue of this qos")
        .alias("default_cburst"),
];

const QOS_UPDATE: &[FieldSpec] = &[
    FieldSpec::option("name", "name", "Name of this qos"),
    FieldSpec::option("description", "description", "Description of this qos"),
    FieldSpec::option("target-type", "target_type", "Target type of this qos: \"router\" or \"port\"")
        .alias("target_type"),
    FieldSpec::option("target-id", "target_id", "Target id of this qos").alias("target_id"),
    FieldSpec::option("rate", "rate", "Rate of this qos"),
    FieldSpec::option("burst", "burst", "Burst of this qos"),
    FieldSpec::option("cburst", "cburst", "Cburst of this qos"),
    FieldSpec::option("default-rate", "default_rate", "Rate of default queue of this qos")
        .alias("default_rate"),
    FieldSpec::option("default-burst", "default_burst", "Burst of default queue of this qos")
        .alias("default_burst"),
    FieldSpec::option("default-cburst", "default_cburst", "Cburst of default queue of this qos")
        .alias("default_cburst"),
];

pub const QOS: ResourceDescriptor = ResourceDescriptor {
    command: "qos",
    display: "qos",
    collection: QOS_COLLECTION,
    allow_names: true,
    list_columns: &[
        "id",
        "name",
        "description",
        "direction",
        "target_type",
        "target_id",
        "rate",
        "burst",
        "cburst",
        "default_queue_id",
    ],
    ids_only: &["qos_queues", "unattached_filters"],
    create_fields: QOS_CREATE,
    update_fields: QOS_UPDATE,
    actions: &[Action::UnbindQos],
    about: "Manage qos",
};

const QOS_QUEUE_CREATE: &[FieldSpec] = &[
    FieldSpec::positional("qos", "qos_id", "Qos to which this qos queue belongs"),
    FieldSpec::positional("rate", "rate", "Rate of this qos queue"),
    FieldSpec::option("parent", "parent_id", "Parent qos queue of this qos queue"),
    FieldSpec::option("prio", "prio", "Prio of this qos queue"),
    FieldSpec::option("ceil", "ceil", "Ceil of this qos queue"),
    FieldSpec::option("burst", "burst", "Burst of this qos queue"),
    FieldSpec::option("cburst", "cburst", "Cburst of this qos queue"),
];

const QOS_QUEUE_UPDATE: &[FieldSpec] = &[
    FieldSpec::option("prio", "prio", "Prio of this qos queue"),
    FieldSpec::option("rate", "rate", "Rate of this qos queue"),
    FieldSpec::option("ceil", "ceil", "Ceil of this qos queue"),
    FieldSpec::option("burst", "burst", "Burst of this qos queue"),
    FieldSpec::option("cburst", "cburst", "Cburst of this qos queue"),
];

pub const QOS_QUEUE: ResourceDescriptor = ResourceDescriptor {
    command: "qos-queue",
    display: "qos_queue",
    collection: QOS_QUEUE_COLLECTION,
    allow_names: false,
    list_columns: &["id", "qos_id", "parent_id", "prio", "rate", "ceil", "burst", "cburst"],
    ids_only: &["subqueues", "attached_filters"],
    create_fields: QOS_QUEUE_CREATE,
    update_fields: QOS_QUEUE_UPDATE,
    actions: &[],
    about: "Manage qos queues",
};

const QOS_FILTER_MATCH: [FieldSpec; 6] = [
    FieldSpec::option("protocol", "protocol", "Protocol this qos filter is to match"),
    FieldSpec::option("src-port", "src_port", "Source port this qos filter is to match")
        .alias("src_port"),
    FieldSpec::option("dst-port", "dst_port", "Destination port this qos filter is to match")
        .alias("dst_port"),
    FieldSpec::option("src-addr", "src_addr", "Source address(es) this qos filter is to match")
        .alias("src_addr"),
    FieldSpec::option("dst-addr", "dst_addr", "Destination address(es) this qos filter is to match")
        .alias("dst_addr"),
    FieldSpec::option("custom-match", "custom_match", "Custom match rule of this qos filter")
        .alias("custom_match"),
];

const QOS_FILTER_CREATE: &[FieldSpec] = &[
    FieldSpec::positional("qos", "qos_id", "Qos to which this qos filter belongs"),
    FieldSpec::positional("prio", "prio", "Prio of this qos filter"),
    FieldSpec::option("queue", "queue_id", "Qos queue to which this qos filter is attached"),
    QOS_FILTER_MATCH[0],
    QOS_FILTER_MATCH[1],
    QOS_FILTER_MATCH[2],
    QOS_FILTER_MATCH[3],
    QOS_FILTER_MATCH[4],
    QOS_FILTER_MATCH[5],
];

const QOS_FILTER_UPDATE: &[FieldSpec] = &[
    FieldSpec::option("queue", "queue_id", "Qos queue to which this qos filter is attached"),
    FieldSpec::option("prio", "prio", "Prio of this qos filter"),
    QOS_FILTER_MATCH[0],
    QOS_FILTER_MATCH[1],
    QOS_FILTER_MATCH[2],
    QOS_FILTER_MATCH[3],
    QOS_FILTER_MATCH[4],
    QOS_FILTER_MATCH[5],
];

pub const QOS_FILTER: ResourceDescriptor = ResourceDescriptor {
    command: "qos-filter",
    display: "qos_filter",
    collection: QOS_FILTER_COLLECTION,
    allow_names: false,
    list_columns: &[
        "id",
        "qos_id",
        "queue_id",
        "prio",
        "protocol",
        "src_port",
        "dst_port",
        "src_addr",
        "dst_addr",
        "custom_match",
    ],
    ids_only: &[],
    create_fields: QOS_FILTER_CREATE,
    update_fields: QOS_FILTER_UPDATE,
    actions: &[Action::UnattachQosFilter],
    about: "Manage qos filters",
};
