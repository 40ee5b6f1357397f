use super::{Collection, FieldSpec, ResourceDescriptor};

pub const PPTP_CREDENTIAL: ResourceDescriptor = ResourceDescriptor {
    command: "pptp-credential",
    display: "pptp_credential",
    collection: Collection {
        resource: "pptp_credential",
        plural: "pptp_credentials",
        path: "/vpn/pptp_credentials",
        shadow: None,
    },
    allow_names: true,
    list_columns: &["id", "username", "password", "vpnservices"],
    ids_only: &[],
    create_fields: &[
        FieldSpec::positional("username", "username", "Username of the PPTP credential"),
        FieldSpec::positional("password", "password", "Password of the PPTP credential"),
    ],
    update_fields: &[FieldSpec::option(
        "password",
        "password",
        "Updated password of the PPTP credential",
    )],
    actions: &[],
    about: "Manage PPTP VPN credentials",
};
