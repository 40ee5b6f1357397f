//! Request body construction.
//!
//! A [`ParsedInvocation`] holds the values the user supplied for the fields a
//! command declares. [`build_body`] turns it into the JSON envelope the
//! Neutron API expects, `{"<wire key>": {...}}`, copying required fields
//! verbatim and optional fields only when they carry a value.

use crate::error::CliError;
use crate::resources::{FieldKind, FieldSpec, ResourceDescriptor};
use clap::ArgMatches;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::trace;

/// Request body nested under the resource's wire-schema key.
pub type RequestBody = Value;

/// Values supplied on the command line, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInvocation {
    values: HashMap<&'static str, Value>,
}

impl ParsedInvocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the declared fields out of clap matches.
    pub fn from_matches(fields: &[FieldSpec], matches: &ArgMatches) -> Self {
        let mut invocation = ParsedInvocation::new();
        for field in fields {
            match field.kind {
                FieldKind::InvertedSwitch => {
                    invocation.set(field.name, Value::Bool(!matches.get_flag(field.name)));
                }
                FieldKind::CommaList => {
                    if let Some(raw) = matches.get_one::<String>(field.name) {
                        invocation.set(field.name, split_comma_list(raw));
                    }
                }
                FieldKind::Positional | FieldKind::Option => {
                    if let Some(raw) = matches.get_one::<String>(field.name) {
                        invocation.set(field.name, Value::String(raw.clone()));
                    }
                }
            }
        }
        invocation
    }

    pub fn set(&mut self, name: &'static str, value: Value) {
        self.values.insert(name, value);
    }

    /// Builder-style `set`, mostly for tests.
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.set(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The supplied string value of a field, if it counts as present.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| is_present(v)).and_then(Value::as_str)
    }
}

/// Whether an optional field's value should be sent.
///
/// `null`, the empty string and the empty list count as absent. Every other
/// value is sent, including `"0"` and numeric zero.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn split_comma_list(raw: &str) -> Value {
    Value::Array(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Value::String(s.to_string()))
            .collect(),
    )
}

/// Build the request body for `fields` of `descriptor`.
pub fn build_body(
    descriptor: &ResourceDescriptor,
    fields: &[FieldSpec],
    invocation: &ParsedInvocation,
) -> Result<RequestBody, CliError> {
    let mut attributes = Map::new();

    for field in fields {
        let value = invocation.get(field.name);
        if field.required {
            match value {
                Some(value) if !value.is_null() => {
                    attributes.insert(field.wire_key.to_string(), value.clone());
                }
                _ => {
                    return Err(CliError::MissingRequiredField {
                        resource: descriptor.display.to_string(),
                        field: field.name.to_string(),
                    })
                }
            }
        } else if let Some(value) = value.filter(|v| is_present(v)) {
            attributes.insert(field.wire_key.to_string(), value.clone());
        }
    }

    trace!(
        "Built {} body with keys {:?}",
        descriptor.wire_key(),
        attributes.keys().collect::<Vec<_>>()
    );

    Ok(wrap(descriptor.wire_key(), attributes))
}

/// Merge user supplied `key=value` pairs into an already built body.
///
/// Declared fields win over extra attributes of the same key.
pub fn merge_extra_attributes(
    body: &mut RequestBody,
    wire_key: &str,
    extra: &[(String, String)],
) {
    if let Some(attributes) = body.get_mut(wire_key).and_then(Value::as_object_mut) {
        for (key, value) in extra {
            if value.is_empty() || attributes.contains_key(key) {
                continue;
            }
            attributes.insert(key.clone(), Value::String(value.clone()));
        }
    }
}

/// Body that clears the QoS binding.
pub fn unbind_qos_body() -> RequestBody {
    clear_body("qos", &["target_type", "target_id"])
}

/// Body that detaches a QoS filter from its queue.
pub fn unattach_qos_filter_body() -> RequestBody {
    clear_body("qos_filter", &["queue_id"])
}

/// Body for the ACL bind/unbind endpoints.
pub fn subnet_ids_body(subnets: &Value) -> RequestBody {
    let mut body = Map::new();
    body.insert("subnet_ids".to_string(), subnets.clone());
    Value::Object(body)
}

/// Body for associating a l7rule with a l7policy.
pub fn associate_rule_body(rule_id: &str) -> RequestBody {
    let mut attributes = Map::new();
    attributes.insert("id".to_string(), Value::String(rule_id.to_string()));
    wrap("l7rule", attributes)
}

fn clear_body(wire_key: &str, cleared: &[&str]) -> RequestBody {
    let attributes = cleared
        .iter()
        .map(|key| (key.to_string(), Value::Null))
        .collect();
    wrap(wire_key, attributes)
}

fn wrap(wire_key: &str, attributes: Map<String, Value>) -> RequestBody {
    let mut body = Map::new();
    body.insert(wire_key.to_string(), Value::Object(attributes));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{self, FieldKind};
    use serde_json::json;

    fn qos() -> &'static ResourceDescriptor {
        resources::find("qos").unwrap()
    }

    fn with_required(descriptor: &ResourceDescriptor) -> ParsedInvocation {
        let mut invocation = ParsedInvocation::new();
        for field in descriptor.create_fields.iter().filter(|f| f.required) {
            let value = match field.kind {
                FieldKind::InvertedSwitch => Value::Bool(true),
                FieldKind::CommaList => json!(["a", "b"]),
                _ => Value::String(format!("{}-value", field.name)),
            };
            invocation.set(field.name, value);
        }
        invocation
    }

    #[test]
    fn test_create_qos_body_with_required_fields_only() {
        let invocation = ParsedInvocation::new()
            .with("direction", "ingress")
            .with("rate", "1024")
            .with("default_rate", "512");

        let body = build_body(qos(), qos().create_fields, &invocation).unwrap();

        assert_eq!(
            body,
            json!({"qos": {"direction": "ingress", "rate": "1024", "default_rate": "512"}})
        );
    }

    #[test]
    fn test_required_only_body_has_exactly_required_wire_keys() {
        for descriptor in resources::all() {
            let body = build_body(descriptor, descriptor.create_fields, &with_required(descriptor))
                .unwrap();
            let mut keys: Vec<_> = body[descriptor.wire_key()]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect();
            let mut expected: Vec<_> = descriptor
                .create_fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.wire_key.to_string())
                .collect();
            keys.sort();
            expected.sort();
            assert_eq!(keys, expected, "{}", descriptor.command);
        }
    }

    #[test]
    fn test_empty_string_is_the_same_as_omitted() {
        for descriptor in resources::all() {
            for field in descriptor.create_fields.iter().filter(|f| !f.required) {
                let omitted = with_required(descriptor);
                let empty = with_required(descriptor).with(field.name, "");
                assert_eq!(
                    build_body(descriptor, descriptor.create_fields, &omitted).unwrap(),
                    build_body(descriptor, descriptor.create_fields, &empty).unwrap(),
                    "{}.{}",
                    descriptor.command,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_optional_field_uses_wire_key() {
        let rule = resources::find("es-acl-rule").unwrap();
        let invocation = ParsedInvocation::new()
            .with("direction", "ingress")
            .with("action", "allow")
            .with("src-ip", "10.0.0.0/24");

        let body = build_body(rule, rule.create_fields, &invocation).unwrap();

        assert_eq!(body["es_acl_rule"]["source_ip_address"], json!("10.0.0.0/24"));
        assert!(body["es_acl_rule"].get("src-ip").is_none());
    }

    #[test]
    fn test_zero_is_a_set_value() {
        let queue = resources::find("qos-queue").unwrap();
        let invocation = ParsedInvocation::new().with("prio", "0");

        let body = build_body(queue, queue.update_fields, &invocation).unwrap();

        assert_eq!(body, json!({"qos_queue": {"prio": "0"}}));
    }

    #[test]
    fn test_update_queue_forwards_only_supplied_fields() {
        let queue = resources::find("qos-queue").unwrap();
        let invocation = ParsedInvocation::new().with("prio", "3");

        let body = build_body(queue, queue.update_fields, &invocation).unwrap();

        assert_eq!(body, json!({"qos_queue": {"prio": "3"}}));
    }

    #[test]
    fn test_update_queue_rate_forwards_rate() {
        let queue = resources::find("qos-queue").unwrap();
        let invocation = ParsedInvocation::new().with("rate", "2048").with("ceil", "4096");

        let body = build_body(queue, queue.update_fields, &invocation).unwrap();

        assert_eq!(body, json!({"qos_queue": {"rate": "2048", "ceil": "4096"}}));
    }

    #[test]
    fn test_empty_update_body_is_valid() {
        let body = build_body(qos(), qos().update_fields, &ParsedInvocation::new()).unwrap();
        assert_eq!(body, json!({"qos": {}}));
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let invocation = ParsedInvocation::new().with("direction", "egress");

        let err = build_body(qos(), qos().create_fields, &invocation).unwrap_err();

        match err {
            CliError::MissingRequiredField { resource, field } => {
                assert_eq!(resource, "qos");
                assert_eq!(field, "rate");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_admin_state_false_is_kept() {
        let rule = resources::find("l7rule").unwrap();
        let invocation = ParsedInvocation::new()
            .with("admin-state-down", false)
            .with("type", "backendServerId")
            .with("compare-type", "integerEq")
            .with("compare-value", "7");

        let body = build_body(rule, rule.create_fields, &invocation).unwrap();

        assert_eq!(body["l7rule"]["admin_state_up"], json!(false));
        assert!(body["l7rule"].get("key").is_none());
    }

    #[test]
    fn test_unbind_qos_body_always_clears_target() {
        assert_eq!(
            unbind_qos_body(),
            json!({"qos": {"target_type": null, "target_id": null}})
        );
        assert_eq!(
            unattach_qos_filter_body(),
            json!({"qos_filter": {"queue_id": null}})
        );
    }

    #[test]
    fn test_comma_list_is_split() {
        assert_eq!(split_comma_list("a, b,,c"), json!(["a", "b", "c"]));
        assert_eq!(subnet_ids_body(&json!(["a"])), json!({"subnet_ids": ["a"]}));
    }

    #[test]
    fn test_extra_attributes_do_not_override_declared_fields() {
        let mut body = json!({"qos": {"name": "gold"}});
        let extra = vec![
            ("name".to_string(), "silver".to_string()),
            ("rate".to_string(), "100".to_string()),
            ("burst".to_string(), String::new()),
        ];

        merge_extra_attributes(&mut body, "qos", &extra);

        assert_eq!(body, json!({"qos": {"name": "gold", "rate": "100"}}));
    }
}
