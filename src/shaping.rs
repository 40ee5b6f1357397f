//! Post-processing of API responses before they are displayed.

use crate::resources::ResourceDescriptor;
use serde_json::Value;
use tracing::trace;

/// Collapse the identifier-only fields of a response envelope.
///
/// Each list-valued field named in `descriptor.ids_only` is replaced by the
/// list of its elements' `id`s. Elements that are not objects (already
/// collapsed ids) are kept as they are; an object without an `id` becomes
/// `null`. Envelopes without the resource key, such as error envelopes, pass
/// through untouched.
pub fn shape(descriptor: &ResourceDescriptor, mut envelope: Value) -> Value {
    if descriptor.ids_only.is_empty() {
        return envelope;
    }

    let Some(attributes) = envelope
        .get_mut(descriptor.wire_key())
        .and_then(Value::as_object_mut)
    else {
        return envelope;
    };

    for key in descriptor.ids_only {
        if let Some(Value::Array(items)) = attributes.get_mut(*key) {
            trace!("Collapsing {} to identifiers", key);
            for item in items.iter_mut() {
                if let Some(object) = item.as_object() {
                    *item = object.get("id").cloned().unwrap_or(Value::Null);
                }
            }
        }
    }

    envelope
}
