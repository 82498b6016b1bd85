//! Recursive removal of null fields from a document prior to serialization.

use serde_yaml::value::TaggedValue;
use serde_yaml::Value;

/// Strip null entries from sequences and mappings, recursively. Scalars pass
/// through unchanged, element and key order are preserved, and the transform
/// is idempotent.
pub fn strip_empty(value: Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(strip_empty)
                .collect(),
        ),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .filter(|(key, val)| !key.is_null() && !val.is_null())
                .map(|(key, val)| (strip_empty(key), strip_empty(val)))
                .collect(),
        ),
        Value::Tagged(tagged) => Value::Tagged(Box::new(TaggedValue {
            tag: tagged.tag,
            value: strip_empty(tagged.value),
        })),
        scalar => scalar,
    }
}
