//! Bracket-aware decoding of form-encoded bodies
//!
//! `user[name]=A` nests into an object, `tags[]=a&tags[]=b` and
//! `tags[0]=a` collect into an array (in arrival order), and a plain key
//! repeated more than once collects into an array of its values.

use serde_json::{Map, Value};

/// Bracket segments past this depth stay as one literal segment
const MAX_DEPTH: usize = 5;
/// Larger numeric segments are object keys rather than array indices
const MAX_ARRAY_INDEX: usize = 20;

/// Fold decoded `key=value` pairs into a nested field map
pub fn decode_pairs(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        let (base, segments) = split_key(&key);
        let slot = fields.entry(base.to_string()).or_insert(Value::Null);
        insert(slot, &segments, Value::String(value));
    }
    fields
}

/// Split `a[b][c]` into `("a", ["b", "c"])`; malformed keys stay flat
fn split_key(key: &str) -> (&str, Vec<&str>) {
    let open = match key.find('[') {
        Some(0) | None => return (key, Vec::new()),
        Some(open) => open,
    };

    let (base, mut rest) = key.split_at(open);
    let mut segments = Vec::new();
    while segments.len() < MAX_DEPTH {
        let Some(inner) = rest.strip_prefix('[') else {
            break;
        };
        let Some(close) = inner.find(']') else {
            break;
        };
        segments.push(&inner[..close]);
        rest = &inner[close + 1..];
    }

    if segments.is_empty() {
        return (key, Vec::new());
    }
    if !rest.is_empty() {
        segments.push(rest);
    }
    (base, segments)
}

fn is_array_index(segment: &str) -> bool {
    segment.is_empty()
        || segment
            .parse::<usize>()
            .map(|index| index <= MAX_ARRAY_INDEX)
            .unwrap_or(false)
}

fn insert(slot: &mut Value, segments: &[&str], value: Value) {
    let Some((segment, rest)) = segments.split_first() else {
        append(slot, value);
        return;
    };

    if rest.is_empty() && is_array_index(segment) {
        match slot {
            Value::Null => *slot = Value::Array(vec![value]),
            Value::Array(items) => items.push(value),
            _ => tracing::debug!(segment, "form key conflicts with an existing value"),
        }
        return;
    }

    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(children) => {
            let child = children.entry(segment.to_string()).or_insert(Value::Null);
            insert(child, rest, value);
        }
        _ => tracing::debug!(segment, "form key conflicts with an existing value"),
    }
}

fn append(slot: &mut Value, value: Value) {
    match slot {
        Value::Null => *slot = value,
        Value::Array(items) => items.push(value),
        existing => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(pairs: &[(&str, &str)]) -> Value {
        let pairs = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Value::Object(decode_pairs(pairs))
    }

    #[test]
    fn test_split_key() {
        assert_eq!(split_key("age"), ("age", vec![]));
        assert_eq!(split_key("age[]"), ("age", vec![""]));
        assert_eq!(split_key("user[name][first]"), ("user", vec!["name", "first"]));
        assert_eq!(split_key("a[b]c"), ("a", vec!["b", "c"]));
        assert_eq!(split_key("a[b"), ("a[b", vec![]));
        assert_eq!(split_key("[x]"), ("[x]", vec![]));
    }

    #[test]
    fn test_split_key_depth_limit() {
        let (base, segments) = split_key("a[1][2][3][4][5][6][7]");
        assert_eq!(base, "a");
        assert_eq!(segments, vec!["1", "2", "3", "4", "5", "[6][7]"]);
    }

    #[test]
    fn test_flat_and_repeated_keys() {
        assert_eq!(
            decode(&[("name", "A"), ("tag", "x"), ("tag", "y"), ("tag", "z")]),
            json!({"name": "A", "tag": ["x", "y", "z"]})
        );
    }

    #[test]
    fn test_bracket_arrays() {
        assert_eq!(decode(&[("age[]", "30")]), json!({"age": ["30"]}));
        assert_eq!(
            decode(&[("tags[0]", "a"), ("tags[1]", "b")]),
            json!({"tags": ["a", "b"]})
        );
        assert_eq!(decode(&[("big[21]", "a")]), json!({"big": {"21": "a"}}));
    }

    #[test]
    fn test_bracket_objects() {
        assert_eq!(
            decode(&[("user[name]", "A"), ("user[phone]", "1234567890")]),
            json!({"user": {"name": "A", "phone": "1234567890"}})
        );
    }

    #[test]
    fn test_conflicting_keys_keep_first_shape() {
        assert_eq!(decode(&[("a", "x"), ("a[b]", "y")]), json!({"a": "x"}));
    }
}
