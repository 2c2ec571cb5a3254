//! Access to case content by configured paths (`doc:customer.name`, `case:assigneeFullName`)

use serde_json::Value;

/// Prefix-less path split into segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path
        .strip_prefix("doc:")
        .or_else(|| path.strip_prefix("case:"))
        .unwrap_or(path);
    path.split(['.', '/']).filter(|segment| !segment.is_empty())
}

/// Looks a value up by a dotted path. Numeric segments index into arrays.
pub fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments(path) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Plain text for a scalar (or a compact JSON rendering for structures).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Flattens nested content into `(path, text)` pairs in document order.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(value, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, prefix: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, path, out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, format!("{prefix}[{index}]"), out);
            }
        }
        scalar => out.push((prefix, display_value(scalar))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_at_with_prefixes() {
        let content = json!({"customer": {"name": "Ann", "tags": ["x", "y"]}});
        assert_eq!(value_at(&content, "doc:customer.name"), Some(&json!("Ann")));
        assert_eq!(value_at(&content, "customer/tags/1"), Some(&json!("y")));
        assert_eq!(value_at(&content, "doc:customer.missing"), None);
        assert_eq!(value_at(&content, "customer.name.first"), None);
        assert_eq!(value_at(&content, ""), Some(&content));
    }

    #[test]
    fn test_flatten_nested() {
        let content = json!({"a": 1, "b": {"c": true, "d": [null, "x"]}, "e": {}});
        let flat = flatten(&content);
        assert_eq!(
            flat,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b.c".to_string(), "true".to_string()),
                ("b.d[0]".to_string(), String::new()),
                ("b.d[1]".to_string(), "x".to_string()),
                ("e".to_string(), "{}".to_string()),
            ]
        );
    }
}
