//! Dot-path resolution of configuration leaves for binding markers.

use serde_json::Value;

use crate::model::Config;

/// Null-safe dot-path lookup over a configuration snapshot.
///
/// Built once per render from the typed config; binding markers carry
/// arbitrary paths, so lookup walks a generic value tree rather than the
/// typed structs. A missing intermediate key, an out-of-range index, or a
/// non-scalar leaf all resolve to `None` — never an error.
#[derive(Debug)]
pub struct Resolver {
    snapshot: Value,
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        let snapshot = serde_json::to_value(config).unwrap_or(Value::Null);
        Self { snapshot }
    }

    /// Resolve a path like `site.title` or `features.0.title` to its
    /// scalar value.
    pub fn resolve(&self, path: &str) -> Option<String> {
        let mut current = &self.snapshot;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        match current {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
