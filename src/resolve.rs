// jcmp is a tool for comparing two JSON documents path by path
// Copyright (C) 2025  Peoples Grocers LLC
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// To purchase a license under different terms contact admin@peoplesgrocers.com
// To request changes, report bugs, or give user feedback contact
// marxism@peoplesgrocers.com
//

use serde_json::Value;
use std::fmt;

use crate::path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    /// The path does not exist in the document.
    None,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::None => "none",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, ValueKind::Object | ValueKind::Array)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of looking up one canonical path in one document.
///
/// Existence reflects reachability, not null-ness: a JSON `null` sitting at
/// a path exists, with kind `Null`. Only an absent key, an out-of-range
/// index, or indexing into a scalar produces a non-existent value.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedValue<'a> {
    value: Option<&'a Value>,
}

impl<'a> ResolvedValue<'a> {
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    pub fn kind(&self) -> ValueKind {
        match self.value {
            None => ValueKind::None,
            Some(Value::Object(_)) => ValueKind::Object,
            Some(Value::Array(_)) => ValueKind::Array,
            Some(Value::String(_)) => ValueKind::String,
            Some(Value::Number(_)) => ValueKind::Number,
            Some(Value::Bool(_)) => ValueKind::Boolean,
            Some(Value::Null) => ValueKind::Null,
        }
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// Serialized textual form, used for both equality comparison and
    /// display. Strings render without quotes; everything else renders as
    /// compact JSON, so an equal render means an equal subtree.
    pub fn render(&self) -> String {
        match self.value {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
        }
    }
}

/// Resolves a canonical path against a document.
///
/// The empty path is the root and always exists. Object keys and array
/// indices are handled uniformly; an index is just a segment that parses
/// as a decimal number when the current value is an array.
pub fn resolve<'a>(document: &'a Value, canonical: &str) -> ResolvedValue<'a> {
    let mut current = document;

    for segment in path::split(canonical) {
        let next = match current {
            Value::Object(obj) => obj.get(&segment),
            Value::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return ResolvedValue { value: None },
        }
    }

    ResolvedValue {
        value: Some(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_path_is_root() {
        let doc = json!({"foo": "bar"});
        let resolved = resolve(&doc, "");
        assert!(resolved.exists());
        assert_eq!(resolved.kind(), ValueKind::Object);
    }

    #[test]
    fn test_null_root_exists() {
        let doc = json!(null);
        let resolved = resolve(&doc, "");
        assert!(resolved.exists());
        assert_eq!(resolved.kind(), ValueKind::Null);
    }

    #[test]
    fn test_object_key_access() {
        let doc = json!({"user": {"name": "Alice"}});
        let resolved = resolve(&doc, "user.name");
        assert!(resolved.exists());
        assert_eq!(resolved.render(), "Alice");
    }

    #[test]
    fn test_array_index_access() {
        let doc = json!({"items": ["first", "second"]});
        assert_eq!(resolve(&doc, "items.0").render(), "first");
        assert_eq!(resolve(&doc, "items.1").render(), "second");
    }

    #[test]
    fn test_missing_key_does_not_exist() {
        let doc = json!({"foo": "bar"});
        let resolved = resolve(&doc, "baz");
        assert!(!resolved.exists());
        assert_eq!(resolved.kind(), ValueKind::None);
    }

    #[test]
    fn test_out_of_range_index_does_not_exist() {
        let doc = json!(["only"]);
        assert!(!resolve(&doc, "1").exists());
    }

    #[test]
    fn test_indexing_into_scalar_does_not_exist() {
        let doc = json!({"count": 3});
        assert!(!resolve(&doc, "count.0").exists());
    }

    #[test]
    fn test_null_value_exists() {
        let doc = json!({"maybe": null});
        let resolved = resolve(&doc, "maybe");
        assert!(resolved.exists());
        assert_eq!(resolved.kind(), ValueKind::Null);
        assert_eq!(resolved.render(), "null");
    }

    #[test]
    fn test_escaped_key_lookup() {
        let doc = json!({"secret.token": "abc"});
        let resolved = resolve(&doc, "secret\\.token");
        assert!(resolved.exists());
        assert_eq!(resolved.render(), "abc");
    }

    #[test]
    fn test_render_container_is_compact_json() {
        let doc = json!({"user": {"age": 30}});
        assert_eq!(resolve(&doc, "user").render(), r#"{"age":30}"#);
    }

    #[test]
    fn test_render_scalar_kinds() {
        let doc = json!({"n": 1, "b": true});
        assert_eq!(resolve(&doc, "n").render(), "1");
        assert_eq!(resolve(&doc, "b").render(), "true");
        assert_eq!(resolve(&doc, "n").kind(), ValueKind::Number);
        assert_eq!(resolve(&doc, "b").kind(), ValueKind::Boolean);
    }
}
