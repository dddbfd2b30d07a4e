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

use crate::resolve::{ResolvedValue, ValueKind};

/// Leaf values longer than this are truncated in reports.
pub const MAX_VALUE_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Neither document has a value at this path. Only reachable when the
    /// starting path (or a stale discovery) misses both documents; kept as
    /// a belt-and-suspenders case.
    NotExistBoth,
    /// Present only in the new document.
    Added,
    /// Present only in the old document.
    Deleted,
    TypeMismatch(ValueKind, ValueKind),
    EqualBoth,
    ValueDiffer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub outcome: Outcome,
    pub recurse: bool,
}

impl Classification {
    fn terminal(outcome: Outcome) -> Self {
        Self {
            outcome,
            recurse: false,
        }
    }
}

/// Classifies the relationship between the two resolutions of one path.
///
/// First match wins. The argument order fixes the added/deleted convention:
/// `old` is the first file on the command line, so a path present only in
/// `old` was deleted and a path present only in `new` was added.
///
/// Equality compares the full rendered subtree, so an equal container needs
/// no recursion: nothing below it can differ. A differing container recurses
/// to localize the difference instead of dumping both renderings.
pub fn classify(old: &ResolvedValue<'_>, new: &ResolvedValue<'_>) -> Classification {
    if !old.exists() && !new.exists() {
        return Classification::terminal(Outcome::NotExistBoth);
    }
    if !old.exists() {
        return Classification::terminal(Outcome::Added);
    }
    if !new.exists() {
        return Classification::terminal(Outcome::Deleted);
    }

    if old.kind() != new.kind() {
        return Classification::terminal(Outcome::TypeMismatch(old.kind(), new.kind()));
    }

    if old.render() == new.render() {
        return Classification::terminal(Outcome::EqualBoth);
    }

    Classification {
        outcome: Outcome::ValueDiffer,
        recurse: old.kind().is_container(),
    }
}

/// Cuts a rendered value to `max_len` characters, appending the original
/// byte length when anything was dropped.
pub fn truncate_value(rendered: &str, max_len: usize) -> String {
    if rendered.chars().count() > max_len {
        let cut: String = rendered.chars().take(max_len).collect();
        format!("{}...({} bytes)", cut, rendered.len())
    } else {
        rendered.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use serde_json::json;

    #[test]
    fn test_neither_exists() {
        let doc = json!({});
        let old = resolve(&doc, "missing");
        let new = resolve(&doc, "missing");
        let c = classify(&old, &new);
        assert_eq!(c.outcome, Outcome::NotExistBoth);
        assert!(!c.recurse);
    }

    #[test]
    fn test_only_new_exists_is_added() {
        let old_doc = json!({});
        let new_doc = json!({"x": 1});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(c.outcome, Outcome::Added);
        assert!(!c.recurse);
    }

    #[test]
    fn test_only_old_exists_is_deleted() {
        let old_doc = json!({"x": 1});
        let new_doc = json!({});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(c.outcome, Outcome::Deleted);
        assert!(!c.recurse);
    }

    #[test]
    fn test_kind_mismatch() {
        let old_doc = json!({"x": 1});
        let new_doc = json!({"x": "1"});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(
            c.outcome,
            Outcome::TypeMismatch(ValueKind::Number, ValueKind::String)
        );
        assert!(!c.recurse);
    }

    #[test]
    fn test_object_vs_array_is_type_mismatch() {
        let old_doc = json!({"x": {}});
        let new_doc = json!({"x": []});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(
            c.outcome,
            Outcome::TypeMismatch(ValueKind::Object, ValueKind::Array)
        );
    }

    #[test]
    fn test_equal_scalars() {
        let doc = json!({"x": 1});
        let c = classify(&resolve(&doc, "x"), &resolve(&doc, "x"));
        assert_eq!(c.outcome, Outcome::EqualBoth);
        assert!(!c.recurse);
    }

    #[test]
    fn test_equal_containers_do_not_recurse() {
        let old_doc = json!({"x": {"a": [1, 2]}});
        let new_doc = json!({"x": {"a": [1, 2]}});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(c.outcome, Outcome::EqualBoth);
        assert!(!c.recurse);
    }

    #[test]
    fn test_differing_scalars_do_not_recurse() {
        let old_doc = json!({"x": 1});
        let new_doc = json!({"x": 2});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(c.outcome, Outcome::ValueDiffer);
        assert!(!c.recurse);
    }

    #[test]
    fn test_differing_containers_recurse() {
        let old_doc = json!({"x": {"y": 1}});
        let new_doc = json!({"x": {"y": 2}});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(c.outcome, Outcome::ValueDiffer);
        assert!(c.recurse);
    }

    #[test]
    fn test_null_vs_missing_is_deleted() {
        let old_doc = json!({"x": null});
        let new_doc = json!({});
        let c = classify(&resolve(&old_doc, "x"), &resolve(&new_doc, "x"));
        assert_eq!(c.outcome, Outcome::Deleted);
    }

    #[test]
    fn test_null_vs_null_is_equal() {
        let doc = json!({"x": null});
        let c = classify(&resolve(&doc, "x"), &resolve(&doc, "x"));
        assert_eq!(c.outcome, Outcome::EqualBoth);
    }

    #[test]
    fn test_truncate_short_value_untouched() {
        assert_eq!(truncate_value("hello", MAX_VALUE_LEN), "hello");
    }

    #[test]
    fn test_truncate_long_value() {
        let long = "a".repeat(1500);
        let cut = truncate_value(&long, MAX_VALUE_LEN);
        assert!(cut.starts_with(&"a".repeat(1000)));
        assert_eq!(cut, format!("{}...(1500 bytes)", "a".repeat(1000)));
    }

    #[test]
    fn test_truncate_counts_chars_reports_bytes() {
        // 1001 two-byte characters: cut to 1000 chars, marker shows bytes
        let long = "é".repeat(1001);
        let cut = truncate_value(&long, MAX_VALUE_LEN);
        assert!(cut.ends_with("...(2002 bytes)"));
        assert!(cut.starts_with(&"é".repeat(1000)));
    }
}
