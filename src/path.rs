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

//! Canonical path encoding.
//!
//! A canonical path joins object keys and array indices with `.`. A literal
//! `.` inside a key is escaped as `\.` so it can't be confused with a path
//! boundary. The empty string is the document root.
//!
//! This encoding is user-visible: blacklist substrings and the `--path` flag
//! are written against the canonical form, so the escaping rule is part of
//! the CLI contract and must stay stable.

/// Escapes every literal `.` in a key as `\.`.
pub fn escape(key: &str) -> String {
    key.replace('.', "\\.")
}

/// Appends `key` to `parent`, escaping the key.
///
/// The empty parent is the root, so the child path is just the escaped key
/// with no leading separator.
pub fn encode_child(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        escape(key)
    } else {
        format!("{}.{}", parent, escape(key))
    }
}

/// Splits a canonical path back into its segments, undoing the escaping.
///
/// The empty path yields no segments (the root).
pub fn split(canonical: &str) -> Vec<String> {
    if canonical.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = canonical.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&'.') {
            chars.next();
            current.push('.');
        } else if c == '.' {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    segments.push(current);

    segments
}

/// Prettifies a canonical path for human output.
///
/// Separators render as ` . ` and escaped dots render as a plain `.`, so
/// `config.log\.level` becomes `config . log.level`. Lossy; never use the
/// result for lookup or deduplication.
pub fn display_form(canonical: &str) -> String {
    canonical
        .split("\\.")
        .map(|part| part.replace('.', " . "))
        .collect::<Vec<_>>()
        .join(".")
}
