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

use crate::resolve::ValueKind;

/// One classified report for one canonical path.
///
/// The comparison engine emits these in depth-first document order; the
/// reporter decides how they look. Paths are canonical (escaped) form, not
/// the prettified display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEvent {
    /// The path matched a blacklist entry; nothing below it was compared.
    Blacklisted { path: String },
    /// Neither document has a value at this path.
    NotExistBoth { path: String },
    /// Present only in the new document.
    Added { path: String },
    /// Present only in the old document.
    Deleted { path: String },
    /// Present in both documents with different kinds.
    TypeMismatch {
        path: String,
        old_kind: ValueKind,
        new_kind: ValueKind,
    },
    /// Present in both documents. Informational; suppressed in strict mode.
    Exists { path: String },
    /// Present in both documents with equal values. Informational;
    /// suppressed in strict mode.
    Equal { path: String },
    /// A container whose subtrees differ somewhere below. The events for
    /// its children carry the detail.
    ContainerDiffer { path: String },
    /// A scalar with different values on each side. Values are rendered
    /// and already truncated.
    LeafDiffer {
        path: String,
        old_value: String,
        new_value: String,
    },
}

impl DiffEvent {
    pub fn path(&self) -> &str {
        match self {
            DiffEvent::Blacklisted { path }
            | DiffEvent::NotExistBoth { path }
            | DiffEvent::Added { path }
            | DiffEvent::Deleted { path }
            | DiffEvent::TypeMismatch { path, .. }
            | DiffEvent::Exists { path }
            | DiffEvent::Equal { path }
            | DiffEvent::ContainerDiffer { path }
            | DiffEvent::LeafDiffer { path, .. } => path,
        }
    }

    /// Informational events describe agreement, not difference, and are
    /// the ones strict mode drops.
    pub fn is_informational(&self) -> bool {
        matches!(self, DiffEvent::Exists { .. } | DiffEvent::Equal { .. })
    }
}
