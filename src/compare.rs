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
use std::collections::HashSet;

use crate::blacklist::Blacklist;
use crate::classify::{classify, truncate_value, Outcome, MAX_VALUE_LEN};
use crate::events::DiffEvent;
use crate::path::encode_child;
use crate::resolve::{resolve, ResolvedValue};

/// One comparison run over two documents.
///
/// Owns the visited set for the duration of the run; build a fresh
/// `Comparison` for each pair of documents. The walk is depth-first and
/// deterministic: a path reached from both documents is classified exactly
/// once, on first discovery.
pub struct Comparison<'a> {
    old: &'a Value,
    new: &'a Value,
    blacklist: Blacklist,
    strict: bool,
    visited: HashSet<String>,
}

impl<'a> Comparison<'a> {
    pub fn new(old: &'a Value, new: &'a Value) -> Self {
        Self {
            old,
            new,
            blacklist: Blacklist::default(),
            strict: false,
            visited: HashSet::new(),
        }
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Strict mode drops the informational exists/equal events; differences
    /// are reported in both modes.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Walks both documents from `start_path` (canonical form, empty for
    /// the root) and returns the classified events in emission order.
    pub fn run(mut self, start_path: &str) -> Vec<DiffEvent> {
        let mut events = Vec::new();
        self.compare_path(start_path, &mut events);
        events
    }

    fn compare_path(&mut self, path: &str, events: &mut Vec<DiffEvent>) {
        // Insert before classifying: a key present on both sides is
        // discovered twice but must be classified once.
        if !self.visited.insert(path.to_string()) {
            return;
        }

        if self.blacklist.matches(path) {
            events.push(DiffEvent::Blacklisted {
                path: path.to_string(),
            });
            return;
        }

        let old = resolve(self.old, path);
        let new = resolve(self.new, path);
        let classification = classify(&old, &new);

        match classification.outcome {
            Outcome::NotExistBoth => events.push(DiffEvent::NotExistBoth {
                path: path.to_string(),
            }),
            Outcome::Added => events.push(DiffEvent::Added {
                path: path.to_string(),
            }),
            Outcome::Deleted => events.push(DiffEvent::Deleted {
                path: path.to_string(),
            }),
            Outcome::TypeMismatch(old_kind, new_kind) => events.push(DiffEvent::TypeMismatch {
                path: path.to_string(),
                old_kind,
                new_kind,
            }),
            Outcome::EqualBoth => {
                if !self.strict {
                    events.push(DiffEvent::Exists {
                        path: path.to_string(),
                    });
                    events.push(DiffEvent::Equal {
                        path: path.to_string(),
                    });
                }
                // Equality is over the full rendered subtree, so nothing
                // below this path can differ.
            }
            Outcome::ValueDiffer => {
                if !self.strict {
                    events.push(DiffEvent::Exists {
                        path: path.to_string(),
                    });
                }
                if classification.recurse {
                    events.push(DiffEvent::ContainerDiffer {
                        path: path.to_string(),
                    });
                    self.recurse_children(path, &old, &new, events);
                } else {
                    events.push(DiffEvent::LeafDiffer {
                        path: path.to_string(),
                        old_value: truncate_value(&old.render(), MAX_VALUE_LEN),
                        new_value: truncate_value(&new.render(), MAX_VALUE_LEN),
                    });
                }
            }
        }
    }

    /// Visits every key/index present in either side. The visited set
    /// collapses the overlap, so iterating the old side and then the new
    /// side yields each child once.
    fn recurse_children(
        &mut self,
        path: &str,
        old: &ResolvedValue<'a>,
        new: &ResolvedValue<'a>,
        events: &mut Vec<DiffEvent>,
    ) {
        for side in [old, new] {
            match side.value() {
                Some(Value::Object(map)) => {
                    for key in map.keys() {
                        self.compare_path(&encode_child(path, key), events);
                    }
                }
                Some(Value::Array(items)) => {
                    for index in 0..items.len() {
                        self.compare_path(&encode_child(path, &index.to_string()), events);
                    }
                }
                _ => {}
            }
        }
    }
}
