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

/// Substrings that suppress comparison of any matching canonical path.
///
/// Matching is case-sensitive and unanchored: an entry hits as a prefix,
/// suffix, or anywhere in the middle of the path.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Blacklist {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Builds a blacklist from the comma-separated CLI flag value.
    /// Empty entries (from stray commas) are dropped so they can't match
    /// every path.
    pub fn from_csv(csv: &str) -> Self {
        Self {
            entries: csv
                .split(',')
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn matches(&self, canonical: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| canonical.contains(entry.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blacklist_matches_nothing() {
        let blacklist = Blacklist::default();
        assert!(!blacklist.matches(""));
        assert!(!blacklist.matches("user.name"));
    }

    #[test]
    fn test_substring_match_is_unanchored() {
        let blacklist = Blacklist::new(vec!["secret".to_string()]);
        assert!(blacklist.matches("secret"));
        assert!(blacklist.matches("config.secret.key"));
        assert!(blacklist.matches("topsecret"));
        assert!(!blacklist.matches("Secret"));
    }

    #[test]
    fn test_from_csv_splits_entries() {
        let blacklist = Blacklist::from_csv("token,password");
        assert!(blacklist.matches("auth.token"));
        assert!(blacklist.matches("password"));
        assert!(!blacklist.matches("user"));
    }

    #[test]
    fn test_from_csv_drops_empty_entries() {
        let blacklist = Blacklist::from_csv("token,,");
        assert!(!blacklist.matches("user.name"));
        assert!(blacklist.matches("token"));
    }
}
