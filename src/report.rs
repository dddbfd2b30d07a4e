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

//! Terminal rendering of diff events.
//!
//! Each outcome gets a four-character tag and its own color so runs over
//! large documents stay scannable. Styling is the reporter's whole job;
//! the comparison engine never prints.

use colored::Colorize;

use crate::events::DiffEvent;
use crate::path::display_form;

/// Formats one event as its output lines, colored.
///
/// Every event is a single line except a leaf difference, which prints the
/// tag line followed by both values around a separator.
pub fn render_event(event: &DiffEvent) -> Vec<String> {
    match event {
        DiffEvent::Blacklisted { path } => {
            vec![format!("!BLK {}", display_form(path))
                .bright_white()
                .on_bright_black()
                .to_string()]
        }
        DiffEvent::NotExistBoth { path } => {
            vec![format!(
                "!EBT {} (path does not exist in both JSONs)",
                display_form(path)
            )
            .bright_red()
            .to_string()]
        }
        DiffEvent::Added { path } => {
            vec![format!("+ADD {}", display_form(path)).bright_green().to_string()]
        }
        DiffEvent::Deleted { path } => {
            vec![format!("-DEL {}", display_form(path)).bright_red().to_string()]
        }
        DiffEvent::TypeMismatch {
            path,
            old_kind,
            new_kind,
        } => {
            vec![format!(
                "!TYP {} {} vs {}",
                display_form(path),
                old_kind,
                new_kind
            )
            .bright_magenta()
            .to_string()]
        }
        DiffEvent::Exists { path } => {
            vec![format!(":EXS {}", display_form(path)).bright_blue().to_string()]
        }
        DiffEvent::Equal { path } => {
            vec![format!("=EQL {}", display_form(path)).bright_cyan().to_string()]
        }
        DiffEvent::ContainerDiffer { path } => {
            vec![format!("!EQL {}", display_form(path)).bright_yellow().to_string()]
        }
        DiffEvent::LeafDiffer {
            path,
            old_value,
            new_value,
        } => {
            vec![
                format!("!EQL {}:", display_form(path)).bright_yellow().to_string(),
                old_value.bright_black().on_white().to_string(),
                " --- vs ---".bright_yellow().to_string(),
                new_value.yellow().on_white().to_string(),
            ]
        }
    }
}

/// Prints the whole event sequence to stdout.
pub fn print(events: &[DiffEvent]) {
    for event in events {
        for line in render_event(event) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(event: &DiffEvent) -> Vec<String> {
        colored::control::set_override(false);
        render_event(event)
    }

    #[test]
    fn test_single_line_tags() {
        let added = plain(&DiffEvent::Added {
            path: "user.name".into(),
        });
        assert_eq!(added, vec!["+ADD user . name"]);

        let deleted = plain(&DiffEvent::Deleted { path: "x".into() });
        assert_eq!(deleted, vec!["-DEL x"]);
    }

    #[test]
    fn test_type_mismatch_names_both_kinds() {
        use crate::resolve::ValueKind;
        let lines = plain(&DiffEvent::TypeMismatch {
            path: "x".into(),
            old_kind: ValueKind::Number,
            new_kind: ValueKind::String,
        });
        assert_eq!(lines, vec!["!TYP x number vs string"]);
    }

    #[test]
    fn test_leaf_differ_prints_both_values() {
        let lines = plain(&DiffEvent::LeafDiffer {
            path: "x".into(),
            old_value: "1".into(),
            new_value: "2".into(),
        });
        assert_eq!(lines, vec!["!EQL x:", "1", " --- vs ---", "2"]);
    }

    #[test]
    fn test_escaped_path_renders_readably() {
        let lines = plain(&DiffEvent::Blacklisted {
            path: "secret\\.token".into(),
        });
        assert_eq!(lines, vec!["!BLK secret.token"]);
    }
}
