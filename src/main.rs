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

use jcmp::{report, Blacklist, Comparison, Diagnostic, DiagnosticCode, DiagnosticLevel};
use serde_json::Value;
use std::path::Path;
use std::process;

mod flags;

fn main() {
    let flags = flags::Jcmp::from_env_or_exit();

    if flags.no_color {
        colored::control::set_override(false);
    }

    let diagnostics = run(flags);

    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    let has_fatal = diagnostics.iter().any(|d| d.is_fatal());
    if has_fatal {
        process::exit(1);
    }
}

fn run(flags: flags::Jcmp) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for input_path in [&flags.old, &flags.new] {
        if !input_path.exists() {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticLevel::Fatal,
                    DiagnosticCode::FileNotFound,
                    format!("I couldn't find the input file: {}", input_path.display()),
                )
                .with_advice(
                    "Make sure the file path is correct and the file exists. \
                     Check for typos in the filename."
                        .to_string(),
                ),
            );
        }
    }

    if !diagnostics.is_empty() {
        return diagnostics;
    }

    // Malformed input fails fast here; the comparison itself has no fatal
    // outcomes.
    let old_doc = match load_document(&flags.old) {
        Ok(doc) => doc,
        Err(diagnostic) => return vec![diagnostic],
    };
    let new_doc = match load_document(&flags.new) {
        Ok(doc) => doc,
        Err(diagnostic) => return vec![diagnostic],
    };

    let blacklist = flags
        .blacklist
        .as_deref()
        .map(Blacklist::from_csv)
        .unwrap_or_default();
    let start_path = flags.path.unwrap_or_default();

    let events = Comparison::new(&old_doc, &new_doc)
        .with_blacklist(blacklist)
        .strict(flags.strict)
        .run(&start_path);

    report::print(&events);

    Vec::new()
}

fn load_document(path: &Path) -> Result<Value, Diagnostic> {
    let bytes = std::fs::read(path).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::UnreadableFile,
            format!("I couldn't read the file {}: {}", path.display(), e),
        )
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::InvalidUtf8,
            format!(
                "The file {} is not valid UTF-8: {}",
                path.display(),
                e.utf8_error()
            ),
        )
    })?;

    parse_document(path, &text)
}

fn parse_document(path: &Path, text: &str) -> Result<Value, Diagnostic> {
    serde_json::from_str(text).map_err(|e| {
        let mut diagnostic = Diagnostic::new(
            DiagnosticLevel::Fatal,
            DiagnosticCode::MalformedJson,
            format!("I couldn't parse {} as JSON: {}", path.display(), e),
        )
        .with_location(path.display().to_string(), e.line())
        .with_column(e.column());

        if let Some(line) = text.lines().nth(e.line().saturating_sub(1)) {
            diagnostic = diagnostic.with_snippet(line.to_string());
        }

        diagnostic
    })
}
