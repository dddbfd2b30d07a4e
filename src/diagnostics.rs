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

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Fatal,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Fatal => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticCode {
    FileNotFound,
    UnreadableFile,
    InvalidUtf8,
    MalformedJson,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::FileNotFound => "E001",
            DiagnosticCode::UnreadableFile => "E002",
            DiagnosticCode::InvalidUtf8 => "E003",
            DiagnosticCode::MalformedJson => "E010",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DiagnosticCode::FileNotFound => "File not found",
            DiagnosticCode::UnreadableFile => "Unreadable file",
            DiagnosticCode::InvalidUtf8 => "Invalid UTF-8 encoding",
            DiagnosticCode::MalformedJson => "Malformed JSON",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub filename: Option<String>,
    pub line_number: Option<usize>,
    pub column: Option<usize>,
    pub level: DiagnosticLevel,
    pub code: DiagnosticCode,
    pub description: String,
    pub code_snippet: Option<String>,
    pub advice: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, code: DiagnosticCode, description: String) -> Self {
        Self {
            filename: None,
            line_number: None,
            column: None,
            level,
            code,
            description,
            code_snippet: None,
            advice: None,
        }
    }

    pub fn with_location(mut self, filename: String, line_number: usize) -> Self {
        self.filename = Some(filename);
        self.line_number = Some(line_number);
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.code_snippet = Some(snippet);
        self
    }

    pub fn with_advice(mut self, advice: String) -> Self {
        self.advice = Some(advice);
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.level == DiagnosticLevel::Fatal
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(filename), Some(line)) = (&self.filename, self.line_number) {
            if let Some(col) = self.column {
                write!(f, "{}:{}:{} - ", filename, line, col)?;
            } else {
                write!(f, "{}:{} - ", filename, line)?;
            }
        }

        writeln!(
            f,
            "{} {}: {}",
            self.level,
            self.code.as_str(),
            self.code.title()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if let Some(snippet) = &self.code_snippet {
            writeln!(f)?;
            writeln!(f, "{}", snippet)?;
        }

        if let Some(advice) = &self.advice {
            writeln!(f)?;
            writeln!(f, "{}", advice)?;
        }

        Ok(())
    }
}
