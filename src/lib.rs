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

pub mod blacklist;
pub mod classify;
pub mod compare;
pub mod diagnostics;
pub mod events;
pub mod path;
pub mod report;
pub mod resolve;

pub use blacklist::Blacklist;
pub use classify::{classify, truncate_value, Classification, Outcome, MAX_VALUE_LEN};
pub use compare::Comparison;
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};
pub use events::DiffEvent;
pub use resolve::{resolve, ResolvedValue, ValueKind};
