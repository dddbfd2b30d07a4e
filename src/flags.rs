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

use std::path::PathBuf;

xflags::xflags! {
    cmd jcmp {
        /// Old JSON document (paths only here are reported as deleted)
        required old: PathBuf

        /// New JSON document (paths only here are reported as added)
        required new: PathBuf

        /// Start the comparison at this canonical path instead of the root
        optional -p, --path path: String

        /// Comma-separated substrings; any matching path is skipped entirely
        optional -b, --blacklist blacklist: String

        /// Strict mode: report differences only, not equal or existing paths
        optional -s, --strict

        /// Disable colored output
        optional --no-color
    }
}
