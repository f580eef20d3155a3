// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Errors raised while constructing frames or reducing them to statistics.

use quanttools_core::UnixNanos;
use ustr::Ustr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data: frame has no rows")]
    EmptyFrame,
    #[error("Invalid frame: duplicate column '{0}'")]
    DuplicateColumn(Ustr),
    #[error("Invalid frame: row at {ts} has {actual} values, expected {expected}")]
    ColumnCountMismatch {
        ts: UnixNanos,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid frame: column '{column}' has {actual} values, index has {expected}")]
    LengthMismatch {
        column: Ustr,
        expected: usize,
        actual: usize,
    },
    #[error("Frames are not aligned: {0}")]
    ShapeMismatch(String),
}
