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

//! A time-indexed table of floating-point cells, one column per asset.
//!
//! [`TimeSeriesFrame`] is an ordered sequence of [`FrameRow`]s. Each row carries a
//! [`UnixNanos`] timestamp and exactly one [`Cell`] per column. A cell of `None` is an
//! explicit missing value; numeric degeneracy (`inf`, `NaN`) is carried as `Some`.
//!
//! Every transformation returns a new frame. Per-column work is expressed as a row-order
//! pass carrying one piece of state per column ([`TimeSeriesFrame::scan`]), a cell-wise
//! combination of two aligned frames ([`TimeSeriesFrame::zip_with`]), or a reduction of each
//! column to a scalar ([`TimeSeriesFrame::fold_columns`], [`TimeSeriesFrame::reduce_columns`]).

use std::fmt::{self, Display};

use ahash::AHashSet;
use indexmap::IndexMap;
use quanttools_core::UnixNanos;
use ustr::Ustr;

use crate::{ColumnStatistic, error::AnalysisError};

/// A single table cell, `None` marking a missing value.
pub type Cell = Option<f64>;

/// One timestamped row of a [`TimeSeriesFrame`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRow {
    ts: UnixNanos,
    values: Vec<Cell>,
}

impl FrameRow {
    /// Returns the row timestamp.
    #[must_use]
    pub const fn ts(&self) -> UnixNanos {
        self.ts
    }

    /// Returns the row cells in column order.
    #[must_use]
    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    /// Returns `true` if every cell in the row is missing.
    #[must_use]
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// An ordered sequence of timestamped rows over a fixed set of named columns.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesFrame {
    columns: Vec<Ustr>,
    rows: Vec<FrameRow>,
}

impl TimeSeriesFrame {
    /// Creates a new empty [`TimeSeriesFrame`] with the given column names.
    ///
    /// # Errors
    ///
    /// Returns an error if a column name is repeated.
    pub fn new<I, S>(columns: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<Ustr> = columns
            .into_iter()
            .map(|name| Ustr::from(name.as_ref()))
            .collect();

        let mut seen = AHashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(*column) {
                return Err(AnalysisError::DuplicateColumn(*column));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Creates a new [`TimeSeriesFrame`] from an index and column-major cell vectors.
    ///
    /// Rows keep the order of `index`; no sorting is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if a column name is repeated or a column length differs from the
    /// index length.
    pub fn from_columns<S: AsRef<str>>(
        index: Vec<UnixNanos>,
        columns: Vec<(S, Vec<Cell>)>,
    ) -> Result<Self, AnalysisError> {
        let mut frame = Self::new(columns.iter().map(|(name, _)| name.as_ref()))?;

        for (name, cells) in &columns {
            if cells.len() != index.len() {
                return Err(AnalysisError::LengthMismatch {
                    column: Ustr::from(name.as_ref()),
                    expected: index.len(),
                    actual: cells.len(),
                });
            }
        }

        frame.rows = index
            .into_iter()
            .enumerate()
            .map(|(i, ts)| FrameRow {
                ts,
                values: columns.iter().map(|(_, cells)| cells[i]).collect(),
            })
            .collect();

        Ok(frame)
    }

    /// Creates a new [`TimeSeriesFrame`] where every cell is present.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`TimeSeriesFrame::from_columns`].
    pub fn from_values<S: AsRef<str>>(
        index: Vec<UnixNanos>,
        columns: Vec<(S, Vec<f64>)>,
    ) -> Result<Self, AnalysisError> {
        let columns = columns
            .into_iter()
            .map(|(name, values)| (name, values.into_iter().map(Some).collect()))
            .collect();
        Self::from_columns(index, columns)
    }

    /// Appends a row to the end of the frame.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` does not have one cell per column.
    pub fn push_row(&mut self, ts: UnixNanos, values: Vec<Cell>) -> Result<(), AnalysisError> {
        if values.len() != self.columns.len() {
            return Err(AnalysisError::ColumnCountMismatch {
                ts,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(FrameRow { ts, values });
        Ok(())
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn columns(&self) -> &[Ustr] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[FrameRow] {
        &self.rows
    }

    /// Returns the row timestamps in order.
    #[must_use]
    pub fn index(&self) -> Vec<UnixNanos> {
        self.rows.iter().map(FrameRow::ts).collect()
    }

    /// Returns the last row, if any.
    #[must_use]
    pub fn last_row(&self) -> Option<&FrameRow> {
        self.rows.last()
    }

    /// Returns the position of the column named `name`.
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.as_str() == name)
    }

    /// Returns the `(timestamp, cell)` pairs of the column at `position` in row order.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn column_values(&self, position: usize) -> impl Iterator<Item = (UnixNanos, Cell)> + '_ {
        assert!(
            position < self.columns.len(),
            "column position {position} out of bounds for width {}",
            self.columns.len()
        );
        self.rows.iter().map(move |row| (row.ts, row.values[position]))
    }

    /// Returns the cells of the column named `name` in row order.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<Cell>> {
        let position = self.column_position(name)?;
        Some(self.column_values(position).map(|(_, cell)| cell).collect())
    }

    /// Returns the present value at `row` in the column named `name`.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<f64> {
        let position = self.column_position(name)?;
        self.rows.get(row)?.values[position]
    }

    /// Returns `true` if the rows are in non-decreasing timestamp order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].ts <= w[1].ts)
    }

    /// Returns a copy sorted by timestamp ascending.
    ///
    /// The sort is stable: rows sharing a timestamp keep their relative order.
    #[must_use]
    pub fn sorted_by_index(&self) -> Self {
        let mut sorted = self.clone();
        if !sorted.is_sorted() {
            sorted.rows.sort_by_key(FrameRow::ts);
        }
        sorted
    }

    /// Returns a copy keeping only the rows for which `predicate` is true.
    #[must_use]
    pub fn filter_rows<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&FrameRow) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(*row))
                .cloned()
                .collect(),
        }
    }

    /// Walks the rows in order, threading one state value per column through `f`.
    ///
    /// Every column starts from a clone of `init`. For each row, `f` receives the column
    /// state and the current cell, and returns the output cell for that position.
    #[must_use]
    pub fn scan<S, F>(&self, init: S, mut f: F) -> Self
    where
        S: Clone,
        F: FnMut(&mut S, Cell) -> Cell,
    {
        let mut states = vec![init; self.columns.len()];
        let rows = self
            .rows
            .iter()
            .map(|row| FrameRow {
                ts: row.ts,
                values: row
                    .values
                    .iter()
                    .zip(states.iter_mut())
                    .map(|(&cell, state)| f(state, cell))
                    .collect(),
            })
            .collect();

        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Combines two aligned frames cell by cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the frames differ in columns, row count or row timestamps.
    pub fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self, AnalysisError>
    where
        F: FnMut(Cell, Cell) -> Cell,
    {
        if self.columns != other.columns {
            return Err(AnalysisError::ShapeMismatch(format!(
                "columns {:?} != {:?}",
                self.columns, other.columns
            )));
        }
        if self.rows.len() != other.rows.len() {
            return Err(AnalysisError::ShapeMismatch(format!(
                "row count {} != {}",
                self.rows.len(),
                other.rows.len()
            )));
        }

        let mut rows = Vec::with_capacity(self.rows.len());
        for (left, right) in self.rows.iter().zip(&other.rows) {
            if left.ts != right.ts {
                return Err(AnalysisError::ShapeMismatch(format!(
                    "index {} != {}",
                    left.ts, right.ts
                )));
            }
            rows.push(FrameRow {
                ts: left.ts,
                values: left
                    .values
                    .iter()
                    .zip(&right.values)
                    .map(|(&a, &b)| f(a, b))
                    .collect(),
            });
        }

        Ok(Self {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Collapses each column to a scalar along the time axis.
    ///
    /// `f` receives the column cells in row order, missing values included.
    #[must_use]
    pub fn fold_columns<F>(&self, mut f: F) -> ColumnStatistic
    where
        F: FnMut(&[Cell]) -> f64,
    {
        let mut output = IndexMap::with_capacity(self.columns.len());
        for (position, column) in self.columns.iter().enumerate() {
            let cells: Vec<Cell> = self.rows.iter().map(|row| row.values[position]).collect();
            output.insert(*column, f(&cells));
        }
        output
    }

    /// Reduces each column to a value, with access to the row timestamps.
    ///
    /// Columns are reduced independently and keep the frame's column order.
    #[must_use]
    pub fn reduce_columns<T, F>(&self, mut f: F) -> IndexMap<Ustr, T>
    where
        F: FnMut(Ustr, &[(UnixNanos, Cell)]) -> T,
    {
        let mut output = IndexMap::with_capacity(self.columns.len());
        for (position, column) in self.columns.iter().enumerate() {
            let cells: Vec<(UnixNanos, Cell)> = self.column_values(position).collect();
            output.insert(*column, f(*column, &cells));
        }
        output
    }
}

impl Display for TimeSeriesFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<30}", "ts")?;
        for column in &self.columns {
            write!(f, " {:>14}", column.as_str())?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<30}", row.ts.to_string())?;
            for cell in &row.values {
                match cell {
                    Some(value) => write!(f, " {value:>14.6}")?,
                    None => write!(f, " {:>14}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
