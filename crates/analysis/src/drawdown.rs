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

//! The wealth index, running peak and drawdown pipeline.
//!
//! Each stage maps a [`TimeSeriesFrame`] to a new frame on the same index and columns:
//!
//! ```text
//! returns -> wealth_index -> previous_peaks -> drawdown -> max_drawdown
//! ```
//!
//! Missing cells stay missing at every stage and never reset the running state of their
//! column.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use quanttools_core::UnixNanos;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    error::AnalysisError,
    frame::{Cell, TimeSeriesFrame},
};

/// The starting amount used for a wealth index when none is configured.
pub const DEFAULT_STARTING_AMOUNT: f64 = 1000.0;

/// The deepest drawdown of a column and the row it occurred at.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaxDrawdown {
    /// Timestamp of the first row reaching the minimum.
    pub ts: UnixNanos,
    /// The drawdown at that row (zero or negative).
    pub value: f64,
}

impl Display for MaxDrawdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} at {}", self.value, self.ts)
    }
}

/// Compounds `returns` into the value of an investment of `starting_amount`.
///
/// `wealth[t] = starting_amount * prod(1 + r[s]) for s <= t`. A missing return gives a
/// missing wealth cell and leaves the running product unchanged.
#[must_use]
pub fn wealth_index(returns: &TimeSeriesFrame, starting_amount: f64) -> TimeSeriesFrame {
    log::debug!(
        "Computing wealth index for {} rows, starting amount {starting_amount}",
        returns.len()
    );

    returns.scan(1.0_f64, |growth: &mut f64, cell: Cell| {
        cell.map(|r| {
            *growth *= 1.0 + r;
            starting_amount * *growth
        })
    })
}

/// Returns the running maximum of each column of `wealth`.
///
/// Missing cells are skipped. A `NaN` wealth cell yields `NaN` at that row without
/// contaminating the running peak.
#[must_use]
pub fn previous_peaks(wealth: &TimeSeriesFrame) -> TimeSeriesFrame {
    wealth.scan(None::<f64>, |peak: &mut Option<f64>, cell: Cell| {
        let value = cell?;
        if value.is_nan() {
            return Some(f64::NAN);
        }
        let updated = peak.map_or(value, |current| current.max(value));
        *peak = Some(updated);
        Some(updated)
    })
}

/// Returns the relative distance of each wealth cell below its running peak.
///
/// `drawdown[t] = (wealth[t] - peak[t]) / peak[t]`, missing where either input is missing.
///
/// # Errors
///
/// Returns an error if `wealth` and `peaks` differ in columns, row count or index.
pub fn drawdown(
    wealth: &TimeSeriesFrame,
    peaks: &TimeSeriesFrame,
) -> Result<TimeSeriesFrame, AnalysisError> {
    wealth.zip_with(peaks, |w, p| match (w, p) {
        (Some(w), Some(p)) => Some((w - p) / p),
        _ => None,
    })
}

/// Runs the wealth index, previous peaks and drawdown stages over `returns`.
///
/// # Panics
///
/// Panics if the wealth and peak frames derived from `returns` are not aligned.
#[must_use]
pub fn drawdown_from_returns(returns: &TimeSeriesFrame, starting_amount: f64) -> TimeSeriesFrame {
    let wealth = wealth_index(returns, starting_amount);
    let peaks = previous_peaks(&wealth);
    // Both frames come from `returns` through `scan`, so they share its shape and index
    drawdown(&wealth, &peaks).expect(quanttools_core::correctness::FAILED)
}

/// Finds, per column, the deepest drawdown and the first row at which it occurs.
///
/// Missing and `NaN` cells are skipped. A column with no comparable value reduces to a
/// `NaN` record at its first present row, or at the first row when every cell is
/// missing. Columns are reduced independently.
///
/// # Errors
///
/// Returns an error if `drawdown` has no rows.
pub fn max_drawdown(
    drawdown: &TimeSeriesFrame,
) -> Result<IndexMap<Ustr, MaxDrawdown>, AnalysisError> {
    if drawdown.is_empty() {
        return Err(AnalysisError::EmptyFrame);
    }

    Ok(drawdown.reduce_columns(|column, cells| {
        let mut deepest: Option<MaxDrawdown> = None;
        for &(ts, cell) in cells {
            let Some(value) = cell.filter(|v| !v.is_nan()) else {
                continue;
            };
            // Strict comparison keeps the earliest row on ties
            if deepest.is_none_or(|current| value < current.value) {
                deepest = Some(MaxDrawdown { ts, value });
            }
        }

        let deepest = deepest.unwrap_or_else(|| {
            log::trace!("No comparable drawdown for {column}");
            let ts = cells
                .iter()
                .find(|(_, cell)| cell.is_some())
                .or_else(|| cells.first())
                .map_or_else(UnixNanos::default, |&(ts, _)| ts);
            MaxDrawdown {
                ts,
                value: f64::NAN,
            }
        });
        log::debug!("Max drawdown for {column}: {deepest}");
        deepest
    }))
}

/// Runs the full pipeline from `returns` to the per-column maximum drawdown.
///
/// # Errors
///
/// Returns an error under the same conditions as [`max_drawdown`].
pub fn max_drawdown_from_returns(
    returns: &TimeSeriesFrame,
    starting_amount: f64,
) -> Result<IndexMap<Ustr, MaxDrawdown>, AnalysisError> {
    max_drawdown(&drawdown_from_returns(returns, starting_amount))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use quanttools_core::approx_eq;
    use rstest::{fixture, rstest};

    use super::*;

    fn ts(date: &str) -> UnixNanos {
        UnixNanos::from(date)
    }

    fn assert_cells(actual: &[Cell], expected: &[Cell]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            match (a, e) {
                (Some(a), Some(e)) => assert!(approx_eq!(f64, *a, *e, epsilon = 1e-9), "{a} != {e}"),
                (None, None) => {}
                _ => panic!("{actual:?} != {expected:?}"),
            }
        }
    }

    #[fixture]
    fn returns() -> TimeSeriesFrame {
        TimeSeriesFrame::from_values(
            vec![ts("2024-02-29"), ts("2024-03-31")],
            vec![("AAA", vec![0.10, -0.10])],
        )
        .unwrap()
    }

    #[rstest]
    fn test_wealth_index(returns: TimeSeriesFrame) {
        let wealth = wealth_index(&returns, 100.0);
        assert_eq!(wealth.index(), returns.index());
        assert_cells(&wealth.column("AAA").unwrap(), &[Some(110.0), Some(99.0)]);
    }

    #[rstest]
    fn test_wealth_index_missing_return_keeps_product() {
        let returns = TimeSeriesFrame::from_columns(
            vec![ts("2024-01-31"), ts("2024-02-29"), ts("2024-03-31")],
            vec![("AAA", vec![Some(0.5), None, Some(1.0)])],
        )
        .unwrap();

        let wealth = wealth_index(&returns, 1.0);

        assert_cells(&wealth.column("AAA").unwrap(), &[Some(1.5), None, Some(3.0)]);
    }

    #[rstest]
    fn test_previous_peaks(returns: TimeSeriesFrame) {
        let peaks = previous_peaks(&wealth_index(&returns, 100.0));
        assert_cells(&peaks.column("AAA").unwrap(), &[Some(110.0), Some(110.0)]);
    }

    #[rstest]
    fn test_previous_peaks_skips_missing_and_nan() {
        let wealth = TimeSeriesFrame::from_columns(
            vec![
                ts("2024-01-31"),
                ts("2024-02-29"),
                ts("2024-03-31"),
                ts("2024-04-30"),
            ],
            vec![("AAA", vec![Some(5.0), None, Some(f64::NAN), Some(4.0)])],
        )
        .unwrap();

        let peaks = previous_peaks(&wealth).column("AAA").unwrap();

        assert_eq!(peaks[0], Some(5.0));
        assert_eq!(peaks[1], None);
        assert!(peaks[2].unwrap().is_nan());
        assert_eq!(peaks[3], Some(5.0));
    }

    #[rstest]
    fn test_drawdown(returns: TimeSeriesFrame) {
        let drawdown = drawdown_from_returns(&returns, 100.0);
        assert_cells(&drawdown.column("AAA").unwrap(), &[Some(0.0), Some(-0.1)]);
    }

    #[rstest]
    fn test_drawdown_rejects_misaligned_frames(returns: TimeSeriesFrame) {
        let wealth = wealth_index(&returns, 100.0);
        let other = TimeSeriesFrame::from_values(
            vec![ts("2024-02-29"), ts("2024-04-30")],
            vec![("AAA", vec![110.0, 110.0])],
        )
        .unwrap();

        let result = drawdown(&wealth, &other);

        assert!(matches!(result, Err(AnalysisError::ShapeMismatch(_))));
    }

    #[rstest]
    fn test_max_drawdown(returns: TimeSeriesFrame) {
        let result = max_drawdown_from_returns(&returns, 100.0).unwrap();
        let record = result[&Ustr::from("AAA")];
        assert_eq!(record.ts, ts("2024-03-31"));
        assert!(approx_eq!(f64, record.value, -0.1, epsilon = 1e-12));
    }

    #[rstest]
    fn test_max_drawdown_ties_report_earliest_row() {
        let drawdown = TimeSeriesFrame::from_values(
            vec![ts("2024-01-31"), ts("2024-02-29"), ts("2024-03-31")],
            vec![("AAA", vec![-0.2, 0.0, -0.2])],
        )
        .unwrap();

        let result = max_drawdown(&drawdown).unwrap();

        assert_eq!(result[&Ustr::from("AAA")].ts, ts("2024-01-31"));
        assert_eq!(result[&Ustr::from("AAA")].value, -0.2);
    }

    #[rstest]
    fn test_max_drawdown_never_below_peak_is_zero() {
        let returns = TimeSeriesFrame::from_values(
            vec![ts("2024-01-31"), ts("2024-02-29")],
            vec![("AAA", vec![0.01, 0.02])],
        )
        .unwrap();

        let result = max_drawdown_from_returns(&returns, DEFAULT_STARTING_AMOUNT).unwrap();

        assert_eq!(result[&Ustr::from("AAA")].value, 0.0);
        assert_eq!(result[&Ustr::from("AAA")].ts, ts("2024-01-31"));
    }

    #[rstest]
    fn test_max_drawdown_per_column_order() {
        let returns = TimeSeriesFrame::from_columns(
            vec![ts("2024-01-31"), ts("2024-02-29"), ts("2024-03-31")],
            vec![
                ("ZZZ", vec![Some(-0.5), Some(0.1), Some(0.1)]),
                ("AAA", vec![Some(0.1), None, Some(-0.3)]),
            ],
        )
        .unwrap();

        let result = max_drawdown_from_returns(&returns, 1.0).unwrap();

        let names: Vec<&str> = result.keys().map(Ustr::as_str).collect();
        assert_eq!(names, ["ZZZ", "AAA"]);
        assert_eq!(result[&Ustr::from("ZZZ")].ts, ts("2024-01-31"));
        assert_eq!(result[&Ustr::from("AAA")].ts, ts("2024-03-31"));
        assert!(approx_eq!(f64, result[&Ustr::from("AAA")].value, -0.3, epsilon = 1e-12));
    }

    #[rstest]
    fn test_max_drawdown_empty_frame() {
        let empty = TimeSeriesFrame::new(["AAA"]).unwrap();
        assert_eq!(max_drawdown(&empty).unwrap_err(), AnalysisError::EmptyFrame);
    }

    #[rstest]
    fn test_max_drawdown_column_without_values_keeps_other_columns() {
        let drawdown = TimeSeriesFrame::from_columns(
            vec![ts("2024-01-31"), ts("2024-02-29"), ts("2024-03-31")],
            vec![
                ("AAA", vec![Some(0.0), Some(-0.1), Some(-0.05)]),
                ("BBB", vec![None, Some(f64::NAN), Some(f64::NAN)]),
                ("CCC", vec![None, None, None]),
            ],
        )
        .unwrap();

        let result = max_drawdown(&drawdown).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[&Ustr::from("AAA")].ts, ts("2024-02-29"));
        assert!(approx_eq!(f64, result[&Ustr::from("AAA")].value, -0.1, epsilon = 1e-12));
        assert_eq!(result[&Ustr::from("BBB")].ts, ts("2024-02-29"));
        assert!(result[&Ustr::from("BBB")].value.is_nan());
        assert_eq!(result[&Ustr::from("CCC")].ts, ts("2024-01-31"));
        assert!(result[&Ustr::from("CCC")].value.is_nan());
    }

    #[rstest]
    fn test_wealth_index_zero_amount_is_not_rejected(returns: TimeSeriesFrame) {
        let wealth = wealth_index(&returns, 0.0);
        assert_eq!(wealth.column("AAA").unwrap(), vec![Some(0.0), Some(0.0)]);

        let drawdown = drawdown_from_returns(&returns, 0.0);
        let cells = drawdown.column("AAA").unwrap();
        assert!(cells.iter().all(|cell| cell.is_some_and(f64::is_nan)));

        let result = max_drawdown_from_returns(&returns, 0.0).unwrap();
        let record = result[&Ustr::from("AAA")];
        assert_eq!(record.ts, ts("2024-02-29"));
        assert!(record.value.is_nan());
    }

    #[rstest]
    fn test_negative_amount_sign_flips(returns: TimeSeriesFrame) {
        let wealth = wealth_index(&returns, -100.0);
        assert_cells(&wealth.column("AAA").unwrap(), &[Some(-110.0), Some(-99.0)]);

        let peaks = previous_peaks(&wealth);
        assert_cells(&peaks.column("AAA").unwrap(), &[Some(-110.0), Some(-99.0)]);

        let drawdown = drawdown_from_returns(&returns, -100.0);
        assert_cells(&drawdown.column("AAA").unwrap(), &[Some(0.0), Some(0.0)]);

        let result = max_drawdown_from_returns(&returns, -100.0).unwrap();
        let record = result[&Ustr::from("AAA")];
        assert_eq!(record.ts, ts("2024-02-29"));
        assert_eq!(record.value, 0.0);
    }

    #[rstest]
    fn test_max_drawdown_display() {
        let record = MaxDrawdown {
            ts: ts("2024-03-31"),
            value: -0.1,
        };
        assert_eq!(record.to_string(), "-0.1000 at 2024-03-31");
    }
}
