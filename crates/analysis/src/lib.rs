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

//! Financial time-series transformations over time-indexed tables.
//!
//! The `quanttools-analysis` crate turns price tables into returns, collapses returns into
//! volatility and compounded return statistics, and derives drawdown metrics from a wealth
//! index:
//!
//! - A time-indexed table of optional cells with one column per asset ([`TimeSeriesFrame`]).
//! - Scalar annualization of single-period returns and volatilities.
//! - Volatility, compound return and their annualized forms, per column.
//! - The wealth index, previous peaks, drawdown and maximum drawdown pipeline.
//! - An analyzer that evaluates registered statistics and formats a summary.
//!
//! Data flows strictly forward:
//!
//! ```text
//! prices -> returns -> { volatility, compound return }
//! returns -> wealth index -> previous peaks -> drawdown -> max drawdown
//! ```
//!
//! Every transformation is pure and returns a new frame. Missing values are explicit
//! (`None`), while numeric degeneracy (`inf`, `NaN`) propagates without raising.
//!
//! The crate logs through the [`log`] facade and never installs a logger.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analyzer;
pub mod annualize;
pub mod config;
pub mod drawdown;
pub mod error;
pub mod frame;
pub mod periods;
pub mod returns;
pub mod statistic;
pub mod statistics;

use indexmap::IndexMap;
use ustr::Ustr;

/// Type alias for a per-column scalar produced by collapsing a frame along its time axis.
///
/// Keys follow the column order of the source frame.
pub type ColumnStatistic = IndexMap<Ustr, f64>;

// Re-exports
pub use crate::{
    analyzer::ReturnsAnalyzer,
    config::AnalysisConfig,
    drawdown::{
        DEFAULT_STARTING_AMOUNT, MaxDrawdown, drawdown, drawdown_from_returns, max_drawdown,
        max_drawdown_from_returns, previous_peaks, wealth_index,
    },
    error::AnalysisError,
    frame::{Cell, FrameRow, TimeSeriesFrame},
    periods::{Annualization, Periodicity, PeriodsPerYear},
    returns::returns_from_prices,
    statistic::FrameStatistic,
};
