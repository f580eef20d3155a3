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

use crate::frame::{Cell, FrameRow, TimeSeriesFrame};

/// Derives simple periodic returns from a table of prices.
///
/// The prices are first re-sorted by timestamp (stable, on a copy). Each output cell is
/// `(price[t] - price[t-1]) / price[t-1]` for its column, missing when either price is
/// missing. Rows with every cell missing are dropped, which always removes the first row.
///
/// A zero previous price yields `inf` or `NaN`, which is passed through.
#[must_use]
pub fn returns_from_prices(prices: &TimeSeriesFrame) -> TimeSeriesFrame {
    let sorted = prices.sorted_by_index();

    let changes = sorted.scan(None::<f64>, |previous: &mut Cell, current: Cell| {
        let change = match (*previous, current) {
            (Some(prev), Some(curr)) => Some((curr - prev) / prev),
            _ => None,
        };
        *previous = current;
        change
    });

    let returns = changes.filter_rows(|row: &FrameRow| !row.is_all_missing());

    log::debug!(
        "Derived returns: {} price rows -> {} return rows, {} columns",
        prices.len(),
        returns.len(),
        returns.width()
    );

    returns
}
