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

use std::fmt::{self, Display};

use quanttools_core::math::sample_std;

use crate::{
    ColumnStatistic, error::AnalysisError, frame::TimeSeriesFrame, statistic::FrameStatistic,
};

/// Returns the per-column sample standard deviation of `returns` (N-1 denominator).
///
/// Missing cells are excluded. A column with fewer than two values yields `NaN`.
#[must_use]
pub fn volatility(returns: &TimeSeriesFrame) -> ColumnStatistic {
    returns.fold_columns(|cells| {
        let values: Vec<f64> = cells.iter().flatten().copied().collect();
        if values.len() < 2 {
            log::trace!(
                "Volatility undefined for a column with {} values",
                values.len()
            );
        }
        sample_std(&values)
    })
}

#[derive(Debug, Clone, Default)]
pub struct Volatility {}

impl Display for Volatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Volatility")
    }
}

impl FrameStatistic for Volatility {
    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<ColumnStatistic, AnalysisError> {
        Ok(volatility(returns))
    }
}
