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

use crate::{
    ColumnStatistic,
    error::AnalysisError,
    frame::{Cell, TimeSeriesFrame},
    statistic::FrameStatistic,
};

/// Returns the product of `1 + r` over the present cells of a column.
pub(crate) fn growth_factor(cells: &[Cell]) -> f64 {
    cells.iter().flatten().map(|r| 1.0 + r).product()
}

/// Returns the total compounded return of each column: `prod(1 + r) - 1`.
///
/// Missing cells contribute a factor of one, so a column without values yields `0.0`.
#[must_use]
pub fn compound_return(returns: &TimeSeriesFrame) -> ColumnStatistic {
    returns.fold_columns(|cells| growth_factor(cells) - 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct CompoundReturn {}

impl Display for CompoundReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compound Return")
    }
}

impl FrameStatistic for CompoundReturn {
    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<ColumnStatistic, AnalysisError> {
        Ok(compound_return(returns))
    }
}
