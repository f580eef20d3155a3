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

use std::fmt::Debug;

use crate::{ColumnStatistic, error::AnalysisError, frame::TimeSeriesFrame};

/// A statistic which collapses every column of a returns frame to one scalar.
pub trait FrameStatistic: Debug {
    /// Returns the display name, which is also the registration key.
    fn name(&self) -> String;

    /// Calculates the statistic for every column of `returns`.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistic is undefined for the given frame.
    fn calculate_from_returns(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<ColumnStatistic, AnalysisError>;
}
