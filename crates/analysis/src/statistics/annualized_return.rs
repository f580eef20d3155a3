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
    frame::TimeSeriesFrame,
    periods::Annualization,
    statistic::FrameStatistic,
    statistics::compound_return::growth_factor,
};

/// Returns the geometric average yearly return of each column.
///
/// `prod(1 + r) ^ (periods / rows) - 1`, where `periods` is the number of
/// `annualization.periodicity` periods in a year and `rows` counts every row of the frame,
/// including rows with missing cells.
///
/// # Errors
///
/// Returns an error if `returns` has no rows.
#[allow(clippy::cast_precision_loss)]
pub fn annualized_return(
    returns: &TimeSeriesFrame,
    annualization: Annualization,
) -> Result<ColumnStatistic, AnalysisError> {
    if returns.is_empty() {
        return Err(AnalysisError::EmptyFrame);
    }

    let exponent = f64::from(annualization.factor()) / returns.len() as f64;
    log::debug!(
        "Annualizing {} rows at {} periods per year",
        returns.len(),
        annualization.factor()
    );

    Ok(returns.fold_columns(|cells| growth_factor(cells).powf(exponent) - 1.0))
}

#[derive(Debug, Clone, Default)]
pub struct AnnualizedReturn {
    annualization: Annualization,
}

impl AnnualizedReturn {
    /// Creates a new [`AnnualizedReturn`] instance.
    #[must_use]
    pub const fn new(annualization: Annualization) -> Self {
        Self { annualization }
    }
}

impl Display for AnnualizedReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Return (Annualized, {})", self.annualization.periodicity)
    }
}

impl FrameStatistic for AnnualizedReturn {
    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<ColumnStatistic, AnalysisError> {
        annualized_return(returns, self.annualization)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use quanttools_core::{approx_eq, datetime::month_end_sequence};
    use rstest::rstest;
    use ustr::Ustr;

    use super::*;
    use crate::frame::Cell;

    fn create_returns(cells: Vec<Cell>) -> TimeSeriesFrame {
        let index = month_end_sequence(2022, 1, cells.len()).unwrap();
        TimeSeriesFrame::from_columns(index, vec![("AAA", cells)]).unwrap()
    }

    #[rstest]
    fn test_twelve_equal_months() {
        let returns = create_returns(vec![Some(0.01); 12]);
        let result = annualized_return(&returns, Annualization::monthly()).unwrap();
        assert!(approx_eq!(
            f64,
            result[&Ustr::from("AAA")],
            1.01_f64.powi(12) - 1.0,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_single_month_matches_converter() {
        let returns = create_returns(vec![Some(0.01)]);
        let result = annualized_return(&returns, Annualization::monthly()).unwrap();
        assert!(approx_eq!(
            f64,
            result[&Ustr::from("AAA")],
            crate::annualize::from_monthly_to_annualized_return(0.01),
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_missing_cells_count_towards_rows() {
        // Growth 1.21 over 4 rows: 1.21^(12/4) - 1
        let returns = create_returns(vec![Some(0.1), None, Some(0.1), None]);
        let result = annualized_return(&returns, Annualization::monthly()).unwrap();
        assert!(approx_eq!(
            f64,
            result[&Ustr::from("AAA")],
            1.21_f64.powi(3) - 1.0,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_quarterly_periodicity() {
        let returns = create_returns(vec![Some(0.02), Some(0.02)]);
        let result = annualized_return(&returns, Annualization::quarterly()).unwrap();
        assert!(approx_eq!(
            f64,
            result[&Ustr::from("AAA")],
            1.02_f64.powi(4) - 1.0,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_empty_frame() {
        let returns = create_returns(vec![]);
        let result = annualized_return(&returns, Annualization::monthly());
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyFrame);
    }

    #[rstest]
    fn test_statistic_propagates_error() {
        let returns = create_returns(vec![]);
        let statistic = AnnualizedReturn::default();
        assert_eq!(
            statistic.calculate_from_returns(&returns).unwrap_err(),
            AnalysisError::EmptyFrame
        );
    }

    #[rstest]
    fn test_name() {
        let statistic = AnnualizedReturn::new(Annualization::daily());
        assert_eq!(statistic.name(), "Return (Annualized, DAILY)");
    }
}
