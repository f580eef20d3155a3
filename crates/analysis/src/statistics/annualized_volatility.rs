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
    statistics::volatility::volatility,
};

/// Returns the per-column volatility of `returns` scaled to one year.
///
/// The scaling factor is `sqrt(periods)` where `periods` is the number of
/// `annualization.periodicity` periods in a year; it is never inferred from the index.
#[must_use]
pub fn annualized_volatility(
    returns: &TimeSeriesFrame,
    annualization: Annualization,
) -> ColumnStatistic {
    let mut output = volatility(returns);
    for value in output.values_mut() {
        *value = annualization.annualize_volatility(*value);
    }
    output
}

#[derive(Debug, Clone, Default)]
pub struct AnnualizedVolatility {
    annualization: Annualization,
}

impl AnnualizedVolatility {
    /// Creates a new [`AnnualizedVolatility`] instance.
    #[must_use]
    pub const fn new(annualization: Annualization) -> Self {
        Self { annualization }
    }
}

impl Display for AnnualizedVolatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Volatility (Annualized, {})",
            self.annualization.periodicity
        )
    }
}

impl FrameStatistic for AnnualizedVolatility {
    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<ColumnStatistic, AnalysisError> {
        Ok(annualized_volatility(returns, self.annualization))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use quanttools_core::{approx_eq, datetime::month_end_sequence};
    use rstest::{fixture, rstest};
    use ustr::Ustr;

    use super::*;

    #[fixture]
    fn returns() -> TimeSeriesFrame {
        TimeSeriesFrame::from_values(
            month_end_sequence(2024, 1, 4).unwrap(),
            vec![("AAA", vec![0.01, -0.02, 0.03, 0.00])],
        )
        .unwrap()
    }

    #[rstest]
    fn test_monthly_scaling(returns: TimeSeriesFrame) {
        let periodic = volatility(&returns)[&Ustr::from("AAA")];
        let result = annualized_volatility(&returns, Annualization::monthly());
        assert!(approx_eq!(
            f64,
            result[&Ustr::from("AAA")],
            periodic * 12.0_f64.sqrt(),
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_daily_scaling_differs_from_monthly(returns: TimeSeriesFrame) {
        let monthly = annualized_volatility(&returns, Annualization::monthly());
        let daily = annualized_volatility(&returns, Annualization::daily());
        let ratio = daily[&Ustr::from("AAA")] / monthly[&Ustr::from("AAA")];
        assert!(approx_eq!(f64, ratio, (252.0_f64 / 12.0).sqrt(), epsilon = 1e-12));
    }

    #[rstest]
    fn test_nan_stays_nan() {
        let returns = TimeSeriesFrame::from_values(
            month_end_sequence(2024, 1, 1).unwrap(),
            vec![("AAA", vec![0.01])],
        )
        .unwrap();
        let result = annualized_volatility(&returns, Annualization::monthly());
        assert!(result[&Ustr::from("AAA")].is_nan());
    }

    #[rstest]
    fn test_name() {
        let statistic = AnnualizedVolatility::new(Annualization::daily());
        assert_eq!(statistic.name(), "Volatility (Annualized, DAILY)");
        assert_eq!(
            AnnualizedVolatility::default().name(),
            "Volatility (Annualized, MONTHLY)"
        );
    }

    #[rstest]
    fn test_statistic_matches_function(returns: TimeSeriesFrame) {
        let statistic = AnnualizedVolatility::new(Annualization::quarterly());
        let result = statistic.calculate_from_returns(&returns).unwrap();
        assert_eq!(
            result,
            annualized_volatility(&returns, Annualization::quarterly())
        );
    }
}
