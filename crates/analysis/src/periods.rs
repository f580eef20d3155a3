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

//! Compounding periods and the annualization they imply.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::annualize::{annualize_return, annualize_volatility};

/// Number of trading days in a year.
pub const DAYS_PER_YEAR: u32 = 252;

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Number of quarters in a year.
pub const QUARTERS_PER_YEAR: u32 = 4;

/// Number of years in a year.
pub const YEARS_PER_YEAR: u32 = 1;

/// The sampling frequency of a returns series.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Periodicity {
    /// One observation per trading day.
    Daily,
    /// One observation per month.
    #[default]
    Monthly,
    /// One observation per quarter.
    Quarterly,
    /// One observation per year.
    Annual,
}

/// The number of compounding periods in one year for each [`Periodicity`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodsPerYear {
    /// Trading days per year.
    pub days: u32,
    /// Months per year.
    pub months: u32,
    /// Quarters per year.
    pub quarters: u32,
    /// Years per year.
    pub years: u32,
}

impl PeriodsPerYear {
    /// The conventional table: 252 trading days, 12 months, 4 quarters.
    pub const STANDARD: Self = Self {
        days: DAYS_PER_YEAR,
        months: MONTHS_PER_YEAR,
        quarters: QUARTERS_PER_YEAR,
        years: YEARS_PER_YEAR,
    };

    /// Returns the number of periods per year for the given `periodicity`.
    #[must_use]
    pub const fn for_periodicity(&self, periodicity: Periodicity) -> u32 {
        match periodicity {
            Periodicity::Daily => self.days,
            Periodicity::Monthly => self.months,
            Periodicity::Quarterly => self.quarters,
            Periodicity::Annual => self.years,
        }
    }
}

impl Default for PeriodsPerYear {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A stated input periodicity paired with the periods table used to annualize it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annualization {
    pub periodicity: Periodicity,
    pub periods_per_year: PeriodsPerYear,
}

impl Annualization {
    /// Creates a new [`Annualization`] instance.
    #[must_use]
    pub const fn new(periodicity: Periodicity, periods_per_year: PeriodsPerYear) -> Self {
        Self {
            periodicity,
            periods_per_year,
        }
    }

    /// Annualization of daily observations with the standard periods table.
    #[must_use]
    pub const fn daily() -> Self {
        Self::new(Periodicity::Daily, PeriodsPerYear::STANDARD)
    }

    /// Annualization of monthly observations with the standard periods table.
    #[must_use]
    pub const fn monthly() -> Self {
        Self::new(Periodicity::Monthly, PeriodsPerYear::STANDARD)
    }

    /// Annualization of quarterly observations with the standard periods table.
    #[must_use]
    pub const fn quarterly() -> Self {
        Self::new(Periodicity::Quarterly, PeriodsPerYear::STANDARD)
    }

    /// Returns the number of input periods in one year.
    #[must_use]
    pub const fn factor(&self) -> u32 {
        self.periods_per_year.for_periodicity(self.periodicity)
    }

    /// Annualizes a single-period return by compounding.
    #[must_use]
    pub fn annualize_return(&self, periodic_return: f64) -> f64 {
        annualize_return(periodic_return, self.factor())
    }

    /// Annualizes a single-period volatility by square-root-of-time scaling.
    #[must_use]
    pub fn annualize_volatility(&self, periodic_volatility: f64) -> f64 {
        annualize_volatility(periodic_volatility, self.factor())
    }
}

impl Default for Annualization {
    fn default() -> Self {
        Self::monthly()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use quanttools_core::approx_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(Periodicity::Daily, 252)]
    #[case(Periodicity::Monthly, 12)]
    #[case(Periodicity::Quarterly, 4)]
    #[case(Periodicity::Annual, 1)]
    fn test_for_periodicity(#[case] periodicity: Periodicity, #[case] expected: u32) {
        assert_eq!(
            PeriodsPerYear::STANDARD.for_periodicity(periodicity),
            expected
        );
    }

    #[rstest]
    fn test_custom_days_per_year() {
        let periods = PeriodsPerYear {
            days: 365,
            ..PeriodsPerYear::default()
        };
        let annualization = Annualization::new(Periodicity::Daily, periods);
        assert_eq!(annualization.factor(), 365);
    }

    #[rstest]
    #[case("MONTHLY", Periodicity::Monthly)]
    #[case("daily", Periodicity::Daily)]
    #[case("Quarterly", Periodicity::Quarterly)]
    fn test_periodicity_from_str(#[case] input: &str, #[case] expected: Periodicity) {
        assert_eq!(Periodicity::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_periodicity_display_roundtrip() {
        for periodicity in Periodicity::iter() {
            let parsed = Periodicity::from_str(&periodicity.to_string()).unwrap();
            assert_eq!(parsed, periodicity);
        }
    }

    #[rstest]
    fn test_periodicity_default_is_monthly() {
        assert_eq!(Periodicity::default(), Periodicity::Monthly);
        assert_eq!(Annualization::default(), Annualization::monthly());
    }

    #[rstest]
    fn test_annualization_return() {
        let result = Annualization::monthly().annualize_return(0.01);
        assert!(approx_eq!(f64, result, 1.01_f64.powi(12) - 1.0, epsilon = 1e-12));
    }

    #[rstest]
    fn test_annualization_volatility() {
        let result = Annualization::quarterly().annualize_volatility(0.05);
        assert!(approx_eq!(f64, result, 0.1, epsilon = 1e-12));
    }
}
