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

use anyhow::Context;
use quanttools_core::correctness::{check_positive_f64, check_positive_u32};
use serde::{Deserialize, Serialize};

use crate::{
    drawdown::DEFAULT_STARTING_AMOUNT,
    periods::{Annualization, Periodicity, PeriodsPerYear},
};

/// Configuration for `ReturnsAnalyzer` instances and the drawdown pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// The number of compounding periods in a year for each periodicity.
    /// Missing entries fall back to 252 days, 12 months, 4 quarters and 1 year.
    #[serde(default)]
    pub periods_per_year: PeriodsPerYear,
    /// The sampling frequency of the returns being analyzed (default `MONTHLY`).
    #[serde(default)]
    pub periodicity: Periodicity,
    /// The initial investment for the wealth index.
    #[serde(default = "default_starting_amount")]
    pub starting_amount: f64,
}

const fn default_starting_amount() -> f64 {
    DEFAULT_STARTING_AMOUNT
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            periods_per_year: PeriodsPerYear::STANDARD,
            periodicity: Periodicity::Monthly,
            starting_amount: DEFAULT_STARTING_AMOUNT,
        }
    }
}

impl AnalysisConfig {
    /// Parses a configuration from a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML for this struct, or if
    /// validation fails.
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        let config: Self =
            toml::from_str(input).context("Failed to parse analysis configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every period count and the starting amount are positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_positive_u32(self.periods_per_year.days, "periods_per_year.days")?;
        check_positive_u32(self.periods_per_year.months, "periods_per_year.months")?;
        check_positive_u32(self.periods_per_year.quarters, "periods_per_year.quarters")?;
        check_positive_u32(self.periods_per_year.years, "periods_per_year.years")?;
        check_positive_f64(self.starting_amount, "starting_amount")?;
        Ok(())
    }

    /// Returns the annualization implied by the configured periodicity.
    #[must_use]
    pub const fn annualization(&self) -> Annualization {
        Annualization::new(self.periodicity, self.periods_per_year)
    }
}
