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

use std::sync::Arc;

use indexmap::IndexMap;

use crate::{
    ColumnStatistic,
    config::AnalysisConfig,
    error::AnalysisError,
    frame::TimeSeriesFrame,
    periods::Annualization,
    statistic::FrameStatistic,
    statistics::{AnnualizedReturn, AnnualizedVolatility, CompoundReturn, Volatility},
};

pub type Statistic = Arc<dyn FrameStatistic + Send + Sync>;

/// Evaluates a set of registered statistics against returns frames.
///
/// Statistics are keyed by name and kept in registration order, which is also the order
/// of every output.
#[derive(Debug)]
pub struct ReturnsAnalyzer {
    pub statistics: IndexMap<String, Statistic>,
}

impl Default for ReturnsAnalyzer {
    /// Creates a new default [`ReturnsAnalyzer`] instance.
    fn default() -> Self {
        Self::with_annualization(Annualization::default())
    }
}

impl ReturnsAnalyzer {
    /// Creates a new [`ReturnsAnalyzer`] instance.
    ///
    /// Starts with no registered statistics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            statistics: IndexMap::new(),
        }
    }

    /// Creates a new [`ReturnsAnalyzer`] with the standard statistics registered for the
    /// configured periodicity.
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::with_annualization(config.annualization())
    }

    fn with_annualization(annualization: Annualization) -> Self {
        let mut analyzer = Self::new();
        analyzer.register_statistic(Arc::new(Volatility::default()));
        analyzer.register_statistic(Arc::new(AnnualizedVolatility::new(annualization)));
        analyzer.register_statistic(Arc::new(CompoundReturn::default()));
        analyzer.register_statistic(Arc::new(AnnualizedReturn::new(annualization)));
        analyzer
    }

    /// Registers a new statistic for calculation, replacing any with the same name.
    pub fn register_statistic(&mut self, statistic: Statistic) {
        log::debug!("Registered statistic {}", statistic.name());
        self.statistics.insert(statistic.name(), statistic);
    }

    /// Removes a specific statistic from calculation.
    pub fn deregister_statistic(&mut self, statistic: &Statistic) {
        self.statistics.shift_remove(&statistic.name());
    }

    /// Removes all registered statistics.
    pub fn deregister_statistics(&mut self) {
        self.statistics.clear();
    }

    /// Retrieves a specific statistic by name.
    #[must_use]
    pub fn statistic(&self, name: &str) -> Option<&Statistic> {
        self.statistics.get(name)
    }

    /// Calculates every registered statistic for each column of `returns`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a statistic.
    pub fn performance_stats_returns(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<IndexMap<String, ColumnStatistic>, AnalysisError> {
        let mut output = IndexMap::with_capacity(self.statistics.len());
        for (name, statistic) in &self.statistics {
            output.insert(name.clone(), statistic.calculate_from_returns(returns)?);
        }
        Ok(output)
    }

    /// Calculates the maximum length of statistic names for formatting.
    fn max_length_name(&self) -> usize {
        self.statistics.keys().map(String::len).max().unwrap_or(0)
    }

    /// Gets formatted return statistics as strings, one per statistic and column.
    ///
    /// # Errors
    ///
    /// Returns an error if a statistic calculation fails.
    pub fn stats_returns_formatted(
        &self,
        returns: &TimeSeriesFrame,
    ) -> Result<Vec<String>, AnalysisError> {
        let max_length = self.max_length_name();
        let stats = self.performance_stats_returns(returns)?;

        let mut output = Vec::new();
        for (name, values) in stats {
            let padding = max_length - name.len() + 1;
            for (column, value) in values {
                output.push(format!(
                    "{name}: {}{column} {value:.4}",
                    " ".repeat(padding)
                ));
            }
        }

        Ok(output)
    }
}
