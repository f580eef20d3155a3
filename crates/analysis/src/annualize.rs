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

//! Scalar converters from a single-period return or volatility to its annual equivalent.
//!
//! No validation is performed: inputs follow IEEE 754 semantics, so `NaN` propagates and
//! large exponents overflow to infinity. Period counts are integers, which keeps the
//! compounding defined for any base (including `1 + r < 0`).

use crate::periods::{DAYS_PER_YEAR, MONTHS_PER_YEAR, QUARTERS_PER_YEAR};

/// Compounds `periodic_return` over `periods_per_year` periods: `(1 + r)^n - 1`.
#[must_use]
pub fn annualize_return(periodic_return: f64, periods_per_year: u32) -> f64 {
    match i32::try_from(periods_per_year) {
        Ok(n) => (1.0 + periodic_return).powi(n) - 1.0,
        Err(_) => (1.0 + periodic_return).powf(f64::from(periods_per_year)) - 1.0,
    }
}

/// Scales `periodic_volatility` by `sqrt(periods_per_year)`.
#[must_use]
pub fn annualize_volatility(periodic_volatility: f64, periods_per_year: u32) -> f64 {
    periodic_volatility * f64::from(periods_per_year).sqrt()
}

/// Annualizes a daily return over [`DAYS_PER_YEAR`] trading days.
#[must_use]
pub fn from_daily_to_annualized_return(daily_return: f64) -> f64 {
    annualize_return(daily_return, DAYS_PER_YEAR)
}

/// Annualizes a monthly return over [`MONTHS_PER_YEAR`] months.
#[must_use]
pub fn from_monthly_to_annualized_return(monthly_return: f64) -> f64 {
    annualize_return(monthly_return, MONTHS_PER_YEAR)
}

/// Annualizes a quarterly return over [`QUARTERS_PER_YEAR`] quarters.
#[must_use]
pub fn from_quarterly_to_annualized_return(quarterly_return: f64) -> f64 {
    annualize_return(quarterly_return, QUARTERS_PER_YEAR)
}

/// Annualizes a monthly volatility: `vol * sqrt(12)`.
#[must_use]
pub fn annualize_volatility_monthly(monthly_volatility: f64) -> f64 {
    annualize_volatility(monthly_volatility, MONTHS_PER_YEAR)
}
