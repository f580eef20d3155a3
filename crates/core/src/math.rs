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

//! Floating-point comparison and sample statistics.
//!
//! The sample statistics follow the unbiased (N-1) estimator and return `NaN` when there
//! are too few observations, mirroring IEEE 754 propagation rather than raising.

/// Macro for approximate floating-point equality comparison.
///
/// # Usage
///
/// ```rust
/// use quanttools_core::approx_eq;
///
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert!(approx_eq!(f64, a, b, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Returns the arithmetic mean of `values`, or `NaN` if empty.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the sample variance of `values` (N-1 denominator).
///
/// Returns `NaN` when fewer than two values are supplied.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Returns the sample standard deviation of `values` (N-1 denominator).
///
/// Returns `NaN` when fewer than two values are supplied.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}
