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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the
//! condition check fails.

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true. It is typically used in conjunction with
/// functions like `expect` to provide a consistent error message.
pub const FAILED: &str = "Condition failed";

/// Checks the `f64` value is positive (> 0) and finite.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_positive_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if !value.is_finite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    if value <= 0.0 {
        anyhow::bail!("invalid f64 for '{param}' not positive, was {value}")
    }
    Ok(())
}

/// Checks the `u32` value is positive (> 0).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_positive_u32(value: u32, param: &str) -> anyhow::Result<()> {
    if value == 0 {
        anyhow::bail!("invalid u32 for '{param}' not positive, was {value}")
    }
    Ok(())
}
