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

//! Calendar functions for building time-series row indexes.

use chrono::{Months, NaiveDate, TimeDelta};

use crate::UnixNanos;

/// Number of nanoseconds in one second.
pub const NANOSECONDS_IN_SECOND: u64 = 1_000_000_000;

/// Number of nanoseconds in one day.
pub const NANOSECONDS_IN_DAY: u64 = 86_400 * NANOSECONDS_IN_SECOND;

/// Returns the [`UnixNanos`] at midnight UTC on the given calendar date.
///
/// # Errors
///
/// Returns an error if the date is invalid or before the UNIX epoch.
pub fn date_to_unix_nanos(year: i32, month: u32, day: u32) -> anyhow::Result<UnixNanos> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("Invalid date {year:04}-{month:02}-{day:02}"))?;
    UnixNanos::from_date(date)
}

/// Returns the [`UnixNanos`] at midnight UTC on the last day of `(year, month)`.
///
/// # Errors
///
/// Returns an error if `month` is not in `1..=12` or the date is before the UNIX epoch.
pub fn month_end_unix_nanos(year: i32, month: u32) -> anyhow::Result<UnixNanos> {
    if !(1..=12).contains(&month) {
        anyhow::bail!("`month` must be in 1..=12, was {month}");
    }
    date_to_unix_nanos(year, month, last_day_of_month(year, month))
}

/// Returns `count` consecutive daily timestamps (calendar days) starting at `start`.
///
/// # Errors
///
/// Returns an error if any timestamp overflows.
pub fn daily_sequence(start: UnixNanos, count: usize) -> anyhow::Result<Vec<UnixNanos>> {
    let mut output = Vec::with_capacity(count);
    let mut current = start;
    for i in 0..count {
        if i > 0 {
            current = current
                .checked_add(NANOSECONDS_IN_DAY)
                .ok_or_else(|| anyhow::anyhow!("Timestamp overflow after {i} days"))?;
        }
        output.push(current);
    }
    Ok(output)
}

/// Returns `count` consecutive month-end timestamps, the first being the end of
/// `(year, month)`.
///
/// # Errors
///
/// Returns an error if the starting month is invalid or any date is out of range.
pub fn month_end_sequence(year: i32, month: u32, count: usize) -> anyhow::Result<Vec<UnixNanos>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {year:04}-{month:02}"))?;

    let mut output = Vec::with_capacity(count);
    for i in 0..count {
        let offset = u32::try_from(i)?;
        let month_start = first
            .checked_add_months(Months::new(offset))
            .ok_or_else(|| anyhow::anyhow!("Failed to add {offset} months to {first}"))?;
        let month_end = month_start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_sub_signed(TimeDelta::days(1)))
            .ok_or_else(|| anyhow::anyhow!("Month end out of range after {month_start}"))?;
        output.push(UnixNanos::from_date(month_end)?);
    }
    Ok(output)
}

/// Returns the last valid day of `(year, month)`.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
#[must_use]
pub const fn last_day_of_month(year: i32, month: u32) -> u32 {
    assert!(month >= 1 && month <= 12, "`month` must be in 1..=12");

    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Basic leap-year check.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
