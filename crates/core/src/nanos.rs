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

//! A `UnixNanos` type for indexing time-series rows by nanoseconds since the UNIX epoch.
//!
//! Every table row in the analysis crate is keyed by a [`UnixNanos`]. Most financial
//! series are daily or month-end observations, so the type is date-aware:
//!
//! - Construction from a [`NaiveDate`] (midnight UTC) or a `DateTime<Utc>`.
//! - Display as `YYYY-MM-DD` when the timestamp falls on midnight, otherwise RFC 3339.
//!
//! # Parsing and Serialization
//!
//! String values may be:
//! - A numeric string (interpreted as nanoseconds).
//! - An RFC 3339 formatted timestamp (ISO 8601 with timezone).
//! - A simple date string in YYYY-MM-DD format (midnight UTC on that date).
//!
//! Values serialize as the raw nanosecond integer and deserialize from an integer or any
//! of the string forms above.
//!
//! # Limitations
//!
//! * Timestamps before the UNIX epoch are not representable and are rejected on parsing.
//! * Timestamps after 2262-04-11 cannot be converted to a datetime.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

use crate::datetime::NANOSECONDS_IN_DAY;

/// Represents a timestamp in nanoseconds since the UNIX epoch.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnixNanos(u64);

impl UnixNanos {
    /// Creates a new [`UnixNanos`] instance.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Creates a new [`UnixNanos`] at midnight UTC on the given `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is before the UNIX epoch or beyond the representable range.
    pub fn from_date(date: NaiveDate) -> anyhow::Result<Self> {
        let nanos = date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_nanos_opt()
            .ok_or_else(|| anyhow::anyhow!("Date {date} is out of range for UnixNanos"))?;
        Self::from_signed(nanos)
    }

    fn from_signed(nanos: i64) -> anyhow::Result<Self> {
        u64::try_from(nanos)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("Unix timestamp cannot be negative, was {nanos}"))
    }

    /// Returns the underlying value as `u64`.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the underlying value as `i64`.
    ///
    /// # Panics
    ///
    /// Panics if the value exceeds `i64::MAX` (approximately year 2262).
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        assert!(
            self.0 <= i64::MAX as u64,
            "UnixNanos value exceeds i64::MAX"
        );
        self.0 as i64
    }

    /// Returns `true` if the timestamp falls exactly on midnight UTC.
    #[must_use]
    pub const fn is_midnight(&self) -> bool {
        self.0 % NANOSECONDS_IN_DAY == 0
    }

    /// Converts the underlying value to a datetime (UTC).
    ///
    /// # Panics
    ///
    /// Panics if the value exceeds `i64::MAX` (approximately year 2262).
    #[must_use]
    pub const fn to_datetime_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.as_i64())
    }

    /// Returns the calendar date (UTC) on which this timestamp falls.
    ///
    /// # Panics
    ///
    /// Panics if the value exceeds `i64::MAX` (approximately year 2262).
    #[must_use]
    pub fn to_date(&self) -> NaiveDate {
        self.to_datetime_utc().date_naive()
    }

    /// Converts the underlying value to an ISO 8601 (RFC 3339) string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.to_datetime_utc()
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Returns `Some(self + rhs)` or `None` if the addition would overflow.
    #[must_use]
    pub fn checked_add<T: Into<u64>>(self, rhs: T) -> Option<Self> {
        self.0.checked_add(rhs.into()).map(Self)
    }

    fn parse_string(s: &str) -> anyhow::Result<Self> {
        // Integer nanoseconds
        if let Ok(int_value) = s.parse::<u64>() {
            return Ok(Self(int_value));
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("Unix timestamp is out of range: {s}");
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            let nanos = datetime
                .timestamp_nanos_opt()
                .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {s}"))?;
            return Self::from_signed(nanos);
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Self::from_date(date);
        }

        anyhow::bail!("Invalid timestamp format: {s}")
    }
}

impl From<u64> for UnixNanos {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnixNanos> for u64 {
    fn from(value: UnixNanos) -> Self {
        value.0
    }
}

/// Converts a string slice to [`UnixNanos`].
///
/// # Panics
///
/// Panics if the string cannot be parsed. Use [`str::parse::<UnixNanos>()`] for a
/// non-panicking conversion.
///
/// # Examples
///
/// ```
/// use quanttools_core::UnixNanos;
///
/// let nanos = UnixNanos::from("1970-01-02");
/// assert_eq!(nanos.as_u64(), 86_400_000_000_000);
/// ```
impl From<&str> for UnixNanos {
    fn from(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|e| panic!("Failed to parse string '{value}' into UnixNanos: {e}"))
    }
}

impl TryFrom<DateTime<Utc>> for UnixNanos {
    type Error = anyhow::Error;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        let nanos = value
            .timestamp_nanos_opt()
            .ok_or_else(|| anyhow::anyhow!("DateTime {value} out of range for UnixNanos"))?;
        Self::from_signed(nanos)
    }
}

impl TryFrom<NaiveDate> for UnixNanos {
    type Error = anyhow::Error;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(value)
    }
}

impl FromStr for UnixNanos {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_string(s)
    }
}

impl Display for UnixNanos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 > i64::MAX as u64 {
            return write!(f, "{}", self.0);
        }

        if self.is_midnight() {
            write!(f, "{}", self.to_date())
        } else {
            write!(f, "{}", self.to_rfc3339())
        }
    }
}

impl<'de> Deserialize<'de> for UnixNanos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnixNanosVisitor;

        impl Visitor<'_> for UnixNanosVisitor {
            type Value = UnixNanos;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer, a date string, or an RFC 3339 timestamp")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(UnixNanos(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                UnixNanos::from_signed(value).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                UnixNanos::parse_string(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(UnixNanosVisitor)
    }
}
