// Stallmark - Serialization Stall Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar value types and their canonical text forms.

use crate::error::{ModelError, Result};
use chrono::{DateTime, FixedOffset, Timelike};
use std::fmt;

/// Creation timestamp of a model, with an explicit UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Fixed-point scale: prices carry four fractional digits.
const PRICE_SCALE: u64 = 10_000;

/// Largest input accepted by [`Price::from_f64`].
const PRICE_MAX: f64 = (u64::MAX / PRICE_SCALE) as f64;

/// A non-negative decimal price with four fractional digits.
///
/// Stored as integer ten-thousandths, so equal prices always render to the
/// same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    /// Zero.
    pub const ZERO: Price = Price(0);

    /// Create a price from ten-thousandths of a unit.
    pub const fn from_ten_thousandths(units: u64) -> Self {
        Self(units)
    }

    /// Create a price from a float, rounding half away from zero to four
    /// fractional digits.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ModelError::InvalidPrice {
                value,
                reason: "must be finite",
            });
        }
        if value < 0.0 {
            return Err(ModelError::InvalidPrice {
                value,
                reason: "must not be negative",
            });
        }
        if value >= PRICE_MAX {
            return Err(ModelError::InvalidPrice {
                value,
                reason: "exceeds fixed-point range",
            });
        }
        Ok(Self((value * PRICE_SCALE as f64).round() as u64))
    }

    /// Raw ten-thousandths.
    pub fn ten_thousandths(&self) -> u64 {
        self.0
    }

    /// Lossy conversion back to a float.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:04}", self.0 / PRICE_SCALE, self.0 % PRICE_SCALE)
    }
}

/// A property value: one of the three supported scalar variants.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Integer value.
    Int(i64),
    /// String value, written verbatim.
    Str(String),
    /// Floating-point value.
    Float(f64),
}

impl PropertyValue {
    /// Short variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::Float(_) => "float",
        }
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// Integers render as decimal digits, strings verbatim, floats in their
/// shortest round-trip form.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Drop sub-tick precision so the timestamp survives its own text form.
///
/// A tick is 100 ns; [`format_timestamp`] writes exactly seven fractional
/// digits.
pub fn truncate_to_ticks(ts: Timestamp) -> Timestamp {
    let nanos = ts.nanosecond();
    ts.with_nanosecond(nanos - nanos % 100).unwrap_or(ts)
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS.fffffff+HH:MM`.
pub fn format_timestamp(ts: &Timestamp) -> String {
    // Leap seconds report nanoseconds >= 1e9; fold them into the fraction.
    let ticks = (ts.nanosecond() % 1_000_000_000) / 100;
    format!(
        "{}.{:07}{}",
        ts.format("%Y-%m-%dT%H:%M:%S"),
        ticks,
        ts.format("%:z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_price_rounds_to_four_digits() {
        let price = Price::from_f64(523.846_291_636_913).unwrap();
        assert_eq!(price.ten_thousandths(), 5_238_463);
        assert_eq!(price.to_string(), "523.8463");
    }

    #[test]
    fn test_price_small_values_are_zero_padded() {
        assert_eq!(Price::from_f64(0.0).unwrap().to_string(), "0.0000");
        assert_eq!(Price::from_f64(0.05).unwrap().to_string(), "0.0500");
        assert_eq!(Price::from_ten_thousandths(7).to_string(), "0.0007");
    }

    #[test]
    fn test_price_rejects_invalid_input() {
        assert!(matches!(
            Price::from_f64(-0.5),
            Err(ModelError::InvalidPrice { reason: "must not be negative", .. })
        ));
        assert!(Price::from_f64(f64::NAN).is_err());
        assert!(Price::from_f64(f64::INFINITY).is_err());
        assert!(Price::from_f64(1e300).is_err());
    }

    #[test]
    fn test_property_value_text() {
        assert_eq!(PropertyValue::Int(42).to_string(), "42");
        assert_eq!(PropertyValue::from("StringValue_7").to_string(), "StringValue_7");
        assert_eq!(PropertyValue::Float(12.5).to_string(), "12.5");
        assert_eq!(PropertyValue::Float(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn test_property_value_accessors() {
        let value = PropertyValue::from(7_i64);
        assert_eq!(value.as_int(), Some(7));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.kind(), "int");
        assert_eq!(PropertyValue::from(1.5).as_float(), Some(1.5));
    }

    #[test]
    fn test_timestamp_has_seven_fraction_digits() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = offset
            .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
            .unwrap()
            .with_nanosecond(589_793_238)
            .unwrap();

        let truncated = truncate_to_ticks(ts);
        assert_eq!(truncated.nanosecond(), 589_793_200);
        assert_eq!(
            format_timestamp(&truncated),
            "2025-03-14T09:26:53.5897932+02:00"
        );
    }

    #[test]
    fn test_timestamp_text_round_trips() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let ts = truncate_to_ticks(
            offset
                .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
                .unwrap()
                .with_nanosecond(123_456_789)
                .unwrap(),
        );

        let text = format_timestamp(&ts);
        let parsed = DateTime::parse_from_rfc3339(&text).unwrap();
        assert_eq!(parsed, ts);
    }
}
