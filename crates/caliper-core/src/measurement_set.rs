// Caliper - Benchmark Result Model and XML Codec
//
// Copyright (c) 2025 The Caliper Authors and individual contributors.
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

//! The per-scenario measurement payload and its canonical text form.
//!
//! The text form is part of the wire contract: [`MeasurementSet::parse`] is
//! the exact inverse of `Display`.
//!
//! ```text
//! set     := [ units "|" ] entries
//! units   := unit ( "," unit )*            unit  := name "=" scale
//! entries := "" | entry ( " " entry )*     entry := nanos [ "/" units_per_rep ]
//! ```
//!
//! The units header is omitted for the default time-unit table, and the
//! `/units_per_rep` suffix is omitted when it equals `nanos`. A plain number
//! such as `1200.1` is therefore a one-element set.
//!
//! # Examples
//!
//! ```rust
//! use caliper_core::MeasurementSet;
//!
//! let set = MeasurementSet::from_nanos([1200.1, 1100.25]);
//! assert_eq!(set.to_string(), "1200.1 1100.25");
//!
//! let parsed: MeasurementSet = "1200.1 1100.25".parse().unwrap();
//! assert_eq!(parsed, set);
//! ```

use crate::error::{CoreError, CoreResult};
use crate::measurement::{default_time_units, Measurement};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const UNITS_SEPARATOR: char = '|';
const UNIT_SEPARATOR: char = ',';
const UNIT_ASSIGN: char = '=';
const RATIO_SEPARATOR: char = '/';

/// An ordered list of measurements sharing one unit table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementSet {
    unit_names: BTreeMap<String, i64>,
    measurements: Vec<Measurement>,
}

impl MeasurementSet {
    /// Build a set from measurements.
    ///
    /// Fails when the measurements do not all share the same unit table.
    pub fn new(measurements: Vec<Measurement>) -> CoreResult<Self> {
        let unit_names = match measurements.first() {
            Some(first) => first.unit_names().clone(),
            None => default_time_units(),
        };
        if let Some(index) = measurements
            .iter()
            .position(|m| m.unit_names() != &unit_names)
        {
            return Err(CoreError::invalid_argument(format!(
                "measurement {} uses a different unit table than measurement 0",
                index
            )));
        }
        Ok(Self {
            unit_names,
            measurements,
        })
    }

    /// Build a set from `(nanos_per_rep, units_per_rep)` pairs under one unit table.
    pub fn with_units<I, K, E>(unit_names: I, entries: E) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
        E: IntoIterator<Item = (f64, f64)>,
    {
        let unit_names: BTreeMap<String, i64> = unit_names
            .into_iter()
            .map(|(name, scale)| (name.into(), scale))
            .collect();
        let measurements = entries
            .into_iter()
            .map(|(nanos, units)| Measurement::new(unit_names.clone(), nanos, units))
            .collect();
        Self {
            unit_names,
            measurements,
        }
    }

    /// Build a set of plain time measurements.
    pub fn from_nanos<I: IntoIterator<Item = f64>>(nanos: I) -> Self {
        Self::with_units(
            default_time_units(),
            nanos.into_iter().map(|value| (value, value)),
        )
    }

    /// Parse the canonical text form produced by `Display`.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let (unit_names, entries) = match text.split_once(UNITS_SEPARATOR) {
            Some((header, entries)) => (parse_units(text, header)?, entries),
            None => (default_time_units(), text),
        };

        let mut pairs = Vec::new();
        for entry in entries.split_whitespace() {
            let pair = match entry.split_once(RATIO_SEPARATOR) {
                Some((nanos, units)) => (parse_float(text, nanos)?, parse_float(text, units)?),
                None => {
                    let nanos = parse_float(text, entry)?;
                    (nanos, nanos)
                }
            };
            pairs.push(pair);
        }

        Ok(Self::with_units(unit_names, pairs))
    }

    /// The unit table shared by every measurement.
    pub fn unit_names(&self) -> &BTreeMap<String, i64> {
        &self.unit_names
    }

    /// The measurements, in recording order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Iterate over the measurements.
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// True when no measurement was recorded.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

impl<'a> IntoIterator for &'a MeasurementSet {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MeasurementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit_names != default_time_units() {
            for (i, (name, scale)) in self.unit_names.iter().enumerate() {
                if i > 0 {
                    write!(f, "{}", UNIT_SEPARATOR)?;
                }
                write!(f, "{}{}{}", escape_unit_name(name), UNIT_ASSIGN, scale)?;
            }
            write!(f, "{}", UNITS_SEPARATOR)?;
        }

        for (i, m) in self.measurements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m.nanos_per_rep())?;
            if m.units_per_rep().to_bits() != m.nanos_per_rep().to_bits() {
                write!(f, "{}{}", RATIO_SEPARATOR, m.units_per_rep())?;
            }
        }
        Ok(())
    }
}

impl FromStr for MeasurementSet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_float(input: &str, token: &str) -> CoreResult<f64> {
    token
        .parse::<f64>()
        .map_err(|e| CoreError::malformed_set(input, format!("invalid number '{}': {}", token, e)))
}

fn parse_units(input: &str, header: &str) -> CoreResult<BTreeMap<String, i64>> {
    let mut units = BTreeMap::new();
    if header.is_empty() {
        return Ok(units);
    }
    for unit in header.split(UNIT_SEPARATOR) {
        let (name, scale) = unit.split_once(UNIT_ASSIGN).ok_or_else(|| {
            CoreError::malformed_set(input, format!("unit '{}' is missing '='", unit))
        })?;
        let name = unescape_unit_name(input, name)?;
        let scale = scale.parse::<i64>().map_err(|e| {
            CoreError::malformed_set(input, format!("invalid scale for unit '{}': {}", name, e))
        })?;
        if units.insert(name.clone(), scale).is_some() {
            return Err(CoreError::malformed_set(
                input,
                format!("duplicate unit '{}'", name),
            ));
        }
    }
    Ok(units)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '%' | UNIT_SEPARATOR | UNIT_ASSIGN | UNITS_SEPARATOR) || c.is_whitespace()
}

fn escape_unit_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if needs_escape(c) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn unescape_unit_name(input: &str, escaped: &str) -> CoreResult<String> {
    let bytes = escaped.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let byte = escaped
                .get(i + 1..i + 3)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| {
                    CoreError::malformed_set(input, format!("bad escape in unit '{}'", escaped))
                })?;
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out)
        .map_err(|e| CoreError::malformed_set(input, format!("unit name is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_text() {
        let set = MeasurementSet::from_nanos([1200.1]);
        assert_eq!(set.to_string(), "1200.1");
        assert_eq!(MeasurementSet::parse("1200.1").unwrap(), set);
    }

    #[test]
    fn test_integral_values_have_no_fraction() {
        let set = MeasurementSet::from_nanos([15.0, 3.0]);
        assert_eq!(set.to_string(), "15 3");
    }

    #[test]
    fn test_empty_set() {
        let set = MeasurementSet::from_nanos(Vec::<f64>::new());
        assert_eq!(set.to_string(), "");
        let parsed = MeasurementSet::parse("").unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_custom_units_header() {
        let set = MeasurementSet::with_units([("ns/call", 1_i64)], [(10.0, 2.5), (12.0, 3.0)]);
        let text = set.to_string();
        assert_eq!(text, "ns/call=1|10/2.5 12/3");
        assert_eq!(MeasurementSet::parse(&text).unwrap(), set);
    }

    #[test]
    fn test_empty_set_keeps_custom_units() {
        let set = MeasurementSet::with_units([("op", 1_i64)], Vec::<(f64, f64)>::new());
        assert_eq!(set.to_string(), "op=1|");
        assert_eq!(MeasurementSet::parse("op=1|").unwrap(), set);
    }

    #[test]
    fn test_unit_names_are_escaped() {
        let set = MeasurementSet::with_units([("a,b=c|d e%", 7_i64)], [(1.0, 1.0)]);
        let text = set.to_string();
        assert_eq!(text, "a%2Cb%3Dc%7Cd%20e%25=7|1");
        assert_eq!(MeasurementSet::parse(&text).unwrap(), set);
    }

    #[test]
    fn test_special_floats_round_trip() {
        let set = MeasurementSet::from_nanos([f64::NAN, f64::INFINITY, -0.0, 1e-300]);
        let parsed = MeasurementSet::parse(&set.to_string()).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_negative_nan_round_trip() {
        let negative_nan = f64::NAN.copysign(-1.0);
        let set = MeasurementSet::from_nanos([negative_nan]);
        assert_eq!(set.to_string(), "NaN");
        assert_eq!(MeasurementSet::parse("NaN").unwrap(), set);

        let weighted = MeasurementSet::with_units([("op", 1_i64)], [(negative_nan, 2.0)]);
        assert_eq!(MeasurementSet::parse(&weighted.to_string()).unwrap(), weighted);
    }

    #[test]
    fn test_new_rejects_mixed_units() {
        let result = MeasurementSet::new(vec![
            Measurement::from_nanos(1.0),
            Measurement::new([("op", 1_i64)], 1.0, 1.0),
        ]);
        assert!(matches!(result, Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_keeps_order() {
        let set = MeasurementSet::new(vec![
            Measurement::from_nanos(3.0),
            Measurement::from_nanos(1.0),
        ])
        .unwrap();
        let nanos: Vec<f64> = set.iter().map(Measurement::nanos_per_rep).collect();
        assert_eq!(nanos, vec![3.0, 1.0]);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["abc", "1.0 x", "1/2/3", "op|1", "op=x|1", "op=1,op=2|1", "%zz=1|1"] {
            let err = MeasurementSet::parse(bad).unwrap_err();
            assert!(
                matches!(err, CoreError::MalformedMeasurementSet { .. }),
                "expected parse failure for {:?}",
                bad
            );
        }
    }
}
