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

//! A single recorded measurement of one benchmark invocation.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// The unit table used when a benchmark declares no units of its own.
///
/// Maps each label to the number of nanoseconds one unit represents.
pub fn default_time_units() -> BTreeMap<String, i64> {
    [
        ("ns", 1_i64),
        ("us", 1_000),
        ("ms", 1_000_000),
        ("s", 1_000_000_000),
    ]
    .into_iter()
    .map(|(name, scale)| (name.to_string(), scale))
    .collect()
}

/// One recorded run of a single benchmark invocation.
///
/// Floats are compared bitwise for equality and hashing so that `Eq` and
/// `Hash` stay lawful; `NaN` equals itself and `-0.0` differs from `0.0`.
/// Every `NaN` is stored as the canonical quiet `NaN`, the one its text
/// form parses back to.
#[derive(Debug, Clone)]
pub struct Measurement {
    unit_names: BTreeMap<String, i64>,
    nanos_per_rep: f64,
    units_per_rep: f64,
}

impl Measurement {
    /// Create a measurement, taking an owned copy of the unit table.
    pub fn new<I, K>(unit_names: I, nanos_per_rep: f64, units_per_rep: f64) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            unit_names: unit_names
                .into_iter()
                .map(|(name, scale)| (name.into(), scale))
                .collect(),
            nanos_per_rep: canonical(nanos_per_rep),
            units_per_rep: canonical(units_per_rep),
        }
    }

    /// Create a measurement in plain time units, where one unit is one nanosecond.
    pub fn from_nanos(nanos_per_rep: f64) -> Self {
        let nanos_per_rep = canonical(nanos_per_rep);
        Self {
            unit_names: default_time_units(),
            nanos_per_rep,
            units_per_rep: nanos_per_rep,
        }
    }

    /// Unit label to scale factor.
    pub fn unit_names(&self) -> &BTreeMap<String, i64> {
        &self.unit_names
    }

    /// Time cost of one repetition, in nanoseconds.
    pub fn nanos_per_rep(&self) -> f64 {
        self.nanos_per_rep
    }

    /// Benchmark-defined unit cost of one repetition.
    pub fn units_per_rep(&self) -> f64 {
        self.units_per_rep
    }

    /// Total order by [`nanos_per_rep`](Self::nanos_per_rep), ascending.
    pub fn cmp_by_nanos(a: &Self, b: &Self) -> Ordering {
        a.nanos_per_rep.total_cmp(&b.nanos_per_rep)
    }

    /// Total order by [`units_per_rep`](Self::units_per_rep), ascending.
    pub fn cmp_by_units(a: &Self, b: &Self) -> Ordering {
        a.units_per_rep.total_cmp(&b.units_per_rep)
    }
}

fn canonical(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}

/// Sort measurements by time per repetition, cheapest first.
pub fn sort_by_nanos(measurements: &mut [Measurement]) {
    measurements.sort_by(Measurement::cmp_by_nanos);
}

/// Sort measurements by units per repetition, cheapest first.
pub fn sort_by_units(measurements: &mut [Measurement]) {
    measurements.sort_by(Measurement::cmp_by_units);
}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.nanos_per_rep.to_bits() == other.nanos_per_rep.to_bits()
            && self.units_per_rep.to_bits() == other.units_per_rep.to_bits()
            && self.unit_names == other.unit_names
    }
}

impl Eq for Measurement {}

impl Hash for Measurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nanos_per_rep.to_bits().hash(state);
        self.units_per_rep.to_bits().hash(state);
        self.unit_names.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn per_call(nanos: f64, units: f64) -> Measurement {
        Measurement::new([("ns/call", 1_i64)], nanos, units)
    }

    #[test]
    fn test_from_nanos_uses_time_units() {
        let m = Measurement::from_nanos(12.5);
        assert_eq!(m.nanos_per_rep(), 12.5);
        assert_eq!(m.units_per_rep(), 12.5);
        assert_eq!(m.unit_names(), &default_time_units());
    }

    #[test]
    fn test_unit_table_is_copied() {
        let mut units = HashMap::new();
        units.insert("ns/op".to_string(), 1_i64);
        let m = Measurement::new(units.clone(), 3.0, 3.0);

        units.insert("us/op".to_string(), 1_000);
        units.remove("ns/op");

        assert_eq!(m.unit_names().len(), 1);
        assert_eq!(m.unit_names().get("ns/op"), Some(&1));
    }

    #[test]
    fn test_nan_sign_is_canonical() {
        let negative_nan = f64::NAN.copysign(-1.0);
        assert!(negative_nan.is_sign_negative());

        let m = Measurement::from_nanos(negative_nan);
        assert_eq!(m.nanos_per_rep().to_bits(), f64::NAN.to_bits());
        assert_eq!(m, Measurement::from_nanos(f64::NAN));
        assert_eq!(per_call(negative_nan, negative_nan), per_call(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_accessor_copy_is_detached() {
        let m = per_call(4.0, 2.0);
        let mut copy = m.unit_names().clone();
        copy.insert("other".to_string(), 7);
        assert!(!m.unit_names().contains_key("other"));
    }

    #[test]
    fn test_sort_by_nanos() {
        let mut values = vec![per_call(3.0, 1.0), per_call(1.0, 3.0), per_call(2.0, 2.0)];
        sort_by_nanos(&mut values);
        let nanos: Vec<f64> = values.iter().map(Measurement::nanos_per_rep).collect();
        assert_eq!(nanos, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_by_units() {
        let mut values = vec![per_call(3.0, 1.0), per_call(1.0, 3.0), per_call(2.0, 2.0)];
        sort_by_units(&mut values);
        let units: Vec<f64> = values.iter().map(Measurement::units_per_rep).collect();
        assert_eq!(units, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_orders_are_independent() {
        let a = per_call(1.0, 9.0);
        let b = per_call(2.0, 0.5);
        assert_eq!(Measurement::cmp_by_nanos(&a, &b), Ordering::Less);
        assert_eq!(Measurement::cmp_by_units(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut values = vec![per_call(f64::NAN, 0.0), per_call(5.0, 0.0), per_call(0.0, 0.0)];
        sort_by_nanos(&mut values);
        assert_eq!(values[0].nanos_per_rep(), 0.0);
        assert_eq!(values[1].nanos_per_rep(), 5.0);
        assert!(values[2].nanos_per_rep().is_nan());
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(per_call(1.5, 2.5), per_call(1.5, 2.5));
        assert_ne!(per_call(1.5, 2.5), per_call(1.5, 2.0));
        assert_ne!(per_call(1.5, 2.5), Measurement::new([("ms", 1_i64)], 1.5, 2.5));
        assert_eq!(per_call(f64::NAN, 1.0), per_call(f64::NAN, 1.0));
    }
}
