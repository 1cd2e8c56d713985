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

//! Property-based tests for the measurement-set text form.

use caliper_core::MeasurementSet;
use proptest::prelude::*;

fn unit_name() -> impl Strategy<Value = String> {
    // Includes every character the text form has to escape.
    "[a-z/%,=| ]{0,8}"
}

fn non_nan() -> impl Strategy<Value = f64> {
    // NaN payloads are not preserved by the decimal form.
    any::<f64>().prop_filter("NaN", |v| !v.is_nan())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: parse(to_string(set)) == set for plain time measurements.
    #[test]
    fn prop_time_set_round_trip(values in prop::collection::vec(non_nan(), 0..32)) {
        let set = MeasurementSet::from_nanos(values);
        let text = set.to_string();
        let parsed = MeasurementSet::parse(&text);
        prop_assert!(parsed.is_ok(), "failed to parse {:?}: {:?}", text, parsed.err());
        prop_assert_eq!(parsed.unwrap(), set);
    }

    /// Property: parse(to_string(set)) == set with arbitrary unit tables.
    #[test]
    fn prop_unit_set_round_trip(
        units in prop::collection::btree_map(unit_name(), any::<i64>(), 0..4),
        entries in prop::collection::vec((0.0_f64..1.0e12, 0.0_f64..1.0e12), 0..16)
    ) {
        let set = MeasurementSet::with_units(units, entries);
        let text = set.to_string();
        let parsed = MeasurementSet::parse(&text);
        prop_assert!(parsed.is_ok(), "failed to parse {:?}: {:?}", text, parsed.err());
        prop_assert_eq!(parsed.unwrap(), set);
    }

    /// Property: the canonical text of a non-empty time set never carries a units header.
    #[test]
    fn prop_time_set_has_no_header(values in prop::collection::vec(0.0_f64..1.0e9, 1..8)) {
        let text = MeasurementSet::from_nanos(values).to_string();
        prop_assert!(!text.contains('|'));
        prop_assert!(!text.contains('/'));
    }
}
