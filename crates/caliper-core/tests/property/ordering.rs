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

//! Property-based tests for measurement ordering.

use caliper_core::{sort_by_nanos, sort_by_units, Measurement};
use proptest::prelude::*;
use std::cmp::Ordering;

fn value_strategy() -> impl Strategy<Value = f64> {
    // Small value pool so equal keys show up often.
    prop_oneof![
        Just(0.0_f64),
        Just(1.0_f64),
        Just(1200.1_f64),
        0.0_f64..1.0e9,
    ]
}

fn measurement_strategy() -> impl Strategy<Value = Measurement> {
    (value_strategy(), value_strategy())
        .prop_map(|(nanos, units)| Measurement::new([("ns/op", 1_i64)], nanos, units))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: sorting by nanos yields non-decreasing nanos.
    #[test]
    fn prop_sort_by_nanos_is_non_decreasing(
        mut values in prop::collection::vec(measurement_strategy(), 0..64)
    ) {
        sort_by_nanos(&mut values);
        for pair in values.windows(2) {
            prop_assert!(pair[0].nanos_per_rep() <= pair[1].nanos_per_rep());
        }
    }

    /// Property: sorting by units yields non-decreasing units.
    #[test]
    fn prop_sort_by_units_is_non_decreasing(
        mut values in prop::collection::vec(measurement_strategy(), 0..64)
    ) {
        sort_by_units(&mut values);
        for pair in values.windows(2) {
            prop_assert!(pair[0].units_per_rep() <= pair[1].units_per_rep());
        }
    }

    /// Property: sorting keeps every element.
    #[test]
    fn prop_sort_is_a_permutation(
        values in prop::collection::vec(measurement_strategy(), 0..64)
    ) {
        let mut sorted = values.clone();
        sort_by_nanos(&mut sorted);
        prop_assert_eq!(sorted.len(), values.len());
        for m in &values {
            let expected = values.iter().filter(|v| *v == m).count();
            let actual = sorted.iter().filter(|v| *v == m).count();
            prop_assert_eq!(expected, actual);
        }
    }

    /// Property: the nanos order agrees with numeric comparison and is antisymmetric.
    #[test]
    fn prop_cmp_by_nanos_matches_numeric(a in measurement_strategy(), b in measurement_strategy()) {
        let forward = Measurement::cmp_by_nanos(&a, &b);
        let backward = Measurement::cmp_by_nanos(&b, &a);
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(Some(forward), a.nanos_per_rep().partial_cmp(&b.nanos_per_rep()));
    }

    /// Property: the units order is transitive.
    #[test]
    fn prop_cmp_by_units_is_transitive(
        a in measurement_strategy(),
        b in measurement_strategy(),
        c in measurement_strategy()
    ) {
        if Measurement::cmp_by_units(&a, &b) != Ordering::Greater
            && Measurement::cmp_by_units(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(Measurement::cmp_by_units(&a, &c), Ordering::Greater);
        }
    }
}
