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

//! Property-based tests for value-object immutability.

use caliper_core::{Environment, Measurement, Run, Scenario};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::collections::HashMap;

fn pairs() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[a-z]{1,8}", "[a-zA-Z0-9]{0,8}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: changing the input map after construction does not change the environment.
    #[test]
    fn prop_environment_ignores_later_input_changes(mut props in pairs()) {
        let env = Environment::new(props.clone());
        let before = env.properties().clone();

        props.insert("injected".to_string(), "value".to_string());
        props.clear();

        prop_assert_eq!(env.properties(), &before);
    }

    /// Property: changing a copy taken from an accessor does not change the measurement.
    #[test]
    fn prop_measurement_accessor_copy_is_detached(
        units in prop::collection::hash_map("[a-z]{1,6}", 1_i64..1_000_000, 1..4)
    ) {
        let m = Measurement::new(units.clone(), 1.0, 2.0);
        let mut copy = m.unit_names().clone();
        copy.insert("zzzzzzz".to_string(), 0);
        copy.clear();

        prop_assert_eq!(m.unit_names().len(), units.len());
    }

    /// Property: changing the scenario list after construction does not change the run.
    #[test]
    fn prop_run_ignores_later_input_changes(vars in pairs(), nanos in 0.0_f64..1.0e6) {
        let mut measurements = vec![(Scenario::new(vars), nanos)];
        let timestamp = Utc.with_ymd_and_hms(2010, 7, 12, 18, 38, 47).unwrap();
        let run = Run::from_nanos(measurements.clone(), "bench", "uuid", timestamp);

        measurements.push((Scenario::new([("extra", "1")]), 1.0));
        measurements.clear();

        prop_assert_eq!(run.len(), 1);
    }
}
