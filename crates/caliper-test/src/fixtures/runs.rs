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

use caliper_core::{MeasurementSet, Run, Scenario};
use chrono::{DateTime, TimeZone, Utc};

/// Benchmark name used by the sample fixtures.
pub const FOO_BENCHMARK: &str = "examples.FooBenchmark";

/// API key used by the sample fixtures.
pub const API_KEY: &str = "d9a4d5a6-7d24-4ec4-a1e1-3f3a8f0b2a11";

/// `2010-07-12T18:38:47` UTC, the execution time of every fixture run.
pub fn executed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2010, 7, 12, 18, 38, 47).unwrap()
}

/// Two scenarios of `examples.FooBenchmark`, one plain number each.
pub fn foo_benchmark_run() -> Run {
    Run::from_nanos(
        [
            (Scenario::new([("foo", "A"), ("bar", "15")]), 1200.1),
            (Scenario::new([("foo", "B"), ("bar", "15")]), 1100.2),
        ],
        FOO_BENCHMARK,
        API_KEY,
        executed_timestamp(),
    )
}

/// No scenarios.
pub fn empty_run() -> Run {
    Run::new(Vec::new(), FOO_BENCHMARK, API_KEY, executed_timestamp())
}

/// Instruction and allocation counts alongside a time set.
pub fn weighted_run() -> Run {
    let instructions = MeasurementSet::with_units([("instructions", 1)], [(10.0, 2.5), (12.0, 3.0)]);
    let allocations = MeasurementSet::with_units(
        [("B", 1), ("KB", 1024), ("MB", 1024 * 1024)],
        [(2048.0, 2.0)],
    );
    let time = MeasurementSet::from_nanos([15.0, 3.0]);

    Run::new(
        [
            (Scenario::new([("measure", "instructions")]), instructions),
            (Scenario::new([("measure", "allocations")]), allocations),
            (Scenario::new([("measure", "time")]), time),
        ],
        "examples.WeightedBenchmark",
        API_KEY,
        executed_timestamp(),
    )
}

/// Names and values that need escaping.
pub fn special_strings_run() -> Run {
    Run::from_nanos(
        [
            (Scenario::new([("input", "<a & b>")]), 1.5),
            (Scenario::new([("input", "\"quoted\" 'single'")]), 2.5),
            (Scenario::new([("input", "")]), 3.5),
        ],
        "examples.Special<&>Benchmark",
        "key with \"quotes\"",
        executed_timestamp(),
    )
}

/// `count` scenarios over one variable.
pub fn many_scenarios_run(count: usize) -> Run {
    Run::from_nanos(
        (0..count).map(|i| {
            (
                Scenario::new([("size", i.to_string())]),
                1000.0 + i as f64 * 0.5,
            )
        }),
        "examples.ScalingBenchmark",
        API_KEY,
        executed_timestamp(),
    )
}
