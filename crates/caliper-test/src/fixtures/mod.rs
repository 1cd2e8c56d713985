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

//! Result fixtures

mod environments;
pub mod errors;
mod runs;

pub use environments::*;
pub use runs::*;

use crate::FixtureList;
use caliper_core::BenchmarkResult;

/// Every result fixture, by name.
pub fn all() -> FixtureList {
    vec![
        ("foo_benchmark", foo_benchmark),
        ("empty", empty),
        ("weighted", weighted),
        ("special_strings", special_strings),
        ("many_scenarios", many_scenarios),
    ]
}

/// The `examples.FooBenchmark` result on a Linux host.
pub fn foo_benchmark() -> BenchmarkResult {
    BenchmarkResult::new(foo_benchmark_run(), linux_environment())
}

/// A run without scenarios in an environment without properties.
pub fn empty() -> BenchmarkResult {
    BenchmarkResult::new(empty_run(), empty_environment())
}

/// Scenarios measured in non-time units.
pub fn weighted() -> BenchmarkResult {
    BenchmarkResult::new(weighted_run(), linux_environment())
}

/// Values that need escaping in XML.
pub fn special_strings() -> BenchmarkResult {
    BenchmarkResult::new(special_strings_run(), special_strings_environment())
}

/// A run with a thousand scenarios.
pub fn many_scenarios() -> BenchmarkResult {
    BenchmarkResult::new(many_scenarios_run(1000), linux_environment())
}
