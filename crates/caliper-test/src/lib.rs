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

//! Shared test fixtures for Caliper result codecs.
//!
//! Fixtures are plain constructor functions so every test gets its own
//! value. [`fixtures::all`] lists every result fixture by name for
//! round-trip sweeps; [`fixtures::errors`] holds documents that codecs must
//! reject.

use caliper_core::{BenchmarkResult, Run};

/// Named result fixtures.
pub type FixtureList = Vec<(&'static str, fn() -> BenchmarkResult)>;

pub mod fixtures;

pub use fixtures::*;

/// Total number of measurements across every scenario of a run.
pub fn count_measurements(run: &Run) -> usize {
    run.measurements().iter().map(|(_, set)| set.len()).sum()
}
