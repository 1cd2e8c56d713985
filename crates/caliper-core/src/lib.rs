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

//! Immutable value objects for benchmark results.
//!
//! This crate describes *what was measured* and *under what conditions*:
//!
//! - [`Measurement`]: one recorded invocation, with its unit table
//! - [`MeasurementSet`]: the per-scenario payload, with a canonical text form
//! - [`Scenario`]: one assignment of benchmark variables
//! - [`Environment`]: host and platform properties
//! - [`Run`]: every scenario's measurements for one suite execution
//! - [`BenchmarkResult`]: a run paired with its environment
//!
//! Value objects own their data and expose it only through shared borrows,
//! so they are immutable from every observer's point of view and can be
//! shared freely across threads.

mod conditions;
mod error;
mod measurement;
mod measurement_set;
mod result;
mod run;

pub use conditions::{Environment, Scenario};
pub use error::{CoreError, CoreResult};
pub use measurement::{default_time_units, sort_by_nanos, sort_by_units, Measurement};
pub use measurement_set::MeasurementSet;
pub use result::BenchmarkResult;
pub use run::{Run, RunBuilder};
