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

//! The complete result of one benchmark suite execution.

use crate::conditions::Scenario;
use crate::error::{CoreError, CoreResult};
use crate::measurement_set::MeasurementSet;
use chrono::{DateTime, Timelike, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The complete, immutable result of one benchmark suite run.
///
/// Measurements keep their insertion order, which fixes the order of
/// scenario elements when the run is serialized. Equality ignores that order:
/// two runs are equal when they map the same scenarios to the same sets and
/// agree on benchmark name, executor id and millisecond timestamp.
#[derive(Debug, Clone)]
pub struct Run {
    measurements: Vec<(Scenario, MeasurementSet)>,
    benchmark_name: String,
    executed_by_uuid: String,
    executed_timestamp: DateTime<Utc>,
}

impl Run {
    /// Create a run.
    ///
    /// A scenario that appears more than once keeps its first position and
    /// its last value. The timestamp is truncated to whole milliseconds.
    pub fn new<I>(
        measurements: I,
        benchmark_name: impl Into<String>,
        executed_by_uuid: impl Into<String>,
        executed_timestamp: DateTime<Utc>,
    ) -> Self
    where
        I: IntoIterator<Item = (Scenario, MeasurementSet)>,
    {
        Self {
            measurements: dedup_scenarios(measurements),
            benchmark_name: benchmark_name.into(),
            executed_by_uuid: executed_by_uuid.into(),
            executed_timestamp: truncate_to_millis(executed_timestamp),
        }
    }

    /// Create a run from one plain number per scenario.
    ///
    /// Each number becomes a one-element [`MeasurementSet`] in time units.
    pub fn from_nanos<I>(
        measurements: I,
        benchmark_name: impl Into<String>,
        executed_by_uuid: impl Into<String>,
        executed_timestamp: DateTime<Utc>,
    ) -> Self
    where
        I: IntoIterator<Item = (Scenario, f64)>,
    {
        Self::new(
            measurements
                .into_iter()
                .map(|(scenario, nanos)| (scenario, MeasurementSet::from_nanos([nanos]))),
            benchmark_name,
            executed_by_uuid,
            executed_timestamp,
        )
    }

    /// Start building a run whose required fields are checked at the end.
    pub fn builder() -> RunBuilder {
        RunBuilder::new()
    }

    /// Scenario to measurement set, in insertion order.
    pub fn measurements(&self) -> &[(Scenario, MeasurementSet)] {
        &self.measurements
    }

    /// The measurement set recorded for one scenario.
    pub fn measurement(&self, scenario: &Scenario) -> Option<&MeasurementSet> {
        self.measurements
            .iter()
            .find(|(s, _)| s == scenario)
            .map(|(_, set)| set)
    }

    /// The scenarios, in insertion order.
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.measurements.iter().map(|(s, _)| s)
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// True when the run holds no scenario.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Fully qualified benchmark name.
    pub fn benchmark_name(&self) -> &str {
        &self.benchmark_name
    }

    /// Identity of the executor that produced the run.
    pub fn executed_by_uuid(&self) -> &str {
        &self.executed_by_uuid
    }

    /// Alias of [`executed_by_uuid`](Self::executed_by_uuid), named after the wire attribute.
    pub fn api_key(&self) -> &str {
        &self.executed_by_uuid
    }

    /// When the run was executed, at millisecond precision.
    pub fn executed_timestamp(&self) -> DateTime<Utc> {
        self.executed_timestamp
    }

    fn sorted_entries(&self) -> BTreeMap<&Scenario, &MeasurementSet> {
        self.measurements.iter().map(|(s, m)| (s, m)).collect()
    }
}

impl PartialEq for Run {
    fn eq(&self, other: &Self) -> bool {
        self.benchmark_name == other.benchmark_name
            && self.executed_by_uuid == other.executed_by_uuid
            && self.executed_timestamp == other.executed_timestamp
            && self.measurements.len() == other.measurements.len()
            && self.sorted_entries() == other.sorted_entries()
    }
}

impl Eq for Run {}

impl Hash for Run {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.benchmark_name.hash(state);
        self.executed_by_uuid.hash(state);
        self.executed_timestamp.hash(state);
        self.sorted_entries().hash(state);
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (scenario, set)) in self.measurements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", scenario, set)?;
        }
        write!(f, "}}")
    }
}

/// Builder for [`Run`] that reports absent required fields as errors.
///
/// # Examples
///
/// ```rust
/// use caliper_core::{MeasurementSet, Run, Scenario};
/// use chrono::{TimeZone, Utc};
///
/// let run = Run::builder()
///     .benchmark_name("examples.FooBenchmark")
///     .executed_by_uuid("56b35ad1-2985-4541-8f40-170471a46693")
///     .executed_timestamp(Utc.with_ymd_and_hms(2010, 7, 12, 18, 38, 47).unwrap())
///     .measurement(Scenario::new([("foo", "A")]), MeasurementSet::from_nanos([1200.1]))
///     .build()
///     .unwrap();
/// assert_eq!(run.len(), 1);
///
/// assert!(Run::builder().benchmark_name("x").build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunBuilder {
    measurements: Vec<(Scenario, MeasurementSet)>,
    benchmark_name: Option<String>,
    executed_by_uuid: Option<String>,
    executed_timestamp: Option<DateTime<Utc>>,
}

impl RunBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scenario's measurements.
    pub fn measurement(mut self, scenario: Scenario, set: MeasurementSet) -> Self {
        self.measurements.push((scenario, set));
        self
    }

    /// Add several scenarios' measurements.
    pub fn measurements<I>(mut self, measurements: I) -> Self
    where
        I: IntoIterator<Item = (Scenario, MeasurementSet)>,
    {
        self.measurements.extend(measurements);
        self
    }

    /// Set the benchmark name.
    pub fn benchmark_name(mut self, name: impl Into<String>) -> Self {
        self.benchmark_name = Some(name.into());
        self
    }

    /// Set the executor identity.
    pub fn executed_by_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.executed_by_uuid = Some(uuid.into());
        self
    }

    /// Set the execution time.
    pub fn executed_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.executed_timestamp = Some(timestamp);
        self
    }

    /// Build the run, failing with [`CoreError::InvalidArgument`] when a
    /// required field is absent.
    pub fn build(self) -> CoreResult<Run> {
        let benchmark_name = self
            .benchmark_name
            .ok_or_else(|| CoreError::invalid_argument("benchmark name is required"))?;
        let executed_by_uuid = self
            .executed_by_uuid
            .ok_or_else(|| CoreError::invalid_argument("executor uuid is required"))?;
        let executed_timestamp = self
            .executed_timestamp
            .ok_or_else(|| CoreError::invalid_argument("executed timestamp is required"))?;
        Ok(Run::new(
            self.measurements,
            benchmark_name,
            executed_by_uuid,
            executed_timestamp,
        ))
    }
}

fn dedup_scenarios<I>(measurements: I) -> Vec<(Scenario, MeasurementSet)>
where
    I: IntoIterator<Item = (Scenario, MeasurementSet)>,
{
    let mut positions: HashMap<Scenario, usize> = HashMap::new();
    let mut entries: Vec<(Scenario, MeasurementSet)> = Vec::new();
    for (scenario, set) in measurements {
        match positions.get(&scenario) {
            Some(&index) => entries[index].1 = set,
            None => {
                positions.insert(scenario.clone(), entries.len());
                entries.push((scenario, set));
            }
        }
    }
    entries
}

fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let millis = timestamp.nanosecond() / 1_000_000;
    timestamp
        .with_nanosecond(millis * 1_000_000)
        .unwrap_or(timestamp)
}
