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

//! XML codec for Caliper benchmark results.
//!
//! Converts [`Run`], [`Environment`] and [`BenchmarkResult`] values to and
//! from a small XML vocabulary:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <result>
//!   <environment os.name="Linux" jre.version="1.6"/>
//!   <run benchmark="examples.FooBenchmark" apiKey="key"
//!        executedTimestamp="2010-07-12T11:38:47PDT">
//!     <scenario foo="A" bar="15">1200.1</scenario>
//!   </run>
//! </result>
//! ```
//!
//! Each `<scenario>` carries its benchmark variables as attributes and its
//! [`MeasurementSet`](caliper_core::MeasurementSet) in canonical text form.
//! The executed timestamp keeps whole seconds only.
//!
//! # Examples
//!
//! ```
//! use caliper_core::{Run, Scenario};
//! use caliper_xml::{run_from_str, run_to_string};
//! use chrono::{TimeZone, Utc};
//!
//! let run = Run::from_nanos(
//!     [(Scenario::new([("foo", "A")]), 1200.1)],
//!     "examples.FooBenchmark",
//!     "key",
//!     Utc.with_ymd_and_hms(2010, 7, 12, 18, 38, 47).unwrap(),
//! );
//!
//! let xml = run_to_string(&run)?;
//! assert_eq!(run_from_str(&xml)?, run);
//! # Ok::<(), caliper_xml::XmlError>(())
//! ```
//!
//! All failures are reported as [`XmlError`]: either the document is
//! malformed, or the underlying stream failed.

mod error;
mod from_xml;
mod timestamp;
mod to_xml;
pub mod streaming;

#[cfg(feature = "async")]
pub mod async_api;

pub use error::{MalformedError, XmlError, XmlResult};
pub use from_xml::{read_environment, read_result, read_run, FromXmlConfig, RunHeader};
pub use streaming::{run_stream, RunStream};
pub use timestamp::{format_timestamp, parse_timestamp, Zone, TIMESTAMP_PATTERN};
pub use to_xml::{write_environment, write_result, write_run, ToXmlConfig};

use caliper_core::{BenchmarkResult, Environment, Run};
use std::io::{Read, Write};

/// Root element of a result document.
pub const RESULT_ELEMENT: &str = "result";
/// Element holding environment properties as attributes.
pub const ENVIRONMENT_ELEMENT: &str = "environment";
/// Element holding one run.
pub const RUN_ELEMENT: &str = "run";
/// Element holding one scenario's measurements.
pub const SCENARIO_ELEMENT: &str = "scenario";
/// Run attribute naming the benchmark.
pub const BENCHMARK_ATTRIBUTE: &str = "benchmark";
/// Run attribute naming the executor.
pub const API_KEY_ATTRIBUTE: &str = "apiKey";
/// Run attribute holding the execution time.
pub const EXECUTED_TIMESTAMP_ATTRIBUTE: &str = "executedTimestamp";

/// Write `run` as a `<run>` document with default settings.
pub fn run_to_xml<W: Write>(run: &Run, out: W) -> XmlResult<()> {
    write_run(run, out, &ToXmlConfig::default())
}

/// Write `run` as a `<run>` document.
pub fn run_to_xml_with<W: Write>(run: &Run, out: W, config: &ToXmlConfig) -> XmlResult<()> {
    write_run(run, out, config)
}

/// Read a `<run>` document with default limits.
pub fn run_from_xml<R: Read>(input: R) -> XmlResult<Run> {
    read_run(input, &FromXmlConfig::default())
}

/// Read a `<run>` document.
pub fn run_from_xml_with<R: Read>(input: R, config: &FromXmlConfig) -> XmlResult<Run> {
    read_run(input, config)
}

/// Write `environment` as an `<environment>` document with default settings.
pub fn environment_to_xml<W: Write>(environment: &Environment, out: W) -> XmlResult<()> {
    write_environment(environment, out, &ToXmlConfig::default())
}

/// Write `environment` as an `<environment>` document.
pub fn environment_to_xml_with<W: Write>(
    environment: &Environment,
    out: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    write_environment(environment, out, config)
}

/// Read an `<environment>` document with default limits.
pub fn environment_from_xml<R: Read>(input: R) -> XmlResult<Environment> {
    read_environment(input, &FromXmlConfig::default())
}

/// Read an `<environment>` document.
pub fn environment_from_xml_with<R: Read>(
    input: R,
    config: &FromXmlConfig,
) -> XmlResult<Environment> {
    read_environment(input, config)
}

/// Write `result` as a `<result>` document with default settings.
pub fn result_to_xml<W: Write>(result: &BenchmarkResult, out: W) -> XmlResult<()> {
    write_result(result, out, &ToXmlConfig::default())
}

/// Write `result` as a `<result>` document.
pub fn result_to_xml_with<W: Write>(
    result: &BenchmarkResult,
    out: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    write_result(result, out, config)
}

/// Read a `<result>` document with default limits.
pub fn result_from_xml<R: Read>(input: R) -> XmlResult<BenchmarkResult> {
    read_result(input, &FromXmlConfig::default())
}

/// Read a `<result>` document.
pub fn result_from_xml_with<R: Read>(
    input: R,
    config: &FromXmlConfig,
) -> XmlResult<BenchmarkResult> {
    read_result(input, config)
}

/// Encode a run to a string.
pub fn run_to_string(run: &Run) -> XmlResult<String> {
    let mut out = Vec::new();
    run_to_xml(run, &mut out)?;
    into_string(out)
}

/// Encode an environment to a string.
pub fn environment_to_string(environment: &Environment) -> XmlResult<String> {
    let mut out = Vec::new();
    environment_to_xml(environment, &mut out)?;
    into_string(out)
}

/// Encode a result to a string.
pub fn result_to_string(result: &BenchmarkResult) -> XmlResult<String> {
    let mut out = Vec::new();
    result_to_xml(result, &mut out)?;
    into_string(out)
}

/// Decode a run from a string.
pub fn run_from_str(xml: &str) -> XmlResult<Run> {
    run_from_xml(xml.as_bytes())
}

/// Decode an environment from a string.
pub fn environment_from_str(xml: &str) -> XmlResult<Environment> {
    environment_from_xml(xml.as_bytes())
}

/// Decode a result from a string.
pub fn result_from_str(xml: &str) -> XmlResult<BenchmarkResult> {
    result_from_xml(xml.as_bytes())
}

fn into_string(bytes: Vec<u8>) -> XmlResult<String> {
    String::from_utf8(bytes).map_err(|e| MalformedError::from(e).into())
}
