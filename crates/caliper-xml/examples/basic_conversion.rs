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

//! Basic result to XML conversion example
//!
//! Builds a small result, writes it in the Pacific zone and reads it back.

use caliper_core::{BenchmarkResult, Environment, MeasurementSet, Run, Scenario};
use caliper_xml::{result_from_str, result_to_xml_with, ToXmlConfig, XmlError, Zone};
use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let run = Run::builder()
        .benchmark_name("examples.FooBenchmark")
        .executed_by_uuid("56b35ad1-2985-4541-8f40-170471a46693")
        .executed_timestamp(Utc::now())
        .measurement(
            Scenario::new([("foo", "A"), ("bar", "15")]),
            MeasurementSet::from_nanos([1200.1, 1198.7, 1203.4]),
        )
        .measurement(
            Scenario::new([("foo", "B"), ("bar", "15")]),
            MeasurementSet::parse("instructions=1|840/3.5 852/3.5")?,
        )
        .build()?;
    let environment = Environment::new([("os.name", std::env::consts::OS)]);
    let result = BenchmarkResult::new(run, environment);

    let config = ToXmlConfig {
        zone: Zone::named("PDT").ok_or("unknown zone")?,
        ..Default::default()
    };
    let mut xml = Vec::new();
    result_to_xml_with(&result, &mut xml, &config)?;
    let xml = String::from_utf8(xml)?;
    println!("{}", xml);

    let decoded = result_from_str(&xml)?;
    println!(
        "decoded {} scenarios of {}",
        decoded.run().len(),
        decoded.run().benchmark_name()
    );

    match result_from_str("<result><foo/></result>") {
        Err(XmlError::MalformedDocument(cause)) => println!("rejected: {}", cause),
        other => println!("unexpected: {:?}", other),
    }
    Ok(())
}
