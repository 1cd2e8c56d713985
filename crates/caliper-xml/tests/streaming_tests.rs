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

//! Streaming decode tests
//!
//! Checks that [`RunStream`] agrees with whole-document decoding and stays
//! within its configured limits on large inputs.

use caliper_test::fixtures;
use caliper_xml::streaming::RunStream;
use caliper_xml::{
    run_from_xml, run_stream, run_to_string, FromXmlConfig, MalformedError, XmlError,
};
use std::io::{BufReader, Cursor};

#[test]
fn test_stream_matches_whole_decode() {
    let run = fixtures::many_scenarios_run(500);
    let xml = run_to_string(&run).unwrap();

    let streamed = run_stream(xml.as_bytes(), &FromXmlConfig::default())
        .unwrap()
        .into_run()
        .unwrap();
    assert_eq!(streamed, run);
    assert_eq!(run_from_xml(xml.as_bytes()).unwrap(), run);
}

#[test]
fn test_stream_header() {
    let run = fixtures::foo_benchmark_run();
    let xml = run_to_string(&run).unwrap();
    let stream = run_stream(xml.as_bytes(), &FromXmlConfig::default()).unwrap();

    let header = stream.header();
    assert_eq!(header.benchmark_name, run.benchmark_name());
    assert_eq!(header.api_key, run.api_key());
    assert_eq!(header.executed_timestamp, run.executed_timestamp());
}

#[test]
fn test_stream_counts_scenarios() {
    let xml = run_to_string(&fixtures::many_scenarios_run(10)).unwrap();
    let mut stream = run_stream(xml.as_bytes(), &FromXmlConfig::default()).unwrap();
    for _ in 0..3 {
        stream.next().unwrap().unwrap();
    }
    assert_eq!(stream.scenarios_read(), 3);
    assert_eq!(stream.count(), 7);
}

#[test]
fn test_stream_from_buf_read_small_buffer() {
    let run = fixtures::weighted_run();
    let xml = run_to_string(&run).unwrap();
    let input = BufReader::with_capacity(16, Cursor::new(xml.into_bytes()));

    let streamed = RunStream::from_buf_read(input, &FromXmlConfig::default())
        .unwrap()
        .into_run()
        .unwrap();
    assert_eq!(streamed, run);
}

#[test]
fn test_stream_scenario_limit() {
    let xml = run_to_string(&fixtures::many_scenarios_run(20)).unwrap();
    let config = FromXmlConfig {
        max_scenarios: 10,
        ..Default::default()
    };
    let results: Vec<_> = run_stream(xml.as_bytes(), &config).unwrap().collect();

    assert_eq!(results.len(), 11);
    assert!(results[..10].iter().all(|r| r.is_ok()));
    assert!(matches!(
        results[10],
        Err(XmlError::MalformedDocument(MalformedError::ScenarioLimitExceeded {
            max: 10,
            current: 11
        }))
    ));
}

#[test]
fn test_stream_wrong_root() {
    let result = run_stream("<result/>".as_bytes(), &FromXmlConfig::default());
    assert!(matches!(
        result,
        Err(XmlError::MalformedDocument(MalformedError::UnexpectedRoot { .. }))
    ));
}

#[test]
fn test_stream_empty_run() {
    let xml = run_to_string(&fixtures::empty_run()).unwrap();
    let mut stream = run_stream(xml.as_bytes(), &FromXmlConfig::default()).unwrap();
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}
