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

//! Streaming decode of `<run>` documents
//!
//! [`RunStream`] reads the run header up front and then yields one scenario
//! at a time, so a very large run can be processed without materializing
//! every measurement set at once.
//!
//! # Examples
//!
//! ```no_run
//! use caliper_xml::streaming::RunStream;
//! use caliper_xml::FromXmlConfig;
//! use std::fs::File;
//!
//! let file = File::open("run.xml")?;
//! let stream = RunStream::new(file, &FromXmlConfig::default())?;
//! println!("benchmark {}", stream.header().benchmark_name);
//!
//! for entry in stream {
//!     let (scenario, set) = entry?;
//!     println!("{}: {}", scenario, set);
//! }
//! # Ok::<(), caliper_xml::XmlError>(())
//! ```

use crate::error::XmlResult;
use crate::from_xml::{Element, ElementReader, FromXmlConfig, RunHeader};
use crate::RUN_ELEMENT;
use caliper_core::{MeasurementSet, Run, Scenario};
use std::io::{BufRead, BufReader, Read};
use tracing::debug;

/// Iterator over the scenarios of a `<run>` document.
///
/// Structural errors surface as an `Err` item, after which the stream is
/// exhausted. Content after the closing `</run>` is checked once the last
/// scenario has been read.
pub struct RunStream<R> {
    reader: ElementReader<R>,
    root: Element,
    header: RunHeader,
    count: usize,
    exhausted: bool,
}

impl<R: Read> RunStream<BufReader<R>> {
    /// Open a run document and read its header.
    pub fn new(input: R, config: &FromXmlConfig) -> XmlResult<Self> {
        Self::open(ElementReader::new(input, config))
    }
}

impl<R: BufRead> RunStream<R> {
    /// Open a run document from an already buffered reader.
    pub fn from_buf_read(input: R, config: &FromXmlConfig) -> XmlResult<Self> {
        Self::open(ElementReader::from_buf_read(input, config))
    }

    fn open(mut reader: ElementReader<R>) -> XmlResult<Self> {
        let root = reader.root(RUN_ELEMENT)?;
        let header = RunHeader::from_element(&root)?;
        debug!(
            benchmark = %header.benchmark_name,
            "opened run stream"
        );
        Ok(Self {
            reader,
            root,
            header,
            count: 0,
            exhausted: false,
        })
    }

    /// The run's attributes.
    pub fn header(&self) -> &RunHeader {
        &self.header
    }

    /// Number of scenarios yielded so far.
    pub fn scenarios_read(&self) -> usize {
        self.count
    }

    /// Read the remaining scenarios and assemble the run.
    pub fn into_run(mut self) -> XmlResult<Run> {
        let mut measurements = Vec::new();
        for entry in &mut self {
            measurements.push(entry?);
        }
        Ok(self.header.into_run(measurements))
    }

    fn read_next(&mut self) -> XmlResult<Option<(Scenario, MeasurementSet)>> {
        match self.reader.next_scenario(&self.root, self.count)? {
            Some(entry) => {
                self.count += 1;
                Ok(Some(entry))
            }
            None => {
                self.reader.finish()?;
                debug!(scenarios = self.count, "run stream finished");
                Ok(None)
            }
        }
    }
}

impl<R: BufRead> Iterator for RunStream<R> {
    type Item = XmlResult<(Scenario, MeasurementSet)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.read_next() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a streaming decoder over a `<run>` document.
pub fn run_stream<R: Read>(input: R, config: &FromXmlConfig) -> XmlResult<RunStream<BufReader<R>>> {
    RunStream::new(input, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MalformedError, XmlError};

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<run benchmark="examples.FooBenchmark" apiKey="key" executedTimestamp="2010-07-12T11:38:47PDT">
  <scenario foo="A">1200.1</scenario>
  <scenario foo="B">15 3</scenario>
</run>
"#;

    #[test]
    fn test_header_before_scenarios() {
        let stream = run_stream(DOC.as_bytes(), &FromXmlConfig::default()).unwrap();
        assert_eq!(stream.header().benchmark_name, "examples.FooBenchmark");
        assert_eq!(stream.header().api_key, "key");
        assert_eq!(stream.scenarios_read(), 0);
    }

    #[test]
    fn test_yields_in_document_order() {
        let stream = run_stream(DOC.as_bytes(), &FromXmlConfig::default()).unwrap();
        let entries: Vec<_> = stream.collect::<Result<_, _>>().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.get("foo"), Some("A"));
        assert_eq!(entries[1].0.get("foo"), Some("B"));
        assert_eq!(entries[1].1, MeasurementSet::from_nanos([15.0, 3.0]));
    }

    #[test]
    fn test_into_run_matches_read_run() {
        let config = FromXmlConfig::default();
        let streamed = run_stream(DOC.as_bytes(), &config)
            .unwrap()
            .into_run()
            .unwrap();
        let direct = crate::read_run(DOC.as_bytes(), &config).unwrap();
        assert_eq!(streamed, direct);
    }

    #[test]
    fn test_error_ends_stream() {
        let xml = r#"<run benchmark="b" apiKey="k" executedTimestamp="2010-07-12T18:38:47UTC"><scenario>1</scenario><foo/><scenario>2</scenario></run>"#;
        let mut stream = run_stream(xml.as_bytes(), &FromXmlConfig::default()).unwrap();
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            XmlError::MalformedDocument(MalformedError::UnexpectedElement { .. })
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_trailing_content_reported() {
        let xml = r#"<run benchmark="b" apiKey="k" executedTimestamp="2010-07-12T18:38:47UTC"/><run/>"#;
        let mut stream = run_stream(xml.as_bytes(), &FromXmlConfig::default()).unwrap();
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            XmlError::MalformedDocument(MalformedError::TrailingContent)
        ));
    }

    #[test]
    fn test_bad_header_fails_open() {
        let result = run_stream(
            r#"<run benchmark="b" apiKey="k" executedTimestamp="not-a-date"/>"#.as_bytes(),
            &FromXmlConfig::default(),
        );
        assert!(matches!(
            result,
            Err(XmlError::MalformedDocument(MalformedError::InvalidTimestamp { .. }))
        ));
    }
}
