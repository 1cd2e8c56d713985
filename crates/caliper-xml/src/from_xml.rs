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

//! XML to result model conversion
//!
//! All three document shapes share one [`ElementReader`], which walks the
//! quick-xml event stream and hands out decoded start tags. Every structural
//! rule is checked before a value object is constructed, so a rejected
//! document never yields a partial result.

use crate::error::{MalformedError, XmlError, XmlResult};
use crate::timestamp::parse_timestamp;
use crate::{
    API_KEY_ATTRIBUTE, BENCHMARK_ATTRIBUTE, ENVIRONMENT_ELEMENT, EXECUTED_TIMESTAMP_ATTRIBUTE,
    RESULT_ELEMENT, RUN_ELEMENT, SCENARIO_ELEMENT,
};
use caliper_core::{BenchmarkResult, Environment, MeasurementSet, Run, Scenario};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, trace, warn};

/// Configuration for XML input
#[derive(Debug, Clone)]
pub struct FromXmlConfig {
    /// Maximum number of scenarios in one run (default: 100,000)
    pub max_scenarios: usize,
    /// Maximum text length of one scenario, in bytes (default: 1MB)
    pub max_text_length: usize,
    /// Buffer size for reading from the input stream (default: 64KB)
    pub buffer_size: usize,
}

impl Default for FromXmlConfig {
    fn default() -> Self {
        Self {
            max_scenarios: 100_000,
            max_text_length: 1_000_000,
            buffer_size: 65536,
        }
    }
}

/// The attributes of a `<run>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunHeader {
    /// Value of the `benchmark` attribute.
    pub benchmark_name: String,
    /// Value of the `apiKey` attribute.
    pub api_key: String,
    /// Decoded `executedTimestamp` attribute.
    pub executed_timestamp: DateTime<Utc>,
}

impl RunHeader {
    pub(crate) fn from_element(element: &Element) -> XmlResult<Self> {
        let benchmark_name = element.required(RUN_ELEMENT, BENCHMARK_ATTRIBUTE)?;
        let api_key = element.required(RUN_ELEMENT, API_KEY_ATTRIBUTE)?;
        let timestamp = element.required(RUN_ELEMENT, EXECUTED_TIMESTAMP_ATTRIBUTE)?;
        Ok(Self {
            benchmark_name: benchmark_name.to_string(),
            api_key: api_key.to_string(),
            executed_timestamp: parse_timestamp(timestamp)?,
        })
    }

    /// Combine the header with decoded scenarios.
    pub fn into_run<I>(self, measurements: I) -> Run
    where
        I: IntoIterator<Item = (Scenario, MeasurementSet)>,
    {
        Run::new(
            measurements,
            self.benchmark_name,
            self.api_key,
            self.executed_timestamp,
        )
    }
}

/// Read a `<run>` document.
pub fn read_run<R: Read>(input: R, config: &FromXmlConfig) -> XmlResult<Run> {
    let mut reader = ElementReader::new(input, config);
    let run = reject_logged("run", reader.document(RUN_ELEMENT, read_run_body))?;
    debug!(
        benchmark = run.benchmark_name(),
        scenarios = run.len(),
        bytes = reader.position(),
        "decoded run document"
    );
    Ok(run)
}

/// Read an `<environment>` document.
pub fn read_environment<R: Read>(input: R, config: &FromXmlConfig) -> XmlResult<Environment> {
    let mut reader = ElementReader::new(input, config);
    let environment = reject_logged(
        "environment",
        reader.document(ENVIRONMENT_ELEMENT, read_environment_body),
    )?;
    debug!(
        properties = environment.properties().len(),
        bytes = reader.position(),
        "decoded environment document"
    );
    Ok(environment)
}

/// Read a `<result>` document.
pub fn read_result<R: Read>(input: R, config: &FromXmlConfig) -> XmlResult<BenchmarkResult> {
    let mut reader = ElementReader::new(input, config);
    let result = reject_logged("result", reader.document(RESULT_ELEMENT, read_result_body))?;
    debug!(
        benchmark = result.run().benchmark_name(),
        scenarios = result.run().len(),
        bytes = reader.position(),
        "decoded result document"
    );
    Ok(result)
}

fn reject_logged<T>(shape: &str, outcome: XmlResult<T>) -> XmlResult<T> {
    outcome.map_err(|err| {
        warn!(document = shape, error = %err, "rejected XML document");
        err
    })
}

fn read_run_body<R: BufRead>(reader: &mut ElementReader<R>, element: Element) -> XmlResult<Run> {
    let header = RunHeader::from_element(&element)?;
    let mut measurements = Vec::new();
    while let Some(entry) = reader.next_scenario(&element, measurements.len())? {
        measurements.push(entry);
    }
    Ok(header.into_run(measurements))
}

fn read_environment_body<R: BufRead>(
    reader: &mut ElementReader<R>,
    element: Element,
) -> XmlResult<Environment> {
    reader.expect_no_children(&element)?;
    Ok(Environment::new(element.attributes))
}

fn read_result_body<R: BufRead>(
    reader: &mut ElementReader<R>,
    element: Element,
) -> XmlResult<BenchmarkResult> {
    let mut environment = None;
    let mut run = None;

    while let Some(child) = reader.next_child(&element)? {
        if child.name == ENVIRONMENT_ELEMENT {
            if environment.is_some() {
                return Err(duplicate(ENVIRONMENT_ELEMENT));
            }
            environment = Some(read_environment_body(reader, child)?);
        } else if child.name == RUN_ELEMENT {
            if run.is_some() {
                return Err(duplicate(RUN_ELEMENT));
            }
            run = Some(read_run_body(reader, child)?);
        } else {
            return Err(MalformedError::UnexpectedElement {
                parent: RESULT_ELEMENT.to_string(),
                found: child.name,
            }
            .into());
        }
    }

    let environment = environment.ok_or(MalformedError::MissingElement {
        parent: RESULT_ELEMENT,
        element: ENVIRONMENT_ELEMENT,
    })?;
    let run = run.ok_or(MalformedError::MissingElement {
        parent: RESULT_ELEMENT,
        element: RUN_ELEMENT,
    })?;
    Ok(BenchmarkResult::new(run, environment))
}

fn duplicate(element: &'static str) -> XmlError {
    MalformedError::DuplicateElement {
        parent: RESULT_ELEMENT,
        element,
    }
    .into()
}

/// A decoded start tag.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    /// Written as `<name .../>`; no content or end tag follows.
    pub(crate) empty: bool,
}

impl Element {
    fn decode(start: &BytesStart<'_>, empty: bool, pos: usize) -> XmlResult<Self> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(MalformedError::from)?
            .to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| MalformedError::Parse {
                pos,
                message: e.to_string(),
            })?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(MalformedError::from)?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::from_reader(pos, e))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            empty,
        })
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn required(&self, element: &'static str, attribute: &'static str) -> XmlResult<&str> {
        self.attribute(attribute).ok_or_else(|| {
            MalformedError::MissingAttribute { element, attribute }.into()
        })
    }
}

/// One step through the document.
enum Next {
    Start(Element),
    Text(String),
    End,
    Eof,
}

/// Pull reader over the elements of a result document.
pub(crate) struct ElementReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    config: FromXmlConfig,
}

impl<R: Read> ElementReader<BufReader<R>> {
    pub(crate) fn new(input: R, config: &FromXmlConfig) -> Self {
        Self::from_buf_read(BufReader::with_capacity(config.buffer_size, input), config)
    }
}

impl<R: BufRead> ElementReader<R> {
    pub(crate) fn from_buf_read(input: R, config: &FromXmlConfig) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.trim_text(true);
        Self {
            reader,
            buf: Vec::with_capacity(8192),
            config: config.clone(),
        }
    }

    /// Bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    /// Read a whole document whose root is `expected`, then require end of input.
    fn document<T, F>(&mut self, expected: &'static str, body: F) -> XmlResult<T>
    where
        F: FnOnce(&mut Self, Element) -> XmlResult<T>,
    {
        let root = self.root(expected)?;
        let value = body(self, root)?;
        self.finish()?;
        Ok(value)
    }

    /// Skip the prolog and return the root start tag.
    pub(crate) fn root(&mut self, expected: &'static str) -> XmlResult<Element> {
        match self.next_event()? {
            Next::Start(element) if element.name == expected => Ok(element),
            Next::Start(element) => Err(MalformedError::UnexpectedRoot {
                expected,
                found: element.name,
            }
            .into()),
            Next::Text(_) | Next::End => Err(self.parse_error("content before the root element")),
            Next::Eof => Err(MalformedError::MissingRoot.into()),
        }
    }

    /// The next child element of `parent`, or `None` at its end tag.
    ///
    /// Text between children is ignored.
    pub(crate) fn next_child(&mut self, parent: &Element) -> XmlResult<Option<Element>> {
        if parent.empty {
            return Ok(None);
        }
        loop {
            match self.next_event()? {
                Next::Start(element) => return Ok(Some(element)),
                Next::Text(_) => continue,
                Next::End => return Ok(None),
                Next::Eof => {
                    return Err(MalformedError::UnexpectedEof {
                        element: parent.name.clone(),
                    }
                    .into())
                }
            }
        }
    }

    /// Consume an element that must not contain child elements.
    pub(crate) fn expect_no_children(&mut self, element: &Element) -> XmlResult<()> {
        match self.next_child(element)? {
            None => Ok(()),
            Some(child) => Err(MalformedError::UnexpectedElement {
                parent: element.name.clone(),
                found: child.name,
            }
            .into()),
        }
    }

    /// Decode the next `<scenario>` of a run, given how many came before it.
    pub(crate) fn next_scenario(
        &mut self,
        run: &Element,
        count: usize,
    ) -> XmlResult<Option<(Scenario, MeasurementSet)>> {
        let Some(child) = self.next_child(run)? else {
            return Ok(None);
        };
        if child.name != SCENARIO_ELEMENT {
            return Err(MalformedError::UnexpectedElement {
                parent: RUN_ELEMENT.to_string(),
                found: child.name,
            }
            .into());
        }
        if count >= self.config.max_scenarios {
            return Err(MalformedError::ScenarioLimitExceeded {
                max: self.config.max_scenarios,
                current: count + 1,
            }
            .into());
        }

        let text = self.text_content(&child)?;
        let set = MeasurementSet::parse(&text).map_err(MalformedError::from)?;
        let scenario = Scenario::new(child.attributes);
        trace!(scenario = %scenario, measurements = set.len(), "decoded scenario");
        Ok(Some((scenario, set)))
    }

    /// Text content of `element` up to its end tag.
    fn text_content(&mut self, element: &Element) -> XmlResult<String> {
        let mut text = String::new();
        if element.empty {
            return Ok(text);
        }
        loop {
            match self.next_event()? {
                Next::Text(chunk) => {
                    let current = text.len() + chunk.len();
                    if current > self.config.max_text_length {
                        return Err(MalformedError::TextLengthLimitExceeded {
                            max: self.config.max_text_length,
                            current,
                        }
                        .into());
                    }
                    text.push_str(&chunk);
                }
                Next::End => return Ok(text),
                Next::Start(child) => {
                    return Err(MalformedError::UnexpectedElement {
                        parent: element.name.clone(),
                        found: child.name,
                    }
                    .into())
                }
                Next::Eof => {
                    return Err(MalformedError::UnexpectedEof {
                        element: element.name.clone(),
                    }
                    .into())
                }
            }
        }
    }

    /// Require that only comments or whitespace follow the root element.
    pub(crate) fn finish(&mut self) -> XmlResult<()> {
        match self.next_event()? {
            Next::Eof => Ok(()),
            _ => Err(MalformedError::TrailingContent.into()),
        }
    }

    fn next_event(&mut self) -> XmlResult<Next> {
        loop {
            self.buf.clear();
            let pos = self.reader.buffer_position();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(start)) => return Ok(Next::Start(Element::decode(&start, false, pos)?)),
                Ok(Event::Empty(start)) => return Ok(Next::Start(Element::decode(&start, true, pos)?)),
                Ok(Event::End(_)) => return Ok(Next::End),
                Ok(Event::Text(text)) => {
                    let text = text
                        .unescape()
                        .map_err(|e| XmlError::from_reader(pos, e))?
                        .into_owned();
                    return Ok(Next::Text(text));
                }
                Ok(Event::CData(data)) => {
                    let text = String::from_utf8(data.into_inner().into_owned())
                        .map_err(MalformedError::from)?;
                    return Ok(Next::Text(text));
                }
                Ok(Event::Eof) => return Ok(Next::Eof),
                // Declaration, comments, processing instructions, doctype
                Ok(_) => continue,
                Err(e) => return Err(XmlError::from_reader(self.reader.buffer_position(), e)),
            }
        }
    }

    fn parse_error(&self, message: &str) -> XmlError {
        MalformedError::Parse {
            pos: self.reader.buffer_position(),
            message: message.to_string(),
        }
        .into()
    }
}
