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

//! Result model to XML conversion

use crate::error::{MalformedError, XmlResult};
use crate::timestamp::{format_timestamp, Zone};
use crate::{
    API_KEY_ATTRIBUTE, BENCHMARK_ATTRIBUTE, ENVIRONMENT_ELEMENT, EXECUTED_TIMESTAMP_ATTRIBUTE,
    RESULT_ELEMENT, RUN_ELEMENT, SCENARIO_ELEMENT,
};
use caliper_core::{BenchmarkResult, Environment, MeasurementSet, Run, Scenario};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Spaces per indentation level when pretty-printing
    pub indent: usize,
    /// Start the document with `<?xml version="1.0" encoding="UTF-8"?>`
    pub include_declaration: bool,
    /// Zone the executed timestamp is written in
    pub zone: Zone,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
            include_declaration: true,
            zone: Zone::utc(),
        }
    }
}

/// Write a `<run>` document to `out`.
pub fn write_run<W: Write>(run: &Run, out: W, config: &ToXmlConfig) -> XmlResult<()> {
    let bytes = encode(config, |writer| write_run_element(writer, run, &config.zone))?;
    debug!(
        benchmark = run.benchmark_name(),
        scenarios = run.len(),
        bytes = bytes.len(),
        "encoded run document"
    );
    commit(out, &bytes)
}

/// Write an `<environment>` document to `out`.
pub fn write_environment<W: Write>(
    environment: &Environment,
    out: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    let bytes = encode(config, |writer| write_environment_element(writer, environment))?;
    debug!(
        properties = environment.properties().len(),
        bytes = bytes.len(),
        "encoded environment document"
    );
    commit(out, &bytes)
}

/// Write a `<result>` document to `out`.
pub fn write_result<W: Write>(
    result: &BenchmarkResult,
    out: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    let bytes = encode(config, |writer| {
        write_event(writer, Event::Start(BytesStart::new(RESULT_ELEMENT)), "result element")?;
        write_environment_element(writer, result.environment())?;
        write_run_element(writer, result.run(), &config.zone)?;
        write_event(writer, Event::End(BytesEnd::new(RESULT_ELEMENT)), "result element")
    })?;
    debug!(
        benchmark = result.run().benchmark_name(),
        scenarios = result.run().len(),
        bytes = bytes.len(),
        "encoded result document"
    );
    commit(out, &bytes)
}

/// Serialize a whole document into memory.
///
/// Nothing reaches the caller's sink unless the document is complete.
fn encode<F>(config: &ToXmlConfig, body: F) -> XmlResult<Vec<u8>>
where
    F: FnOnce(&mut Writer<Vec<u8>>) -> XmlResult<()>,
{
    let mut writer = if config.pretty {
        Writer::new_with_indent(Vec::new(), b' ', config.indent)
    } else {
        Writer::new(Vec::new())
    };

    if config.include_declaration {
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
            "XML declaration",
        )?;
    }
    body(&mut writer)?;

    let mut bytes = writer.into_inner();
    if config.pretty {
        bytes.push(b'\n');
    }
    Ok(bytes)
}

fn commit<W: Write>(mut out: W, bytes: &[u8]) -> XmlResult<()> {
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>, context: &str) -> XmlResult<()> {
    writer
        .write_event(event)
        .map_err(|e| {
            MalformedError::Write {
                context: context.to_string(),
                message: e.to_string(),
            }
            .into()
        })
}

fn write_environment_element<W: Write>(
    writer: &mut Writer<W>,
    environment: &Environment,
) -> XmlResult<()> {
    let elem = element_with_attributes(ENVIRONMENT_ELEMENT, environment.properties())?;
    write_event(writer, Event::Empty(elem), "environment element")
}

fn write_run_element<W: Write>(writer: &mut Writer<W>, run: &Run, zone: &Zone) -> XmlResult<()> {
    let timestamp = format_timestamp(run.executed_timestamp(), zone)?;

    let mut elem = BytesStart::new(RUN_ELEMENT);
    push_attribute(&mut elem, BENCHMARK_ATTRIBUTE, run.benchmark_name());
    push_attribute(&mut elem, API_KEY_ATTRIBUTE, run.api_key());
    push_attribute(&mut elem, EXECUTED_TIMESTAMP_ATTRIBUTE, &timestamp);

    if run.is_empty() {
        return write_event(writer, Event::Empty(elem), "run element");
    }

    write_event(writer, Event::Start(elem), "run element")?;
    for (scenario, set) in run.measurements() {
        write_scenario_element(writer, scenario, set)?;
    }
    write_event(writer, Event::End(BytesEnd::new(RUN_ELEMENT)), "run element")
}

fn write_scenario_element<W: Write>(
    writer: &mut Writer<W>,
    scenario: &Scenario,
    set: &MeasurementSet,
) -> XmlResult<()> {
    let elem = element_with_attributes(SCENARIO_ELEMENT, scenario.variables())?;
    let text = set.to_string();

    if text.is_empty() {
        return write_event(writer, Event::Empty(elem), "scenario element");
    }

    write_event(writer, Event::Start(elem), "scenario element")?;
    write_event(writer, Event::Text(BytesText::new(&text)), "scenario text")?;
    write_event(
        writer,
        Event::End(BytesEnd::new(SCENARIO_ELEMENT)),
        "scenario element",
    )
}

fn element_with_attributes(
    name: &'static str,
    attributes: &BTreeMap<String, String>,
) -> XmlResult<BytesStart<'static>> {
    let mut elem = BytesStart::new(name);
    for (key, value) in attributes {
        if !is_xml_name(key) {
            return Err(MalformedError::InvalidAttributeName {
                element: name,
                name: key.clone(),
            }
            .into());
        }
        push_attribute(&mut elem, key, value);
    }
    Ok(elem)
}

/// Append an attribute whose value survives attribute-value normalization.
///
/// Tabs, line feeds and carriage returns are written as character
/// references; a conforming reader would otherwise turn them into spaces.
fn push_attribute(elem: &mut BytesStart<'_>, key: &str, value: &str) {
    let escaped = escape(value);
    let mut text = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\t' => text.push_str("&#9;"),
            '\n' => text.push_str("&#10;"),
            '\r' => text.push_str("&#13;"),
            other => text.push(other),
        }
    }
    elem.push_attribute(Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(text.into_bytes()),
    });
}

/// Whether `name` can be written as an attribute name.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}
