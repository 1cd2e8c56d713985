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

//! Async I/O for the XML codec
//!
//! Available with the `async` feature. Documents are small enough to be
//! buffered whole, so each function moves bytes asynchronously and delegates
//! the encoding or decoding itself to the synchronous codec.
//!
//! # Examples
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), caliper_xml::XmlError> {
//! use caliper_xml::async_api::{read_result_file_async, write_result_file_async};
//! use caliper_xml::{FromXmlConfig, ToXmlConfig};
//!
//! let result = read_result_file_async("result.xml", &FromXmlConfig::default()).await?;
//! write_result_file_async(&result, "copy.xml", &ToXmlConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::XmlResult;
use crate::{
    read_environment, read_result, read_run, write_environment, write_result, write_run,
    FromXmlConfig, ToXmlConfig,
};
use caliper_core::{BenchmarkResult, Environment, Run};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Write a `<run>` document to an async writer.
pub async fn run_to_xml_async<W: AsyncWrite + Unpin>(
    run: &Run,
    writer: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    let mut bytes = Vec::new();
    write_run(run, &mut bytes, config)?;
    write_all_async(writer, &bytes).await
}

/// Read a `<run>` document from an async reader.
pub async fn run_from_xml_async<R: AsyncRead + Unpin>(
    reader: R,
    config: &FromXmlConfig,
) -> XmlResult<Run> {
    let bytes = read_all_async(reader).await?;
    read_run(bytes.as_slice(), config)
}

/// Write an `<environment>` document to an async writer.
pub async fn environment_to_xml_async<W: AsyncWrite + Unpin>(
    environment: &Environment,
    writer: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    let mut bytes = Vec::new();
    write_environment(environment, &mut bytes, config)?;
    write_all_async(writer, &bytes).await
}

/// Read an `<environment>` document from an async reader.
pub async fn environment_from_xml_async<R: AsyncRead + Unpin>(
    reader: R,
    config: &FromXmlConfig,
) -> XmlResult<Environment> {
    let bytes = read_all_async(reader).await?;
    read_environment(bytes.as_slice(), config)
}

/// Write a `<result>` document to an async writer.
pub async fn result_to_xml_async<W: AsyncWrite + Unpin>(
    result: &BenchmarkResult,
    writer: W,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    let mut bytes = Vec::new();
    write_result(result, &mut bytes, config)?;
    write_all_async(writer, &bytes).await
}

/// Read a `<result>` document from an async reader.
pub async fn result_from_xml_async<R: AsyncRead + Unpin>(
    reader: R,
    config: &FromXmlConfig,
) -> XmlResult<BenchmarkResult> {
    let bytes = read_all_async(reader).await?;
    read_result(bytes.as_slice(), config)
}

/// Write a `<result>` document to a file, replacing any existing content.
pub async fn write_result_file_async(
    result: &BenchmarkResult,
    path: impl AsRef<Path>,
    config: &ToXmlConfig,
) -> XmlResult<()> {
    let mut bytes = Vec::new();
    write_result(result, &mut bytes, config)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Read a `<result>` document from a file.
pub async fn read_result_file_async(
    path: impl AsRef<Path>,
    config: &FromXmlConfig,
) -> XmlResult<BenchmarkResult> {
    let bytes = tokio::fs::read(path).await?;
    read_result(bytes.as_slice(), config)
}

async fn write_all_async<W: AsyncWrite + Unpin>(mut writer: W, bytes: &[u8]) -> XmlResult<()> {
    writer.write_all(bytes).await?;
    writer.flush().await?;
    Ok(())
}

async fn read_all_async<R: AsyncRead + Unpin>(mut reader: R) -> XmlResult<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}
