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

//! Error types for XML conversion

use caliper_core::CoreError;
use std::io;
use thiserror::Error;

/// Errors returned by the XML codec.
///
/// Callers only need to distinguish two cases: the document was malformed
/// (or could not be produced), or the caller's stream failed underneath the
/// codec. The underlying parser's error types never escape.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The document is not well-formed or does not follow the result grammar.
    #[error("Malformed XML document: {0}")]
    MalformedDocument(#[from] MalformedError),

    /// Reading from or writing to the supplied stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl XmlError {
    /// True for [`XmlError::MalformedDocument`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, XmlError::MalformedDocument(_))
    }

    /// The diagnostic cause of a malformed document.
    pub fn malformed(&self) -> Option<&MalformedError> {
        match self {
            XmlError::MalformedDocument(cause) => Some(cause),
            XmlError::Io(_) => None,
        }
    }

    /// Convert a quick-xml failure, keeping stream errors as [`XmlError::Io`].
    pub(crate) fn from_reader(pos: usize, err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(io_err) => XmlError::Io(io::Error::new(
                io_err.kind(),
                io_err.to_string(),
            )),
            other => MalformedError::Parse {
                pos,
                message: other.to_string(),
            }
            .into(),
        }
    }
}

/// Why a document was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedError {
    /// The byte stream is not well-formed XML.
    #[error("XML parse error at position {pos}: {message}")]
    Parse {
        /// Byte offset where the error was detected.
        pos: usize,
        /// Description of the parsing error.
        message: String,
    },

    /// Names or text are not valid UTF-8.
    #[error("UTF-8 encoding error: {message}")]
    Utf8 {
        /// Description of the encoding error.
        message: String,
    },

    /// The input contains no element at all.
    #[error("document has no root element")]
    MissingRoot,

    /// The root element does not match the requested document shape.
    #[error("expected <{expected}> root element, found <{found}>")]
    UnexpectedRoot {
        /// Element name the caller asked for.
        expected: &'static str,
        /// Element name found in the document.
        found: String,
    },

    /// A child element is not allowed where it appears.
    #[error("unexpected element <{found}> inside <{parent}>")]
    UnexpectedElement {
        /// Enclosing element.
        parent: String,
        /// Offending child.
        found: String,
    },

    /// A child element that must be unique appears twice.
    #[error("duplicate <{element}> element inside <{parent}>")]
    DuplicateElement {
        /// Enclosing element.
        parent: &'static str,
        /// Repeated child.
        element: &'static str,
    },

    /// A required child element is absent.
    #[error("missing <{element}> element inside <{parent}>")]
    MissingElement {
        /// Enclosing element.
        parent: &'static str,
        /// Absent child.
        element: &'static str,
    },

    /// A required attribute is absent.
    #[error("missing '{attribute}' attribute on <{element}>")]
    MissingAttribute {
        /// Element carrying the attribute.
        element: &'static str,
        /// Absent attribute.
        attribute: &'static str,
    },

    /// A map key cannot be written as an XML attribute name.
    #[error("'{name}' is not a valid attribute name on <{element}>")]
    InvalidAttributeName {
        /// Element the attribute was meant for.
        element: &'static str,
        /// Offending key.
        name: String,
    },

    /// The executed timestamp does not follow `yyyy-MM-dd'T'HH:mm:ssz`.
    #[error("invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// Attribute value as found in the document.
        value: String,
        /// What was wrong with it.
        message: String,
    },

    /// Scenario text is not a valid measurement set.
    #[error("invalid measurement set: {0}")]
    InvalidMeasurementSet(#[from] CoreError),

    /// The document ended inside an element.
    #[error("unexpected end of document inside <{element}>")]
    UnexpectedEof {
        /// Element left open.
        element: String,
    },

    /// Elements or text follow the root element.
    #[error("content after the root element")]
    TrailingContent,

    /// More scenarios than [`FromXmlConfig::max_scenarios`](crate::FromXmlConfig::max_scenarios).
    #[error("scenario count exceeded maximum (max: {max}, found: {current})")]
    ScenarioLimitExceeded {
        /// Configured maximum.
        max: usize,
        /// Count reached.
        current: usize,
    },

    /// Scenario text longer than [`FromXmlConfig::max_text_length`](crate::FromXmlConfig::max_text_length).
    #[error("text length exceeded maximum (max: {max}, found: {current})")]
    TextLengthLimitExceeded {
        /// Configured maximum, in bytes.
        max: usize,
        /// Length reached, in bytes.
        current: usize,
    },

    /// Serializing the document failed.
    #[error("Failed to write {context}: {message}")]
    Write {
        /// What was being written.
        context: String,
        /// Underlying error message.
        message: String,
    },
}

impl From<std::str::Utf8Error> for MalformedError {
    fn from(err: std::str::Utf8Error) -> Self {
        MalformedError::Utf8 {
            message: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for MalformedError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        MalformedError::Utf8 {
            message: err.to_string(),
        }
    }
}

/// Result type for XML codec operations.
pub type XmlResult<T> = Result<T, XmlError>;
