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

//! Error types for the result model.

use thiserror::Error;

/// An error raised while constructing or parsing a value object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required argument was absent or inconsistent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The canonical text of a measurement set could not be parsed.
    #[error("malformed measurement set '{input}': {message}")]
    MalformedMeasurementSet {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        message: String,
    },
}

impl CoreError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a measurement-set parse error.
    pub fn malformed_set(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedMeasurementSet {
            input: input.into(),
            message: message.into(),
        }
    }
}

/// Result type for result-model operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CoreError::invalid_argument("benchmark name is required");
        assert_eq!(err.to_string(), "invalid argument: benchmark name is required");
    }

    #[test]
    fn test_malformed_set_display() {
        let err = CoreError::malformed_set("1.0 x", "invalid number 'x'");
        assert_eq!(
            err.to_string(),
            "malformed measurement set '1.0 x': invalid number 'x'"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = CoreError::invalid_argument("test");
        let _: &dyn std::error::Error = &err;
    }
}
