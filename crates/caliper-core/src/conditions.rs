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

//! Scenarios and environments: the "under what conditions" half of a result.

use std::collections::BTreeMap;
use std::fmt;

/// One concrete assignment of benchmark variables.
///
/// Used as the key of a run's measurement mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scenario {
    variables: BTreeMap<String, String>,
}

impl Scenario {
    /// Create a scenario from variable name/value pairs.
    pub fn new<I, K, V>(variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            variables: collect_pairs(variables),
        }
    }

    /// Variable name to value.
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// Look up one variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, &self.variables)
    }
}

/// Host and platform properties recorded alongside a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Environment {
    properties: BTreeMap<String, String>,
}

impl Environment {
    /// Create an environment from property name/value pairs.
    pub fn new<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: collect_pairs(properties),
        }
    }

    /// Property name to value.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Look up one property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

fn collect_pairs<I, K, V>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn write_pairs(f: &mut fmt::Formatter<'_>, pairs: &BTreeMap<String, String>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (k, v)) in pairs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}={}", k, v)?;
    }
    write!(f, "}}")
}
