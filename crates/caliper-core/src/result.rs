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

//! A run paired with the environment it was captured in.

use crate::conditions::Environment;
use crate::run::Run;

/// One [`Run`] together with its [`Environment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchmarkResult {
    run: Run,
    environment: Environment,
}

impl BenchmarkResult {
    /// Pair a run with its environment.
    pub fn new(run: Run, environment: Environment) -> Self {
        Self { run, environment }
    }

    /// The measured run.
    pub fn run(&self) -> &Run {
        &self.run
    }

    /// The environment the run was captured in.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Split into run and environment.
    pub fn into_parts(self) -> (Run, Environment) {
        (self.run, self.environment)
    }
}
