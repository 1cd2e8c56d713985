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

use caliper_core::Environment;

/// A typical host description.
pub fn linux_environment() -> Environment {
    Environment::new([
        ("os.name", "Linux"),
        ("os.version", "2.6.32"),
        ("os.arch", "amd64"),
        ("host.cpus", "4"),
        ("host.cpu.cachesize", "6144 KB"),
        ("jre.version", "1.6.0_20"),
    ])
}

/// No properties at all.
pub fn empty_environment() -> Environment {
    Environment::default()
}

/// Property values with markup characters, quotes and non-ASCII text.
pub fn special_strings_environment() -> Environment {
    Environment::new([
        ("markup", "<tag attr=\"x\">&amp;</tag>"),
        ("quotes", "it's \"quoted\""),
        ("unicode", "Zürich \u{65e5}\u{672c}"),
        ("empty", ""),
        ("spaces", "  padded  "),
    ])
}
