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

//! Property-based tests for the result model.
//!
//! # Test Modules
//!
//! - `ordering`: the two measurement orders are total and agree with numeric order
//! - `measurement_set`: parsing is the exact inverse of the canonical text form
//! - `immutability`: value objects never observe later changes to their inputs

pub mod immutability;
pub mod measurement_set;
pub mod ordering;
