// Dweve OGMA - Object Graph Mapper
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Canonical test fixtures.
//!
//! - **schemas**: JSON schema documents
//! - **registries**: registries built from those documents
//! - **records**: rows shaped like eager projection output
//! - **errors**: invalid schemas and malformed records
//! - **builders**: builders for custom records

pub mod builders;
pub mod errors;
mod records;
mod registries;
pub mod schemas;

pub use records::*;
pub use registries::*;

use crate::FixtureList;

/// Returns all registry fixtures for iteration.
///
/// Useful for running the same test across every schema.
pub fn all() -> FixtureList {
    vec![
        ("people", people),
        ("library", library),
        ("chain", chain),
        ("friends", friends),
    ]
}
