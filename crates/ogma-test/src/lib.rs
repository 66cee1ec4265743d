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

//! Shared test fixtures and utilities for OGMA.
//!
//! This crate provides canonical schemas, registries, records and error
//! cases so the pattern builder, the hydrator and the CLI are tested against
//! the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use ogma_test::fixtures;
//!
//! // Pre-built registries
//! let people = fixtures::people();
//! let library = fixtures::library();
//!
//! // Records shaped like eager projection output
//! let ann = fixtures::ann_and_bo();
//!
//! // Custom records
//! use ogma_test::fixtures::builders::NodeRecord;
//!
//! let record = NodeRecord::new(9, &["Person"])
//!     .property("name", "Cy")
//!     .build();
//!
//! // Error cases
//! for (name, json) in fixtures::errors::invalid_schemas() {
//!     assert!(ogma_core::schema::models_from_str(json).is_err(), "{}", name);
//! }
//! ```

use ogma_core::ModelRegistry;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> ModelRegistry)>;

/// Canonical test fixtures.
pub mod fixtures;

/// Counting utilities.
pub mod counts;

pub use counts::{count_comprehensions, count_nodes, tree_depth};
