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

//! Eager-loading Cypher generation and result hydration for OGMA.
//!
//! This crate provides functionality to:
//! - Build a single Cypher projection that loads a node together with its
//!   eager relationships, up to a fixed depth
//! - Hydrate the rows such a projection returns into typed entities
//! - Build read queries (by key, by identity, by properties, by distance)
//!   and run them through a caller-supplied [`QueryRunner`]
//!
//! # Mapping
//!
//! | Schema concept | Cypher representation |
//! |----------------|----------------------|
//! | Model | Node labels |
//! | Identity | `__EAGER_ID__: id(n)` |
//! | Labels | `__EAGER_LABELS__: labels(n)` |
//! | `node` / `nodes` relationship | Pattern comprehension over the far node |
//! | `relationship` / `relationships` | Pattern comprehension over the edge, far node nested under its alias |
//! | Singular cardinality | Element `[0]` of the comprehension |
//! | Tenant | `cid_<customer>` label on every matched node |
//!
//! # Example
//!
//! ```rust
//! use ogma_core::{Cardinality, Direction, Model, ModelRegistry, PropertyDefinition, PropertyKind,
//!     RelationshipDefinition};
//! use ogma_cypher::{EagerConfig, EagerPaths, Hydrator, PatternBuilder, ResultSet};
//!
//! fn example() -> Result<(), ogma_cypher::OgmaError> {
//!     let registry = ModelRegistry::builder()
//!         .register(
//!             Model::new("Person")
//!                 .with_property(PropertyDefinition::new("name", PropertyKind::String))
//!                 .with_relationship(
//!                     RelationshipDefinition::new("friends", Cardinality::ManyNodes, "FRIENDS", Direction::Out, "Person")
//!                         .eager(),
//!                 ),
//!         )
//!         .build()?;
//!     let config = EagerConfig::default();
//!
//!     let pattern = PatternBuilder::new(&registry, &config).build("Person", &EagerPaths::none())?;
//!     println!("MATCH (this:Person) RETURN {}", pattern);
//!
//!     let rows = ResultSet::from_json(
//!         r#"[{"this": {"name": "Ann", "__EAGER_ID__": 1, "__EAGER_LABELS__": ["Person"],
//!              "friends": [{"name": "Bo", "__EAGER_ID__": 2, "__EAGER_LABELS__": ["Person"]}]}}]"#,
//!     )?;
//!     let people = Hydrator::new(&registry, &config).hydrate(&rows, "this", None, &EagerPaths::none())?;
//!     assert_eq!(people.len(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod cypher;
pub mod eager;
pub mod error;
pub mod hydrate;
pub mod result;
pub mod runner;
pub mod services;

pub use config::{EagerConfig, EagerConfigBuilder, TruncationPolicy, DEFAULT_ROOT_ALIAS};
pub use cypher::{AccessMode, CypherStatement, CypherValue, Order, QueryBuilder, Traversal};
pub use eager::pattern::PatternBuilder;
pub use eager::{plan, EagerPaths, EagerSelection, MAX_EAGER_DEPTH};
pub use error::{OgmaError, Result};
pub use hydrate::Hydrator;
pub use result::{ResultSet, Row};
pub use runner::QueryRunner;
pub use services::{FindOptions, Finder, Point, ReadQuery};
