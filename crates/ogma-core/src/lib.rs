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

//! Schema model and entity types for the OGMA object-graph mapper.
//!
//! This crate holds everything the eager-loading core reads or produces,
//! without any query language knowledge:
//!
//! - [`Model`], [`PropertyDefinition`] and [`RelationshipDefinition`]: the
//!   declarative schema of node types and their typed, directed edges
//! - [`ModelRegistry`]: an immutable, validated set of models, resolved by
//!   name or by label set
//! - [`schema`]: JSON schema documents and model directories
//! - [`TenantScope`]: customer-scoped labels
//! - [`RecordValue`]: raw, self-describing values from result rows
//! - [`Node`], [`Relationship`] and [`Collection`]: hydrated entities
//!
//! Query generation and hydration live in `ogma-cypher`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod collection;
mod entity;
mod error;
mod json;
mod model;
mod property;
mod registry;
mod relationship;
pub mod schema;
mod tenant;
mod value;

pub use collection::Collection;
pub use entity::{EagerValue, Endpoint, Node, NodeRef, Relationship};
pub use error::SchemaError;
pub use json::ToJson;
pub use model::{
    is_identifier, label_key, Model, EAGER_ID, EAGER_LABELS, EAGER_TYPE, RESERVED_KEYS,
};
pub use property::{PropertyDefinition, PropertyKind};
pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use relationship::{Cardinality, Direction, RelationshipDefinition, DEFAULT_NODE_ALIAS};
pub use tenant::{TenantScope, DEFAULT_TENANT_PREFIX};
pub use value::{Identity, RecordValue, StoreNode, StoreRelationship};
