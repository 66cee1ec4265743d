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

//! Relationship definitions: typed, directed edges between models.

use serde::{Deserialize, Serialize};

use crate::property::PropertyDefinition;

/// Alias used for the counterpart node when none is declared.
pub const DEFAULT_NODE_ALIAS: &str = "node";

/// Traversal direction, seen from the model that declares the relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `(this)-[:EDGE]->(other)`
    #[serde(alias = "direction_out")]
    Out,
    /// `(this)<-[:EDGE]-(other)`
    #[serde(alias = "direction_in")]
    In,
}

/// What an eager load of the relationship yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// A single counterpart node.
    #[serde(rename = "node")]
    OneNode,
    /// All counterpart nodes.
    #[serde(rename = "nodes")]
    ManyNodes,
    /// A single relationship with its own properties.
    #[serde(rename = "relationship")]
    OneEdge,
    /// All relationships with their own properties.
    #[serde(rename = "relationships")]
    ManyEdges,
}

impl Cardinality {
    /// True when every match is collected rather than only the first.
    pub fn is_plural(self) -> bool {
        matches!(self, Cardinality::ManyNodes | Cardinality::ManyEdges)
    }

    /// True when the edge itself (and its properties) is hydrated.
    pub fn is_edge(self) -> bool {
        matches!(self, Cardinality::OneEdge | Cardinality::ManyEdges)
    }
}

/// One typed edge declared on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDefinition {
    /// Name, unique within the owning model. Also the key of the eager field.
    pub name: String,
    /// Graph edge label, e.g. `FRIENDS`.
    pub edge_label: String,
    /// Declared direction.
    pub direction: Direction,
    /// Declared cardinality.
    pub cardinality: Cardinality,
    /// Name of the target model.
    pub target: String,
    /// Key of the counterpart node inside an edge projection.
    pub node_alias: String,
    /// Edge properties, used for edge cardinalities.
    pub properties: Vec<PropertyDefinition>,
    /// Loaded with every query of the owning model.
    pub eager: bool,
}

impl RelationshipDefinition {
    /// Create a non-eager relationship with the default node alias.
    pub fn new(
        name: impl Into<String>,
        cardinality: Cardinality,
        edge_label: impl Into<String>,
        direction: Direction,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            edge_label: edge_label.into(),
            direction,
            cardinality,
            target: target.into(),
            node_alias: DEFAULT_NODE_ALIAS.to_string(),
            properties: Vec::new(),
            eager: false,
        }
    }

    /// Mark the relationship as eager.
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    /// Set the counterpart node alias.
    pub fn with_node_alias(mut self, alias: impl Into<String>) -> Self {
        self.node_alias = alias.into();
        self
    }

    /// Declare an edge property.
    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// Look up an edge property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// See [`Cardinality::is_plural`].
    pub fn is_plural(&self) -> bool {
        self.cardinality.is_plural()
    }

    /// See [`Cardinality::is_edge`].
    pub fn is_edge(&self) -> bool {
        self.cardinality.is_edge()
    }
}
