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

//! Hydrated nodes and relationships.
//!
//! Entities are built complete, once per query. There is no identity map:
//! the same stored node reached twice in one result yields two independent
//! [`Node`] values with the same [`Identity`], so a hydrated result is a
//! tree even when the stored data contains cycles.

use std::collections::{BTreeMap, BTreeSet};

use crate::collection::Collection;
use crate::json::ToJson;
use crate::relationship::{Direction, RelationshipDefinition};
use crate::value::{Identity, RecordValue};

/// A hydrated node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    model: String,
    identity: Identity,
    labels: Vec<String>,
    properties: BTreeMap<String, RecordValue>,
    hidden: BTreeSet<String>,
    eager: BTreeMap<String, EagerValue>,
}

impl Node {
    /// Create a node without eager-loaded children.
    pub fn new(
        model: impl Into<String>,
        identity: Identity,
        labels: Vec<String>,
        properties: BTreeMap<String, RecordValue>,
    ) -> Self {
        Self {
            model: model.into(),
            identity,
            labels,
            properties,
            hidden: BTreeSet::new(),
            eager: BTreeMap::new(),
        }
    }

    /// Property names to leave out of JSON output.
    pub fn with_hidden<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden.extend(names.into_iter().map(Into::into));
        self
    }

    /// Attach an eager-loaded relationship value.
    pub fn with_eager(mut self, name: impl Into<String>, value: EagerValue) -> Self {
        self.eager.insert(name.into(), value);
        self
    }

    /// Name of the resolved model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Store identity.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Labels as returned by the store, tenant label included.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Declared properties present in the record.
    pub fn properties(&self) -> &BTreeMap<String, RecordValue> {
        &self.properties
    }

    /// A single property.
    pub fn get(&self, name: &str) -> Option<&RecordValue> {
        self.properties.get(name)
    }

    /// All eager-loaded relationships.
    pub fn eager(&self) -> &BTreeMap<String, EagerValue> {
        &self.eager
    }

    /// One eager-loaded relationship.
    pub fn get_eager(&self, name: &str) -> Option<&EagerValue> {
        self.eager.get(name)
    }

    /// Lightweight handle to this node.
    pub fn node_ref(&self) -> NodeRef {
        NodeRef {
            model: self.model.clone(),
            identity: self.identity,
            labels: self.labels.clone(),
        }
    }
}

impl ToJson for Node {
    fn to_json(&self) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        out.insert("_id".to_string(), serde_json::Value::from(self.identity.get()));
        out.insert(
            "_labels".to_string(),
            serde_json::Value::from(self.labels.clone()),
        );
        for (name, value) in &self.properties {
            if !self.hidden.contains(name) {
                out.insert(name.clone(), value.to_json());
            }
        }
        for (name, value) in &self.eager {
            out.insert(name.clone(), value.to_json());
        }
        serde_json::Value::Object(out)
    }
}

/// Identity, model and labels of a node without its contents.
///
/// Used for the enclosing end of a hydrated relationship: the enclosing node
/// owns the relationship, so the relationship cannot own it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    /// Name of the resolved model.
    pub model: String,
    /// Store identity.
    pub identity: Identity,
    /// Labels as returned by the store.
    pub labels: Vec<String>,
}

/// One end of a hydrated relationship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint<'a> {
    /// The hydrated counterpart node.
    Node(&'a Node),
    /// The node through which the relationship was loaded.
    Enclosing(&'a NodeRef),
}

impl<'a> Endpoint<'a> {
    /// Store identity of this end.
    pub fn identity(&self) -> Identity {
        match self {
            Endpoint::Node(node) => node.identity(),
            Endpoint::Enclosing(node) => node.identity,
        }
    }

    /// Model name of this end.
    pub fn model(&self) -> &'a str {
        match self {
            Endpoint::Node(node) => node.model(),
            Endpoint::Enclosing(node) => &node.model,
        }
    }

    /// The hydrated node, if this is the counterpart end.
    pub fn as_node(&self) -> Option<&'a Node> {
        match self {
            Endpoint::Node(node) => Some(node),
            Endpoint::Enclosing(_) => None,
        }
    }
}

/// A hydrated relationship with its own properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    name: String,
    identity: Identity,
    edge_type: String,
    direction: Direction,
    node_alias: String,
    properties: BTreeMap<String, RecordValue>,
    this: NodeRef,
    other: Box<Node>,
}

impl Relationship {
    /// Create a relationship loaded through `this` towards `other`.
    ///
    /// Start and end follow the declared direction of `definition`: for an
    /// incoming relationship `other` is the start, for an outgoing one it is
    /// the end.
    pub fn new(
        definition: &RelationshipDefinition,
        identity: Identity,
        edge_type: impl Into<String>,
        properties: BTreeMap<String, RecordValue>,
        this: NodeRef,
        other: Node,
    ) -> Self {
        Self {
            name: definition.name.clone(),
            identity,
            edge_type: edge_type.into(),
            direction: definition.direction,
            node_alias: definition.node_alias.clone(),
            properties,
            this,
            other: Box::new(other),
        }
    }

    /// Name of the defining relationship.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store identity.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Runtime edge type returned by the store.
    pub fn edge_type(&self) -> &str {
        &self.edge_type
    }

    /// Declared direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Edge properties.
    pub fn properties(&self) -> &BTreeMap<String, RecordValue> {
        &self.properties
    }

    /// A single edge property.
    pub fn get(&self, name: &str) -> Option<&RecordValue> {
        self.properties.get(name)
    }

    /// Start node.
    pub fn start_node(&self) -> Endpoint<'_> {
        match self.direction {
            Direction::In => Endpoint::Node(&self.other),
            Direction::Out => Endpoint::Enclosing(&self.this),
        }
    }

    /// End node.
    pub fn end_node(&self) -> Endpoint<'_> {
        match self.direction {
            Direction::In => Endpoint::Enclosing(&self.this),
            Direction::Out => Endpoint::Node(&self.other),
        }
    }

    /// The hydrated counterpart node.
    pub fn other_node(&self) -> &Node {
        &self.other
    }
}

impl ToJson for Relationship {
    fn to_json(&self) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        out.insert("_id".to_string(), serde_json::Value::from(self.identity.get()));
        out.insert(
            "_type".to_string(),
            serde_json::Value::String(self.edge_type.clone()),
        );
        for (name, value) in &self.properties {
            out.insert(name.clone(), value.to_json());
        }
        out.insert(self.node_alias.clone(), self.other.to_json());
        serde_json::Value::Object(out)
    }
}

/// The hydrated value of one eager relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum EagerValue {
    /// Single counterpart node.
    Node(Box<Node>),
    /// All counterpart nodes.
    Nodes(Collection<Node>),
    /// Single relationship.
    Relationship(Box<Relationship>),
    /// All relationships.
    Relationships(Collection<Relationship>),
}

impl EagerValue {
    /// Try to get as a single node.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            EagerValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Try to get as a node collection.
    pub fn as_nodes(&self) -> Option<&Collection<Node>> {
        match self {
            EagerValue::Nodes(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// Try to get as a single relationship.
    pub fn as_relationship(&self) -> Option<&Relationship> {
        match self {
            EagerValue::Relationship(rel) => Some(rel),
            _ => None,
        }
    }

    /// Try to get as a relationship collection.
    pub fn as_relationships(&self) -> Option<&Collection<Relationship>> {
        match self {
            EagerValue::Relationships(rels) => Some(rels),
            _ => None,
        }
    }
}

impl ToJson for EagerValue {
    fn to_json(&self) -> serde_json::Value {
        match self {
            EagerValue::Node(node) => node.to_json(),
            EagerValue::Nodes(nodes) => nodes.to_json(),
            EagerValue::Relationship(rel) => rel.to_json(),
            EagerValue::Relationships(rels) => rels.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship::Cardinality;

    fn node(model: &str, id: i64) -> Node {
        let mut props = BTreeMap::new();
        props.insert("name".to_string(), RecordValue::from(format!("{}-{}", model, id)));
        Node::new(model, Identity(id), vec![model.to_string()], props)
    }

    fn definition(direction: Direction) -> RelationshipDefinition {
        RelationshipDefinition::new(
            "acted_in",
            Cardinality::OneEdge,
            "ACTED_IN",
            direction,
            "Movie",
        )
        .with_node_alias("movie")
    }

    #[test]
    fn test_outgoing_relationship_endpoints() {
        let this = node("Person", 3);
        let rel = Relationship::new(
            &definition(Direction::Out),
            Identity(11),
            "ACTED_IN",
            BTreeMap::new(),
            this.node_ref(),
            node("Movie", 7),
        );
        assert_eq!(rel.start_node().identity(), Identity(3));
        assert_eq!(rel.end_node().identity(), Identity(7));
        assert!(rel.start_node().as_node().is_none());
        assert_eq!(rel.end_node().model(), "Movie");
    }

    #[test]
    fn test_incoming_relationship_endpoints() {
        let this = node("Movie", 3);
        let rel = Relationship::new(
            &definition(Direction::In),
            Identity(11),
            "ACTED_IN",
            BTreeMap::new(),
            this.node_ref(),
            node("Person", 7),
        );
        assert_eq!(rel.start_node().identity(), Identity(7));
        assert_eq!(rel.end_node().identity(), Identity(3));
        assert_eq!(rel.other_node().identity(), Identity(7));
    }

    #[test]
    fn test_node_json_hides_hidden_properties() {
        let mut props = BTreeMap::new();
        props.insert("name".to_string(), RecordValue::from("Ann"));
        props.insert("password".to_string(), RecordValue::from("hunter2"));
        let n = Node::new("User", Identity(1), vec!["User".to_string()], props)
            .with_hidden(["password"]);

        let json = n.to_json();
        assert_eq!(json["_id"], 1);
        assert_eq!(json["name"], "Ann");
        assert!(json.get("password").is_none());
        assert!(n.get("password").is_some());
    }

    #[test]
    fn test_relationship_json_nests_counterpart_under_alias() {
        let this = node("Person", 3);
        let mut props = BTreeMap::new();
        props.insert("role".to_string(), RecordValue::from("Neo"));
        let rel = Relationship::new(
            &definition(Direction::Out),
            Identity(11),
            "ACTED_IN",
            props,
            this.node_ref(),
            node("Movie", 7),
        );
        let json = rel.to_json();
        assert_eq!(json["_type"], "ACTED_IN");
        assert_eq!(json["role"], "Neo");
        assert_eq!(json["movie"]["_id"], 7);
    }

    #[test]
    fn test_eager_value_accessors() {
        let value = EagerValue::Nodes(Collection::new(vec![node("Person", 1)]));
        assert!(value.as_node().is_none());
        assert_eq!(value.as_nodes().map(Collection::len), Some(1));
        assert_eq!(value.to_json()[0]["_id"], 1);
    }
}
