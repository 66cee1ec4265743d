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

//! Builders for records shaped like eager projection output.

use ogma_core::{RecordValue, EAGER_ID, EAGER_LABELS, EAGER_TYPE};
use std::collections::BTreeMap;

/// Builder for a node record as an eager node pattern returns it.
///
/// # Examples
///
/// ```
/// use ogma_test::fixtures::builders::NodeRecord;
/// use ogma_core::RecordValue;
///
/// let record = NodeRecord::new(1, &["Person"])
///     .property("name", "Ann")
///     .many("friends", vec![NodeRecord::new(2, &["Person"]).property("name", "Bo")])
///     .build();
///
/// let fields = record.as_map().unwrap();
/// assert_eq!(fields["__EAGER_ID__"], RecordValue::Int(1));
/// assert_eq!(fields["friends"].as_list().map(|l| l.len()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct NodeRecord {
    fields: BTreeMap<String, RecordValue>,
}

impl NodeRecord {
    /// Start a record with identity and labels.
    pub fn new<S: AsRef<str>>(id: i64, labels: &[S]) -> Self {
        let labels = labels
            .iter()
            .map(|l| RecordValue::String(l.as_ref().to_string()))
            .collect();
        let mut fields = BTreeMap::new();
        fields.insert(EAGER_ID.to_string(), RecordValue::Int(id));
        fields.insert(EAGER_LABELS.to_string(), RecordValue::List(labels));
        Self { fields }
    }

    /// Set a property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a relationship field to a raw value.
    pub fn raw(mut self, name: impl Into<String>, value: RecordValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Set a singular node relationship.
    pub fn one(self, name: impl Into<String>, node: NodeRecord) -> Self {
        self.raw(name, node.build())
    }

    /// Set a plural node relationship.
    pub fn many(self, name: impl Into<String>, nodes: Vec<NodeRecord>) -> Self {
        self.raw(
            name,
            RecordValue::List(nodes.into_iter().map(NodeRecord::build).collect()),
        )
    }

    /// Set a singular edge relationship.
    pub fn edge(self, name: impl Into<String>, edge: EdgeRecord) -> Self {
        self.raw(name, edge.build())
    }

    /// Set a plural edge relationship.
    pub fn edges(self, name: impl Into<String>, edges: Vec<EdgeRecord>) -> Self {
        self.raw(
            name,
            RecordValue::List(edges.into_iter().map(EdgeRecord::build).collect()),
        )
    }

    /// Remove a field, e.g. to build a malformed record.
    pub fn without(mut self, name: &str) -> Self {
        self.fields.remove(name);
        self
    }

    /// Build the record.
    pub fn build(self) -> RecordValue {
        RecordValue::Map(self.fields)
    }
}

impl From<NodeRecord> for RecordValue {
    fn from(record: NodeRecord) -> Self {
        record.build()
    }
}

/// Builder for an edge record as an eager relationship pattern returns it.
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    fields: BTreeMap<String, RecordValue>,
}

impl EdgeRecord {
    /// Start a record with identity and runtime type.
    pub fn new(id: i64, edge_type: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(EAGER_ID.to_string(), RecordValue::Int(id));
        fields.insert(EAGER_TYPE.to_string(), RecordValue::from(edge_type));
        Self { fields }
    }

    /// Set a property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the far node under its alias.
    pub fn node(mut self, alias: impl Into<String>, node: NodeRecord) -> Self {
        self.fields.insert(alias.into(), node.build());
        self
    }

    /// Build the record.
    pub fn build(self) -> RecordValue {
        RecordValue::Map(self.fields)
    }
}

impl From<EdgeRecord> for RecordValue {
    fn from(record: EdgeRecord) -> Self {
        record.build()
    }
}
