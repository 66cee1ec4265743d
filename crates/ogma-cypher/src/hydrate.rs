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

//! Hydration of raw records into entities.
//!
//! Records come either from an eager projection (maps carrying
//! `__EAGER_ID__`, `__EAGER_LABELS__` and one key per loaded relationship)
//! or from a plain driver node. Only declared properties survive.

use ogma_core::{
    Cardinality, Collection, EagerValue, Identity, Model, ModelRegistry, Node, NodeRef,
    PropertyDefinition, RecordValue, Relationship, RelationshipDefinition, TenantScope,
};
use std::collections::BTreeMap;

use crate::config::EagerConfig;
use crate::eager::{plan, EagerPaths, EagerSelection, EAGER_ID, EAGER_LABELS, EAGER_TYPE};
use crate::error::{OgmaError, Result};
use crate::result::ResultSet;

type Fields = BTreeMap<String, RecordValue>;

/// Turns records into [`Node`] and [`Relationship`] values.
#[derive(Debug, Clone)]
pub struct Hydrator<'r> {
    registry: &'r ModelRegistry,
    tenant: TenantScope,
}

fn malformed(message: impl Into<String>) -> OgmaError {
    OgmaError::MalformedRecord(message.into())
}

fn identity(fields: &Fields, what: &str) -> Result<Identity> {
    match fields.get(EAGER_ID) {
        Some(RecordValue::Int(id)) => Ok(Identity(*id)),
        Some(other) => Err(malformed(format!(
            "{} has a {} {}, expected an integer",
            what,
            other.kind_name(),
            EAGER_ID
        ))),
        None => Err(malformed(format!("{} has no {}", what, EAGER_ID))),
    }
}

fn labels(fields: &Fields) -> Result<Vec<String>> {
    match fields.get(EAGER_LABELS) {
        None | Some(RecordValue::Null) => Ok(Vec::new()),
        Some(RecordValue::List(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| malformed(format!("{} holds a {}", EAGER_LABELS, item.kind_name())))
            })
            .collect(),
        Some(other) => Err(malformed(format!(
            "{} is a {}, expected a list",
            EAGER_LABELS,
            other.kind_name()
        ))),
    }
}

fn whitelist(fields: &Fields, declared: &[PropertyDefinition]) -> Fields {
    declared
        .iter()
        .filter_map(|p| {
            fields
                .get(&p.name)
                .map(|v| (p.name.clone(), v.clone().into_plain()))
        })
        .collect()
}

// A singular slot given a list takes its first element.
fn single(value: &RecordValue) -> Option<&RecordValue> {
    match value {
        RecordValue::List(items) => items.iter().find(|v| !v.is_null()),
        RecordValue::Null => None,
        other => Some(other),
    }
}

// A plural slot given a single value treats it as a one-element list.
fn many(value: &RecordValue) -> Vec<&RecordValue> {
    match value {
        RecordValue::List(items) => items.iter().filter(|v| !v.is_null()).collect(),
        RecordValue::Null => Vec::new(),
        other => vec![other],
    }
}

impl<'r> Hydrator<'r> {
    /// Create a hydrator recognising tenant labels with the configured
    /// prefix.
    pub fn new(registry: &'r ModelRegistry, config: &EagerConfig) -> Self {
        Self {
            registry,
            tenant: config.tenant_scope(),
        }
    }

    /// Hydrate one node record.
    ///
    /// The model is `hint` when given, otherwise the registered model whose
    /// labels equal the record's labels with tenant labels removed.
    pub fn hydrate_node(
        &self,
        record: &RecordValue,
        hint: Option<&Model>,
        requested: &EagerPaths,
    ) -> Result<Node> {
        match record {
            RecordValue::Map(fields) => {
                let identity = identity(fields, "node record")?;
                let labels = labels(fields)?;
                self.build_node(identity, labels, fields, true, hint, requested)
            }
            RecordValue::Node(node) => self.build_node(
                node.identity,
                node.labels.clone(),
                &node.properties,
                false,
                hint,
                requested,
            ),
            other => Err(malformed(format!(
                "expected a node record, found {}",
                other.kind_name()
            ))),
        }
    }

    fn build_node(
        &self,
        identity: Identity,
        labels: Vec<String>,
        fields: &Fields,
        projected: bool,
        hint: Option<&Model>,
        requested: &EagerPaths,
    ) -> Result<Node> {
        let model = self.resolve(&labels, hint)?;
        let properties = whitelist(fields, &model.properties);
        let hidden = model
            .properties
            .iter()
            .filter(|p| p.hidden)
            .map(|p| p.name.clone());

        let this = NodeRef {
            model: model.name.clone(),
            identity,
            labels: labels.clone(),
        };
        let mut node = Node::new(&model.name, identity, labels, properties).with_hidden(hidden);

        if projected {
            for selection in plan(model, requested) {
                let name = &selection.relationship.name;
                let value = match fields.get(name) {
                    None | Some(RecordValue::Null) => continue,
                    Some(value) => value,
                };
                if let Some(eager) = self.hydrate_eager(&selection, value, &this)? {
                    node = node.with_eager(name.clone(), eager);
                }
            }
        }

        tracing::trace!(model = %model.name, identity = %identity, "hydrated node");
        Ok(node)
    }

    fn resolve<'m>(&'m self, labels: &[String], hint: Option<&'m Model>) -> Result<&'m Model> {
        if let Some(model) = hint {
            return Ok(model);
        }
        let stripped = self.tenant.strip(labels);
        self.registry
            .get_by_labels(stripped.as_slice())
            .ok_or_else(|| OgmaError::Resolution {
                labels: stripped.iter().map(|l| l.to_string()).collect(),
            })
    }

    fn hydrate_eager(
        &self,
        selection: &EagerSelection<'_>,
        value: &RecordValue,
        this: &NodeRef,
    ) -> Result<Option<EagerValue>> {
        let rel = selection.relationship;
        let requested = &selection.requested;

        if !matches!(value, RecordValue::List(_) | RecordValue::Map(_) | RecordValue::Node(_)) {
            return Err(malformed(format!(
                "relationship '{}' holds a {}",
                rel.name,
                value.kind_name()
            )));
        }

        let eager = match rel.cardinality {
            Cardinality::OneNode => match single(value) {
                Some(record) => Some(EagerValue::Node(Box::new(
                    self.hydrate_node(record, None, requested)?,
                ))),
                None => None,
            },
            Cardinality::ManyNodes => Some(EagerValue::Nodes(
                many(value)
                    .into_iter()
                    .map(|record| self.hydrate_node(record, None, requested))
                    .collect::<Result<Collection<Node>>>()?,
            )),
            Cardinality::OneEdge => match single(value) {
                Some(record) => Some(EagerValue::Relationship(Box::new(
                    self.hydrate_relationship(rel, record, this, requested)?,
                ))),
                None => None,
            },
            Cardinality::ManyEdges => Some(EagerValue::Relationships(
                many(value)
                    .into_iter()
                    .map(|record| self.hydrate_relationship(rel, record, this, requested))
                    .collect::<Result<Collection<Relationship>>>()?,
            )),
        };
        Ok(eager)
    }

    /// Hydrate one edge record loaded through the node `this`.
    ///
    /// The far node is read from the record's `node_alias` key and resolved
    /// by its own labels.
    pub fn hydrate_relationship(
        &self,
        definition: &RelationshipDefinition,
        record: &RecordValue,
        this: &NodeRef,
        requested: &EagerPaths,
    ) -> Result<Relationship> {
        let fields = record.as_map().ok_or_else(|| {
            malformed(format!(
                "expected a relationship record for '{}', found {}",
                definition.name,
                record.kind_name()
            ))
        })?;

        let identity = identity(fields, "relationship record")?;
        let edge_type = fields
            .get(EAGER_TYPE)
            .and_then(RecordValue::as_str)
            .unwrap_or(&definition.edge_label)
            .to_string();
        let properties = whitelist(fields, &definition.properties);

        let other = match fields.get(&definition.node_alias) {
            None | Some(RecordValue::Null) => {
                return Err(malformed(format!(
                    "relationship '{}' has no '{}' node",
                    definition.name, definition.node_alias
                )))
            }
            Some(record) => self.hydrate_node(record, None, requested)?,
        };

        Ok(Relationship::new(
            definition,
            identity,
            edge_type,
            properties,
            this.clone(),
            other,
        ))
    }

    /// Hydrate column `alias` of every row.
    ///
    /// Rows where the column is null are skipped.
    pub fn hydrate(
        &self,
        result: &ResultSet,
        alias: &str,
        hint: Option<&str>,
        requested: &EagerPaths,
    ) -> Result<Collection<Node>> {
        let hint = hint.map(|name| self.registry.get(name)).transpose()?;
        let mut nodes = Vec::with_capacity(result.len());
        for row in result {
            match row.get(alias) {
                None => return Err(OgmaError::MissingColumn(alias.to_string())),
                Some(RecordValue::Null) => continue,
                Some(record) => nodes.push(self.hydrate_node(record, hint, requested)?),
            }
        }
        Ok(Collection::new(nodes))
    }

    /// Hydrate column `alias` of the first row only.
    pub fn hydrate_first(
        &self,
        result: &ResultSet,
        alias: &str,
        hint: Option<&str>,
        requested: &EagerPaths,
    ) -> Result<Option<Node>> {
        let hint = hint.map(|name| self.registry.get(name)).transpose()?;
        let row = match result.first() {
            Some(row) => row,
            None => return Ok(None),
        };
        match row.get(alias) {
            None => Err(OgmaError::MissingColumn(alias.to_string())),
            Some(RecordValue::Null) => Ok(None),
            Some(record) => self.hydrate_node(record, hint, requested).map(Some),
        }
    }
}
