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

//! The model registry.
//!
//! Models are collected in a [`ModelRegistryBuilder`] and validated once by
//! [`ModelRegistryBuilder::build`]. The resulting [`ModelRegistry`] is
//! immutable: share it behind an `Arc` and read it from any thread.
//!
//! # Example
//!
//! ```
//! use ogma_core::{
//!     Cardinality, Direction, Model, ModelRegistry, PropertyDefinition, PropertyKind,
//!     RelationshipDefinition,
//! };
//!
//! let registry = ModelRegistry::builder()
//!     .register(
//!         Model::new("Person")
//!             .with_property(PropertyDefinition::new("name", PropertyKind::String))
//!             .with_relationship(
//!                 RelationshipDefinition::new(
//!                     "friends",
//!                     Cardinality::ManyNodes,
//!                     "FRIENDS",
//!                     Direction::Out,
//!                     "Person",
//!                 )
//!                 .eager(),
//!             ),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert!(registry.get("Person").is_ok());
//! assert!(registry.get_by_labels(&["Person"]).is_some());
//! ```

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::SchemaError;
use crate::model::{is_identifier, label_key, Model, RESERVED_KEYS};
use crate::property::PropertyDefinition;

/// Collects models before they are frozen into a [`ModelRegistry`].
#[derive(Debug, Clone, Default)]
pub struct ModelRegistryBuilder {
    models: Vec<Model>,
}

impl ModelRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model.
    pub fn register(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }

    /// Add several models.
    pub fn register_all(mut self, models: impl IntoIterator<Item = Model>) -> Self {
        self.models.extend(models);
        self
    }

    /// Register a copy of `base` under a new name, then apply `changes`.
    ///
    /// The copy is labelled with its own name unless `base` declared a custom
    /// label set, which is kept.
    pub fn extend<F>(self, base: &str, name: &str, changes: F) -> Result<Self, SchemaError>
    where
        F: FnOnce(Model) -> Model,
    {
        let original = self
            .models
            .iter()
            .find(|m| m.name == base)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownModel {
                name: base.to_string(),
                defined: self.models.iter().map(|m| m.name.clone()).collect(),
            })?;

        let mut copy = original;
        if copy.labels.len() == 1 && copy.labels[0] == copy.name {
            copy.labels = vec![name.to_string()];
        }
        copy.name = name.to_string();

        Ok(self.register(changes(copy)))
    }

    /// Validate all models and freeze the registry.
    pub fn build(self) -> Result<ModelRegistry, SchemaError> {
        let mut models = BTreeMap::new();
        let mut by_labels = BTreeMap::new();

        for model in self.models {
            validate_model(&model)?;

            match by_labels.entry(model.label_key()) {
                Entry::Vacant(slot) => {
                    slot.insert(model.name.clone());
                }
                Entry::Occupied(slot) => {
                    tracing::debug!(
                        model = %model.name,
                        resolves_to = %slot.get(),
                        "label set already registered; label lookups resolve to the earlier model"
                    );
                }
            }

            if models.contains_key(&model.name) {
                return Err(SchemaError::DuplicateModel(model.name));
            }
            models.insert(model.name.clone(), model);
        }

        for model in models.values() {
            for rel in &model.relationships {
                if !models.contains_key(&rel.target) {
                    tracing::warn!(
                        model = %model.name,
                        relationship = %rel.name,
                        target = %rel.target,
                        "relationship target is not a registered model; patterns traverse it unlabeled"
                    );
                }
            }
        }

        Ok(ModelRegistry { models, by_labels })
    }
}

fn validate_properties(owner: &str, properties: &[PropertyDefinition]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for prop in properties {
        if !is_identifier(&prop.name) {
            return Err(SchemaError::InvalidName(prop.name.clone()));
        }
        if RESERVED_KEYS.contains(&prop.name.as_str()) {
            return Err(SchemaError::NameCollision {
                owner: owner.to_string(),
                name: prop.name.clone(),
                other: "a reserved projection key".to_string(),
            });
        }
        if !seen.insert(prop.name.as_str()) {
            return Err(SchemaError::DuplicateProperty {
                owner: owner.to_string(),
                property: prop.name.clone(),
            });
        }
    }
    Ok(())
}

fn validate_model(model: &Model) -> Result<(), SchemaError> {
    if !is_identifier(&model.name) {
        return Err(SchemaError::InvalidName(model.name.clone()));
    }
    if model.labels.is_empty() {
        return Err(SchemaError::InvalidSchema {
            model: model.name.clone(),
            message: "a model needs at least one label".to_string(),
        });
    }
    validate_properties(&model.name, &model.properties)?;

    let mut seen = BTreeSet::new();
    for rel in &model.relationships {
        if !is_identifier(&rel.name) {
            return Err(SchemaError::InvalidName(rel.name.clone()));
        }
        if !seen.insert(rel.name.as_str()) {
            return Err(SchemaError::DuplicateRelationship {
                model: model.name.clone(),
                relationship: rel.name.clone(),
            });
        }
        if model.has_property(&rel.name) {
            return Err(SchemaError::NameCollision {
                owner: model.name.clone(),
                name: rel.name.clone(),
                other: "a property of the same name".to_string(),
            });
        }
        if RESERVED_KEYS.contains(&rel.name.as_str()) {
            return Err(SchemaError::NameCollision {
                owner: model.name.clone(),
                name: rel.name.clone(),
                other: "a reserved projection key".to_string(),
            });
        }

        // The counterpart alias shares a projection map with the edge properties
        let owner = format!("{}.{}", model.name, rel.name);
        if !is_identifier(&rel.node_alias) {
            return Err(SchemaError::InvalidName(rel.node_alias.clone()));
        }
        validate_properties(&owner, &rel.properties)?;
        if rel.property(&rel.node_alias).is_some()
            || RESERVED_KEYS.contains(&rel.node_alias.as_str())
        {
            return Err(SchemaError::NameCollision {
                owner,
                name: rel.node_alias.clone(),
                other: "an edge property or reserved projection key".to_string(),
            });
        }
    }

    Ok(())
}

/// Immutable set of registered models.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Model>,
    by_labels: BTreeMap<String, String>,
}

impl ModelRegistry {
    /// Start collecting models.
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::new()
    }

    /// Look up a model by name.
    pub fn get(&self, name: &str) -> Result<&Model, SchemaError> {
        self.models
            .get(name)
            .ok_or_else(|| SchemaError::UnknownModel {
                name: name.to_string(),
                defined: self.names().map(String::from).collect(),
            })
    }

    /// Look up a model by name, without an error.
    pub fn find(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Find the model whose label set equals `labels`, ignoring order.
    ///
    /// When several models share a label set, the first registered wins.
    pub fn get_by_labels<S: AsRef<str>>(&self, labels: &[S]) -> Option<&Model> {
        self.by_labels
            .get(&label_key(labels))
            .and_then(|name| self.models.get(name))
    }

    /// Whether a model is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered model names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Registered models, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if no models are registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
