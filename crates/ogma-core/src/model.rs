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

//! Entity types (models).

use serde::{Deserialize, Serialize};

use crate::property::PropertyDefinition;
use crate::relationship::RelationshipDefinition;

/// Projection key carrying the store-assigned identity.
pub const EAGER_ID: &str = "__EAGER_ID__";
/// Projection key carrying the store-assigned label set.
pub const EAGER_LABELS: &str = "__EAGER_LABELS__";
/// Projection key carrying the runtime edge type.
pub const EAGER_TYPE: &str = "__EAGER_TYPE__";

/// Keys the eager projection reserves for itself.
pub const RESERVED_KEYS: [&str; 3] = [EAGER_ID, EAGER_LABELS, EAGER_TYPE];

/// Schema definition of one node type.
///
/// Properties and relationships keep their declaration order; eager patterns
/// and hydration both walk them in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name, unique within a registry.
    pub name: String,
    /// Labels a node of this model carries. Defaults to `[name]`.
    pub labels: Vec<String>,
    /// Declared properties.
    pub properties: Vec<PropertyDefinition>,
    /// Declared relationships.
    pub relationships: Vec<RelationshipDefinition>,
}

impl Model {
    /// Create an empty model labelled with its own name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            labels: vec![name.clone()],
            name,
            properties: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Replace the label set.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Declare a property.
    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// Declare a relationship.
    pub fn with_relationship(mut self, relationship: RelationshipDefinition) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Relationships flagged eager, in declaration order.
    ///
    /// Returns a fresh list on every call; callers may extend it freely.
    pub fn eager(&self) -> Vec<&RelationshipDefinition> {
        self.relationships.iter().filter(|r| r.eager).collect()
    }

    /// Look up a relationship by name.
    pub fn relationship(&self, name: &str) -> Option<&RelationshipDefinition> {
        self.relationships.iter().find(|r| r.name == name)
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether a property is declared.
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Name of the primary key property.
    ///
    /// The property flagged `primary`, otherwise `<lowercased name>_id`.
    pub fn primary_key(&self) -> String {
        self.properties
            .iter()
            .find(|p| p.primary)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("{}_id", self.name.to_lowercase()))
    }

    /// Order-insensitive key of the label set, used for label resolution.
    pub fn label_key(&self) -> String {
        label_key(self.labels.as_slice())
    }
}

/// Canonical key of a label set: sorted, deduplicated, colon-joined.
pub fn label_key<S: AsRef<str>>(labels: &[S]) -> String {
    let mut sorted: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.join(":")
}

/// Valid names start with a letter or underscore and contain only
/// letters, digits and underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyKind;
    use crate::relationship::{Cardinality, Direction};

    fn person() -> Model {
        Model::new("Person")
            .with_property(PropertyDefinition::new("name", PropertyKind::String))
            .with_relationship(
                RelationshipDefinition::new(
                    "friends",
                    Cardinality::ManyNodes,
                    "FRIENDS",
                    Direction::Out,
                    "Person",
                )
                .eager(),
            )
            .with_relationship(RelationshipDefinition::new(
                "employer",
                Cardinality::OneNode,
                "WORKS_AT",
                Direction::Out,
                "Company",
            ))
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(Model::new("Person").labels, vec!["Person".to_string()]);
    }

    #[test]
    fn test_eager_returns_fresh_list() {
        let model = person();
        let mut first = model.eager();
        if let Some(extra) = model.relationship("employer") {
            first.push(extra);
        }
        assert_eq!(first.len(), 2);
        assert_eq!(model.eager().len(), 1);
        assert_eq!(model.eager()[0].name, "friends");
    }

    #[test]
    fn test_primary_key_fallback() {
        let model = person();
        assert_eq!(model.primary_key(), "person_id");

        let keyed = Model::new("Movie")
            .with_property(PropertyDefinition::new("imdb", PropertyKind::String).primary());
        assert_eq!(keyed.primary_key(), "imdb");
    }

    #[test]
    fn test_label_key_is_order_insensitive() {
        assert_eq!(label_key(&["B", "A"]), label_key(&["A", "B", "A"]));
        let model = Model::new("Admin").with_labels(["User", "Admin"]);
        assert_eq!(model.label_key(), "Admin:User");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("friends"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("acted_in2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("has-dash"));
        assert!(!is_identifier("dot.path"));
    }
}
