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

//! Eager projection patterns.
//!
//! A node pattern is a map projection returning the node's own properties,
//! its identity and labels, plus one pattern comprehension per selected
//! relationship:
//!
//! ```text
//! this { .*, __EAGER_ID__: id(this), __EAGER_LABELS__: labels(this),
//!   friends: [ (this)-[this_friends_rel:FRIENDS]->(this_friends_node:Person)
//!              | this_friends_node { ... } ] }
//! ```
//!
//! Singular relationships take element `[0]` of their comprehension.

use ogma_core::{Model, ModelRegistry, RelationshipDefinition};

use super::{
    child_variables, plan, EagerPaths, EagerSelection, EAGER_ID, EAGER_LABELS, EAGER_TYPE,
    MAX_EAGER_DEPTH,
};
use crate::config::{EagerConfig, TruncationPolicy};
use crate::cypher::{escape_identifier, validate_variable, Traversal};
use crate::error::{OgmaError, Result};

/// Builds eager projection patterns against a registry.
#[derive(Debug, Clone)]
pub struct PatternBuilder<'r> {
    registry: &'r ModelRegistry,
    config: &'r EagerConfig,
    tenant_label: Option<String>,
}

impl<'r> PatternBuilder<'r> {
    /// Create a builder without tenant scoping.
    pub fn new(registry: &'r ModelRegistry, config: &'r EagerConfig) -> Self {
        Self {
            registry,
            config,
            tenant_label: None,
        }
    }

    /// Constrain every traversed node to the tenant label of `customer_id`.
    pub fn for_tenant(mut self, customer_id: &str) -> Self {
        self.tenant_label = Some(self.config.tenant_scope().label(customer_id));
        self
    }

    /// The tenant label in effect, if any.
    pub fn tenant_label(&self) -> Option<&str> {
        self.tenant_label.as_deref()
    }

    /// Pattern for the root node of `model`, bound to the configured root
    /// alias.
    ///
    /// ```
    /// # use ogma_core::{Model, ModelRegistry, PropertyDefinition, PropertyKind};
    /// # use ogma_cypher::{EagerConfig, EagerPaths, PatternBuilder};
    /// let registry = ModelRegistry::builder()
    ///     .register(Model::new("Person").with_property(PropertyDefinition::new("name", PropertyKind::String)))
    ///     .build()?;
    /// let config = EagerConfig::default();
    /// let pattern = PatternBuilder::new(&registry, &config).build("Person", &EagerPaths::none())?;
    /// assert_eq!(pattern, "this { .*, __EAGER_ID__: id(this), __EAGER_LABELS__: labels(this) }");
    /// # Ok::<(), ogma_cypher::OgmaError>(())
    /// ```
    pub fn build(&self, model: &str, requested: &EagerPaths) -> Result<String> {
        let model = self.registry.get(model)?;
        let alias = validate_variable(&self.config.root_alias)?;
        self.node_pattern(1, alias, Some(model), requested)
    }

    /// Pattern for a node bound to `alias` at `depth`.
    ///
    /// Without a model only the node's own fields are projected.
    pub fn node_pattern(
        &self,
        depth: usize,
        alias: &str,
        model: Option<&Model>,
        requested: &EagerPaths,
    ) -> Result<String> {
        let mut entries = vec![
            ".*".to_string(),
            format!("{}: id({})", EAGER_ID, alias),
            format!("{}: labels({})", EAGER_LABELS, alias),
        ];

        match model {
            Some(model) if depth <= MAX_EAGER_DEPTH => {
                for selection in plan(model, requested) {
                    entries.push(self.relationship_entry(depth, alias, &selection)?);
                }
            }
            Some(_) => self.truncate(alias, requested)?,
            None if !requested.is_empty() => {
                tracing::debug!(alias, paths = %requested, "untyped node; requested paths dropped");
            }
            None => {}
        }

        Ok(self.render(alias, &entries, depth))
    }

    /// Pattern for an edge bound to `alias` at `depth`, with its far node
    /// bound to `node_variable` at `depth + 1`.
    pub fn relationship_pattern(
        &self,
        depth: usize,
        alias: &str,
        definition: &RelationshipDefinition,
        node_variable: &str,
        target: Option<&Model>,
        requested: &EagerPaths,
    ) -> Result<String> {
        let node = self.node_pattern(depth + 1, node_variable, target, requested)?;
        let entries = vec![
            ".*".to_string(),
            format!("{}: id({})", EAGER_ID, alias),
            format!("{}: type({})", EAGER_TYPE, alias),
            format!("{}: {}", escape_identifier(&definition.node_alias), node),
        ];
        Ok(self.render(alias, &entries, depth))
    }

    fn relationship_entry(
        &self,
        depth: usize,
        alias: &str,
        selection: &EagerSelection<'_>,
    ) -> Result<String> {
        let rel = selection.relationship;
        let (rel_variable, node_variable) = child_variables(alias, &rel.name);

        let target = self.registry.find(&rel.target);
        if target.is_none() {
            tracing::debug!(relationship = %rel.name, target = %rel.target, "unresolved target; loading untyped nodes");
        }

        let mut target_labels = target.map(|m| m.labels.clone()).unwrap_or_default();
        let mut start_labels = Vec::new();
        if let Some(tenant) = &self.tenant_label {
            target_labels.push(tenant.clone());
            start_labels.push(tenant.clone());
        }

        let traversal = Traversal::start(alias, &start_labels)
            .relationship(&rel.edge_label, rel.direction, &rel_variable)
            .to(&node_variable, &target_labels);

        let fields = if rel.is_edge() {
            self.relationship_pattern(
                depth + 1,
                &rel_variable,
                rel,
                &node_variable,
                target,
                &selection.requested,
            )?
        } else {
            self.node_pattern(depth + 1, &node_variable, target, &selection.requested)?
        };

        let entry = format!(
            "{}: [ {} | {} ]",
            escape_identifier(&rel.name),
            traversal.pattern(),
            fields
        );
        Ok(if rel.is_plural() {
            entry
        } else {
            format!("{}[0]", entry)
        })
    }

    fn truncate(&self, alias: &str, requested: &EagerPaths) -> Result<()> {
        if requested.is_empty() {
            return Ok(());
        }
        match self.config.truncation {
            TruncationPolicy::Silent => {
                tracing::debug!(alias, paths = %requested, "eager paths truncated at depth cap");
                Ok(())
            }
            TruncationPolicy::Warn => {
                tracing::warn!(alias, paths = %requested, max_depth = MAX_EAGER_DEPTH, "eager paths truncated at depth cap");
                Ok(())
            }
            TruncationPolicy::Reject => Err(OgmaError::DepthExceeded {
                alias: alias.to_string(),
                paths: requested.iter().map(String::from).collect(),
                max_depth: MAX_EAGER_DEPTH,
            }),
        }
    }

    fn render(&self, alias: &str, entries: &[String], depth: usize) -> String {
        if !self.config.pretty {
            return format!("{} {{ {} }}", alias, entries.join(", "));
        }
        let depth = depth.max(1);
        let inner = "  ".repeat(2 * depth - 1);
        let close = "  ".repeat(2 * depth - 2);
        format!(
            "{} {{\n{}{}\n{}}}",
            alias,
            inner,
            entries.join(&format!(",\n{}", inner)),
            close
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogma_core::{Cardinality, Direction, PropertyDefinition, PropertyKind};

    fn registry() -> ModelRegistry {
        ModelRegistry::builder()
            .register(
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
                    .with_relationship(
                        RelationshipDefinition::new(
                            "reviews",
                            Cardinality::ManyEdges,
                            "REVIEWED",
                            Direction::Out,
                            "Movie",
                        )
                        .with_node_alias("movie")
                        .with_property(PropertyDefinition::new("stars", PropertyKind::Integer)),
                    )
                    .with_relationship(RelationshipDefinition::new(
                        "pet",
                        Cardinality::OneNode,
                        "OWNS",
                        Direction::Out,
                        "Pet",
                    )),
            )
            .register(Model::new("Company"))
            .register(Model::new("Movie"))
            .build()
            .unwrap()
    }

    const PERSON_FIELDS: &str = ".*, __EAGER_ID__: id(this), __EAGER_LABELS__: labels(this)";

    #[test]
    fn test_root_without_relationships() {
        let registry = registry();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);
        let pattern = builder.build("Company", &EagerPaths::none()).unwrap();
        assert_eq!(
            pattern,
            "this { .*, __EAGER_ID__: id(this), __EAGER_LABELS__: labels(this) }"
        );
    }

    #[test]
    fn test_singular_relationship_takes_first_element() {
        let registry = registry();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);
        let person = registry.get("Person").unwrap();
        let pattern = builder
            .node_pattern(3, "this", Some(person), &EagerPaths::new(["employer"]))
            .unwrap();
        let expected = format!(
            "this {{ {}, friends: [ (this)-[this_friends_rel:FRIENDS]->(this_friends_node:Person) | this_friends_node {{ .*, __EAGER_ID__: id(this_friends_node), __EAGER_LABELS__: labels(this_friends_node) }} ], employer: [ (this)-[this_employer_rel:WORKS_AT]->(this_employer_node:Company) | this_employer_node {{ .*, __EAGER_ID__: id(this_employer_node), __EAGER_LABELS__: labels(this_employer_node) }} ][0] }}",
            PERSON_FIELDS
        );
        assert_eq!(pattern, expected);
    }

    #[test]
    fn test_edge_pattern_nests_node_alias() {
        let registry = registry();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);
        let pattern = builder
            .build("Person", &EagerPaths::new(["reviews"]))
            .unwrap();
        assert!(pattern.contains(
            "reviews: [ (this)-[this_reviews_rel:REVIEWED]->(this_reviews_node:Movie) | this_reviews_rel { .*, __EAGER_ID__: id(this_reviews_rel), __EAGER_TYPE__: type(this_reviews_rel), movie: this_reviews_node { .*, __EAGER_ID__: id(this_reviews_node), __EAGER_LABELS__: labels(this_reviews_node) } } ]"
        ));
    }

    #[test]
    fn test_unresolved_target_is_untyped() {
        let registry = registry();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);
        let pattern = builder
            .build("Person", &EagerPaths::new(["pet.toys"]))
            .unwrap();
        assert!(pattern.contains(
            "pet: [ (this)-[this_pet_rel:OWNS]->(this_pet_node) | this_pet_node { .*, __EAGER_ID__: id(this_pet_node), __EAGER_LABELS__: labels(this_pet_node) } ][0]"
        ));
    }

    #[test]
    fn test_tenant_labels_on_traversals() {
        let registry = registry();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config).for_tenant("acme-1");
        assert_eq!(builder.tenant_label(), Some("cid_acme_1"));
        let pattern = builder.build("Person", &EagerPaths::none()).unwrap();
        assert!(pattern.contains(
            "(this:cid_acme_1)-[this_friends_rel:FRIENDS]->(this_friends_node:Person:cid_acme_1)"
        ));
    }

    #[test]
    fn test_reject_policy_reports_truncated_paths() {
        let registry = registry();
        let config = EagerConfig::default().with_truncation(TruncationPolicy::Reject);
        let builder = PatternBuilder::new(&registry, &config);
        let err = builder
            .build("Person", &EagerPaths::new(["friends.friends.friends.employer"]))
            .unwrap_err();
        match err {
            OgmaError::DepthExceeded {
                alias,
                paths,
                max_depth,
            } => {
                assert_eq!(
                    alias,
                    "this_friends_node_friends_node_friends_node"
                );
                assert_eq!(paths, vec!["employer".to_string()]);
                assert_eq!(max_depth, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_schema_eager_truncation_never_rejects() {
        let registry = registry();
        let config = EagerConfig::default().with_truncation(TruncationPolicy::Reject);
        let builder = PatternBuilder::new(&registry, &config);
        assert!(builder.build("Person", &EagerPaths::none()).is_ok());
    }

    #[test]
    fn test_invalid_root_alias() {
        let registry = registry();
        let config = EagerConfig::default().with_root_alias("match");
        let builder = PatternBuilder::new(&registry, &config);
        assert!(matches!(
            builder.build("Person", &EagerPaths::none()),
            Err(OgmaError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_unknown_model() {
        let registry = registry();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);
        assert!(matches!(
            builder.build("Ghost", &EagerPaths::none()),
            Err(OgmaError::Schema(_))
        ));
    }

    #[test]
    fn test_pretty_rendering() {
        let registry = registry();
        let config = EagerConfig::default().with_pretty(true);
        let builder = PatternBuilder::new(&registry, &config);
        let company = registry.get("Company").unwrap();
        let pattern = builder
            .node_pattern(1, "this", Some(company), &EagerPaths::none())
            .unwrap();
        assert_eq!(
            pattern,
            "this {\n  .*,\n  __EAGER_ID__: id(this),\n  __EAGER_LABELS__: labels(this)\n}"
        );
    }
}
