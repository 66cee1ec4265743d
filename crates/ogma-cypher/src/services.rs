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

//! Read services.
//!
//! A [`Finder`] turns a lookup into a [`ReadQuery`]: a statement whose
//! `RETURN` is the eager pattern of the model, plus everything needed to
//! hydrate its rows afterwards.

use ogma_core::{Collection, Model, ModelRegistry, Node};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::EagerConfig;
use crate::cypher::{validate_variable, CypherStatement, CypherValue, Order, QueryBuilder};
use crate::eager::pattern::PatternBuilder;
use crate::eager::EagerPaths;
use crate::error::{OgmaError, Result};
use crate::hydrate::Hydrator;
use crate::runner::QueryRunner;

/// A spatial point, sent as a parameter map to `point()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Point {
    /// Cartesian coordinates.
    Cartesian {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// Optional Z coordinate.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        z: Option<f64>,
    },
    /// WGS-84 coordinates.
    Geographic {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
        /// Optional height in metres.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
}

impl Point {
    /// A 2D cartesian point.
    pub fn cartesian(x: f64, y: f64) -> Self {
        Point::Cartesian { x, y, z: None }
    }

    /// A 2D geographic point.
    pub fn geographic(latitude: f64, longitude: f64) -> Self {
        Point::Geographic {
            latitude,
            longitude,
            height: None,
        }
    }

    /// Add the third dimension: `z` for cartesian points, `height` for
    /// geographic ones.
    pub fn with_elevation(self, value: f64) -> Self {
        match self {
            Point::Cartesian { x, y, .. } => Point::Cartesian { x, y, z: Some(value) },
            Point::Geographic {
                latitude,
                longitude,
                ..
            } => Point::Geographic {
                latitude,
                longitude,
                height: Some(value),
            },
        }
    }

    /// Parameter map for `point()`.
    pub fn to_value(&self) -> CypherValue {
        let mut map = BTreeMap::new();
        let mut put = |key: &str, value: Option<f64>| {
            if let Some(value) = value {
                map.insert(key.to_string(), CypherValue::Float(value));
            }
        };
        match *self {
            Point::Cartesian { x, y, z } => {
                put("x", Some(x));
                put("y", Some(y));
                put("z", z);
            }
            Point::Geographic {
                latitude,
                longitude,
                height,
            } => {
                put("latitude", Some(latitude));
                put("longitude", Some(longitude));
                put("height", height);
            }
        }
        CypherValue::Map(map)
    }
}

/// Filters, ordering, paging and eager paths for [`Finder::all`] and
/// [`Finder::find_within_distance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    /// Property equality filters.
    pub properties: BTreeMap<String, CypherValue>,
    /// Sort keys, in priority order.
    pub order: Vec<(String, Order)>,
    /// Rows to skip.
    pub skip: Option<u64>,
    /// Maximum rows.
    pub limit: Option<u64>,
    /// Extra relationships to load.
    pub eager: EagerPaths,
    /// Customer id scoping the query.
    pub tenant: Option<String>,
}

impl FindOptions {
    /// No filters, no paging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a property value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<CypherValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Append a sort key.
    pub fn order_by(mut self, property: impl Into<String>, order: Order) -> Self {
        self.order.push((property.into(), order));
        self
    }

    /// Skip rows.
    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    /// Limit rows.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Load extra relationship paths.
    pub fn with_eager(mut self, eager: EagerPaths) -> Self {
        self.eager = eager;
        self
    }

    /// Scope to a customer.
    pub fn for_tenant(mut self, customer_id: impl Into<String>) -> Self {
        self.tenant = Some(customer_id.into());
        self
    }
}

/// A read statement together with how to hydrate its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadQuery {
    /// The statement.
    pub statement: CypherStatement,
    /// Column holding the root nodes.
    pub alias: String,
    /// Model of the root nodes.
    pub model: String,
    /// Extra relationship paths the projection loads.
    pub eager: EagerPaths,
    /// Whether at most one node is expected.
    pub single: bool,
}

impl ReadQuery {
    /// Run the statement and hydrate every row.
    pub fn fetch<R>(&self, runner: &R, hydrator: &Hydrator<'_>) -> Result<Collection<Node>>
    where
        R: QueryRunner + ?Sized,
    {
        let rows = runner.run(&self.statement)?;
        hydrator.hydrate(&rows, &self.alias, Some(&self.model), &self.eager)
    }

    /// Run the statement and hydrate the first row.
    pub fn fetch_first<R>(&self, runner: &R, hydrator: &Hydrator<'_>) -> Result<Option<Node>>
    where
        R: QueryRunner + ?Sized,
    {
        let rows = runner.run(&self.statement)?;
        hydrator.hydrate_first(&rows, &self.alias, Some(&self.model), &self.eager)
    }
}

/// Builds read queries for registered models.
///
/// ```
/// # use ogma_core::{Model, ModelRegistry, PropertyDefinition, PropertyKind};
/// # use ogma_cypher::{EagerConfig, Finder};
/// let registry = ModelRegistry::builder()
///     .register(Model::new("Person").with_property(PropertyDefinition::new("person_id", PropertyKind::Uuid).primary()))
///     .build()?;
/// let config = EagerConfig::default();
/// let query = Finder::new(&registry, &config).find("Person", "a1", None)?;
/// assert!(query.statement.query.starts_with("MATCH (this:Person)\nWHERE this.person_id = $this_person_id\n"));
/// assert!(query.single);
/// # Ok::<(), ogma_cypher::OgmaError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Finder<'r> {
    registry: &'r ModelRegistry,
    config: &'r EagerConfig,
}

impl<'r> Finder<'r> {
    /// Create a finder.
    pub fn new(registry: &'r ModelRegistry, config: &'r EagerConfig) -> Self {
        Self { registry, config }
    }

    /// Find by primary key.
    pub fn find(
        &self,
        model: &str,
        key: impl Into<CypherValue>,
        tenant: Option<&str>,
    ) -> Result<ReadQuery> {
        let (model, alias, builder) = self.start(model, tenant)?;
        let builder = builder.where_eq(alias, &model.primary_key(), key).limit(1);
        self.finish(model, alias, builder, &EagerPaths::none(), tenant, true)
    }

    /// Find by internal node identity.
    pub fn find_by_id(&self, model: &str, id: i64, tenant: Option<&str>) -> Result<ReadQuery> {
        let (model, alias, builder) = self.start(model, tenant)?;
        let builder = builder.where_id(alias, id).limit(1);
        self.finish(model, alias, builder, &EagerPaths::none(), tenant, true)
    }

    /// First node matching every property.
    pub fn first(
        &self,
        model: &str,
        properties: &BTreeMap<String, CypherValue>,
        tenant: Option<&str>,
    ) -> Result<ReadQuery> {
        let (model, alias, builder) = self.start(model, tenant)?;
        let builder = self.filter(model, alias, builder, properties)?.limit(1);
        self.finish(model, alias, builder, &EagerPaths::none(), tenant, true)
    }

    /// All nodes matching `options`.
    pub fn all(&self, model: &str, options: &FindOptions) -> Result<ReadQuery> {
        let tenant = options.tenant.as_deref();
        let (model, alias, builder) = self.start(model, tenant)?;
        let builder = self.filter(model, alias, builder, &options.properties)?;
        let builder = self.page(model, alias, builder, options)?;
        self.finish(model, alias, builder, &options.eager, tenant, false)
    }

    /// Nodes whose point `property` lies within `distance` of `point`.
    pub fn find_within_distance(
        &self,
        model: &str,
        property: &str,
        point: Point,
        distance: f64,
        options: &FindOptions,
    ) -> Result<ReadQuery> {
        let tenant = options.tenant.as_deref();
        let (model, alias, builder) = self.start(model, tenant)?;
        check_property(model, property)?;

        let builder = self.filter(model, alias, builder, &options.properties)?;
        let point_param = builder.fresh_param(&format!("{}_point", alias));
        let builder = builder.param(point_param.clone(), point.to_value());
        let distance_param = builder.fresh_param(&format!("{}_distance", alias));
        let builder = builder
            .param(distance_param.clone(), distance)
            .where_raw(format!(
                "point.distance({}.{}, point(${})) <= ${}",
                alias,
                crate::cypher::escape_identifier(property),
                point_param,
                distance_param
            ));
        let builder = self.page(model, alias, builder, options)?;
        self.finish(model, alias, builder, &options.eager, tenant, false)
    }

    fn start(&self, name: &str, tenant: Option<&str>) -> Result<(&'r Model, &'r str, QueryBuilder)> {
        let model = self.registry.get(name)?;
        let alias = validate_variable(&self.config.root_alias)?;
        let mut labels = model.labels.clone();
        if let Some(customer_id) = tenant {
            labels.push(self.config.tenant_scope().label(customer_id));
        }
        Ok((model, alias, QueryBuilder::new().match_node(alias, &labels)))
    }

    fn filter(
        &self,
        model: &Model,
        alias: &str,
        mut builder: QueryBuilder,
        properties: &BTreeMap<String, CypherValue>,
    ) -> Result<QueryBuilder> {
        for (name, value) in properties {
            check_property(model, name)?;
            builder = builder.where_eq(alias, name, value.clone());
        }
        Ok(builder)
    }

    fn page(
        &self,
        model: &Model,
        alias: &str,
        mut builder: QueryBuilder,
        options: &FindOptions,
    ) -> Result<QueryBuilder> {
        for (name, order) in &options.order {
            check_property(model, name)?;
            builder = builder.order_by(alias, name, *order);
        }
        if let Some(skip) = options.skip {
            builder = builder.skip(skip);
        }
        if let Some(limit) = options.limit {
            builder = builder.limit(limit);
        }
        Ok(builder)
    }

    fn finish(
        &self,
        model: &Model,
        alias: &str,
        builder: QueryBuilder,
        eager: &EagerPaths,
        tenant: Option<&str>,
        single: bool,
    ) -> Result<ReadQuery> {
        let mut patterns = PatternBuilder::new(self.registry, self.config);
        if let Some(customer_id) = tenant {
            patterns = patterns.for_tenant(customer_id);
        }
        let projection = patterns.node_pattern(1, alias, Some(model), eager)?;
        tracing::debug!(model = %model.name, eager = %eager, single, "built read query");

        Ok(ReadQuery {
            statement: builder.returning(projection).build(),
            alias: alias.to_string(),
            model: model.name.clone(),
            eager: eager.clone(),
            single,
        })
    }
}

fn check_property(model: &Model, property: &str) -> Result<()> {
    if model.has_property(property) {
        Ok(())
    } else {
        Err(OgmaError::UnknownProperty {
            model: model.name.clone(),
            property: property.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ResultSet, Row};
    use ogma_core::{PropertyDefinition, PropertyKind, RecordValue};

    fn registry() -> ModelRegistry {
        ModelRegistry::builder()
            .register(
                Model::new("Place")
                    .with_property(PropertyDefinition::new("place_id", PropertyKind::Uuid).primary())
                    .with_property(PropertyDefinition::new("name", PropertyKind::String))
                    .with_property(PropertyDefinition::new("location", PropertyKind::Point)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_find_by_primary_key() {
        let registry = registry();
        let config = EagerConfig::default();
        let query = Finder::new(&registry, &config)
            .find("Place", "p1", None)
            .unwrap();
        assert_eq!(
            query.statement.query,
            "MATCH (this:Place)\nWHERE this.place_id = $this_place_id\nRETURN this { .*, __EAGER_ID__: id(this), __EAGER_LABELS__: labels(this) }\nLIMIT $limit"
        );
        assert_eq!(query.statement.parameters["this_place_id"], CypherValue::from("p1"));
        assert_eq!(query.statement.parameters["limit"], CypherValue::Int(1));
    }

    #[test]
    fn test_find_by_id_with_tenant() {
        let registry = registry();
        let config = EagerConfig::default();
        let query = Finder::new(&registry, &config)
            .find_by_id("Place", 12, Some("acme-1"))
            .unwrap();
        assert!(query
            .statement
            .query
            .starts_with("MATCH (this:Place:cid_acme_1)\nWHERE id(this) = $this_id\n"));
        assert_eq!(query.statement.parameters["this_id"], CypherValue::Int(12));
    }

    #[test]
    fn test_first_rejects_undeclared_property() {
        let registry = registry();
        let config = EagerConfig::default();
        let mut properties = BTreeMap::new();
        properties.insert("secret".to_string(), CypherValue::from(1));
        let err = Finder::new(&registry, &config)
            .first("Place", &properties, None)
            .unwrap_err();
        assert!(matches!(err, OgmaError::UnknownProperty { .. }));
    }

    #[test]
    fn test_all_with_paging() {
        let registry = registry();
        let config = EagerConfig::default();
        let options = FindOptions::new()
            .with_property("name", "Cafe")
            .order_by("name", Order::Desc)
            .skip(20)
            .limit(10);
        let query = Finder::new(&registry, &config).all("Place", &options).unwrap();
        assert!(query.statement.query.ends_with("\nORDER BY this.name DESC\nSKIP $skip\nLIMIT $limit"));
        assert!(!query.single);
    }

    #[test]
    fn test_find_within_distance() {
        let registry = registry();
        let config = EagerConfig::default();
        let query = Finder::new(&registry, &config)
            .find_within_distance(
                "Place",
                "location",
                Point::geographic(51.5, -0.12),
                1000.0,
                &FindOptions::new().limit(5),
            )
            .unwrap();
        assert!(query.statement.query.contains(
            "WHERE point.distance(this.location, point($this_point)) <= $this_distance"
        ));
        assert_eq!(
            query.statement.parameters["this_distance"],
            CypherValue::Float(1000.0)
        );
        let point = query.statement.parameters["this_point"].to_cypher_literal();
        assert_eq!(point, "{latitude: 51.5, longitude: -0.12}");
    }

    #[test]
    fn test_find_within_distance_keeps_colliding_filters() {
        let registry = ModelRegistry::builder()
            .register(
                Model::new("Place")
                    .with_property(PropertyDefinition::new("point", PropertyKind::String))
                    .with_property(PropertyDefinition::new("distance", PropertyKind::Float))
                    .with_property(PropertyDefinition::new("location", PropertyKind::Point)),
            )
            .build()
            .unwrap();
        let config = EagerConfig::default();
        let options = FindOptions::new()
            .with_property("point", "north")
            .with_property("distance", 2.5);
        let query = Finder::new(&registry, &config)
            .find_within_distance("Place", "location", Point::cartesian(1.0, 2.0), 5.0, &options)
            .unwrap();

        let params = &query.statement.parameters;
        assert!(query.statement.query.contains(
            "point.distance(this.location, point($this_point_2)) <= $this_distance_2"
        ));
        assert_eq!(params["this_point"], CypherValue::from("north"));
        assert_eq!(params["this_distance"], CypherValue::Float(2.5));
        assert_eq!(params["this_point_2"].to_cypher_literal(), "{x: 1.0, y: 2.0}");
        assert_eq!(params["this_distance_2"], CypherValue::Float(5.0));
    }

    #[test]
    fn test_point_elevation() {
        let literal = Point::cartesian(1.0, 2.0)
            .with_elevation(3.0)
            .to_value()
            .to_cypher_literal();
        assert_eq!(literal, "{x: 1.0, y: 2.0, z: 3.0}");
    }

    #[test]
    fn test_fetch_runs_and_hydrates() {
        let registry = registry();
        let config = EagerConfig::default();
        let hydrator = Hydrator::new(&registry, &config);
        let query = Finder::new(&registry, &config)
            .find("Place", "p1", None)
            .unwrap();

        let runner = |statement: &CypherStatement| -> Result<ResultSet> {
            assert!(statement.parameters.contains_key("this_place_id"));
            let record: BTreeMap<String, RecordValue> = [
                ("__EAGER_ID__".to_string(), RecordValue::Int(4)),
                ("__EAGER_LABELS__".to_string(), RecordValue::from(vec!["Place"])),
                ("name".to_string(), RecordValue::from("Cafe")),
            ]
            .into_iter()
            .collect();
            Ok(ResultSet::new(vec![Row::new().with("this", RecordValue::Map(record))]))
        };

        let node = query.fetch_first(&runner, &hydrator).unwrap().unwrap();
        assert_eq!(node.get("name").and_then(RecordValue::as_str), Some("Cafe"));
        assert_eq!(query.fetch(&runner, &hydrator).unwrap().len(), 1);
    }

    #[test]
    fn test_runner_errors_propagate() {
        let registry = registry();
        let config = EagerConfig::default();
        let hydrator = Hydrator::new(&registry, &config);
        let query = Finder::new(&registry, &config).all("Place", &FindOptions::new()).unwrap();
        let runner = |_: &CypherStatement| -> Result<ResultSet> {
            Err(OgmaError::Execution("connection refused".to_string()))
        };
        assert!(matches!(
            query.fetch(&runner, &hydrator),
            Err(OgmaError::Execution(_))
        ));
    }
}
