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

//! A small read-query builder.
//!
//! Clauses render in a fixed order:
//!
//! ```text
//! MATCH ...
//! WHERE ... AND ...
//! RETURN ...
//! ORDER BY ...
//! SKIP $skip
//! LIMIT $limit
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::escape::{escape_identifier, escape_label};
use super::statements::{AccessMode, CypherStatement, CypherValue};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Order {
    /// Cypher keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Builder for a single read statement.
///
/// ```
/// # use ogma_cypher::cypher::{QueryBuilder, Order};
/// let statement = QueryBuilder::new()
///     .match_node("this", &["Person".to_string()])
///     .where_eq("this", "name", "Ann")
///     .returning("this")
///     .order_by("this", "age", Order::Desc)
///     .limit(1)
///     .build();
/// assert_eq!(
///     statement.query,
///     "MATCH (this:Person)\nWHERE this.name = $this_name\nRETURN this\nORDER BY this.age DESC\nLIMIT $limit"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    matches: Vec<String>,
    conditions: Vec<String>,
    parameters: BTreeMap<String, CypherValue>,
    returning: Option<String>,
    order: Vec<String>,
    skip: Option<u64>,
    limit: Option<u64>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `MATCH` for a node variable with labels.
    pub fn match_node(mut self, variable: &str, labels: &[String]) -> Self {
        let labels: String = labels.iter().map(|l| escape_label(l)).collect();
        self.matches.push(format!("({}{})", variable, labels));
        self
    }

    /// Require `variable.property = value`.
    ///
    /// The parameter is named `<variable>_<property>`, suffixed with a counter
    /// if that name is taken.
    pub fn where_eq(
        mut self,
        variable: &str,
        property: &str,
        value: impl Into<CypherValue>,
    ) -> Self {
        let name = self.fresh_param(&format!("{}_{}", variable, property));
        self.conditions.push(format!(
            "{}.{} = ${}",
            variable,
            escape_identifier(property),
            name
        ));
        self.parameters.insert(name, value.into());
        self
    }

    /// Require the internal identity of `variable` to equal `id`.
    pub fn where_id(mut self, variable: &str, id: i64) -> Self {
        let name = self.fresh_param(&format!("{}_id", variable));
        self.conditions
            .push(format!("id({}) = ${}", variable, name));
        self.parameters.insert(name, CypherValue::Int(id));
        self
    }

    /// Add a raw condition; any parameters it uses must be added with
    /// [`QueryBuilder::param`].
    pub fn where_raw(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<CypherValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set the `RETURN` projection.
    pub fn returning(mut self, projection: impl Into<String>) -> Self {
        self.returning = Some(projection.into());
        self
    }

    /// Append a sort key.
    pub fn order_by(mut self, variable: &str, property: &str, order: Order) -> Self {
        self.order.push(format!(
            "{}.{} {}",
            variable,
            escape_identifier(property),
            order.as_str()
        ));
        self
    }

    /// Skip the first `n` rows.
    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    /// Return at most `n` rows.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// A parameter name derived from `base` that is not bound yet.
    ///
    /// Returns `base` itself when free, otherwise `base_2`, `base_3`, ...
    pub fn fresh_param(&self, base: &str) -> String {
        if !self.parameters.contains_key(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}_{}", base, n))
            .find(|candidate| !self.parameters.contains_key(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Render the statement.
    pub fn build(mut self) -> CypherStatement {
        let mut clauses = Vec::new();
        if !self.matches.is_empty() {
            clauses.push(format!("MATCH {}", self.matches.join(", ")));
        }
        if !self.conditions.is_empty() {
            clauses.push(format!("WHERE {}", self.conditions.join(" AND ")));
        }
        if let Some(projection) = &self.returning {
            clauses.push(format!("RETURN {}", projection));
        }
        if !self.order.is_empty() {
            clauses.push(format!("ORDER BY {}", self.order.join(", ")));
        }
        if let Some(skip) = self.skip {
            clauses.push("SKIP $skip".to_string());
            self.parameters.insert("skip".to_string(), CypherValue::Int(skip as i64));
        }
        if let Some(limit) = self.limit {
            clauses.push("LIMIT $limit".to_string());
            self.parameters.insert("limit".to_string(), CypherValue::Int(limit as i64));
        }

        let mut statement = CypherStatement::new(clauses.join("\n"), AccessMode::Read);
        statement.parameters = self.parameters;
        statement
    }
}
