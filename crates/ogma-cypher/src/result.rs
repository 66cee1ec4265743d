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

//! Raw query results.

use ogma_core::RecordValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// One result row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    /// Column values.
    pub columns: BTreeMap<String, RecordValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    /// Value of a column.
    pub fn get(&self, column: &str) -> Option<&RecordValue> {
        self.columns.get(column)
    }
}

/// The rows returned by one statement.
///
/// Serialized as a JSON array of row objects:
///
/// ```
/// # use ogma_cypher::ResultSet;
/// let rows = ResultSet::from_json(r#"[{"this": {"name": "Ann", "__EAGER_ID__": 1}}]"#)?;
/// assert_eq!(rows.len(), 1);
/// # Ok::<(), ogma_cypher::OgmaError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    /// Rows in result order.
    pub rows: Vec<Row>,
}

impl ResultSet {
    /// Wrap rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse a JSON array of row objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// First row.
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }
}

impl From<Vec<Row>> for ResultSet {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogma_core::StoreNode;

    #[test]
    fn test_from_json_rows() {
        let rows = ResultSet::from_json(
            r#"[
                {"this": {"name": "Ann", "__EAGER_ID__": 1, "__EAGER_LABELS__": ["Person"]}, "count": 2},
                {"this": null, "count": 0}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        let first = rows.first().unwrap();
        assert_eq!(first.get("count").and_then(RecordValue::as_int), Some(2));
        assert!(first.get("this").and_then(RecordValue::as_map).is_some());
        assert!(rows.rows[1].get("this").map(RecordValue::is_null).unwrap_or(false));
    }

    #[test]
    fn test_plain_store_node_column() {
        let rows = ResultSet::from_json(
            r#"[{"n": {"identity": 4, "labels": ["Person"], "properties": {"name": "Ann"}}}]"#,
        )
        .unwrap();
        assert!(matches!(rows.rows[0].get("n"), Some(RecordValue::Node(StoreNode { .. }))));
    }

    #[test]
    fn test_not_an_array() {
        assert!(ResultSet::from_json(r#"{"this": 1}"#).is_err());
    }

    #[test]
    fn test_row_builder() {
        let row = Row::new().with("count", 3i64);
        let rows: ResultSet = vec![row].into_iter().collect();
        assert_eq!((&rows).into_iter().count(), 1);
    }
}
