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

//! Raw values as returned by the graph store.
//!
//! Result rows are self-describing: an eager projection comes back as nested
//! maps and lists, a directly returned node comes back as a store node. The
//! [`RecordValue`] enum makes that shape explicit so hydration can match on
//! variants instead of probing for fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::json::ToJson;

/// Store-assigned identity of a node or relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub i64);

impl Identity {
    /// The raw id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Identity(id)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node returned as-is by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreNode {
    /// Store identity.
    pub identity: Identity,
    /// Label set, possibly including a tenant label.
    pub labels: Vec<String>,
    /// All stored properties.
    #[serde(default)]
    pub properties: BTreeMap<String, RecordValue>,
}

/// A relationship returned as-is by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreRelationship {
    /// Store identity.
    pub identity: Identity,
    /// Runtime edge type.
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Identity of the start node.
    pub start: Identity,
    /// Identity of the end node.
    pub end: Identity,
    /// All stored properties.
    #[serde(default)]
    pub properties: BTreeMap<String, RecordValue>,
}

/// A value inside a result row.
///
/// Deserializes from JSON untagged: an object with exactly the fields of a
/// [`StoreNode`] or [`StoreRelationship`] is read as that variant, any other
/// object is a [`RecordValue::Map`]. A map whose keys happen to match one of
/// those shapes is therefore read as a store variant; [`RecordValue::into_plain`]
/// turns it back into the map it was sent as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
    /// String.
    String(String),
    /// List of values.
    List(Vec<RecordValue>),
    /// Plain driver node.
    Node(StoreNode),
    /// Plain driver relationship.
    Relationship(StoreRelationship),
    /// Map, e.g. an eager projection.
    Map(BTreeMap<String, RecordValue>),
}

impl RecordValue {
    /// Short name of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RecordValue::Null => "null",
            RecordValue::Bool(_) => "boolean",
            RecordValue::Int(_) => "integer",
            RecordValue::Float(_) => "float",
            RecordValue::String(_) => "string",
            RecordValue::List(_) => "list",
            RecordValue::Node(_) => "node",
            RecordValue::Relationship(_) => "relationship",
            RecordValue::Map(_) => "map",
        }
    }

    /// Rewrite store variants, at any nesting level, as the plain maps they
    /// were read from.
    ///
    /// Stored properties never hold nodes or relationships, so a store
    /// variant in a property slot is a map value with colliding keys.
    pub fn into_plain(self) -> RecordValue {
        fn plain_map(properties: BTreeMap<String, RecordValue>) -> RecordValue {
            RecordValue::Map(
                properties
                    .into_iter()
                    .map(|(k, v)| (k, v.into_plain()))
                    .collect(),
            )
        }

        match self {
            RecordValue::Node(node) => {
                let mut map = BTreeMap::new();
                map.insert("identity".to_string(), RecordValue::Int(node.identity.get()));
                map.insert(
                    "labels".to_string(),
                    RecordValue::List(node.labels.into_iter().map(RecordValue::String).collect()),
                );
                map.insert("properties".to_string(), plain_map(node.properties));
                RecordValue::Map(map)
            }
            RecordValue::Relationship(rel) => {
                let mut map = BTreeMap::new();
                map.insert("identity".to_string(), RecordValue::Int(rel.identity.get()));
                map.insert("type".to_string(), RecordValue::String(rel.edge_type));
                map.insert("start".to_string(), RecordValue::Int(rel.start.get()));
                map.insert("end".to_string(), RecordValue::Int(rel.end.get()));
                map.insert("properties".to_string(), plain_map(rel.properties));
                RecordValue::Map(map)
            }
            RecordValue::List(items) => {
                RecordValue::List(items.into_iter().map(RecordValue::into_plain).collect())
            }
            RecordValue::Map(map) => plain_map(map),
            other => other,
        }
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, RecordValue::Null)
    }

    /// Try to get as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RecordValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            RecordValue::Float(f) => Some(*f),
            RecordValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RecordValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as a list.
    pub fn as_list(&self) -> Option<&[RecordValue]> {
        match self {
            RecordValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, RecordValue>> {
        match self {
            RecordValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for RecordValue {
    fn from(v: bool) -> Self {
        RecordValue::Bool(v)
    }
}

impl From<i64> for RecordValue {
    fn from(v: i64) -> Self {
        RecordValue::Int(v)
    }
}

impl From<i32> for RecordValue {
    fn from(v: i32) -> Self {
        RecordValue::Int(v as i64)
    }
}

impl From<f64> for RecordValue {
    fn from(v: f64) -> Self {
        RecordValue::Float(v)
    }
}

impl From<String> for RecordValue {
    fn from(v: String) -> Self {
        RecordValue::String(v)
    }
}

impl From<&str> for RecordValue {
    fn from(v: &str) -> Self {
        RecordValue::String(v.to_string())
    }
}

impl<T: Into<RecordValue>> From<Vec<T>> for RecordValue {
    fn from(v: Vec<T>) -> Self {
        RecordValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RecordValue>> From<Option<T>> for RecordValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(RecordValue::Null, Into::into)
    }
}

impl From<BTreeMap<String, RecordValue>> for RecordValue {
    fn from(v: BTreeMap<String, RecordValue>) -> Self {
        RecordValue::Map(v)
    }
}

impl From<StoreNode> for RecordValue {
    fn from(v: StoreNode) -> Self {
        RecordValue::Node(v)
    }
}

impl ToJson for RecordValue {
    fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            RecordValue::Null => Json::Null,
            RecordValue::Bool(b) => Json::Bool(*b),
            RecordValue::Int(i) => Json::from(*i),
            // NaN and infinities have no JSON form
            RecordValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            RecordValue::String(s) => Json::String(s.clone()),
            RecordValue::List(items) => Json::Array(items.iter().map(ToJson::to_json).collect()),
            RecordValue::Node(node) => {
                let mut out = serde_json::Map::new();
                out.insert("_id".to_string(), Json::from(node.identity.get()));
                out.insert("_labels".to_string(), Json::from(node.labels.clone()));
                for (k, v) in &node.properties {
                    out.insert(k.clone(), v.to_json());
                }
                Json::Object(out)
            }
            RecordValue::Relationship(rel) => {
                let mut out = serde_json::Map::new();
                out.insert("_id".to_string(), Json::from(rel.identity.get()));
                out.insert("_type".to_string(), Json::String(rel.edge_type.clone()));
                out.insert("_start".to_string(), Json::from(rel.start.get()));
                out.insert("_end".to_string(), Json::from(rel.end.get()));
                for (k, v) in &rel.properties {
                    out.insert(k.clone(), v.to_json());
                }
                Json::Object(out)
            }
            RecordValue::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_deserialize_to_matching_variants() {
        let v: RecordValue = serde_json::from_str("null").unwrap();
        assert!(v.is_null());
        let v: RecordValue = serde_json::from_str("30").unwrap();
        assert_eq!(v.as_int(), Some(30));
        let v: RecordValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(v.as_float(), Some(2.5));
        let v: RecordValue = serde_json::from_str("\"Ann\"").unwrap();
        assert_eq!(v.as_str(), Some("Ann"));
        let v: RecordValue = serde_json::from_str("true").unwrap();
        assert_eq!(v.as_bool(), Some(true));
    }

    #[test]
    fn test_store_node_shape_is_recognised() {
        let v: RecordValue = serde_json::from_str(
            r#"{"identity": 7, "labels": ["Person"], "properties": {"name": "Bo"}}"#,
        )
        .unwrap();
        match v {
            RecordValue::Node(node) => {
                assert_eq!(node.identity, Identity(7));
                assert_eq!(node.labels, vec!["Person".to_string()]);
                assert_eq!(node.properties["name"], RecordValue::from("Bo"));
            }
            other => panic!("expected node, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_store_relationship_shape_is_recognised() {
        let v: RecordValue = serde_json::from_str(
            r#"{"identity": 9, "type": "KNOWS", "start": 1, "end": 2}"#,
        )
        .unwrap();
        assert_eq!(v.kind_name(), "relationship");
    }

    #[test]
    fn test_into_plain_restores_map_with_store_keys() {
        let json = r#"{"settings": {"identity": 3, "labels": ["a"], "properties": {"x": 1}}}"#;
        let v: RecordValue = serde_json::from_str(json).unwrap();
        let settings = v.as_map().unwrap()["settings"].clone();
        assert_eq!(settings.kind_name(), "node");

        let plain = settings.into_plain();
        assert_eq!(plain.kind_name(), "map");
        assert_eq!(
            plain.to_json(),
            serde_json::json!({"identity": 3, "labels": ["a"], "properties": {"x": 1}})
        );
    }

    #[test]
    fn test_into_plain_keeps_scalars() {
        assert_eq!(RecordValue::from("Ann").into_plain(), RecordValue::from("Ann"));
        assert_eq!(RecordValue::Int(4).into_plain(), RecordValue::Int(4));
    }

    #[test]
    fn test_projection_map_stays_a_map() {
        let v: RecordValue = serde_json::from_str(
            r#"{"__EAGER_ID__": 3, "__EAGER_LABELS__": ["Person"], "name": "Ann", "identity": 3}"#,
        )
        .unwrap();
        let map = v.as_map().expect("map");
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_to_json_drops_non_finite_floats() {
        assert_eq!(RecordValue::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(
            RecordValue::from(vec![1i64, 2]).to_json(),
            serde_json::json!([1, 2])
        );
    }

    #[test]
    fn test_from_option() {
        assert!(RecordValue::from(None::<i64>).is_null());
        assert_eq!(RecordValue::from(Some("x")), RecordValue::from("x"));
    }
}
