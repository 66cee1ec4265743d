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

//! Declarative JSON schema documents.
//!
//! A schema document is an object keyed by model name:
//!
//! ```json
//! {
//!   "Person": {
//!     "properties": {
//!       "person_id": { "type": "uuid", "primary": true },
//!       "name": "string",
//!       "age": "integer"
//!     },
//!     "relationships": {
//!       "friends": {
//!         "type": "nodes",
//!         "relationship": "FRIENDS",
//!         "direction": "out",
//!         "target": "Person",
//!         "eager": true
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Key order is significant: properties and relationships keep the order in
//! which they are written.

use serde::Deserialize;
use std::path::Path;

use crate::error::SchemaError;
use crate::model::Model;
use crate::property::{PropertyDefinition, PropertyKind};
use crate::relationship::{Cardinality, Direction, RelationshipDefinition, DEFAULT_NODE_ALIAS};

type JsonMap = serde_json::Map<String, serde_json::Value>;

#[derive(Deserialize)]
#[serde(untagged)]
enum PropertySchema {
    Kind(PropertyKind),
    Detailed(DetailedProperty),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailedProperty {
    #[serde(rename = "type")]
    kind: PropertyKind,
    #[serde(default)]
    primary: bool,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    hidden: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RelationshipSchema {
    #[serde(rename = "type")]
    cardinality: Cardinality,
    relationship: String,
    direction: Direction,
    target: String,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    eager: bool,
    #[serde(default)]
    properties: JsonMap,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelSchema {
    #[serde(default)]
    labels: Option<Vec<String>>,
    #[serde(default)]
    properties: JsonMap,
    #[serde(default)]
    relationships: JsonMap,
}

fn invalid(model: &str, message: impl Into<String>) -> SchemaError {
    SchemaError::InvalidSchema {
        model: model.to_string(),
        message: message.into(),
    }
}

fn read_properties(model: &str, map: JsonMap) -> Result<Vec<PropertyDefinition>, SchemaError> {
    map.into_iter()
        .map(|(name, value)| {
            let schema: PropertySchema = serde_json::from_value(value)
                .map_err(|e| invalid(model, format!("property '{}': {}", name, e)))?;
            Ok(match schema {
                PropertySchema::Kind(kind) => PropertyDefinition::new(name, kind),
                PropertySchema::Detailed(detail) => PropertyDefinition {
                    name,
                    kind: detail.kind,
                    primary: detail.primary,
                    required: detail.required,
                    hidden: detail.hidden,
                },
            })
        })
        .collect()
}

fn read_relationship(
    model: &str,
    name: String,
    value: serde_json::Value,
) -> Result<RelationshipDefinition, SchemaError> {
    let schema: RelationshipSchema = serde_json::from_value(value)
        .map_err(|e| invalid(model, format!("relationship '{}': {}", name, e)))?;

    let owner = format!("{}.{}", model, name);
    Ok(RelationshipDefinition {
        name,
        edge_label: schema.relationship,
        direction: schema.direction,
        cardinality: schema.cardinality,
        target: schema.target,
        node_alias: schema
            .alias
            .unwrap_or_else(|| DEFAULT_NODE_ALIAS.to_string()),
        properties: read_properties(&owner, schema.properties)?,
        eager: schema.eager,
    })
}

/// Read one model definition.
pub fn model_from_value(name: &str, value: serde_json::Value) -> Result<Model, SchemaError> {
    let schema: ModelSchema =
        serde_json::from_value(value).map_err(|e| invalid(name, e.to_string()))?;

    let mut model = Model::new(name);
    if let Some(labels) = schema.labels {
        model.labels = labels;
    }
    model.properties = read_properties(name, schema.properties)?;
    model.relationships = schema
        .relationships
        .into_iter()
        .map(|(rel_name, rel)| read_relationship(name, rel_name, rel))
        .collect::<Result<_, _>>()?;

    Ok(model)
}

/// Read a schema document holding several models, keyed by name.
pub fn models_from_str(json: &str) -> Result<Vec<Model>, SchemaError> {
    let document: JsonMap = serde_json::from_str(json)?;
    document
        .into_iter()
        .map(|(name, value)| model_from_value(&name, value))
        .collect()
}

/// Load models from a path.
///
/// A file is read as a schema document keyed by model name. A directory is
/// scanned for `*.json` files, each holding one model named after the file
/// stem; files are read in name order.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Model>, SchemaError> {
    let path = path.as_ref();
    if !path.is_dir() {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        return models_from_str(&content);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path).map_err(|e| SchemaError::io(path, e))? {
        let file = entry.map_err(|e| SchemaError::io(path, e))?.path();
        let is_json = file
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json && file.is_file() {
            files.push(file);
        }
    }
    files.sort();

    let mut models = Vec::with_capacity(files.len());
    for file in files {
        let name = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| invalid(&file.display().to_string(), "file name is not valid UTF-8"))?
            .to_string();
        let content = std::fs::read_to_string(&file).map_err(|e| SchemaError::io(&file, e))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        tracing::debug!(model = %name, file = %file.display(), "loaded model definition");
        models.push(model_from_value(&name, value)?);
    }

    Ok(models)
}
