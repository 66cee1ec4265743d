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

//! Error types for schema definition and registry lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while defining, loading or looking up models.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No model with the requested name has been registered.
    #[error("{}", unknown_model_message(.name, .defined))]
    UnknownModel {
        /// The requested model name.
        name: String,
        /// Names of all registered models.
        defined: Vec<String>,
    },

    /// Two models were registered under the same name.
    #[error("model '{0}' is defined more than once")]
    DuplicateModel(String),

    /// A property name appears twice on the same model or relationship.
    #[error("property '{property}' is declared more than once on '{owner}'")]
    DuplicateProperty {
        /// Model or relationship owning the property.
        owner: String,
        /// The repeated property name.
        property: String,
    },

    /// A relationship name appears twice on the same model.
    #[error("relationship '{relationship}' is declared more than once on model '{model}'")]
    DuplicateRelationship {
        /// Owning model.
        model: String,
        /// The repeated relationship name.
        relationship: String,
    },

    /// A model, property, relationship or alias name is not a plain identifier.
    #[error("invalid name '{0}': expected a letter or underscore followed by letters, digits or underscores")]
    InvalidName(String),

    /// Two names would produce the same key in an eager projection.
    #[error("name '{name}' on '{owner}' collides with {other}")]
    NameCollision {
        /// Model or relationship where the collision was found.
        owner: String,
        /// The colliding name.
        name: String,
        /// What it collides with.
        other: String,
    },

    /// A schema document is structurally invalid.
    #[error("invalid schema for model '{model}': {message}")]
    InvalidSchema {
        /// Model being read.
        model: String,
        /// Description of the problem.
        message: String,
    },

    /// Reading a schema file or directory failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// Malformed JSON in a schema document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn unknown_model_message(name: &str, defined: &[String]) -> String {
    if defined.is_empty() {
        format!(
            "couldn't find a definition for '{}'; no models have been defined",
            name
        )
    } else {
        format!(
            "couldn't find a definition for '{}'; the models currently defined are [{}]",
            name,
            defined.join(", ")
        )
    }
}

impl SchemaError {
    /// Build an I/O error carrying the offending path.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        SchemaError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_without_definitions() {
        let err = SchemaError::UnknownModel {
            name: "Movie".to_string(),
            defined: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("Movie"));
        assert!(msg.contains("no models have been defined"));
    }

    #[test]
    fn test_unknown_model_lists_definitions() {
        let err = SchemaError::UnknownModel {
            name: "Movie".to_string(),
            defined: vec!["Person".to_string(), "Genre".to_string()],
        };
        assert!(err.to_string().contains("[Person, Genre]"));
    }

    #[test]
    fn test_name_collision_display() {
        let err = SchemaError::NameCollision {
            owner: "Person".to_string(),
            name: "friends".to_string(),
            other: "a property".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("friends"));
        assert!(msg.contains("Person"));
    }

    #[test]
    fn test_io_helper_keeps_path() {
        let err = SchemaError::io(
            "models/Person.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("models/Person.json"));
    }
}
