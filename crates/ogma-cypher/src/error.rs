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

//! Error types for pattern building, querying and hydration.

use ogma_core::SchemaError;
use thiserror::Error;

/// Error type for OGMA query and hydration operations.
///
/// None of these errors are transient; retrying belongs to the execution
/// layer, never to this crate.
#[derive(Debug, Error)]
pub enum OgmaError {
    /// A model lookup or schema definition failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// No registered model matches the labels of a record.
    #[error("no model definition found for labels {labels:?}")]
    Resolution {
        /// Labels of the record, tenant labels removed.
        labels: Vec<String>,
    },

    /// A record does not have the shape the eager projection produces.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// A result row lacks the requested column.
    #[error("result row has no column '{0}'")]
    MissingColumn(String),

    /// Requested eager paths reach past the maximum eager depth.
    #[error("eager paths {paths:?} below '{alias}' exceed the maximum eager depth of {max_depth}")]
    DepthExceeded {
        /// Alias of the node where expansion stopped.
        alias: String,
        /// Requested paths that were cut off.
        paths: Vec<String>,
        /// The depth cap.
        max_depth: usize,
    },

    /// Invalid Cypher identifier.
    #[error("invalid Cypher identifier: '{0}'")]
    InvalidIdentifier(String),

    /// A filter or order names a property the model does not declare.
    #[error("model '{model}' has no property '{property}'")]
    UnknownProperty {
        /// The model queried.
        model: String,
        /// The undeclared property.
        property: String,
    },

    /// The query runner failed.
    #[error("query execution failed: {0}")]
    Execution(String),

    /// Serialization error from serde_json.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for OGMA operations.
pub type Result<T> = std::result::Result<T, OgmaError>;
