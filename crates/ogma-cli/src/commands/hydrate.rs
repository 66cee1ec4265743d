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

//! Hydrate command - turn exported rows into entities

use super::{load_config, load_registry, read_file, write_output};
use crate::error::CliError;
use ogma_core::ToJson;
use ogma_cypher::{EagerPaths, Hydrator, ResultSet};

/// Options of the `hydrate` command.
#[derive(Debug, Clone, Default)]
pub struct HydrateOptions {
    /// Column holding the root nodes, overriding the configured root alias.
    pub alias: Option<String>,
    /// Model of the root nodes.
    pub model: Option<String>,
    /// Extra relationship paths the rows were loaded with.
    pub with: Vec<String>,
    /// Hydrate only the first row.
    pub first: bool,
    /// Pretty-print the output.
    pub pretty: bool,
    /// Configuration file.
    pub config: Option<String>,
}

/// Hydrate the rows in `rows` and print the entities as JSON.
///
/// With `first`, prints a single object, or `null` when there is no row.
/// Otherwise prints an array.
///
/// # Errors
///
/// Returns `Err` if a file cannot be read, the rows are not a JSON array of
/// objects, or a record cannot be hydrated.
pub fn hydrate(schema: &str, rows: &str, options: &HydrateOptions) -> Result<(), CliError> {
    let value = hydrate_to_json(schema, rows, options)?;
    let output = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    write_output(&output)
}

/// Hydrate the rows in `rows` into a JSON value.
pub fn hydrate_to_json(
    schema: &str,
    rows: &str,
    options: &HydrateOptions,
) -> Result<serde_json::Value, CliError> {
    let registry = load_registry(schema)?;
    let config = load_config(options.config.as_deref())?;
    let alias = options.alias.as_deref().unwrap_or(&config.root_alias);

    let result = ResultSet::from_json(&read_file(rows)?).map_err(|e| {
        CliError::invalid_input(format!("'{}' is not a JSON array of rows: {}", rows, e))
    })?;
    tracing::debug!(rows = result.len(), alias, "hydrating rows");

    let hydrator = Hydrator::new(&registry, &config);
    let requested = EagerPaths::new(&options.with);
    let hint = options.model.as_deref();

    if options.first {
        let node = hydrator.hydrate_first(&result, alias, hint, &requested)?;
        Ok(node.map_or(serde_json::Value::Null, |n| n.to_json()))
    } else {
        Ok(hydrator.hydrate(&result, alias, hint, &requested)?.to_json())
    }
}
