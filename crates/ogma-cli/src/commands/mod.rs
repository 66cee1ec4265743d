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

//! CLI command implementations

mod hydrate;
mod inspect;
mod pattern;

pub use hydrate::{hydrate, hydrate_to_json, HydrateOptions};
pub use inspect::inspect;
pub use pattern::{build_pattern, pattern, PatternOptions};

use crate::error::CliError;
use ogma_core::{schema, ModelRegistry};
use ogma_cypher::EagerConfig;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via OGMA_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("OGMA_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than `OGMA_MAX_FILE_SIZE` bytes are rejected before any
/// memory is allocated for them.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the file is not valid UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write a line to stdout.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", content).map_err(|e| CliError::io_error("<stdout>", e))
}

/// Load and validate a schema file or directory.
///
/// # Errors
///
/// Returns `Err` if the path is missing or the schema is invalid.
pub fn load_registry(path: &str) -> Result<ModelRegistry, CliError> {
    if !Path::new(path).is_dir() {
        let content = read_file(path)?;
        let models = schema::models_from_str(&content)?;
        return Ok(ModelRegistry::builder().register_all(models).build()?);
    }
    let models = schema::load_path(path)?;
    let registry = ModelRegistry::builder().register_all(models).build()?;
    tracing::debug!(path, models = registry.len(), "loaded schema directory");
    Ok(registry)
}

/// Load eager configuration from a JSON file, or the defaults.
pub fn load_config(path: Option<&str>) -> Result<EagerConfig, CliError> {
    match path {
        Some(path) => Ok(serde_json::from_str(&read_file(path)?)?),
        None => Ok(EagerConfig::default()),
    }
}
