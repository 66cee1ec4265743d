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

//! Pattern command - print an eager projection

use super::{load_config, load_registry, write_output};
use crate::error::CliError;
use ogma_cypher::{EagerConfig, EagerPaths, PatternBuilder};

/// Options of the `pattern` command.
#[derive(Debug, Clone, Default)]
pub struct PatternOptions {
    /// Root variable, overriding the configuration.
    pub alias: Option<String>,
    /// Extra relationship paths to load.
    pub with: Vec<String>,
    /// Customer id scoping the traversals.
    pub tenant: Option<String>,
    /// Force multi-line output.
    pub pretty: bool,
    /// Configuration file.
    pub config: Option<String>,
}

impl PatternOptions {
    pub(crate) fn resolve_config(&self) -> Result<EagerConfig, CliError> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(alias) = &self.alias {
            config = config.with_root_alias(alias.clone());
        }
        if self.pretty {
            config = config.with_pretty(true);
        }
        Ok(config)
    }
}

/// Build the eager pattern of `model` and print it.
///
/// # Errors
///
/// Returns `Err` if the schema is invalid, the model is unknown, the alias
/// is not a plain identifier, or the configured truncation policy rejects
/// the requested paths.
pub fn pattern(schema: &str, model: &str, options: &PatternOptions) -> Result<(), CliError> {
    write_output(&build_pattern(schema, model, options)?)
}

/// Build the eager pattern of `model` without printing it.
pub fn build_pattern(
    schema: &str,
    model: &str,
    options: &PatternOptions,
) -> Result<String, CliError> {
    let registry = load_registry(schema)?;
    let config = options.resolve_config()?;

    let mut builder = PatternBuilder::new(&registry, &config);
    if let Some(customer_id) = &options.tenant {
        builder = builder.for_tenant(customer_id);
    }

    let requested = EagerPaths::new(&options.with);
    tracing::debug!(model, paths = %requested, "building pattern");
    Ok(builder.build(model, &requested)?)
}
