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

//! Schema commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Commands that read a schema without building queries.
#[derive(Subcommand)]
pub enum SchemaCommands {
    /// List the models of a schema
    ///
    /// Loads and validates a schema file or directory, then prints every
    /// model with its labels, properties and relationships. Eager
    /// relationships are marked.
    Inspect {
        /// Schema file, or directory of `<Model>.json` files
        #[arg(short, long, value_name = "PATH")]
        schema: String,

        /// Also list relationship properties and property flags
        #[arg(short, long)]
        verbose: bool,
    },
}

impl SchemaCommands {
    /// Execute the schema command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            SchemaCommands::Inspect { schema, verbose } => commands::inspect(&schema, verbose),
        }
    }
}
