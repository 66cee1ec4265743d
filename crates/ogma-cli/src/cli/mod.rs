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

//! CLI command definitions and argument parsing.
//!
//! - [`schema`]: commands that only read a schema (inspect)
//! - [`query`]: commands that build patterns or hydrate rows (pattern,
//!   hydrate)

mod query;
mod schema;

use clap::Subcommand;

use crate::error::CliError;

pub use query::QueryCommands;
pub use schema::SchemaCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Schema (inspect)
/// └── Query (pattern, hydrate)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use ogma_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Schema commands - flattened to appear at top level
    #[command(flatten)]
    Schema(SchemaCommands),

    // Query commands - flattened to appear at top level
    #[command(flatten)]
    Query(QueryCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a file cannot be read, the schema is invalid, or
    /// pattern building or hydration fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Schema(cmd) => cmd.execute(),
            Commands::Query(cmd) => cmd.execute(),
        }
    }
}
