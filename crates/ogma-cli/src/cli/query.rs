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

//! Pattern and hydration commands.

use crate::commands::{self, HydrateOptions, PatternOptions};
use crate::error::CliError;
use clap::Subcommand;

/// Commands that build eager patterns or hydrate result rows.
#[derive(Subcommand)]
pub enum QueryCommands {
    /// Print the eager projection pattern of a model
    ///
    /// The pattern loads every schema-eager relationship plus the paths
    /// given with `--with`, down to the maximum eager depth.
    Pattern {
        /// Schema file, or directory of `<Model>.json` files
        #[arg(short, long, value_name = "PATH")]
        schema: String,

        /// Model to build the pattern for
        #[arg(value_name = "MODEL")]
        model: String,

        /// Variable bound to the root node
        #[arg(short, long)]
        alias: Option<String>,

        /// Extra relationship path to load, e.g. `friends.employer` (repeatable)
        #[arg(short, long = "with", value_name = "PATH")]
        with: Vec<String>,

        /// Customer id scoping every traversed node
        #[arg(short, long)]
        tenant: Option<String>,

        /// Render the projection over several lines
        #[arg(short, long)]
        pretty: bool,

        /// JSON file with eager configuration defaults
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,
    },

    /// Hydrate result rows into entities
    ///
    /// Reads a JSON array of row objects, hydrates the column given by
    /// `--alias` and prints the entities as JSON.
    Hydrate {
        /// Schema file, or directory of `<Model>.json` files
        #[arg(short, long, value_name = "PATH")]
        schema: String,

        /// JSON file holding the result rows
        #[arg(short, long, value_name = "FILE")]
        rows: String,

        /// Column holding the root nodes
        #[arg(short, long)]
        alias: Option<String>,

        /// Model of the root nodes (resolved from labels when omitted)
        #[arg(short, long)]
        model: Option<String>,

        /// Relationship path the rows were loaded with (repeatable)
        #[arg(short, long = "with", value_name = "PATH")]
        with: Vec<String>,

        /// Hydrate only the first row
        #[arg(short, long)]
        first: bool,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// JSON file with eager configuration defaults
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,
    },
}

impl QueryCommands {
    /// Execute the query command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            QueryCommands::Pattern {
                schema,
                model,
                alias,
                with,
                tenant,
                pretty,
                config,
            } => commands::pattern(
                &schema,
                &model,
                &PatternOptions {
                    alias,
                    with,
                    tenant,
                    pretty,
                    config,
                },
            ),
            QueryCommands::Hydrate {
                schema,
                rows,
                alias,
                model,
                with,
                first,
                pretty,
                config,
            } => commands::hydrate(
                &schema,
                &rows,
                &HydrateOptions {
                    alias,
                    model,
                    with,
                    first,
                    pretty,
                    config,
                },
            ),
        }
    }
}
