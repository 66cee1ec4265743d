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

//! OGMA Command Line Interface

use clap::Parser;
use ogma_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// OGMA - Object Graph Mapper toolkit
///
/// # Examples
///
/// ```bash
/// # List the models of a schema
/// ogma inspect --schema models.json
///
/// # Print the eager pattern of Person, also loading friends' employers
/// ogma pattern --schema models.json Person --with friends.employer --pretty
///
/// # Hydrate rows exported from a query
/// ogma hydrate --schema models.json --rows rows.json --pretty
/// ```
#[derive(Parser)]
#[command(name = "ogma")]
#[command(author, version, about = "OGMA - Object Graph Mapper toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
