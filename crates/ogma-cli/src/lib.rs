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

//! OGMA CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Schema
//!
//! - **inspect**: List the models of a schema with their properties and
//!   relationships
//!
//! ## Queries
//!
//! - **pattern**: Print the eager projection pattern of a model
//! - **hydrate**: Hydrate result rows read from a JSON file and print the
//!   entities as JSON
//!
//! # Examples
//!
//! ```no_run
//! use ogma_cli::commands::{pattern, PatternOptions};
//!
//! # fn main() -> Result<(), ogma_cli::error::CliError> {
//! let options = PatternOptions {
//!     with: vec!["friends.employer".to_string()],
//!     ..PatternOptions::default()
//! };
//! pattern("schema.json", "Person", &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The binary logs to stderr through `tracing-subscriber`; the level comes
//! from `RUST_LOG` and defaults to `warn`.
//!
//! # Security
//!
//! Input files larger than `OGMA_MAX_FILE_SIZE` bytes (default 1 GB) are
//! rejected before they are read.

pub mod cli;
pub mod commands;
pub mod error;
