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

//! Inspect command - schema overview

use super::load_registry;
use crate::error::CliError;
use colored::Colorize;
use ogma_core::{Cardinality, Direction, PropertyDefinition, RelationshipDefinition};

/// Inspect a schema.
///
/// Loads and validates the schema at `path`, then prints every model with
/// its labels, properties and relationships.
///
/// # Errors
///
/// Returns `Err` if the schema cannot be read or fails validation.
///
/// # Examples
///
/// ```no_run
/// use ogma_cli::commands::inspect;
///
/// # fn main() -> Result<(), ogma_cli::error::CliError> {
/// inspect("models.json", false)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(path: &str, verbose: bool) -> Result<(), CliError> {
    let registry = load_registry(path)?;

    println!("{}", "OGMA Schema".bold().underline());
    println!();
    println!("{}  {}", "Models:".cyan(), registry.len());

    for model in registry.iter() {
        println!();
        println!(
            "{} {}",
            model.name.green().bold(),
            format!(":{}", model.labels.join(":")).dimmed()
        );

        if !model.properties.is_empty() {
            println!("  {}", "properties:".cyan());
            for property in &model.properties {
                println!("    {}", format_property(property, verbose));
            }
        }

        if !model.relationships.is_empty() {
            println!("  {}", "relationships:".cyan());
            for rel in &model.relationships {
                println!("    {}", format_relationship(rel));
                if verbose {
                    for property in &rel.properties {
                        println!("      {}", format_property(property, verbose));
                    }
                }
            }
        }
    }

    Ok(())
}

fn format_property(property: &PropertyDefinition, verbose: bool) -> String {
    let mut line = format!("{}: {}", property.name.yellow(), property.kind.as_str());
    if verbose {
        let flags: Vec<&str> = [
            (property.primary, "primary"),
            (property.required, "required"),
            (property.hidden, "hidden"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| *name)
        .collect();
        if !flags.is_empty() {
            line.push_str(&format!(" ({})", flags.join(", ")).dimmed().to_string());
        }
    }
    line
}

fn cardinality_name(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::OneNode => "node",
        Cardinality::ManyNodes => "nodes",
        Cardinality::OneEdge => "relationship",
        Cardinality::ManyEdges => "relationships",
    }
}

fn format_relationship(rel: &RelationshipDefinition) -> String {
    let arrow = match rel.direction {
        Direction::Out => format!("-[:{}]->", rel.edge_label),
        Direction::In => format!("<-[:{}]-", rel.edge_label),
    };
    let mut line = format!(
        "{}: {} {} ({})",
        rel.name.yellow(),
        arrow,
        rel.target.green(),
        cardinality_name(rel.cardinality)
    );
    if rel.eager {
        line.push_str(&format!(" {}", "eager".magenta()));
    }
    line
}
