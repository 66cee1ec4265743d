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

//! Path pattern fragments such as `(a)-[r:TYPE]->(b:Label)`.

use ogma_core::Direction;

use super::escape::{escape_label, escape_relationship_type};

/// Builds a single-hop path pattern.
///
/// ```
/// # use ogma_cypher::cypher::Traversal;
/// # use ogma_core::Direction;
/// let path = Traversal::start("this", &[])
///     .relationship("FRIENDS", Direction::In, "r")
///     .to("friend", &["Person".to_string()]);
/// assert_eq!(path.pattern(), "(this)<-[r:FRIENDS]-(friend:Person)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pattern: String,
}

fn node_fragment(variable: &str, labels: &[String]) -> String {
    let labels: String = labels.iter().map(|l| escape_label(l)).collect();
    format!("({}{})", variable, labels)
}

impl Traversal {
    /// Start at a node variable, optionally constrained by labels.
    pub fn start(variable: &str, labels: &[String]) -> Self {
        Self {
            pattern: node_fragment(variable, labels),
        }
    }

    /// Follow an edge of the given type in the given direction.
    pub fn relationship(mut self, edge_type: &str, direction: Direction, variable: &str) -> Self {
        let edge = format!("[{}{}]", variable, escape_relationship_type(edge_type));
        match direction {
            Direction::Out => {
                self.pattern.push('-');
                self.pattern.push_str(&edge);
                self.pattern.push_str("->");
            }
            Direction::In => {
                self.pattern.push_str("<-");
                self.pattern.push_str(&edge);
                self.pattern.push('-');
            }
        }
        self
    }

    /// End at a node variable, optionally constrained by labels.
    pub fn to(mut self, variable: &str, labels: &[String]) -> Self {
        self.pattern.push_str(&node_fragment(variable, labels));
        self
    }

    /// The rendered pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
