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

//! Counting utilities for hydrated trees and generated patterns.

use ogma_core::{EagerValue, Node};

fn children(node: &Node) -> Vec<&Node> {
    let mut out = Vec::new();
    for value in node.eager().values() {
        match value {
            EagerValue::Node(n) => out.push(n.as_ref()),
            EagerValue::Nodes(nodes) => out.extend(nodes.iter()),
            EagerValue::Relationship(rel) => out.push(rel.other_node()),
            EagerValue::Relationships(rels) => out.extend(rels.iter().map(|r| r.other_node())),
        }
    }
    out
}

/// Count a node and every node loaded below it.
pub fn count_nodes(node: &Node) -> usize {
    1 + children(node).into_iter().map(count_nodes).sum::<usize>()
}

/// Depth of a hydrated tree; a node without eager values has depth 1.
pub fn tree_depth(node: &Node) -> usize {
    1 + children(node)
        .into_iter()
        .map(tree_depth)
        .max()
        .unwrap_or(0)
}

/// Count pattern comprehensions in a generated pattern.
pub fn count_comprehensions(pattern: &str) -> usize {
    pattern.matches("[ (").count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_comprehensions() {
        assert_eq!(count_comprehensions("this { .* }"), 0);
        assert_eq!(
            count_comprehensions("this { a: [ (this)-[r:A]->(n) | n { .* } ], b: [ (this)-[s:B]->(m) | m { .* } ][0] }"),
            2
        );
    }
}
