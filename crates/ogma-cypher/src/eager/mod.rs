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

//! Eager relationship selection.
//!
//! Which relationships of a node get loaded is decided in one place,
//! [`plan`], and both the pattern builder and the hydrator follow it. That
//! is what keeps the fields a query returns and the fields hydration looks
//! for in step.

pub mod pattern;

use ogma_core::{Model, RelationshipDefinition};
use std::fmt;

pub use ogma_core::{EAGER_ID, EAGER_LABELS, EAGER_TYPE};

/// Relationships are expanded only on nodes at this depth or above; the root
/// is depth 1.
pub const MAX_EAGER_DEPTH: usize = 3;

/// A set of dot-delimited relationship paths to force-load, such as
/// `"friends.employer"`.
///
/// Paths are trimmed, empty segments are dropped and duplicates collapse, so
/// asking for the same path twice is the same as asking once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EagerPaths {
    paths: Vec<String>,
}

impl EagerPaths {
    /// No requested paths.
    pub fn none() -> Self {
        Self::default()
    }

    /// Collect requested paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        for path in paths {
            out.push(path.as_ref());
        }
        out
    }

    fn push(&mut self, path: &str) {
        let normalized = path
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        if !normalized.is_empty() && !self.paths.contains(&normalized) {
            self.paths.push(normalized);
        }
    }

    /// Whether nothing is requested.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of distinct paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// The paths, in first-requested order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Distinct first segments.
    pub fn heads(&self) -> Vec<&str> {
        let mut heads: Vec<&str> = Vec::new();
        for path in &self.paths {
            let head = path.split('.').next().unwrap_or(path);
            if !heads.contains(&head) {
                heads.push(head);
            }
        }
        heads
    }

    /// Whether any path starts with `name`.
    pub fn requests(&self, name: &str) -> bool {
        self.heads().contains(&name)
    }

    /// Remainders of the paths that start with `name`.
    ///
    /// ```
    /// # use ogma_cypher::EagerPaths;
    /// let paths = EagerPaths::new(["friends.employer", "friends", "movies.director"]);
    /// assert_eq!(paths.descend("friends"), EagerPaths::new(["employer"]));
    /// assert!(paths.descend("employer").is_empty());
    /// ```
    pub fn descend(&self, name: &str) -> EagerPaths {
        EagerPaths::new(self.paths.iter().filter_map(|path| {
            let (head, rest) = path.split_once('.')?;
            (head == name).then_some(rest)
        }))
    }
}

impl<S: AsRef<str>> FromIterator<S> for EagerPaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        EagerPaths::new(iter)
    }
}

impl fmt::Display for EagerPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.paths.join(", "))
    }
}

/// One relationship selected for loading.
#[derive(Debug, Clone, PartialEq)]
pub struct EagerSelection<'m> {
    /// The relationship definition.
    pub relationship: &'m RelationshipDefinition,
    /// Requested paths to thread below this relationship.
    pub requested: EagerPaths,
    /// Whether the relationship is loaded only because a path asked for it.
    pub forced: bool,
}

/// Decide which relationships of `model` to load for `requested`.
///
/// Schema-eager relationships come first in declared order, then the
/// relationships named by the first segment of a requested path, also in
/// declared order. Names the model does not declare are ignored.
pub fn plan<'m>(model: &'m Model, requested: &EagerPaths) -> Vec<EagerSelection<'m>> {
    for head in requested.heads() {
        if model.relationship(head).is_none() {
            tracing::debug!(model = %model.name, relationship = head, "ignoring unknown eager path");
        }
    }

    let forced = model
        .relationships
        .iter()
        .filter(|rel| !rel.eager && requested.requests(&rel.name));

    model
        .eager()
        .into_iter()
        .chain(forced)
        .map(|relationship| EagerSelection {
            relationship,
            requested: requested.descend(&relationship.name),
            forced: !relationship.eager,
        })
        .collect()
}

/// Variables bound to the edge and the far node of relationship `name`
/// below `alias`.
///
/// ```
/// # use ogma_cypher::eager::child_variables;
/// assert_eq!(
///     child_variables("this", "friends"),
///     ("this_friends_rel".to_string(), "this_friends_node".to_string())
/// );
/// ```
pub fn child_variables(alias: &str, name: &str) -> (String, String) {
    (
        format!("{}_{}_rel", alias, name),
        format!("{}_{}_node", alias, name),
    )
}
