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

//! Canonical records matching the registry fixtures.

use ogma_core::RecordValue;

use super::builders::{EdgeRecord, NodeRecord};

/// Ann (30, identity 1) with her friend Bo (25, identity 2), for
/// [`registries::friends`](super::registries::friends).
pub fn ann_and_bo() -> RecordValue {
    NodeRecord::new(1, &["Person"])
        .property("name", "Ann")
        .property("age", 30i64)
        .many(
            "friends",
            vec![NodeRecord::new(2, &["Person"])
                .property("name", "Bo")
                .property("age", 25i64)],
        )
        .build()
}

/// A person carrying an undeclared `secretInternal` field.
pub fn person_with_secret() -> RecordValue {
    NodeRecord::new(5, &["Person"])
        .property("name", "Eve")
        .property("secretInternal", "do not leak")
        .build()
}

/// Movie 3 directed by person 7 through edge 30, for
/// [`registries::people`](super::registries::people).
pub fn movie_with_director() -> RecordValue {
    NodeRecord::new(3, &["Movie"])
        .property("title", "Heat")
        .edge(
            "director",
            EdgeRecord::new(30, "DIRECTED")
                .property("credited", true)
                .node("person", NodeRecord::new(7, &["Person"]).property("name", "Mann")),
        )
        .build()
}

/// Person 3 who acted in movie 7 through edge 31.
pub fn actor_with_role() -> RecordValue {
    NodeRecord::new(3, &["Person"])
        .property("name", "Pacino")
        .edges(
            "acted_in",
            vec![EdgeRecord::new(31, "ACTED_IN")
                .property("role", "Vincent")
                .node("movie", NodeRecord::new(7, &["Movie"]).property("title", "Heat"))],
        )
        .build()
}

/// An author with every eager relationship of
/// [`registries::library`](super::registries::library) populated.
pub fn author_with_everything() -> RecordValue {
    NodeRecord::new(1, &["Author"])
        .property("name", "Le Guin")
        .edges(
            "books",
            vec![
                EdgeRecord::new(10, "WROTE")
                    .property("year", 1969i64)
                    .node(
                        "book",
                        NodeRecord::new(11, &["Book", "Publication"])
                            .property("title", "The Left Hand of Darkness"),
                    ),
                EdgeRecord::new(12, "WROTE")
                    .property("year", 1974i64)
                    .node(
                        "book",
                        NodeRecord::new(13, &["Publication", "Book"])
                            .property("title", "The Dispossessed"),
                    ),
            ],
        )
        .one(
            "agent",
            NodeRecord::new(20, &["Agent"]).property("name", "Kidd"),
        )
        .many(
            "awards",
            vec![NodeRecord::new(30, &["Award"])
                .property("name", "Hugo")
                .property("year", 1970i64)],
        )
        .edge(
            "editor",
            EdgeRecord::new(40, "EDITS")
                .property("since", 1968i64)
                .node("editor", NodeRecord::new(41, &["Editor"]).property("name", "Carr")),
        )
        .build()
}
