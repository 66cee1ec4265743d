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

//! Schema documents behind the registry fixtures.

/// People, companies and movies.
///
/// `Person.friends` is eager and cyclic, so schema-eager expansion always
/// runs into the depth cap. `Movie.director` is an incoming edge.
pub const PEOPLE: &str = r#"{
  "Person": {
    "properties": {
      "person_id": { "type": "uuid", "primary": true },
      "name": "string",
      "age": "integer",
      "password": { "type": "string", "hidden": true }
    },
    "relationships": {
      "friends": {
        "type": "nodes",
        "relationship": "FRIENDS",
        "direction": "out",
        "target": "Person",
        "eager": true
      },
      "employer": {
        "type": "node",
        "relationship": "WORKS_AT",
        "direction": "out",
        "target": "Company"
      },
      "acted_in": {
        "type": "relationships",
        "relationship": "ACTED_IN",
        "direction": "out",
        "target": "Movie",
        "alias": "movie",
        "properties": { "role": "string" }
      }
    }
  },
  "Company": {
    "properties": {
      "name": "string"
    },
    "relationships": {
      "employees": {
        "type": "nodes",
        "relationship": "WORKS_AT",
        "direction": "in",
        "target": "Person"
      }
    }
  },
  "Movie": {
    "properties": {
      "title": "string",
      "released": "integer"
    },
    "relationships": {
      "director": {
        "type": "relationship",
        "relationship": "DIRECTED",
        "direction": "in",
        "target": "Person",
        "alias": "person",
        "properties": { "credited": "boolean" }
      }
    }
  }
}"#;

/// Authors with one eager relationship of every cardinality and nothing
/// eager below depth 2.
pub const LIBRARY: &str = r#"{
  "Author": {
    "properties": {
      "name": "string"
    },
    "relationships": {
      "books": {
        "type": "relationships",
        "relationship": "WROTE",
        "direction": "out",
        "target": "Book",
        "alias": "book",
        "eager": true,
        "properties": { "year": "integer" }
      },
      "agent": {
        "type": "node",
        "relationship": "REPRESENTED_BY",
        "direction": "out",
        "target": "Agent",
        "eager": true
      },
      "awards": {
        "type": "nodes",
        "relationship": "WON",
        "direction": "out",
        "target": "Award",
        "eager": true
      },
      "editor": {
        "type": "relationship",
        "relationship": "EDITS",
        "direction": "in",
        "target": "Editor",
        "alias": "editor",
        "eager": true,
        "properties": { "since": "integer" }
      }
    }
  },
  "Book": {
    "labels": ["Book", "Publication"],
    "properties": {
      "title": "string",
      "isbn": "string"
    },
    "relationships": {
      "publisher": {
        "type": "node",
        "relationship": "PUBLISHED_BY",
        "direction": "out",
        "target": "Publisher"
      }
    }
  },
  "Publisher": { "properties": { "name": "string" } },
  "Agent": { "properties": { "name": "string" } },
  "Editor": { "properties": { "name": "string" } },
  "Award": { "properties": { "name": "string", "year": "integer" } }
}"#;

/// A linear chain `A -> B -> C -> D -> E -> F` of lazy singular
/// relationships, each named after its target in lower case.
pub const CHAIN: &str = r#"{
  "A": { "properties": { "name": "string" },
         "relationships": { "b": { "type": "node", "relationship": "NEXT", "direction": "out", "target": "B" } } },
  "B": { "properties": { "name": "string" },
         "relationships": { "c": { "type": "node", "relationship": "NEXT", "direction": "out", "target": "C" } } },
  "C": { "properties": { "name": "string" },
         "relationships": { "d": { "type": "node", "relationship": "NEXT", "direction": "out", "target": "D" } } },
  "D": { "properties": { "name": "string" },
         "relationships": { "e": { "type": "node", "relationship": "NEXT", "direction": "out", "target": "E" } } },
  "E": { "properties": { "name": "string" },
         "relationships": { "f": { "type": "node", "relationship": "NEXT", "direction": "out", "target": "F" } } },
  "F": { "properties": { "name": "string" } }
}"#;

/// Returns every schema document as (name, json) pairs.
pub fn all_documents() -> Vec<(&'static str, &'static str)> {
    vec![("people", PEOPLE), ("library", LIBRARY), ("chain", CHAIN)]
}
