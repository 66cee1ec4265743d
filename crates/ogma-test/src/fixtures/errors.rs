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

//! Invalid schema documents and malformed records.

use ogma_core::{RecordValue, EAGER_ID};

use super::builders::NodeRecord;

/// Schema documents that parse as JSON but must be rejected, as
/// (name, json) pairs.
pub fn invalid_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        ("unknown_key", r#"{"Person": {"propertys": {}}}"#),
        ("unknown_kind", r#"{"Person": {"properties": {"name": "text"}}}"#),
        (
            "bad_cardinality",
            r#"{"Person": {"relationships": {"friends": {"type": "many", "relationship": "FRIENDS", "direction": "out", "target": "Person"}}}}"#,
        ),
        (
            "bad_direction",
            r#"{"Person": {"relationships": {"friends": {"type": "nodes", "relationship": "FRIENDS", "direction": "both", "target": "Person"}}}}"#,
        ),
        ("not_an_object", r#"{"Person": []}"#),
    ]
}

/// Schema documents that parse but fail registry validation, as
/// (name, json) pairs.
pub fn conflicting_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        ("invalid_model_name", r#"{"Bad Name": {}}"#),
        (
            "relationship_shadows_property",
            r#"{"Person": {"properties": {"friends": "string"}, "relationships": {"friends": {"type": "nodes", "relationship": "FRIENDS", "direction": "out", "target": "Person"}}}}"#,
        ),
        (
            "reserved_property",
            r#"{"Person": {"properties": {"__EAGER_ID__": "integer"}}}"#,
        ),
    ]
}

/// Records the hydrator must reject, as (name, record) pairs.
pub fn malformed_records() -> Vec<(&'static str, RecordValue)> {
    vec![
        (
            "missing_identity",
            NodeRecord::new(1, &["Person"]).without(EAGER_ID).build(),
        ),
        (
            "string_identity",
            NodeRecord::new(1, &["Person"])
                .raw(EAGER_ID, RecordValue::from("1"))
                .build(),
        ),
        ("scalar", RecordValue::Int(1)),
        (
            "scalar_in_eager_slot",
            NodeRecord::new(1, &["Person"])
                .raw("friends", RecordValue::from("Bo"))
                .build(),
        ),
    ]
}
