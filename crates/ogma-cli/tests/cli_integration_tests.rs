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

//! CLI integration tests

use assert_cmd::Command;
use ogma_test::fixtures::schemas;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn ogma_cmd() -> Command {
    Command::cargo_bin("ogma").expect("Failed to find ogma binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

const ANN_ROWS: &str = r#"[
  {"this": {"__EAGER_ID__": 1, "__EAGER_LABELS__": ["Person"], "name": "Ann", "age": 30,
            "secretInternal": "x",
            "friends": [{"__EAGER_ID__": 2, "__EAGER_LABELS__": ["Person"], "name": "Bo"}]}},
  {"this": null}
]"#;

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    ogma_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("OGMA - Object Graph Mapper toolkit"))
        .stdout(predicate::str::contains("pattern"))
        .stdout(predicate::str::contains("hydrate"));
}

#[test]
fn test_no_subcommand_fails() {
    ogma_cmd().assert().failure();
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_lists_models() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");

    ogma_cmd()
        .env("NO_COLOR", "1")
        .arg("inspect")
        .arg("--schema")
        .arg(schema.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Models:  3"))
        .stdout(predicate::str::contains("Person"))
        .stdout(predicate::str::contains("director: <-[:DIRECTED]- Person (relationship)"))
        .stdout(predicate::str::contains("friends: -[:FRIENDS]-> Person (nodes) eager"));
}

#[test]
fn test_inspect_schema_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("Person.json"),
        r#"{"properties": {"name": "string"}}"#,
    )
    .unwrap();

    ogma_cmd()
        .arg("inspect")
        .arg("--schema")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Person"));
}

#[test]
fn test_inspect_invalid_schema() {
    let schema = create_temp_file(r#"{"Person": {"properties": {"name": "text"}}}"#, ".json");

    ogma_cmd()
        .arg("inspect")
        .arg("--schema")
        .arg(schema.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema error"));
}

#[test]
fn test_inspect_missing_file() {
    ogma_cmd()
        .arg("inspect")
        .arg("--schema")
        .arg("/nonexistent/schema.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

// ===== Pattern Command Tests =====

#[test]
fn test_pattern_for_model_without_eager_relationships() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");

    ogma_cmd()
        .arg("pattern")
        .arg("--schema")
        .arg(schema.path())
        .arg("Company")
        .assert()
        .success()
        .stdout("this { .*, __EAGER_ID__: id(this), __EAGER_LABELS__: labels(this) }\n");
}

#[test]
fn test_pattern_with_requested_paths() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");

    ogma_cmd()
        .arg("pattern")
        .arg("--schema")
        .arg(schema.path())
        .arg("Movie")
        .arg("--with")
        .arg("director")
        .arg("--alias")
        .arg("m")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("m { .*"))
        .stdout(predicate::str::contains(
            "(m)<-[m_director_rel:DIRECTED]-(m_director_node:Person)",
        ));
}

#[test]
fn test_pattern_tenant_and_pretty() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");

    ogma_cmd()
        .arg("pattern")
        .arg("--schema")
        .arg(schema.path())
        .arg("Person")
        .arg("--tenant")
        .arg("acme-1")
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("(this_friends_node:Person:cid_acme_1)"))
        .stdout(predicate::str::contains("this {\n  .*,\n"));
}

#[test]
fn test_pattern_config_file_rejects_deep_paths() {
    let schema = create_temp_file(schemas::CHAIN, ".json");
    let config = create_temp_file(r#"{"truncation": "reject"}"#, ".json");

    ogma_cmd()
        .arg("pattern")
        .arg("--schema")
        .arg(schema.path())
        .arg("A")
        .arg("--with")
        .arg("b.c.d.e")
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum eager depth"));
}

#[test]
fn test_pattern_unknown_model() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");

    ogma_cmd()
        .arg("pattern")
        .arg("--schema")
        .arg(schema.path())
        .arg("Ghost")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ghost"));
}

// ===== Hydrate Command Tests =====

#[test]
fn test_hydrate_rows() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");
    let rows = create_temp_file(ANN_ROWS, ".json");

    ogma_cmd()
        .arg("hydrate")
        .arg("--schema")
        .arg(schema.path())
        .arg("--rows")
        .arg(rows.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{"))
        .stdout(predicate::str::contains("\"name\":\"Ann\""))
        .stdout(predicate::str::contains("\"name\":\"Bo\""))
        .stdout(predicate::str::contains("secretInternal").not());
}

#[test]
fn test_hydrate_first_pretty() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");
    let rows = create_temp_file(ANN_ROWS, ".json");

    ogma_cmd()
        .arg("hydrate")
        .arg("--schema")
        .arg(schema.path())
        .arg("--rows")
        .arg(rows.path())
        .arg("--model")
        .arg("Person")
        .arg("--first")
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"))
        .stdout(predicate::str::contains("\"_id\": 1"));
}

#[test]
fn test_hydrate_empty_rows_first_prints_null() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");
    let rows = create_temp_file("[]", ".json");

    ogma_cmd()
        .arg("hydrate")
        .arg("--schema")
        .arg(schema.path())
        .arg("--rows")
        .arg(rows.path())
        .arg("--first")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_hydrate_missing_column() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");
    let rows = create_temp_file(ANN_ROWS, ".json");

    ogma_cmd()
        .arg("hydrate")
        .arg("--schema")
        .arg(schema.path())
        .arg("--rows")
        .arg(rows.path())
        .arg("--alias")
        .arg("n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no column 'n'"));
}

#[test]
fn test_hydrate_rejects_non_array_rows() {
    let schema = create_temp_file(schemas::PEOPLE, ".json");
    let rows = create_temp_file(r#"{"this": 1}"#, ".json");

    ogma_cmd()
        .arg("hydrate")
        .arg("--schema")
        .arg(schema.path())
        .arg("--rows")
        .arg(rows.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}
