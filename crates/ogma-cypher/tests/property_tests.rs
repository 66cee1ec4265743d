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

//! Property-based tests for pattern generation and escaping.
//!
//! Test coverage:
//! - Requested path normalization and deduplication
//! - Pattern determinism and order independence
//! - Depth cap on arbitrary requested paths
//! - Identifier and label escaping

use ogma_cypher::cypher::{
    escape_identifier, escape_label, escape_string, is_valid_identifier, quote_string,
};
use ogma_cypher::{EagerConfig, EagerPaths, PatternBuilder, MAX_EAGER_DEPTH};
use ogma_test::{count_comprehensions, fixtures};
use proptest::prelude::*;

/// Dot-joined paths over the relationship names of the chain fixture.
fn chain_path() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["b", "c", "d", "e", "f", "x"]), 1..7)
        .prop_map(|segments| segments.join("."))
}

/// Paths over the people fixture, including unknown names.
fn people_path() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["friends", "employer", "employees", "acted_in", "director", "ghost"]),
        1..5,
    )
    .prop_map(|segments| segments.join("."))
}

// ============================================================================
// Requested Paths
// ============================================================================

proptest! {
    /// Listing every path twice changes nothing.
    #[test]
    fn prop_paths_dedupe(paths in prop::collection::vec("[a-z]{1,4}(\\.[a-z]{1,4}){0,3}", 0..6)) {
        let once = EagerPaths::new(&paths);
        let twice = EagerPaths::new(paths.iter().chain(paths.iter()));
        prop_assert_eq!(once, twice);
    }

    /// Normalized paths never contain empty segments or padding.
    #[test]
    fn prop_paths_normalized(paths in prop::collection::vec("[a-z .]{0,12}", 0..6)) {
        let normalized = EagerPaths::new(&paths);
        for path in normalized.iter() {
            prop_assert!(!path.is_empty());
            prop_assert!(path.split('.').all(|s| !s.is_empty() && s.trim() == s));
        }
    }

    /// Descending never yields a path longer than its source.
    #[test]
    fn prop_descend_shortens(paths in prop::collection::vec(people_path(), 0..6)) {
        let requested = EagerPaths::new(&paths);
        for head in requested.heads() {
            let rest = requested.descend(head);
            prop_assert!(rest.len() <= requested.len());
            for path in rest.iter() {
                let full = format!("{}.{}", head, path);
                prop_assert!(requested.iter().any(|p| p == full));
            }
        }
    }
}

// ============================================================================
// Pattern Generation
// ============================================================================

proptest! {
    /// Building the same pattern twice gives the same text.
    #[test]
    fn prop_pattern_deterministic(paths in prop::collection::vec(people_path(), 0..5)) {
        let registry = fixtures::people();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);
        let requested = EagerPaths::new(&paths);

        let first = builder.build("Person", &requested).unwrap();
        let second = builder.build("Person", &requested).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The order in which paths are requested does not matter.
    #[test]
    fn prop_pattern_order_independent(paths in prop::collection::vec(people_path(), 0..5)) {
        let registry = fixtures::people();
        let config = EagerConfig::default();
        let builder = PatternBuilder::new(&registry, &config);

        let mut reversed = paths.clone();
        reversed.reverse();
        let forward = builder.build("Person", &EagerPaths::new(&paths)).unwrap();
        let backward = builder.build("Person", &EagerPaths::new(&reversed)).unwrap();
        prop_assert_eq!(forward, backward);
    }

    /// A linear chain never yields more comprehensions than the depth cap.
    #[test]
    fn prop_chain_depth_capped(paths in prop::collection::vec(chain_path(), 0..4)) {
        let registry = fixtures::chain();
        let config = EagerConfig::default();
        let pattern = PatternBuilder::new(&registry, &config)
            .build("A", &EagerPaths::new(&paths))
            .unwrap();
        prop_assert!(count_comprehensions(&pattern) <= MAX_EAGER_DEPTH);
    }

    /// Compact and pretty renderings differ only in whitespace.
    #[test]
    fn prop_pretty_only_changes_whitespace(paths in prop::collection::vec(people_path(), 0..4)) {
        let registry = fixtures::people();
        let compact = EagerConfig::default();
        let pretty = EagerConfig::default().with_pretty(true);
        let requested = EagerPaths::new(&paths);

        let a = PatternBuilder::new(&registry, &compact).build("Person", &requested).unwrap();
        let b = PatternBuilder::new(&registry, &pretty).build("Person", &requested).unwrap();
        let squash = |s: &str| s.split_whitespace().collect::<String>();
        prop_assert_eq!(squash(&a), squash(&b));
    }
}

// ============================================================================
// Escaping
// ============================================================================

proptest! {
    /// Escaped identifiers are plain or fully backtick-quoted.
    #[test]
    fn prop_escape_identifier_is_safe(s in "\\PC*") {
        let escaped = escape_identifier(&s);
        if !is_valid_identifier(&escaped) {
            prop_assert!(escaped.starts_with('`'));
            prop_assert!(escaped.ends_with('`'));
            let inner = &escaped[1..escaped.len() - 1];
            prop_assert!(!inner.replace("``", "").contains('`'));
        }
    }

    /// Labels never carry control characters into a query.
    #[test]
    fn prop_escape_label_drops_controls(s in ".*") {
        let escaped = escape_label(&s);
        prop_assert!(escaped.starts_with(':'));
        prop_assert!(!escaped.chars().any(char::is_control));
    }

    /// Plain identifiers pass through unchanged apart from reserved words.
    #[test]
    fn prop_plain_identifier_unchanged(s in "[a-z_][a-z0-9_]{0,10}_x") {
        prop_assert_eq!(escape_identifier(&s), s);
    }

    /// Quoted literals contain no bare newlines.
    #[test]
    fn prop_quote_string_single_line(s in ".*") {
        let quoted = quote_string(&s);
        prop_assert!(quoted.starts_with('\''));
        prop_assert!(quoted.ends_with('\''));
        prop_assert!(!escape_string(&s).contains('\n'));
    }
}
