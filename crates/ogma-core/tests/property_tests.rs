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

//! Property-based tests for label handling and name validation.

use ogma_core::{is_identifier, label_key, Model, ModelRegistry, TenantScope};
use proptest::prelude::*;

proptest! {
    /// The label key ignores order and repetition.
    #[test]
    fn prop_label_key_order_insensitive(labels in prop::collection::vec("[A-Z][a-z]{0,6}", 1..5)) {
        let mut reversed = labels.clone();
        reversed.reverse();
        let mut doubled = labels.clone();
        doubled.extend(labels.iter().cloned());
        prop_assert_eq!(label_key(&labels), label_key(&reversed));
        prop_assert_eq!(label_key(&labels), label_key(&doubled));
    }

    /// A model is found by its labels in any order, with tenant labels
    /// removed first.
    #[test]
    fn prop_registry_resolves_shuffled_labels(
        labels in prop::collection::btree_set("[A-Z][a-z]{0,6}", 1..4),
        customer in "[a-z0-9]{1,6}",
    ) {
        let labels: Vec<String> = labels.into_iter().collect();
        let registry = ModelRegistry::builder()
            .register(Model::new("Thing").with_labels(labels.clone()))
            .build()
            .unwrap();

        let scope = TenantScope::default();
        let mut stored = labels.clone();
        stored.reverse();
        stored.push(scope.label(&customer));

        let stripped = scope.strip(&stored);
        prop_assert_eq!(stripped.len(), labels.len());
        prop_assert_eq!(
            registry.get_by_labels(stripped.as_slice()).map(|m| m.name.as_str()),
            Some("Thing")
        );
    }

    /// Customer ids survive the trip through a tenant label.
    #[test]
    fn prop_tenant_label_round_trip(customer in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}") {
        let scope = TenantScope::default();
        let label = scope.label(&customer);
        prop_assert!(is_identifier(&label));
        prop_assert_eq!(scope.customer_id(&[label]), Some(customer));
    }

    /// Names made of identifier characters are accepted unless they start
    /// with a digit.
    #[test]
    fn prop_identifier_rules(name in "[A-Za-z0-9_]{1,12}") {
        let starts_with_digit = name.chars().next().map_or(false, |c| c.is_ascii_digit());
        prop_assert_eq!(is_identifier(&name), !starts_with_digit);
    }

    /// Anything containing a non-identifier character is rejected.
    #[test]
    fn prop_identifier_rejects_punctuation(
        prefix in "[a-z]{0,4}",
        bad in "[ .:`\\-]",
        suffix in "[a-z]{0,4}",
    ) {
        let name = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(!is_identifier(&name));
    }
}
