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

//! Multi-tenant label scoping.
//!
//! A tenant-scoped node carries one extra label, `<prefix><customer id>`,
//! with dashes in the customer id replaced by underscores so the label stays
//! a plain identifier. The label is added when matching and stripped before
//! a node's labels are used to resolve its model.

use serde::{Deserialize, Serialize};

/// Default prefix of tenant labels.
pub const DEFAULT_TENANT_PREFIX: &str = "cid_";

/// Derives and recognises tenant labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantScope {
    prefix: String,
}

impl Default for TenantScope {
    fn default() -> Self {
        Self::new(DEFAULT_TENANT_PREFIX)
    }
}

impl TenantScope {
    /// Create a scope with a custom label prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The label prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Tenant label for a customer id.
    ///
    /// ```
    /// # use ogma_core::TenantScope;
    /// let scope = TenantScope::default();
    /// assert_eq!(scope.label("3f2a-77"), "cid_3f2a_77");
    /// ```
    pub fn label(&self, customer_id: &str) -> String {
        format!("{}{}", self.prefix, customer_id.replace('-', "_"))
    }

    /// Whether a label is a tenant label.
    pub fn is_tenant_label(&self, label: &str) -> bool {
        label.starts_with(&self.prefix)
    }

    /// Recover the customer id from a node's labels.
    pub fn customer_id<S: AsRef<str>>(&self, labels: &[S]) -> Option<String> {
        labels
            .iter()
            .map(AsRef::as_ref)
            .find(|l| self.is_tenant_label(l))
            .map(|l| l[self.prefix.len()..].replace('_', "-"))
    }

    /// Labels with every tenant label removed.
    pub fn strip<'a, S: AsRef<str>>(&self, labels: &'a [S]) -> Vec<&'a str> {
        labels
            .iter()
            .map(AsRef::as_ref)
            .filter(|l| !self.is_tenant_label(l))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_replaces_dashes() {
        let scope = TenantScope::default();
        assert_eq!(
            scope.label("0b7c-4d2e-9f"),
            "cid_0b7c_4d2e_9f".to_string()
        );
    }

    #[test]
    fn test_customer_id_roundtrip() {
        let scope = TenantScope::default();
        let labels = vec!["Person".to_string(), scope.label("0b7c-4d2e")];
        assert_eq!(scope.customer_id(&labels), Some("0b7c-4d2e".to_string()));
        assert_eq!(scope.customer_id(&["Person"]), None);
    }

    #[test]
    fn test_strip_removes_tenant_labels_only() {
        let scope = TenantScope::default();
        let labels = ["Person", "cid_42", "Admin"];
        assert_eq!(scope.strip(&labels), vec!["Person", "Admin"]);
    }

    #[test]
    fn test_custom_prefix() {
        let scope = TenantScope::new("tenant_");
        assert_eq!(scope.label("acme"), "tenant_acme");
        assert!(scope.is_tenant_label("tenant_acme"));
        assert!(!scope.is_tenant_label("cid_acme"));
    }
}
