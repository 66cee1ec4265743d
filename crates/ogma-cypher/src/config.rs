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

//! Configuration for pattern building and hydration.

use ogma_core::{TenantScope, DEFAULT_TENANT_PREFIX};
use serde::{Deserialize, Serialize};

/// Default variable bound to the root node of a query.
pub const DEFAULT_ROOT_ALIAS: &str = "this";

/// What to do when requested eager paths reach past the depth cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Drop the deeper segments without notice.
    #[default]
    Silent,
    /// Drop the deeper segments and log a warning.
    Warn,
    /// Fail with [`OgmaError::DepthExceeded`](crate::OgmaError::DepthExceeded).
    Reject,
}

/// Configuration shared by the pattern builder, hydrator and finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EagerConfig {
    /// Variable bound to the root node (default: "this").
    pub root_alias: String,

    /// Render projections over several indented lines (default: false).
    pub pretty: bool,

    /// Prefix of tenant labels (default: "cid_").
    pub tenant_prefix: String,

    /// Handling of requested paths deeper than the depth cap.
    pub truncation: TruncationPolicy,
}

impl Default for EagerConfig {
    fn default() -> Self {
        Self {
            root_alias: DEFAULT_ROOT_ALIAS.to_string(),
            pretty: false,
            tenant_prefix: DEFAULT_TENANT_PREFIX.to_string(),
            truncation: TruncationPolicy::Silent,
        }
    }
}

impl EagerConfig {
    /// Create a builder.
    pub fn builder() -> EagerConfigBuilder {
        EagerConfigBuilder::new()
    }

    /// Set the root variable.
    pub fn with_root_alias(mut self, alias: impl Into<String>) -> Self {
        self.root_alias = alias.into();
        self
    }

    /// Enable or disable multi-line projections.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the tenant label prefix.
    pub fn with_tenant_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tenant_prefix = prefix.into();
        self
    }

    /// Set the truncation policy.
    pub fn with_truncation(mut self, policy: TruncationPolicy) -> Self {
        self.truncation = policy;
        self
    }

    /// Tenant scope for the configured prefix.
    pub fn tenant_scope(&self) -> TenantScope {
        TenantScope::new(self.tenant_prefix.clone())
    }
}

/// Builder for [`EagerConfig`].
///
/// ```
/// # use ogma_cypher::{EagerConfig, TruncationPolicy};
/// let config = EagerConfig::builder()
///     .pretty(true)
///     .truncation(TruncationPolicy::Reject)
///     .build();
/// assert_eq!(config.root_alias, "this");
/// assert!(config.pretty);
/// ```
#[derive(Debug, Default)]
pub struct EagerConfigBuilder {
    root_alias: Option<String>,
    pretty: Option<bool>,
    tenant_prefix: Option<String>,
    truncation: Option<TruncationPolicy>,
}

impl EagerConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root variable.
    pub fn root_alias(mut self, alias: impl Into<String>) -> Self {
        self.root_alias = Some(alias.into());
        self
    }

    /// Set whether projections span several lines.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Set the tenant label prefix.
    pub fn tenant_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tenant_prefix = Some(prefix.into());
        self
    }

    /// Set the truncation policy.
    pub fn truncation(mut self, policy: TruncationPolicy) -> Self {
        self.truncation = Some(policy);
        self
    }

    /// Build the configuration, using defaults for unset values.
    pub fn build(self) -> EagerConfig {
        let defaults = EagerConfig::default();
        EagerConfig {
            root_alias: self.root_alias.unwrap_or(defaults.root_alias),
            pretty: self.pretty.unwrap_or(defaults.pretty),
            tenant_prefix: self.tenant_prefix.unwrap_or(defaults.tenant_prefix),
            truncation: self.truncation.unwrap_or(defaults.truncation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EagerConfig::default();
        assert_eq!(config.root_alias, "this");
        assert!(!config.pretty);
        assert_eq!(config.tenant_prefix, "cid_");
        assert_eq!(config.truncation, TruncationPolicy::Silent);
    }

    #[test]
    fn test_builder_matches_fluent_setters() {
        let built = EagerConfig::builder()
            .root_alias("n")
            .pretty(true)
            .tenant_prefix("tenant_")
            .truncation(TruncationPolicy::Warn)
            .build();
        let fluent = EagerConfig::default()
            .with_root_alias("n")
            .with_pretty(true)
            .with_tenant_prefix("tenant_")
            .with_truncation(TruncationPolicy::Warn);
        assert_eq!(built, fluent);
    }

    #[test]
    fn test_tenant_scope_uses_prefix() {
        let config = EagerConfig::default().with_tenant_prefix("t_");
        assert_eq!(config.tenant_scope().label("a-b"), "t_a_b");
    }

    #[test]
    fn test_partial_json() {
        let config: EagerConfig =
            serde_json::from_str(r#"{"pretty": true, "truncation": "reject"}"#).unwrap();
        assert!(config.pretty);
        assert_eq!(config.truncation, TruncationPolicy::Reject);
        assert_eq!(config.root_alias, "this");
    }
}
