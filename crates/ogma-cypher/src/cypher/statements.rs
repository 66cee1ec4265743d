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

//! Parameterised Cypher statements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::escape::{escape_identifier, quote_string};

/// A Cypher parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CypherValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// List value.
    List(Vec<CypherValue>),
    /// Map value.
    Map(BTreeMap<String, CypherValue>),
}

impl From<bool> for CypherValue {
    fn from(v: bool) -> Self {
        CypherValue::Bool(v)
    }
}

impl From<i64> for CypherValue {
    fn from(v: i64) -> Self {
        CypherValue::Int(v)
    }
}

impl From<i32> for CypherValue {
    fn from(v: i32) -> Self {
        CypherValue::Int(v as i64)
    }
}

impl From<f64> for CypherValue {
    fn from(v: f64) -> Self {
        CypherValue::Float(v)
    }
}

impl From<String> for CypherValue {
    fn from(v: String) -> Self {
        CypherValue::String(v)
    }
}

impl From<&str> for CypherValue {
    fn from(v: &str) -> Self {
        CypherValue::String(v.to_string())
    }
}

impl<T: Into<CypherValue>> From<Vec<T>> for CypherValue {
    fn from(v: Vec<T>) -> Self {
        CypherValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CypherValue>> From<Option<T>> for CypherValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CypherValue::Null)
    }
}

impl From<BTreeMap<String, CypherValue>> for CypherValue {
    fn from(v: BTreeMap<String, CypherValue>) -> Self {
        CypherValue::Map(v)
    }
}

impl CypherValue {
    /// Render as a Cypher literal.
    pub fn to_cypher_literal(&self) -> String {
        match self {
            CypherValue::Null => "null".to_string(),
            CypherValue::Bool(b) => b.to_string(),
            CypherValue::Int(i) => i.to_string(),
            CypherValue::Float(f) => {
                if f.is_nan() {
                    "0.0/0.0".to_string()
                } else if f.is_infinite() {
                    let literal = if *f > 0.0 { "1.0/0.0" } else { "-1.0/0.0" };
                    literal.to_string()
                } else {
                    let s = f.to_string();
                    if s.contains(['.', 'e', 'E']) {
                        s
                    } else {
                        format!("{}.0", s)
                    }
                }
            }
            CypherValue::String(s) => quote_string(s),
            CypherValue::List(items) => {
                let inner: Vec<String> = items.iter().map(|v| v.to_cypher_literal()).collect();
                format!("[{}]", inner.join(", "))
            }
            CypherValue::Map(map) => {
                let pairs: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{}: {}", escape_identifier(k), v.to_cypher_literal()))
                    .collect();
                format!("{{{}}}", pairs.join(", "))
            }
        }
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CypherValue::Null)
    }

    /// Try to get as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CypherValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CypherValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// Access mode a statement needs from the session running it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Read-only statement.
    #[default]
    Read,
    /// Statement that writes.
    Write,
}

/// A Cypher statement with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CypherStatement {
    /// The Cypher query text.
    pub query: String,
    /// Parameters referenced from the query as `$name`.
    pub parameters: BTreeMap<String, CypherValue>,
    /// Access mode.
    pub mode: AccessMode,
    /// Optional comment describing the statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CypherStatement {
    /// Create a statement.
    pub fn new(query: impl Into<String>, mode: AccessMode) -> Self {
        Self {
            query: query.into(),
            parameters: BTreeMap::new(),
            mode,
            comment: None,
        }
    }

    /// Create a read statement.
    pub fn read(query: impl Into<String>) -> Self {
        Self::new(query, AccessMode::Read)
    }

    /// Add a parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<CypherValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Add several parameters.
    pub fn with_params(mut self, params: impl IntoIterator<Item = (String, CypherValue)>) -> Self {
        self.parameters.extend(params);
        self
    }

    /// Add a comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Check if this statement has parameters.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Render the query with parameter values inlined.
    ///
    /// Longer parameter names are substituted first so `$this_name` never
    /// clobbers the prefix of `$this_name_2`.
    pub fn render_inline(&self) -> String {
        let mut names: Vec<&String> = self.parameters.keys().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut result = self.query.clone();
        for name in names {
            let placeholder = format!("${}", name);
            result = result.replace(&placeholder, &self.parameters[name].to_cypher_literal());
        }
        result
    }

    /// Format as an executable statement, optionally with its comment.
    pub fn format(&self, include_comment: bool) -> String {
        let mut lines = Vec::new();
        if include_comment {
            if let Some(comment) = &self.comment {
                lines.push(format!("// {}", comment));
            }
        }
        lines.push(format!("{};", self.render_inline()));
        lines.join("\n")
    }
}
