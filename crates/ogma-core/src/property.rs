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

//! Property definitions for models and relationships.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared kind of a property.
///
/// Kinds are informational for the eager-loading core: hydration copies
/// values as returned by the store and only uses the property *names* as a
/// whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// UTF-8 string.
    String,
    /// 64-bit integer.
    #[serde(alias = "int")]
    Integer,
    /// 64-bit float.
    Float,
    /// Any numeric value.
    Number,
    /// Boolean.
    #[serde(alias = "bool")]
    Boolean,
    /// UUID stored as a string.
    Uuid,
    /// Calendar date.
    Date,
    /// Zoned date-time.
    DateTime,
    /// Date-time without zone.
    LocalDateTime,
    /// Zoned time.
    Time,
    /// Time without zone.
    LocalTime,
    /// Duration.
    Duration,
    /// Spatial point.
    Point,
    /// Homogeneous list.
    List,
    /// Nested map.
    Map,
}

impl PropertyKind {
    /// Schema keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Integer => "integer",
            PropertyKind::Float => "float",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Uuid => "uuid",
            PropertyKind::Date => "date",
            PropertyKind::DateTime => "datetime",
            PropertyKind::LocalDateTime => "localdatetime",
            PropertyKind::Time => "time",
            PropertyKind::LocalTime => "localtime",
            PropertyKind::Duration => "duration",
            PropertyKind::Point => "point",
            PropertyKind::List => "list",
            PropertyKind::Map => "map",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declared property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Property name as stored in the graph.
    pub name: String,
    /// Declared kind.
    pub kind: PropertyKind,
    /// Whether this property is the model's primary key.
    pub primary: bool,
    /// Whether a value is required on write.
    pub required: bool,
    /// Hidden properties are hydrated but left out of JSON output.
    pub hidden: bool,
}

impl PropertyDefinition {
    /// Create a plain, optional, visible property.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primary: false,
            required: false,
            hidden: false,
        }
    }

    /// Mark as primary key.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as hidden from JSON output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}
