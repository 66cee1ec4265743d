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

//! Escaping of names and literals embedded in generated Cypher.
//!
//! Model names, labels and edge types come from schema definitions, not from
//! end users, but they still end up spliced into query text. Everything
//! spliced in goes through one of these functions; values always travel as
//! parameters.

use crate::error::{OgmaError, Result};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

#[inline]
fn needs_escaping(s: &str) -> bool {
    s.chars()
        .any(|ch| matches!(ch, '\\' | '\'' | '"' | '\n' | '\r' | '\t' | '\x00'))
}

/// Escape a string for use inside a quoted Cypher literal.
///
/// Clean strings are returned borrowed.
///
/// ```
/// # use ogma_cypher::cypher::escape_string;
/// assert!(matches!(escape_string("Ann"), std::borrow::Cow::Borrowed(_)));
/// assert_eq!(escape_string("O'Neil"), "O\\'Neil");
/// ```
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x00' => escaped.push_str("\\u0000"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Quote a string as a single-quoted Cypher literal.
pub fn quote_string(s: &str) -> String {
    format!("'{}'", escape_string(s))
}

/// Check if a string is a plain Cypher identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    ogma_core::is_identifier(s)
}

/// Validate a variable name used verbatim in generated queries.
///
/// Variables are concatenated into child variables, so unlike labels they
/// cannot be backtick-quoted; reserved words are rejected too.
pub fn validate_variable(s: &str) -> Result<&str> {
    if is_valid_identifier(s) && !is_reserved_word(s) {
        Ok(s)
    } else {
        Err(OgmaError::InvalidIdentifier(s.to_string()))
    }
}

/// Normalize a string to NFC form.
///
/// ```
/// # use ogma_cypher::cypher::normalize_unicode;
/// assert_eq!(normalize_unicode("cafe\u{301}"), "caf\u{e9}");
/// ```
pub fn normalize_unicode(s: &str) -> String {
    s.nfc().collect()
}

// Control, zero-width and bidi formatting characters never survive into a
// query.
fn is_dangerous_unicode(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{200B}'
                | '\u{200C}'
                | '\u{200D}'
                | '\u{FEFF}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2066}'..='\u{2069}'
                | '\u{00AD}'
                | '\u{061C}'
                | '\u{180E}'
        )
}

fn sanitize(s: &str) -> String {
    normalize_unicode(s)
        .chars()
        .filter(|c| !is_dangerous_unicode(*c))
        .collect()
}

fn quote_if_needed(name: String) -> String {
    if is_valid_identifier(&name) && !is_reserved_word(&name) {
        name
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}

/// Escape a name for use as a map key or property name.
///
/// ```
/// # use ogma_cypher::cypher::escape_identifier;
/// assert_eq!(escape_identifier("friends"), "friends");
/// assert_eq!(escape_identifier("node"), "`node`");
/// assert_eq!(escape_identifier("first name"), "`first name`");
/// ```
pub fn escape_identifier(s: &str) -> String {
    quote_if_needed(sanitize(s))
}

/// Escape a label, including its leading colon.
///
/// ```
/// # use ogma_cypher::cypher::escape_label;
/// assert_eq!(escape_label("Person"), ":Person");
/// assert_eq!(escape_label("cid_a-b"), ":`cid_a-b`");
/// ```
pub fn escape_label(s: &str) -> String {
    format!(":{}", quote_if_needed(sanitize(s)))
}

/// Escape a relationship type, including its leading colon.
///
/// ```
/// # use ogma_cypher::cypher::escape_relationship_type;
/// assert_eq!(escape_relationship_type("ACTED_IN"), ":ACTED_IN");
/// ```
pub fn escape_relationship_type(s: &str) -> String {
    escape_label(s)
}

/// Check if a word is reserved in Cypher, case-insensitively.
pub fn is_reserved_word(s: &str) -> bool {
    matches!(
        s.to_uppercase().as_str(),
        "ALL"
            | "AND"
            | "ANY"
            | "AS"
            | "ASC"
            | "ASCENDING"
            | "BY"
            | "CALL"
            | "CASE"
            | "CONTAINS"
            | "COUNT"
            | "CREATE"
            | "DELETE"
            | "DESC"
            | "DESCENDING"
            | "DETACH"
            | "DISTINCT"
            | "DO"
            | "DROP"
            | "ELSE"
            | "END"
            | "ENDS"
            | "EXISTS"
            | "FALSE"
            | "FILTER"
            | "FOREACH"
            | "IN"
            | "IS"
            | "LIMIT"
            | "MANDATORY"
            | "MATCH"
            | "MERGE"
            | "NODE"
            | "NONE"
            | "NOT"
            | "NULL"
            | "OF"
            | "ON"
            | "OPTIONAL"
            | "OR"
            | "ORDER"
            | "REDUCE"
            | "RELATIONSHIP"
            | "REMOVE"
            | "RETURN"
            | "SET"
            | "SINGLE"
            | "SKIP"
            | "SOME"
            | "STARTS"
            | "THEN"
            | "TRUE"
            | "UNION"
            | "UNIQUE"
            | "UNWIND"
            | "USING"
            | "WHEN"
            | "WHERE"
            | "WITH"
            | "XOR"
            | "YIELD"
    )
}
