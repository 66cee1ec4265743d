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

//! The execution seam.

use crate::cypher::CypherStatement;
use crate::error::Result;
use crate::result::ResultSet;

/// Runs statements against a graph store.
///
/// Driver glue lives outside this crate; implementations map driver
/// failures to [`OgmaError::Execution`](crate::OgmaError::Execution).
/// Closures taking a statement implement this trait, which is convenient in
/// tests:
///
/// ```
/// # use ogma_cypher::{CypherStatement, QueryRunner, ResultSet};
/// let runner = |_: &CypherStatement| -> ogma_cypher::Result<ResultSet> { Ok(ResultSet::default()) };
/// let rows = runner.run(&CypherStatement::read("RETURN 1"))?;
/// assert!(rows.is_empty());
/// # Ok::<(), ogma_cypher::OgmaError>(())
/// ```
pub trait QueryRunner {
    /// Run a statement and collect its rows.
    fn run(&self, statement: &CypherStatement) -> Result<ResultSet>;
}

impl<F> QueryRunner for F
where
    F: Fn(&CypherStatement) -> Result<ResultSet>,
{
    fn run(&self, statement: &CypherStatement) -> Result<ResultSet> {
        self(statement)
    }
}
