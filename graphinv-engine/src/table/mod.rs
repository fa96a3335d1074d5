//! The invariant-table builder, the engine's batch consumer.

use graphinv_graph::Graph;
use tracing::warn;

use crate::{eval::Evaluator, value::Value};

#[cfg(test)]
mod tests;

/// A row-per-graph, column-per-identifier table of evaluated properties.
/// Per-cell failures are recorded as missing data, never aborting the
/// build.
#[derive(Debug)]
pub struct InvariantTable {
    names: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Vec<Option<Value>>>,
}

impl InvariantTable {
    /// Evaluates every `(graph, identifier)` pair. Numeric identifiers
    /// come first in the column order, boolean identifiers after.
    ///
    /// # Panics
    /// Panics when `graphs` and `names` differ in length.
    #[must_use]
    pub fn build(
        evaluator: &Evaluator,
        graphs: &[Graph],
        names: &[String],
        numeric: &[String],
        boolean: &[String],
    ) -> Self {
        assert_eq!(
            graphs.len(),
            names.len(),
            "every graph needs exactly one name"
        );
        let columns: Vec<String> = numeric.iter().chain(boolean).cloned().collect();
        let rows = graphs
            .iter()
            .zip(names)
            .map(|(graph, name)| {
                columns
                    .iter()
                    .map(|property| match evaluator.evaluate(graph, property) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            warn!(
                                graph = name.as_str(),
                                property = property.as_str(),
                                code = err.code().as_str(),
                                %err,
                                "recording failed cell as missing",
                            );
                            None
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            names: names.to_vec(),
            columns,
            rows,
        }
    }

    /// Graph names, one per row.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column identifiers in evaluation order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The cell for `name` and `property`, if the row and column exist
    /// and the evaluation succeeded.
    #[must_use]
    pub fn cell(&self, name: &str, property: &str) -> Option<&Value> {
        let row = self.names.iter().position(|n| n == name)?;
        let col = self.columns.iter().position(|c| c == property)?;
        self.rows[row][col].as_ref()
    }

    /// Whether the cell exists but holds missing data.
    #[must_use]
    pub fn is_missing(&self, name: &str, property: &str) -> bool {
        let Some(row) = self.names.iter().position(|n| n == name) else {
            return false;
        };
        let Some(col) = self.columns.iter().position(|c| c == property) else {
            return false;
        };
        self.rows[row][col].is_none()
    }
}
