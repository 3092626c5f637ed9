//! Decision Table - alternatives scored on numeric criteria.

use serde::{Deserialize, Serialize};

/// A table as it arrives from a shell: a header row and text cells.
///
/// Nothing is checked here; [`InputValidator`](super::InputValidator) turns a
/// `RawTable` into a [`DecisionTable`] or rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<impl Into<String>>, rows: Vec<Vec<impl Into<String>>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One named alternative with its criterion values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Identifier column value.
    pub name: String,
    /// Criterion cells exactly as supplied, used when writing results back out.
    pub cells: Vec<String>,
    /// Parsed criterion values, same order as `cells`.
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates an alternative whose cell text is derived from the values.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        let cells = values.iter().map(|v| v.to_string()).collect();
        Self {
            name: name.into(),
            cells,
            values,
        }
    }

    /// Creates an alternative keeping the original cell text.
    pub fn with_cells(name: impl Into<String>, cells: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            cells,
            values,
        }
    }
}

/// Validated decision matrix: every alternative has the same number of criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    /// Header row, identifier column first.
    pub headers: Vec<String>,
    /// Alternatives in input order.
    pub alternatives: Vec<Alternative>,
}

impl DecisionTable {
    /// Creates a builder for constructing a decision table.
    pub fn builder() -> DecisionTableBuilder {
        DecisionTableBuilder::new()
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criterion columns (header width minus the identifier column).
    pub fn criteria_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    /// Criterion column names.
    pub fn criteria_names(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Values of criterion column `j` across all alternatives.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives
            .iter()
            .map(move |alt| alt.values.get(j).copied().unwrap_or(0.0))
    }
}

/// Builder for constructing DecisionTable instances.
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    identifier: String,
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionTableBuilder {
    pub fn new() -> Self {
        Self {
            identifier: "Alternative".to_string(),
            ..Default::default()
        }
    }

    /// Sets the identifier column header.
    pub fn identifier(mut self, name: impl Into<String>) -> Self {
        self.identifier = name.into();
        self
    }

    /// Sets the criterion column headers.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an alternative row.
    pub fn alternative(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(name, values));
        self
    }

    pub fn build(self) -> DecisionTable {
        let mut headers = Vec::with_capacity(self.criteria.len() + 1);
        headers.push(self.identifier);
        headers.extend(self.criteria);
        DecisionTable {
            headers,
            alternatives: self.alternatives,
        }
    }
}
