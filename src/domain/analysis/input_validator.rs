//! Input Validator - rejects malformed tables and specs before any arithmetic runs.

use super::{
    Alternative, DecisionTable, Impact, ImpactVector, RawTable, ValidationError, WeightVector,
};

/// Minimum header width: one identifier column plus two criteria.
pub const MIN_COLUMNS: usize = 3;

/// A table together with its weights and impacts, all mutually consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub table: DecisionTable,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

/// Validation rules shared by every shell.
pub struct InputValidator;

impl InputValidator {
    /// Validates a raw table plus comma-separated weight and impact specs.
    ///
    /// Rules are checked in order and the first failure is returned:
    /// column count, at least one row, row width, numeric criteria,
    /// weights, impacts, and finally arity.
    pub fn validate(
        raw: &RawTable,
        weights_spec: &str,
        impacts_spec: &str,
    ) -> Result<ValidatedInput, ValidationError> {
        let table = Self::decision_table(raw)?;
        let weights = Self::parse_weights(weights_spec)?;
        let impacts = Self::parse_impacts(impacts_spec)?;

        let criteria = table.criteria_count();
        if weights.len() != criteria || impacts.len() != criteria {
            return Err(ValidationError::ArityMismatch {
                criteria,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        Ok(ValidatedInput {
            table,
            weights,
            impacts,
        })
    }

    /// Converts a raw table into a decision table.
    ///
    /// The whole table is rejected if any criterion cell is not a finite number.
    pub fn decision_table(raw: &RawTable) -> Result<DecisionTable, ValidationError> {
        let width = raw.column_count();
        if width < MIN_COLUMNS {
            return Err(ValidationError::InsufficientColumns { found: width });
        }
        if raw.rows.is_empty() {
            return Err(ValidationError::NoAlternatives);
        }

        if let Some((row, cells)) = raw
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(ValidationError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        let mut alternatives = Vec::with_capacity(raw.rows.len());
        for cells in &raw.rows {
            let (name, criteria) = match cells.split_first() {
                Some(split) => split,
                None => return Err(ValidationError::NonNumericCriteria),
            };
            let values = criteria
                .iter()
                .map(|cell| parse_finite(cell))
                .collect::<Option<Vec<f64>>>()
                .ok_or(ValidationError::NonNumericCriteria)?;

            alternatives.push(Alternative::with_cells(
                name.clone(),
                criteria.to_vec(),
                values,
            ));
        }

        Ok(DecisionTable {
            headers: raw.headers.clone(),
            alternatives,
        })
    }

    /// Parses a comma-separated list of positive finite weights.
    pub fn parse_weights(spec: &str) -> Result<WeightVector, ValidationError> {
        spec.split(',')
            .map(|token| parse_finite(token).filter(|w| *w > 0.0))
            .collect::<Option<Vec<f64>>>()
            .map(WeightVector::new)
            .ok_or_else(|| ValidationError::malformed_weights(spec))
    }

    /// Parses a comma-separated list of `+`/`-` impact symbols.
    pub fn parse_impacts(spec: &str) -> Result<ImpactVector, ValidationError> {
        if spec.trim().is_empty() {
            return Err(ValidationError::malformed_impacts(spec));
        }

        spec.split(',')
            .map(|token| Impact::from_symbol(token).ok_or_else(|| ValidationError::invalid_impact(token)))
            .collect::<Result<Vec<Impact>, _>>()
            .map(ImpactVector::new)
    }
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
