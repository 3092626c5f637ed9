//! TOPSIS Engine - vector normalization, weighting, ideal points, distances, scores and ranks.

use serde::{Deserialize, Serialize};

use super::{
    dense_rank, ComputeError, DecisionTable, Impact, ImpactVector, RankedResult, RankedRow,
    ValidatedInput, WeightVector,
};

/// Per-criterion extremes of the weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distances of one alternative to the ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

impl Separation {
    /// Relative closeness `to_worst / (to_best + to_worst)`.
    ///
    /// Returns `None` when both distances are zero.
    pub fn closeness(&self) -> Option<f64> {
        let total = self.to_best + self.to_worst;
        if total == 0.0 {
            None
        } else {
            Some(self.to_worst / total)
        }
    }
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Scores and ranks a validated input.
    pub fn rank(input: &ValidatedInput) -> Result<RankedResult, ComputeError> {
        Self::compute(&input.table, &input.weights, &input.impacts)
    }

    /// Scores and ranks every alternative of `table`.
    ///
    /// # Algorithm
    /// 1. Vector-normalize each criterion column: `v / sqrt(sum(v^2))`
    /// 2. Multiply each column by its weight
    /// 3. Ideal best/worst per column: max/min for benefit, min/max for cost
    /// 4. Euclidean distance of each row to both ideal points
    /// 5. Score = `d_worst / (d_best + d_worst)`
    /// 6. Dense rank by score, descending
    ///
    /// Columns, weights and distances are scaled by their largest magnitude
    /// before squaring, so any finite input stays finite.
    ///
    /// # Edge Cases
    /// - All-zero column: normalized to zeros
    /// - Row coinciding with both ideal points (every row identical, or a
    ///   single row): `DegenerateDistance`
    /// - Score that is still not finite: `NonFiniteScore`
    pub fn compute(
        table: &DecisionTable,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<RankedResult, ComputeError> {
        let criteria = table.criteria_count();
        if weights.len() != criteria || impacts.len() != criteria {
            return Err(ComputeError::ArityMismatch {
                criteria,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }
        if table.is_empty() {
            return Err(ComputeError::NoAlternatives);
        }

        let normalized = Self::normalize(table);
        let weighted = Self::apply_weights(&normalized, weights);
        let ideal = Self::ideal_points(&weighted, impacts);
        let separations = Self::separations(&weighted, &ideal);

        let scores = Self::closeness_scores(table, &separations)?;

        let ranks = dense_rank(&scores);
        let rows = table
            .alternatives
            .iter()
            .zip(scores.into_iter().zip(ranks))
            .map(|(alternative, (score, rank))| RankedRow {
                alternative: alternative.clone(),
                score,
                rank,
            })
            .collect();

        Ok(RankedResult {
            headers: table.headers.clone(),
            rows,
        })
    }

    /// Divides each value by its column's Euclidean norm.
    ///
    /// Each column is first divided by its largest magnitude, so the squares
    /// lie in `[0, 1]` and neither overflow nor flush to zero.
    pub fn normalize(table: &DecisionTable) -> Vec<Vec<f64>> {
        let columns: Vec<(f64, f64)> = (0..table.criteria_count())
            .map(|j| {
                let scale = max_magnitude(table.column(j));
                let norm = if scale == 0.0 {
                    0.0
                } else {
                    table
                        .column(j)
                        .map(|v| (v / scale) * (v / scale))
                        .sum::<f64>()
                        .sqrt()
                };
                (scale, norm)
            })
            .collect();

        table
            .alternatives
            .iter()
            .map(|alt| {
                alt.values
                    .iter()
                    .zip(&columns)
                    .map(|(value, (scale, norm))| {
                        if *norm == 0.0 {
                            0.0
                        } else {
                            (value / scale) / norm
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Multiplies each column by its weight, relative to the largest weight.
    ///
    /// Scores depend only on the ratios between weights; dividing by the
    /// maximum keeps every weighted value within `[-1, 1]`.
    pub fn apply_weights(normalized: &[Vec<f64>], weights: &WeightVector) -> Vec<Vec<f64>> {
        let largest = max_magnitude(weights.as_slice().iter().copied());
        let relative: Vec<f64> = weights
            .as_slice()
            .iter()
            .map(|w| if largest == 0.0 { 0.0 } else { w / largest })
            .collect();

        normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&relative)
                    .map(|(value, weight)| value * weight)
                    .collect()
            })
            .collect()
    }

    /// Determines the ideal best and worst value for every column.
    pub fn ideal_points(weighted: &[Vec<f64>], impacts: &ImpactVector) -> IdealPoints {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (j, impact) in impacts.as_slice().iter().enumerate() {
            let column = weighted.iter().filter_map(|row| row.get(j).copied());
            let (min, max) = column.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

            match impact {
                Impact::Benefit => {
                    best.push(max);
                    worst.push(min);
                }
                Impact::Cost => {
                    best.push(min);
                    worst.push(max);
                }
            }
        }

        IdealPoints { best, worst }
    }

    /// Relative closeness of every row, in row order.
    ///
    /// Fails on the first row whose distances both vanish, or whose score is
    /// not a finite number.
    pub fn closeness_scores(
        table: &DecisionTable,
        separations: &[Separation],
    ) -> Result<Vec<f64>, ComputeError> {
        separations
            .iter()
            .enumerate()
            .map(|(row, separation)| {
                let alternative = || {
                    table
                        .alternatives
                        .get(row)
                        .map(|alt| alt.name.clone())
                        .unwrap_or_default()
                };
                match separation.closeness() {
                    Some(score) if score.is_finite() => Ok(score),
                    Some(_) => Err(ComputeError::NonFiniteScore {
                        alternative: alternative(),
                        row,
                    }),
                    None => Err(ComputeError::DegenerateDistance {
                        alternative: alternative(),
                        row,
                    }),
                }
            })
            .collect()
    }

    /// Euclidean distance of every row to the ideal best and worst points.
    pub fn separations(weighted: &[Vec<f64>], ideal: &IdealPoints) -> Vec<Separation> {
        weighted
            .iter()
            .map(|row| Separation {
                to_best: euclidean(row, &ideal.best),
                to_worst: euclidean(row, &ideal.worst),
            })
            .collect()
    }
}

fn max_magnitude(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |max, v| max.max(v.abs()))
}

/// Euclidean distance, scaled by the largest component difference.
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let scale = max_magnitude(a.iter().zip(b).map(|(x, y)| x - y));
    if scale == 0.0 {
        return 0.0;
    }

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (x - y) / scale;
            d * d
        })
        .sum();
    scale * sum.sqrt()
}
