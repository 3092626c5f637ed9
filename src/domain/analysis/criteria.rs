//! Criterion weights and impact directions.

use serde::{Deserialize, Serialize};

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher values are better (`+`).
    Benefit,
    /// Lower values are better (`-`).
    Cost,
}

impl Impact {
    /// Parses a single impact token. Only the exact symbols `+` and `-` are accepted.
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

    /// Returns the opposite direction.
    pub fn inverted(&self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }
}

/// Per-criterion weights, positionally aligned with the criterion columns.
///
/// Weights are not required to sum to one; only their relative sizes matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|w| w * factor).collect())
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self::new(weights)
    }
}

/// Per-criterion impact directions, positionally aligned with the criterion columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with the impact at `index` flipped.
    pub fn with_inverted(&self, index: usize) -> Self {
        let impacts = self
            .0
            .iter()
            .enumerate()
            .map(|(i, impact)| if i == index { impact.inverted() } else { *impact })
            .collect();
        Self(impacts)
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self::new(impacts)
    }
}
