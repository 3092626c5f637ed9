//! Analysis Module - Pure domain services for TOPSIS decision ranking.
//!
//! This module contains stateless functions that validate a decision matrix
//! and rank its alternatives by closeness to the ideal solution.
//!
//! # Components
//!
//! - `RawTable` / `DecisionTable` - Tabular input before and after validation
//! - `WeightVector` / `ImpactVector` - Per-criterion weights and directions
//! - `InputValidator` - Rejects malformed input with a specific reason
//! - `TopsisEngine` - Normalization, weighting, ideal points, distances, scores
//! - `RankedResult` - The input table with score and dense rank appended
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod criteria;
mod decision_table;
mod errors;
mod input_validator;
mod ranked_result;
mod topsis_engine;

// Re-export all public types
pub use criteria::{Impact, ImpactVector, WeightVector};
pub use decision_table::{Alternative, DecisionTable, DecisionTableBuilder, RawTable};
pub use errors::{ComputeError, ErrorCode, ValidationError};
pub use input_validator::{InputValidator, ValidatedInput, MIN_COLUMNS};
pub use ranked_result::{
    dense_rank, format_score, RankedResult, RankedRow, RANK_COLUMN, SCORE_COLUMN,
};
pub use topsis_engine::{IdealPoints, Separation, TopsisEngine};
