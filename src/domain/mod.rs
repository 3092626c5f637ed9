//! Domain layer containing the decision-ranking logic.
//!
//! # Module Organization
//!
//! - `analysis` - Pure domain services for TOPSIS (validation, scoring, ranking)

pub mod analysis;
