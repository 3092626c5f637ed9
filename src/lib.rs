//! TOPSIS Rank - multi-criteria ranking of alternatives
//!
//! This crate scores a table of alternatives against weighted benefit and cost
//! criteria with TOPSIS (Technique for Order of Preference by Similarity to
//! Ideal Solution) and appends a closeness score and dense rank to each row.
//! The pure core lives in `domain`; the command-line and HTTP shells reach it
//! through `application` handlers and the `ports` they depend on.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
