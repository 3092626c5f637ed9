//! Ranked Result - a decision table with score and rank columns appended.

use serde::{Deserialize, Serialize};

use super::Alternative;

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// One alternative with its closeness score and dense rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub alternative: Alternative,
    /// Relative closeness to the ideal solution, in `[0, 1]`.
    pub score: f64,
    /// Dense rank, 1 is best.
    pub rank: u32,
}

/// Output of a TOPSIS run. Rows keep the input order; rank is a value, not a sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Original header row.
    pub headers: Vec<String>,
    pub rows: Vec<RankedRow>,
}

impl RankedResult {
    /// Header row of the serialized result: original columns, then score and rank.
    pub fn output_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        headers.push(SCORE_COLUMN.to_string());
        headers.push(RANK_COLUMN.to_string());
        headers
    }

    pub fn scores(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.score).collect()
    }

    pub fn ranks(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.rank).collect()
    }

    /// All rows holding rank 1.
    pub fn best(&self) -> Vec<&RankedRow> {
        self.rows.iter().filter(|r| r.rank == 1).collect()
    }

    /// Looks up a row by alternative name.
    pub fn row(&self, name: &str) -> Option<&RankedRow> {
        self.rows.iter().find(|r| r.alternative.name == name)
    }
}

/// Dense ranking by score, descending.
///
/// Equal scores share a rank and the next lower distinct score gets the next
/// integer, so the ranks are exactly `1..=k` for `k` distinct scores.
pub fn dense_rank(scores: &[f64]) -> Vec<u32> {
    let mut distinct: Vec<f64> = scores.to_vec();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup();

    scores
        .iter()
        .map(|score| {
            let higher = distinct.partition_point(|d| d > score);
            higher as u32 + 1
        })
        .collect()
}

/// Formats a score the way result files carry it: shortest round-trip text,
/// with a trailing `.0` on integral values.
pub fn format_score(score: f64) -> String {
    let text = score.to_string();
    if text.contains(['.', 'e', 'E']) || !score.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}
