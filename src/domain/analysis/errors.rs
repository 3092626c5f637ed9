//! Error types for TOPSIS input validation and computation.

use thiserror::Error;

/// Error codes shared by every shell that reports analysis failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    InsufficientColumns,
    NoAlternatives,
    RaggedRow,
    NonNumericCriteria,
    MalformedWeights,
    MalformedImpacts,
    InvalidImpactSymbol,
    ArityMismatch,

    // Computation errors
    DegenerateDistance,
    NonFiniteScore,
}

impl ErrorCode {
    /// Stable identifier used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InsufficientColumns => "INSUFFICIENT_COLUMNS",
            ErrorCode::NoAlternatives => "NO_ALTERNATIVES",
            ErrorCode::RaggedRow => "RAGGED_ROW",
            ErrorCode::NonNumericCriteria => "NON_NUMERIC_CRITERIA",
            ErrorCode::MalformedWeights => "MALFORMED_WEIGHTS",
            ErrorCode::MalformedImpacts => "MALFORMED_IMPACTS",
            ErrorCode::InvalidImpactSymbol => "INVALID_IMPACT_SYMBOL",
            ErrorCode::ArityMismatch => "ARITY_MISMATCH",
            ErrorCode::DegenerateDistance => "DEGENERATE_DISTANCE",
            ErrorCode::NonFiniteScore => "NON_FINITE_SCORE",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a raw table or weight/impact spec is rejected before computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input file must contain at least three columns, found {found}")]
    InsufficientColumns { found: usize },

    #[error("Input file must contain at least one alternative row")]
    NoAlternatives,

    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("All columns except the first must contain numeric values only")]
    NonNumericCriteria,

    #[error("Weights must be comma-separated positive numbers, got '{raw}'")]
    MalformedWeights { raw: String },

    #[error("Impacts must be comma-separated, got '{raw}'")]
    MalformedImpacts { raw: String },

    #[error("Impacts must be either '+' or '-', got '{token}'")]
    InvalidImpactSymbol { token: String },

    #[error(
        "Number of weights, impacts, and criteria columns must be same \
         (criteria: {criteria}, weights: {weights}, impacts: {impacts})"
    )]
    ArityMismatch {
        criteria: usize,
        weights: usize,
        impacts: usize,
    },
}

impl ValidationError {
    /// Creates a malformed weights error carrying the raw spec.
    pub fn malformed_weights(raw: impl Into<String>) -> Self {
        ValidationError::MalformedWeights { raw: raw.into() }
    }

    /// Creates a malformed impacts error carrying the raw spec.
    pub fn malformed_impacts(raw: impl Into<String>) -> Self {
        ValidationError::MalformedImpacts { raw: raw.into() }
    }

    /// Creates an invalid impact symbol error naming the token.
    pub fn invalid_impact(token: impl Into<String>) -> Self {
        ValidationError::InvalidImpactSymbol {
            token: token.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InsufficientColumns { .. } => ErrorCode::InsufficientColumns,
            ValidationError::NoAlternatives => ErrorCode::NoAlternatives,
            ValidationError::RaggedRow { .. } => ErrorCode::RaggedRow,
            ValidationError::NonNumericCriteria => ErrorCode::NonNumericCriteria,
            ValidationError::MalformedWeights { .. } => ErrorCode::MalformedWeights,
            ValidationError::MalformedImpacts { .. } => ErrorCode::MalformedImpacts,
            ValidationError::InvalidImpactSymbol { .. } => ErrorCode::InvalidImpactSymbol,
            ValidationError::ArityMismatch { .. } => ErrorCode::ArityMismatch,
        }
    }
}

/// Failures raised while scoring an already validated table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// Both ideal distances vanish for a row, so its score would be 0/0.
    #[error(
        "Alternative '{alternative}' (row {row}) coincides with both ideal points; \
         every alternative has identical criteria values"
    )]
    DegenerateDistance { alternative: String, row: usize },

    /// A row's score did not come out as a finite number.
    #[error("Score of alternative '{alternative}' (row {row}) is not a finite number")]
    NonFiniteScore { alternative: String, row: usize },

    #[error("Cannot rank an empty decision table")]
    NoAlternatives,

    #[error(
        "Number of weights, impacts, and criteria columns must be same \
         (criteria: {criteria}, weights: {weights}, impacts: {impacts})"
    )]
    ArityMismatch {
        criteria: usize,
        weights: usize,
        impacts: usize,
    },
}

impl ComputeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ComputeError::DegenerateDistance { .. } => ErrorCode::DegenerateDistance,
            ComputeError::NonFiniteScore { .. } => ErrorCode::NonFiniteScore,
            ComputeError::NoAlternatives => ErrorCode::NoAlternatives,
            ComputeError::ArityMismatch { .. } => ErrorCode::ArityMismatch,
        }
    }
}
