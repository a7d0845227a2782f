//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures and a caller demanding a
//! solution from a run that has none. Runtime terminations are expressed via
//! [`crate::graph::TerminationReason`] and always produce a `SearchGraph`.

/// Typed failure for search validation and solution extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The root state cannot seed a search (e.g. no members).
    InvalidInput { detail: String },
    /// The frontier was exhausted without reaching a goal.
    UnreachableGoal,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { detail } => write!(f, "invalid search input: {detail}"),
            Self::UnreachableGoal => write!(f, "no solution found: frontier exhausted"),
        }
    }
}

impl std::error::Error for SearchError {}
