//! Run configuration.
//!
//! A run is described by the crossing durations and the heuristic. The
//! JSON form is
//!
//! ```json
//! {"durations": [1, 3, 6, 8, 12], "heuristic": "remaining-count"}
//! ```
//!
//! Every field is optional; missing fields take the classic five-member
//! defaults. Unknown fields are rejected.

use std::path::Path;

use lantern_search::heuristic::HeuristicKind;
use lantern_search::policy::SearchPolicy;
use serde::Deserialize;

use crate::runner::RunError;

/// Durations of the classic five-member instance (optimum 29).
pub const CLASSIC_DURATIONS: [i64; 5] = [1, 3, 6, 8, 12];

/// Everything needed to run one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Crossing durations in input order. Ids are assigned in this order.
    pub durations: Vec<i64>,
    pub heuristic: HeuristicKind,
    /// Keep the per-iteration audit events in the report's graph.
    pub record_events: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            durations: CLASSIC_DURATIONS.to_vec(),
            heuristic: HeuristicKind::default(),
            record_events: true,
        }
    }
}

/// On-disk shape. The heuristic travels as its display name.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRunConfig {
    durations: Option<Vec<i64>>,
    heuristic: Option<String>,
    record_events: Option<bool>,
}

impl RunConfig {
    /// Parse a configuration from JSON bytes.
    ///
    /// Durations are not validated here; the runner rejects non-positive
    /// values when it builds the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::ConfigParse`] on malformed JSON, unknown fields,
    /// or an unknown heuristic name.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, RunError> {
        let raw: RawRunConfig =
            serde_json::from_slice(bytes).map_err(|e| RunError::ConfigParse {
                detail: e.to_string(),
            })?;

        let defaults = Self::default();
        let heuristic = match raw.heuristic {
            Some(name) => name
                .parse::<HeuristicKind>()
                .map_err(|e| RunError::ConfigParse {
                    detail: e.to_string(),
                })?,
            None => defaults.heuristic,
        };

        Ok(Self {
            durations: raw.durations.unwrap_or(defaults.durations),
            heuristic,
            record_events: raw.record_events.unwrap_or(defaults.record_events),
        })
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::ConfigParse`] if the file cannot be read or does
    /// not parse.
    pub fn from_path(path: &Path) -> Result<Self, RunError> {
        let bytes = std::fs::read(path).map_err(|e| RunError::ConfigParse {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_slice(&bytes)
    }

    /// The engine policy for this run.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            heuristic: self.heuristic,
            record_events: self.record_events,
        }
    }
}
