//! Error taxonomy for the optimisation core.

use thiserror::Error;

/// Errors returned when a request cannot be optimised.
///
/// Capacity overflow during balanced assignment is not an error; see
/// [`crate::balanced::Assignment::forced`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Point collection or depot is absent or malformed.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// No valid points remain after filtering.
    #[error("no valid points to route")]
    EmptyDataset,

    /// A coordinate lies outside [-90, 90] x [-180, 180].
    /// `index` is `None` for the depot.
    #[error("coordinate out of range at {}: ({lat}, {lon})", describe_index(.index))]
    CoordinateRange {
        index: Option<usize>,
        lat: f64,
        lon: f64,
    },
}

impl Error {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}

fn describe_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("point {}", i),
        None => "depot".to_string(),
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::invalid_input(err.to_string())
    }
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
