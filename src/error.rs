use thiserror::Error;

use crate::graphs::{CityId, EdgeIndex};

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("City not found: {0}")]
    NotFound(CityId),

    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeIndex),

    #[error("Load error in line {line}: {reason}")]
    Load { line: usize, reason: String },

    /// A path whose edges do not form a contiguous walk. Always a search bug.
    #[error("Malformed path: edge {position} does not touch city {city}")]
    MalformedPath { position: usize, city: CityId },

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    pub fn load(line: usize, reason: impl Into<String>) -> MapError {
        MapError::Load {
            line,
            reason: reason.into(),
        }
    }
}
