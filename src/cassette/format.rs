//! Cassette data structures for recorded navigation sessions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::breadcrumb::BreadcrumbEntry;
use crate::error::CrumbsError;

/// One navigation and the trail it produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visit {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Canonical pathname navigated to.
    pub pathname: String,
    /// Trail shown for that pathname.
    #[serde(default)]
    pub trail: Vec<BreadcrumbEntry>,
}

/// A recorded session: visits in navigation order, starting from empty
/// history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cassette {
    /// Human-readable name for this session.
    pub name: String,
    /// When this session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Crate version that produced the trails.
    pub version: String,
    /// Ordered list of visits.
    pub visits: Vec<Visit>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CrumbsError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| CrumbsError::CassetteRead { path: path.to_path_buf(), source })?;
        serde_yaml::from_str(&content)
            .map_err(|source| CrumbsError::CassetteParse { path: path.to_path_buf(), source })
    }
}
