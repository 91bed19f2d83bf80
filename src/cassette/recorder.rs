//! Records visits into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Visit};
use crate::breadcrumb::BreadcrumbEntry;
use crate::error::CrumbsError;

/// Records visits and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    visits: Vec<Visit>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), visits: Vec::new(), next_seq: 0 }
    }

    /// Create a recorder with a generated `session-<uuid>` name.
    pub fn unnamed(path: impl Into<PathBuf>) -> Self {
        Self::new(path, format!("session-{}", uuid::Uuid::new_v4()))
    }

    /// Record a visit. The `seq` field is assigned automatically.
    pub fn record(&mut self, pathname: impl Into<String>, trail: &[BreadcrumbEntry]) {
        self.visits.push(Visit {
            seq: self.next_seq,
            pathname: pathname.into(),
            trail: trail.to_vec(),
        });
        self.next_seq += 1;
    }

    /// Number of visits recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, CrumbsError> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            visits: self.visits,
        };
        let write_err = |source| CrumbsError::CassetteWrite { path: self.path.clone(), source };
        let yaml = serde_yaml::to_string(&cassette).map_err(|e| write_err(std::io::Error::other(e)))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, yaml).map_err(write_err)?;
        tracing::info!(path = %self.path.display(), visits = cassette.visits.len(), "cassette written");
        Ok(self.path)
    }
}
