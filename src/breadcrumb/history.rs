//! Navigation history remembered between trail builds.

use serde::{Deserialize, Serialize};

use super::BreadcrumbEntry;

/// Most entries ever remembered. The fourth trail entry is always the live
/// page and is recomputed on every build.
pub const MAX_HISTORY: usize = 3;

/// Previously built breadcrumb entries, owned by whoever drives navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<BreadcrumbEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembered entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    /// Number of remembered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` before the first drill-down or after a reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the history with the head of `trail`.
    pub fn remember(&mut self, trail: &[BreadcrumbEntry]) {
        self.entries.clear();
        self.entries.extend(trail.iter().take(MAX_HISTORY).cloned());
    }
}
