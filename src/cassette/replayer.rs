//! Replays recorded visits from a cassette.

use super::format::{Cassette, Visit};

/// Serves the visits of a loaded cassette in recorded order.
pub struct CassetteReplayer {
    visits: Vec<Visit>,
    cursor: usize,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut visits = cassette.visits.clone();
        visits.sort_by_key(|v| v.seq);
        Self { visits, cursor: 0 }
    }

    /// Returns the next visit, or `None` once the cassette is exhausted.
    pub fn next_visit(&mut self) -> Option<&Visit> {
        let visit = self.visits.get(self.cursor)?;
        self.cursor += 1;
        Some(visit)
    }

    /// Number of visits not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.visits.len() - self.cursor
    }
}
