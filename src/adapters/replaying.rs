//! Replaying adapter for the trail port.

use crate::breadcrumb::BreadcrumbEntry;
use crate::cassette::CassetteReplayer;
use crate::error::CrumbsError;
use crate::ports::TrailProvider;
use crate::route::canonical_path;

/// Serves recorded trails without building anything.
///
/// Requests must arrive in the recorded order.
pub struct ReplayingTrails {
    replayer: CassetteReplayer,
}

impl ReplayingTrails {
    /// Creates a replaying provider from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer }
    }

    /// Visits left in the cassette.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replayer.remaining()
    }
}

impl TrailProvider for ReplayingTrails {
    fn navigate(&mut self, pathname: &str) -> Result<Vec<BreadcrumbEntry>, CrumbsError> {
        let requested = canonical_path(pathname);
        let visit = self
            .replayer
            .next_visit()
            .ok_or_else(|| CrumbsError::CassetteExhausted { pathname: requested.clone() })?;
        if visit.pathname != requested {
            return Err(CrumbsError::UnexpectedVisit {
                seq: visit.seq,
                expected: visit.pathname.clone(),
                actual: requested,
            });
        }
        Ok(visit.trail.clone())
    }
}
