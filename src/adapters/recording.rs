//! Recording adapter for the trail port.

use std::sync::{Arc, Mutex};

use crate::breadcrumb::BreadcrumbEntry;
use crate::cassette::CassetteRecorder;
use crate::error::CrumbsError;
use crate::ports::TrailProvider;
use crate::route::canonical_path;

/// Records every visit while delegating to an inner provider.
pub struct RecordingTrails {
    inner: Box<dyn TrailProvider>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTrails {
    /// Creates a recording provider wrapping `inner`.
    pub fn new(inner: Box<dyn TrailProvider>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl TrailProvider for RecordingTrails {
    fn navigate(&mut self, pathname: &str) -> Result<Vec<BreadcrumbEntry>, CrumbsError> {
        let trail = self.inner.navigate(pathname)?;
        let mut guard = self
            .recorder
            .lock()
            .map_err(|e| CrumbsError::Recording(format!("recorder lock poisoned: {e}")))?;
        guard.record(canonical_path(pathname), &trail);
        Ok(trail)
    }
}
