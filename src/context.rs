//! Service context bundling the trail port with an optional recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::{LiveTrails, RecordingTrails, ReplayingTrails};
use crate::breadcrumb::Navigator;
use crate::cassette::{Cassette, CassetteRecorder, CassetteReplayer};
use crate::error::CrumbsError;
use crate::ports::TrailProvider;

/// Bundles the trail provider for one navigation session.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying). A recording context must be closed with
/// [`ServiceContext::finish`] to write its cassette.
pub struct ServiceContext {
    /// Trail provider for the session.
    pub trails: Box<dyn TrailProvider>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context around `navigator`.
    #[must_use]
    pub fn live(navigator: Navigator) -> Self {
        Self { trails: Box::new(LiveTrails::new(navigator)), recorder: None }
    }

    /// Creates a live context that also records every visit to `path`.
    #[must_use]
    pub fn recording(navigator: Navigator, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::unnamed(path)));
        tracing::info!(path = %path.display(), "recording navigation session");
        Self {
            trails: Box::new(RecordingTrails::new(
                Box::new(LiveTrails::new(navigator)),
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        }
    }

    /// Creates a context that serves trails from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, CrumbsError> {
        Ok(Self::from_cassette(&Cassette::load(path)?))
    }

    /// Creates a context that serves trails from an already loaded cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        Self {
            trails: Box::new(ReplayingTrails::new(CassetteReplayer::new(cassette))),
            recorder: None,
        }
    }

    /// Ends the session, writing the cassette if recording.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, CrumbsError> {
        let Self { trails, recorder } = self;
        // Release the adapter's handle on the recorder.
        drop(trails);
        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| CrumbsError::Recording("recorder still has references".to_string()))?
            .into_inner()
            .map_err(|e| CrumbsError::Recording(format!("recorder lock poisoned: {e}")))?;
        recorder.finish().map(Some)
    }
}
