//! Live trail provider backed by the navigator.

use crate::breadcrumb::{BreadcrumbEntry, Navigator};
use crate::error::CrumbsError;
use crate::ports::TrailProvider;

/// Builds trails for real, threading history through one session.
#[derive(Default)]
pub struct LiveTrails {
    navigator: Navigator,
}

impl LiveTrails {
    /// Creates a live provider around `navigator`.
    #[must_use]
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    /// The underlying navigator.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

impl TrailProvider for LiveTrails {
    fn navigate(&mut self, pathname: &str) -> Result<Vec<BreadcrumbEntry>, CrumbsError> {
        Ok(self.navigator.navigate(pathname))
    }
}
