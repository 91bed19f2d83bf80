//! Navigation driver owning a router and a history.

use super::{build_trail, BreadcrumbEntry, History};
use crate::route::{canonical_path, Router};

/// Turns navigation events into trails, threading history between them.
///
/// One navigator corresponds to one browser tab session.
pub struct Navigator {
    router: Router,
    history: History,
}

impl Navigator {
    /// Creates a navigator with empty history.
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self::with_history(router, History::new())
    }

    /// Creates a navigator resuming from `history`.
    #[must_use]
    pub fn with_history(router: Router, history: History) -> Self {
        Self { router, history }
    }

    /// Navigates to `pathname` and returns its trail.
    pub fn navigate(&mut self, pathname: &str) -> Vec<BreadcrumbEntry> {
        let pathname = canonical_path(pathname);
        let params = self.router.params(&pathname);
        let matched = self.router.matched_crumbs(&pathname);
        build_trail(&pathname, &params, &matched, &mut self.history)
    }

    /// History as of the last navigation.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Router::console())
    }
}
