//! Trail port for turning navigation events into breadcrumb trails.

use crate::breadcrumb::BreadcrumbEntry;
use crate::error::CrumbsError;

/// Produces the trail for each navigation, in order.
///
/// Implementations are stateful: each call continues the same session, so
/// the trail may depend on every pathname seen before it.
pub trait TrailProvider {
    /// Navigates to `pathname` and returns the trail to show.
    ///
    /// # Errors
    ///
    /// Live implementations never fail. Replaying implementations fail when
    /// the request does not line up with the recording.
    fn navigate(&mut self, pathname: &str) -> Result<Vec<BreadcrumbEntry>, CrumbsError>;
}
