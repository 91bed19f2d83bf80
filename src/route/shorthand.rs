//! Shorthand URL resolution.
//!
//! Old-style console links address namespaces and repositories without a
//! section prefix: `/myorg` and `/myorg/myrepo`. These are rewritten to
//! `/organization/myorg` and `/repository/myorg/myrepo`, keeping the query
//! string and fragment. First segments owned by real routes are left alone.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{split_path, Router};

/// Top-level pages that are not in the navigation table but still own
/// their first segment.
const STATIC_PREFIXES: [&str; 3] = ["signin", "createaccount", "oauth-error"];

/// Where the console index redirects.
pub const INDEX_REDIRECT: &str = "/organization";

/// Outcome of resolving a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Resolution {
    /// The URL should be replaced by this target.
    Redirect(String),
    /// The URL belongs to an existing route (or is a 404); leave it as is.
    Passthrough,
}

/// Rewrites shorthand namespace and repository URLs.
#[derive(Debug, Clone)]
pub struct ShorthandResolver {
    reserved: BTreeSet<String>,
}

impl ShorthandResolver {
    /// Builds a resolver whose reserved prefixes come from `router`,
    /// the static top-level pages and `extra`.
    #[must_use]
    pub fn new(router: &Router, extra: &[String]) -> Self {
        let reserved = router
            .top_level_prefixes()
            .into_iter()
            .chain(STATIC_PREFIXES)
            .map(str::to_string)
            .chain(extra.iter().map(|p| p.trim_matches('/').to_string()))
            .filter(|p| !p.is_empty())
            .collect();
        Self { reserved }
    }

    /// Reserved first segments, sorted.
    pub fn reserved(&self) -> impl Iterator<Item = &str> {
        self.reserved.iter().map(String::as_str)
    }

    /// Returns `true` if `segment` is owned by a real route.
    #[must_use]
    pub fn is_reserved(&self, segment: &str) -> bool {
        self.reserved.contains(segment)
    }

    /// Resolves a URL (path plus optional `?query` and `#fragment`).
    #[must_use]
    pub fn resolve(&self, url: &str) -> Resolution {
        let split = url.find(['?', '#']).unwrap_or(url.len());
        let (path, suffix) = url.split_at(split);
        let segments = split_path(path);

        let Some((org, rest)) = segments.split_first() else {
            return Resolution::Redirect(INDEX_REDIRECT.to_string());
        };

        if self.is_reserved(org) {
            tracing::debug!(url, prefix = org, "reserved prefix, not a shorthand");
            return Resolution::Passthrough;
        }

        let target = if rest.is_empty() {
            format!("/organization/{org}{suffix}")
        } else {
            format!("/repository/{org}/{}{suffix}", rest.join("/"))
        };
        tracing::debug!(url, target = %target, "resolved shorthand url");
        Resolution::Redirect(target)
    }
}
