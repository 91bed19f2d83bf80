//! Breadcrumb trails for the console's drill-down pages.
//!
//! A trail walks organization → repository → tag (or organization → team).
//! It is rebuilt on every navigation, either from the router's matched
//! ancestors or by extending the trail remembered from the previous page.

pub mod builder;
pub mod history;
pub mod navigator;
pub mod render;
pub mod segment;

use serde::{Deserialize, Serialize};

pub use builder::{build_trail, MAX_TRAIL};
pub use history::{History, MAX_HISTORY};
pub use navigator::Navigator;
pub use segment::{Location, Segment};

/// A single breadcrumb: a label, the page it links to, and whether it is
/// the page being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Route path the entry links to.
    pub pathname: String,
    /// Display label.
    pub title: String,
    /// `true` for the current page, which is rendered without a link.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
}

impl BreadcrumbEntry {
    /// Creates an inactive entry.
    pub fn new(pathname: impl Into<String>, title: impl Into<String>) -> Self {
        Self { pathname: pathname.into(), title: title.into(), active: false }
    }

    /// Returns this entry marked as the current page.
    #[must_use]
    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_entries_omit_the_flag_when_serialized() {
        let json = serde_json::to_value(BreadcrumbEntry::new("/organization", "organization"))
            .unwrap();
        assert_eq!(json, serde_json::json!({"pathname": "/organization", "title": "organization"}));

        let json = serde_json::to_value(
            BreadcrumbEntry::new("/organization/acme", "acme").activated(),
        )
        .unwrap();
        assert_eq!(json["active"], serde_json::json!(true));
    }
}
