//! Typed trail segments and the URL rules that extract them.
//!
//! The console only knows three drill-down shapes:
//!
//! ```text
//! /organization/{ns}[/teams/{team}]
//! /repository/{ns}/{repo}
//! /repository/{ns}/{repo}/tag/{tag}
//! ```
//!
//! `{repo}` may itself contain `/`. Anything else yields `None` from the
//! extractors and the builder falls back to the last path segment.

use std::sync::LazyLock;

use regex::Regex;

use super::BreadcrumbEntry;
use crate::route::{canonical_path, split_path};

static NAMESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:organization|repository)/([^/]+)").expect("namespace rule compiles")
});

static REPOSITORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/repository/[^/]+/(.+?)(?:/(?:tag|build|trigger)/[^/]+)?$")
        .expect("repository rule compiles")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/repository/[^/]+/.+/tag/([^/]+)$").expect("tag rule compiles")
});

static TEAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/organization/[^/]+/teams/([^/]+)$").expect("team rule compiles")
});

/// A location pathname broken into the parts the trail cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    section: Option<String>,
    namespace: Option<String>,
    repository: Option<String>,
    team: Option<String>,
    tag: Option<String>,
}

impl Location {
    /// Parses a pathname; query strings and trailing slashes are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let pathname = canonical_path(raw);
        let capture = |re: &Regex| {
            re.captures(&pathname).and_then(|c| c.get(1)).map(|m| m.as_str().to_string())
        };
        let section = split_path(&pathname).first().map(|s| (*s).to_string());
        let namespace = capture(&NAMESPACE_RE);
        let repository = capture(&REPOSITORY_RE);
        let team = capture(&TEAM_RE);
        let tag = capture(&TAG_RE);
        Self { pathname, section, namespace, repository, team, tag }
    }

    /// Canonical pathname.
    #[must_use]
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Repository name, if the location is inside a repository.
    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    /// Tag name, if the location is a tag page.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Pathname with the section prefix removed, used for active matching.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.pathname)
    }

    /// Final `/`-separated segment, or empty at the root.
    #[must_use]
    pub fn last_segment(&self) -> &str {
        last_segment(&self.pathname)
    }
}

/// Strips a leading `/organization` or `/repository` section and any
/// trailing slash so that an organization link and a repository path with
/// the same namespace compare equal.
#[must_use]
pub fn normalize(pathname: &str) -> String {
    let path = canonical_path(pathname);
    for section in ["/organization", "/repository"] {
        if let Some(rest) = path.strip_prefix(section) {
            if rest.is_empty() || rest.starts_with('/') {
                return rest.to_string();
            }
        }
    }
    path
}

/// Final `/`-separated segment of a pathname.
#[must_use]
pub fn last_segment(pathname: &str) -> &str {
    pathname.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

/// One typed step of a trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Top-level section such as `organization` or `repository`.
    Section(String),
    /// A user or organization namespace.
    Namespace(String),
    /// A repository inside a namespace.
    Repository {
        /// Owning namespace.
        namespace: String,
        /// Repository name, possibly nested.
        name: String,
    },
    /// A team inside an organization.
    Team {
        /// Owning organization.
        namespace: String,
        /// Team name.
        name: String,
    },
    /// A tag of a repository.
    Tag {
        /// Owning namespace.
        namespace: String,
        /// Repository name.
        repository: String,
        /// Tag name.
        name: String,
    },
}

impl Segment {
    /// Top-level section of the location.
    #[must_use]
    pub fn section(location: &Location) -> Option<Self> {
        location.section.clone().map(Self::Section)
    }

    /// Namespace of an organization or repository location.
    #[must_use]
    pub fn namespace(location: &Location) -> Option<Self> {
        location.namespace.clone().map(Self::Namespace)
    }

    /// Repository of a repository location.
    #[must_use]
    pub fn repository(location: &Location) -> Option<Self> {
        Some(Self::Repository {
            namespace: location.namespace.clone()?,
            name: location.repository.clone()?,
        })
    }

    /// Team of a team location.
    #[must_use]
    pub fn team(location: &Location) -> Option<Self> {
        Some(Self::Team { namespace: location.namespace.clone()?, name: location.team.clone()? })
    }

    /// Tag of a tag location.
    #[must_use]
    pub fn tag(location: &Location) -> Option<Self> {
        Some(Self::Tag {
            namespace: location.namespace.clone()?,
            repository: location.repository.clone()?,
            name: location.tag.clone()?,
        })
    }

    /// The segment expected at `position` of a trail leading to `location`.
    #[must_use]
    pub fn at_position(position: usize, location: &Location) -> Option<Self> {
        match position {
            0 => Self::section(location),
            1 => Self::namespace(location),
            2 => Self::repository(location).or_else(|| Self::team(location)),
            3 => Self::tag(location),
            _ => None,
        }
    }

    /// Display label.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Section(name) | Self::Namespace(name) => name,
            Self::Repository { name, .. } | Self::Team { name, .. } | Self::Tag { name, .. } => {
                name
            }
        }
    }

    /// Canonical page for this segment.
    #[must_use]
    pub fn pathname(&self) -> String {
        match self {
            Self::Section(name) => format!("/{name}"),
            Self::Namespace(ns) => format!("/organization/{ns}"),
            Self::Repository { namespace, name } => format!("/repository/{namespace}/{name}"),
            Self::Team { namespace, name } => format!("/organization/{namespace}/teams/{name}"),
            Self::Tag { namespace, repository, name } => {
                format!("/repository/{namespace}/{repository}/tag/{name}")
            }
        }
    }

    /// Inactive entry linking to this segment.
    #[must_use]
    pub fn to_entry(&self) -> BreadcrumbEntry {
        BreadcrumbEntry::new(self.pathname(), self.title())
    }
}
