//! Path patterns in the console router's syntax.
//!
//! A pattern is a `/`-separated list of segments: literals, `:name`
//! parameters (exactly one path segment) and `*` splats. A trailing splat
//! captures zero or more segments; a splat followed by more segments
//! captures one or more, choosing the shortest capture that lets the rest
//! of the pattern match.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key under which splat captures are stored.
pub const SPLAT: &str = "*";

/// URL parameters captured while matching a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value captured for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets `key`, replacing any earlier capture.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merges `other` into `self`; captures in `other` win.
    pub fn extend(&mut self, other: RouteParams) {
        self.0.extend(other.0);
    }

    /// Number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(String),
    Param(String),
    Splat,
}

/// A compiled route pattern such as `/repository/:organizationName/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<PatternSegment>,
}

impl RoutePattern {
    /// Compiles a pattern string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let segments = split_path(raw)
            .into_iter()
            .map(|segment| {
                if segment == SPLAT {
                    PatternSegment::Splat
                } else if let Some(name) = segment.strip_prefix(':') {
                    PatternSegment::Param(name.to_string())
                } else {
                    PatternSegment::Literal(segment.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// The leading literal segment, if the pattern starts with one.
    #[must_use]
    pub fn first_literal(&self) -> Option<&str> {
        match self.segments.first() {
            Some(PatternSegment::Literal(lit)) => Some(lit.as_str()),
            _ => None,
        }
    }

    /// Matches a whole path, returning the captured parameters.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts = split_path(path);
        match_segments(&self.segments, &parts)
            .map(|captures| captures.into_iter().collect::<RouteParams>())
    }
}

/// Splits a path into its non-empty segments.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_segments(pattern: &[PatternSegment], path: &[&str]) -> Option<Vec<(String, String)>> {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty().then(Vec::new);
    };

    match head {
        PatternSegment::Literal(lit) => {
            let (first, tail) = path.split_first()?;
            if *first == lit.as_str() {
                match_segments(rest, tail)
            } else {
                None
            }
        }
        PatternSegment::Param(name) => {
            let (first, tail) = path.split_first()?;
            let mut captures = match_segments(rest, tail)?;
            captures.insert(0, (name.clone(), (*first).to_string()));
            Some(captures)
        }
        PatternSegment::Splat if rest.is_empty() => {
            Some(vec![(SPLAT.to_string(), path.join("/"))])
        }
        PatternSegment::Splat => (1..=path.len()).find_map(|take| {
            let mut captures = match_segments(rest, &path[take..])?;
            captures.insert(0, (SPLAT.to_string(), path[..take].join("/")));
            Some(captures)
        }),
    }
}
