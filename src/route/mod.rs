//! The console route table and matcher.
//!
//! Routes are tried in table order and the first match wins, so more
//! specific patterns (tags, builds, teams) sit above the catch-all
//! repository route. The whole console is mounted under a `/*` splat,
//! which is why every location carries at least one URL parameter.

pub mod pattern;
pub mod shorthand;

use serde::Serialize;

pub use pattern::{split_path, RouteParams, RoutePattern, SPLAT};

/// Named navigation paths of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationPath {
    /// Registry overview page.
    OverviewList,
    /// List of organizations.
    OrganizationsList,
    /// A team inside an organization.
    TeamMember,
    /// Organization detail page.
    OrganizationDetail,
    /// User namespace detail page.
    UserDetail,
    /// List of repositories.
    RepositoriesList,
    /// A tag of a repository.
    TagDetail,
    /// A single build of a repository.
    BuildDetail,
    /// Build trigger setup for a repository.
    SetupBuildTrigger,
    /// Repository detail page; the repository name may contain `/`.
    RepositoryDetail,
    /// Superuser service keys.
    ServiceKeys,
    /// Superuser change log.
    ChangeLog,
    /// Superuser usage logs.
    UsageLogs,
    /// Superuser global messages.
    Messages,
    /// Superuser build logs.
    BuildLogs,
}

impl NavigationPath {
    /// Every navigation path, in match order.
    pub const ALL: [Self; 15] = [
        Self::OverviewList,
        Self::OrganizationsList,
        Self::TeamMember,
        Self::OrganizationDetail,
        Self::UserDetail,
        Self::RepositoriesList,
        Self::TagDetail,
        Self::BuildDetail,
        Self::SetupBuildTrigger,
        Self::RepositoryDetail,
        Self::ServiceKeys,
        Self::ChangeLog,
        Self::UsageLogs,
        Self::Messages,
        Self::BuildLogs,
    ];

    /// Route pattern for this path.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::OverviewList => "/overview",
            Self::OrganizationsList => "/organization",
            Self::TeamMember => "/organization/:organizationName/teams/:teamName",
            Self::OrganizationDetail => "/organization/:organizationName",
            Self::UserDetail => "/user/:organizationName",
            Self::RepositoriesList => "/repository",
            Self::TagDetail => "/repository/:organizationName/*/tag/:tagName",
            Self::BuildDetail => "/repository/:organizationName/*/build/:buildId",
            Self::SetupBuildTrigger => {
                "/repository/:organizationName/:repositoryName/trigger/:triggerUuid"
            }
            Self::RepositoryDetail => "/repository/:organizationName/*",
            Self::ServiceKeys => "/service-keys",
            Self::ChangeLog => "/change-log",
            Self::UsageLogs => "/usage-logs",
            Self::Messages => "/messages",
            Self::BuildLogs => "/build-logs",
        }
    }

    /// Static breadcrumb label key, for the top-level list routes.
    #[must_use]
    pub fn breadcrumb(self) -> Option<&'static str> {
        match self {
            Self::OverviewList => Some("overview"),
            Self::OrganizationsList => Some("organization"),
            Self::RepositoriesList => Some("repository"),
            _ => None,
        }
    }

    /// Identifier used in listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OverviewList => "overviewList",
            Self::OrganizationsList => "organizationsList",
            Self::TeamMember => "teamMember",
            Self::OrganizationDetail => "organizationDetail",
            Self::UserDetail => "userDetail",
            Self::RepositoriesList => "repositoriesList",
            Self::TagDetail => "tagDetail",
            Self::BuildDetail => "buildDetail",
            Self::SetupBuildTrigger => "setupBuildTrigger",
            Self::RepositoryDetail => "repositoryDetail",
            Self::ServiceKeys => "serviceKeys",
            Self::ChangeLog => "changeLog",
            Self::UsageLogs => "usageLogs",
            Self::Messages => "messages",
            Self::BuildLogs => "buildLogs",
        }
    }
}

/// Prefixes that never get their own breadcrumb, even though a route
/// (usually the repository catch-all) would match them.
const EXCLUDED_CRUMBS: [&str; 3] = [
    "/repository/:organizationName/*/tag",
    "/repository/:organizationName/*/build",
    "/repository/:organizationName/*/trigger",
];

/// Result of matching a location against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The route that matched.
    pub route: NavigationPath,
    /// Parameters captured by the route itself.
    pub params: RouteParams,
}

/// One matched ancestor of the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedCrumb {
    /// The ancestor pathname (a segment prefix of the location).
    pub pathname: String,
    /// Route the ancestor matched.
    pub route: NavigationPath,
    /// Static label key, when the route declares one.
    pub label: Option<String>,
}

struct Route {
    path: NavigationPath,
    pattern: RoutePattern,
}

/// Matches locations against the console route table.
pub struct Router {
    routes: Vec<Route>,
    excluded: Vec<RoutePattern>,
}

impl Router {
    /// Builds the console route table.
    #[must_use]
    pub fn console() -> Self {
        let routes = NavigationPath::ALL
            .iter()
            .map(|&path| Route { path, pattern: RoutePattern::parse(path.pattern()) })
            .collect();
        let excluded = EXCLUDED_CRUMBS.iter().map(|raw| RoutePattern::parse(raw)).collect();
        Self { routes, excluded }
    }

    /// Navigation paths in match order.
    pub fn routes(&self) -> impl Iterator<Item = NavigationPath> + '_ {
        self.routes.iter().map(|r| r.path)
    }

    /// Returns the first route matching `pathname`.
    #[must_use]
    pub fn match_path(&self, pathname: &str) -> Option<RouteMatch> {
        let pathname = canonical_path(pathname);
        self.routes.iter().find_map(|route| {
            route.pattern.matches(&pathname).map(|params| RouteMatch { route: route.path, params })
        })
    }

    /// URL parameters visible to a page at `pathname`.
    ///
    /// Always contains the mount splat; a route's own splat replaces it.
    #[must_use]
    pub fn params(&self, pathname: &str) -> RouteParams {
        let pathname = canonical_path(pathname);
        let mut params = RouteParams::new();
        params.insert(SPLAT, pathname.trim_start_matches('/'));
        if let Some(matched) = self.match_path(&pathname) {
            params.extend(matched.params);
        }
        params
    }

    /// Matched ancestors of `pathname`, shortest first, the location included.
    #[must_use]
    pub fn matched_crumbs(&self, pathname: &str) -> Vec<MatchedCrumb> {
        let pathname = canonical_path(pathname);
        let segments = split_path(&pathname);
        (1..=segments.len())
            .map(|end| format!("/{}", segments[..end].join("/")))
            .filter(|prefix| !self.excluded.iter().any(|p| p.matches(prefix).is_some()))
            .filter_map(|prefix| {
                let matched = self.match_path(&prefix)?;
                Some(MatchedCrumb {
                    label: matched.route.breadcrumb().map(str::to_string),
                    route: matched.route,
                    pathname: prefix,
                })
            })
            .collect()
    }

    /// First path segments claimed by the route table.
    #[must_use]
    pub fn top_level_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> =
            self.routes.iter().filter_map(|r| r.pattern.first_literal()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        prefixes
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::console()
    }
}

/// Canonical form of a location pathname.
///
/// Drops any query string or fragment, collapses empty segments and
/// removes the trailing slash. The root is `/`.
#[must_use]
pub fn canonical_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let segments = split_path(&raw[..end]);
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_path_strips_noise() {
        assert_eq!(canonical_path("/organization/acme/"), "/organization/acme");
        assert_eq!(canonical_path("organization//acme?tab=teams#x"), "/organization/acme");
        assert_eq!(canonical_path(""), "/");
        assert_eq!(canonical_path("/?tab=x"), "/");
    }

    #[test]
    fn specific_routes_win_over_the_repository_catch_all() {
        let router = Router::console();
        let tag = router.match_path("/repository/acme/widgets/tag/v1").unwrap();
        assert_eq!(tag.route, NavigationPath::TagDetail);
        assert_eq!(tag.params.get("tagName"), Some("v1"));

        let repo = router.match_path("/repository/acme/widgets").unwrap();
        assert_eq!(repo.route, NavigationPath::RepositoryDetail);

        let team = router.match_path("/organization/acme/teams/devs").unwrap();
        assert_eq!(team.route, NavigationPath::TeamMember);
    }

    #[test]
    fn list_pages_only_carry_the_mount_splat() {
        let router = Router::console();
        for path in ["/organization", "/repository", "/overview", "/service-keys", "/nowhere"] {
            assert_eq!(router.params(path).len(), 1, "{path}");
        }
    }

    #[test]
    fn detail_pages_carry_identifying_params() {
        let router = Router::console();
        let params = router.params("/organization/acme");
        assert_eq!(params.get("*"), Some("organization/acme"));
        assert_eq!(params.get("organizationName"), Some("acme"));

        let params = router.params("/repository/acme/widgets");
        assert_eq!(params.get("*"), Some("widgets"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn matched_crumbs_for_a_tag_skip_the_bare_tag_segment() {
        let router = Router::console();
        let crumbs: Vec<String> = router
            .matched_crumbs("/repository/acme/widgets/tag/v1")
            .into_iter()
            .map(|c| c.pathname)
            .collect();
        assert_eq!(
            crumbs,
            [
                "/repository",
                "/repository/acme",
                "/repository/acme/widgets",
                "/repository/acme/widgets/tag/v1",
            ]
        );
    }

    #[test]
    fn matched_crumbs_carry_static_labels() {
        let router = Router::console();
        let crumbs = router.matched_crumbs("/organization/acme/teams/devs");
        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[0].label.as_deref(), Some("organization"));
        assert_eq!(crumbs[1].label, None);
        assert_eq!(crumbs[2].route, NavigationPath::TeamMember);
    }

    #[test]
    fn top_level_prefixes_cover_every_literal_route() {
        let router = Router::console();
        let prefixes = router.top_level_prefixes();
        for expected in ["overview", "organization", "user", "repository", "service-keys"] {
            assert!(prefixes.contains(&expected), "{expected}");
        }
    }
}
