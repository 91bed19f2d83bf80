//! Trail construction.
//!
//! A build takes one of three paths:
//!
//! 1. No identifying URL parameters (a list page): history is reset and
//!    there is no trail.
//! 2. History is present: the remembered entries are walked and re-pointed
//!    at the current location, then the current page is appended.
//! 3. No history: the trail is derived from the router's matched
//!    ancestors.
//!
//! Either way the new trail's head is remembered for the next build.

use super::history::MAX_HISTORY;
use super::segment::{last_segment, normalize, Location, Segment};
use super::{BreadcrumbEntry, History};
use crate::route::{MatchedCrumb, NavigationPath, RouteParams};

/// Most entries a trail can hold: section, namespace, repository, tag.
pub const MAX_TRAIL: usize = 4;

/// Builds the trail for `pathname` and updates `history` for the next call.
///
/// `params` are the URL parameters visible to the page (mount splat
/// included); `matched` are the router's matched ancestors, shortest first.
/// Never fails: paths outside the known shapes get last-segment titles.
pub fn build_trail(
    pathname: &str,
    params: &RouteParams,
    matched: &[MatchedCrumb],
    history: &mut History,
) -> Vec<BreadcrumbEntry> {
    if params.len() <= 1 {
        tracing::debug!(pathname, "no identifying params, resetting breadcrumbs");
        history.clear();
        return Vec::new();
    }

    let location = Location::parse(pathname);
    let trail = if history.is_empty() {
        from_matched(&location, matched)
    } else {
        from_history(&location, matched, history)
    };

    history.remember(&trail);
    tracing::debug!(
        pathname = location.pathname(),
        entries = trail.len(),
        remembered = history.len(),
        "built breadcrumb trail"
    );
    trail
}

fn from_history(
    location: &Location,
    matched: &[MatchedCrumb],
    history: &History,
) -> Vec<BreadcrumbEntry> {
    let current = location.normalized();
    let mut trail = Vec::with_capacity(MAX_TRAIL);

    for (position, remembered) in history.entries().iter().take(MAX_HISTORY).enumerate() {
        let entry = if position == 0 {
            BreadcrumbEntry::new(remembered.pathname.clone(), remembered.title.clone())
        } else {
            match Segment::at_position(position, location) {
                Some(segment) => segment.to_entry(),
                None => {
                    tracing::debug!(position, "history does not fit the location, stopping early");
                    break;
                }
            }
        };

        if normalize(&entry.pathname) == current {
            push_unique(&mut trail, entry.activated());
            return trail;
        }
        push_unique(&mut trail, entry);
    }

    let title = location
        .tag()
        .map(str::to_string)
        .or_else(|| {
            matched
                .last()
                .filter(|crumb| crumb.route == NavigationPath::RepositoryDetail)
                .filter(|_| is_repository_page(location))
                .and(location.repository())
                .map(str::to_string)
        })
        .unwrap_or_else(|| location.last_segment().to_string());
    push_unique(&mut trail, BreadcrumbEntry::new(location.pathname(), title).activated());
    trail
}

fn from_matched(location: &Location, matched: &[MatchedCrumb]) -> Vec<BreadcrumbEntry> {
    let current = location.normalized();
    let mut trail: Vec<BreadcrumbEntry> = Vec::with_capacity(MAX_TRAIL);

    for crumb in matched {
        if trail.len() == MAX_TRAIL {
            break;
        }

        if trail.iter().any(|entry| is_ancestor_of(&crumb.pathname, &entry.pathname)) {
            tracing::debug!(pathname = %crumb.pathname, "ancestor already covered, skipping");
            continue;
        }

        let position = trail.len();
        let entry = if position == 0 {
            let title = crumb
                .label
                .clone()
                .unwrap_or_else(|| last_segment(&crumb.pathname).to_string());
            BreadcrumbEntry::new(crumb.pathname.clone(), title)
        } else {
            Segment::at_position(position, location).map_or_else(
                || {
                    tracing::debug!(
                        pathname = %crumb.pathname,
                        position,
                        "unrecognized breadcrumb shape, using last segment"
                    );
                    BreadcrumbEntry::new(crumb.pathname.clone(), last_segment(&crumb.pathname))
                },
                |segment| segment.to_entry(),
            )
        };

        let active = normalize(&entry.pathname) == current;
        if push_unique(&mut trail, if active { entry.activated() } else { entry }) && active {
            break;
        }
    }
    trail
}

/// `true` when `ancestor` is a strict segment prefix of `pathname`.
fn is_ancestor_of(ancestor: &str, pathname: &str) -> bool {
    pathname.strip_prefix(ancestor).is_some_and(|rest| rest.starts_with('/'))
}

/// `true` when the location is the repository page itself, not a build or
/// trigger page the repository catch-all also matches.
fn is_repository_page(location: &Location) -> bool {
    Segment::repository(location).is_some_and(|repo| repo.pathname() == location.pathname())
}

/// Appends `entry` unless its pathname is already in the trail.
fn push_unique(trail: &mut Vec<BreadcrumbEntry>, entry: BreadcrumbEntry) -> bool {
    if trail.iter().any(|e| e.pathname == entry.pathname) {
        return false;
    }
    trail.push(entry);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Router;

    fn build(router: &Router, path: &str, history: &mut History) -> Vec<BreadcrumbEntry> {
        build_trail(path, &router.params(path), &router.matched_crumbs(path), history)
    }

    fn entry(pathname: &str, title: &str) -> BreadcrumbEntry {
        BreadcrumbEntry::new(pathname, title)
    }

    #[test]
    fn list_pages_have_no_trail_and_reset_history() {
        let router = Router::console();
        let mut history = History::new();
        build(&router, "/repository/acme/widgets", &mut history);
        assert!(!history.is_empty());

        assert!(build(&router, "/repository", &mut history).is_empty());
        assert!(history.is_empty());
        assert!(build(&router, "/organization", &mut history).is_empty());
    }

    #[test]
    fn organization_page() {
        let router = Router::console();
        let trail = build(&router, "/organization/acme", &mut History::new());
        assert_eq!(
            trail,
            [
                entry("/organization", "organization"),
                entry("/organization/acme", "acme").activated(),
            ]
        );
    }

    #[test]
    fn repository_page() {
        let router = Router::console();
        let trail = build(&router, "/repository/acme/widgets", &mut History::new());
        assert_eq!(
            trail,
            [
                entry("/repository", "repository"),
                entry("/organization/acme", "acme"),
                entry("/repository/acme/widgets", "widgets").activated(),
            ]
        );
    }

    #[test]
    fn tag_page_has_four_entries() {
        let router = Router::console();
        let trail = build(&router, "/repository/acme/widgets/tag/v1", &mut History::new());
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[3], entry("/repository/acme/widgets/tag/v1", "v1").activated());
    }

    #[test]
    fn team_page_has_three_entries() {
        let router = Router::console();
        let trail = build(&router, "/organization/acme/teams/devs", &mut History::new());
        assert_eq!(
            trail,
            [
                entry("/organization", "organization"),
                entry("/organization/acme", "acme"),
                entry("/organization/acme/teams/devs", "devs").activated(),
            ]
        );
    }

    #[test]
    fn same_names_do_not_collapse() {
        let router = Router::console();
        let trail = build(&router, "/repository/same/same", &mut History::new());
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1], entry("/organization/same", "same"));
        assert_eq!(trail[2], entry("/repository/same/same", "same").activated());

        let trail = build(&router, "/organization/same/teams/same", &mut History::new());
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2], entry("/organization/same/teams/same", "same").activated());
    }

    const EVERY_SHAPE: [&str; 24] = [
        "/overview",
        "/organization",
        "/organization/acme",
        "/organization/acme/teams/devs",
        "/user/alice",
        "/repository",
        "/repository/acme",
        "/repository/acme/widgets",
        "/repository/acme/team/widgets",
        "/repository/acme/a/b/c",
        "/repository/acme/widgets/tag/v1",
        "/repository/acme/team/widgets/tag/v1",
        "/repository/acme/a/b/c/tag/v1",
        "/repository/acme/widgets/build/42",
        "/repository/acme/team/widgets/build/42",
        "/repository/acme/a/b/c/build/42",
        "/repository/acme/widgets/trigger/0f1e",
        "/repository/acme/a/b/c/trigger/0f1e",
        "/repository/same/same",
        "/service-keys",
        "/change-log",
        "/usage-logs",
        "/messages",
        "/build-logs",
    ];

    #[test]
    fn sample_shapes_cover_every_route() {
        let router = Router::console();
        for route in router.routes() {
            assert!(
                EVERY_SHAPE.iter().any(|p| router.match_path(p).map(|m| m.route) == Some(route)),
                "{route:?}"
            );
        }
    }

    #[test]
    fn rebuilding_with_own_history_is_stable() {
        let router = Router::console();
        for path in EVERY_SHAPE {
            let mut history = History::new();
            let first = build(&router, path, &mut history);
            let second = build(&router, path, &mut history);
            assert_eq!(first, second, "{path}");
            if let Some(last) = first.last() {
                assert!(last.active, "{path}: {first:?}");
            }
        }
    }

    #[test]
    fn deeply_nested_build_pages_end_at_the_build() {
        let router = Router::console();
        let mut history = History::new();
        let trail = build(&router, "/repository/acme/a/b/c/build/42", &mut history);
        assert_eq!(
            trail,
            [
                entry("/repository", "repository"),
                entry("/organization/acme", "acme"),
                entry("/repository/acme/a/b/c", "a/b/c"),
                entry("/repository/acme/a/b/c/build/42", "42").activated(),
            ]
        );
        assert_eq!(build(&router, "/repository/acme/a/b/c/build/42", &mut history), trail);
    }

    #[test]
    fn deeply_nested_trigger_pages_end_at_the_trigger() {
        let router = Router::console();
        let mut history = History::new();
        let path = "/repository/acme/a/b/c/trigger/0f1e";
        let trail = build(&router, path, &mut history);
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[2], entry("/repository/acme/a/b/c", "a/b/c"));
        assert_eq!(trail[3], entry(path, "0f1e").activated());
        assert_eq!(build(&router, path, &mut history), trail);
    }

    #[test]
    fn jumping_from_an_organization_to_a_tag_skips_the_repository() {
        let router = Router::console();
        let mut history = History::new();
        build(&router, "/organization/acme", &mut history);
        let trail = build(&router, "/repository/acme/widgets/tag/v1", &mut history);
        assert_eq!(
            trail,
            [
                entry("/organization", "organization"),
                entry("/organization/acme", "acme"),
                entry("/repository/acme/widgets/tag/v1", "v1").activated(),
            ]
        );
    }

    #[test]
    fn drilling_down_extends_history() {
        let router = Router::console();
        let mut history = History::new();
        build(&router, "/organization/acme", &mut history);
        let trail = build(&router, "/repository/acme/widgets", &mut history);
        assert_eq!(
            trail,
            [
                entry("/organization", "organization"),
                entry("/organization/acme", "acme"),
                entry("/repository/acme/widgets", "widgets").activated(),
            ]
        );

        let trail = build(&router, "/repository/acme/widgets/tag/v1", &mut history);
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[0].title, "organization");
        assert_eq!(trail[3], entry("/repository/acme/widgets/tag/v1", "v1").activated());
        assert_eq!(history.len(), MAX_HISTORY);
    }

    #[test]
    fn nested_repository_titles_come_from_the_route() {
        let router = Router::console();
        let mut history = History::new();
        build(&router, "/organization/acme", &mut history);
        let trail = build(&router, "/repository/acme/team/widgets", &mut history);
        assert_eq!(trail.last().map(|e| e.title.as_str()), Some("team/widgets"));
    }

    #[test]
    fn climbing_back_up_stops_at_the_current_page() {
        let router = Router::console();
        let mut history = History::new();
        build(&router, "/repository/acme/widgets/tag/v1", &mut history);
        let trail = build(&router, "/organization/acme", &mut history);
        assert_eq!(
            trail,
            [entry("/repository", "repository"), entry("/organization/acme", "acme").activated()]
        );
    }

    #[test]
    fn user_pages_fall_back_to_the_last_segment() {
        let router = Router::console();
        let trail = build(&router, "/user/alice", &mut History::new());
        assert_eq!(trail, [entry("/user/alice", "alice").activated()]);
    }

    #[test]
    fn build_pages_use_the_build_id_as_the_final_title() {
        let router = Router::console();
        let trail = build(&router, "/repository/acme/widgets/build/42", &mut History::new());
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[3], entry("/repository/acme/widgets/build/42", "42").activated());
    }

    #[test]
    fn only_the_last_entry_is_ever_active() {
        let router = Router::console();
        let mut history = History::new();
        for path in [
            "/organization/acme",
            "/repository/acme/widgets",
            "/repository/acme/widgets/tag/v1",
            "/organization/acme/teams/devs",
            "/repository/other/thing",
            "/user/alice",
            "/repository/acme/a/b/tag/x",
        ] {
            let trail = build(&router, path, &mut history);
            let active: Vec<usize> =
                trail.iter().enumerate().filter(|(_, e)| e.active).map(|(i, _)| i).collect();
            assert!(active.len() <= 1, "{path}: {trail:?}");
            if let Some(&i) = active.first() {
                assert_eq!(i, trail.len() - 1, "{path}");
            }
            assert!(trail.len() <= MAX_TRAIL);
            assert!(history.len() <= MAX_HISTORY);
        }
    }
}
