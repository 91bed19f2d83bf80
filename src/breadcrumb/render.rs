//! Plain-text rendering of trails.

use super::BreadcrumbEntry;

/// Renders a trail as aligned `title -> pathname` lines, marking the
/// current page with `*`. Returns `None` for an empty trail: no
/// breadcrumbs are shown at all in that case.
#[must_use]
pub fn render_text(trail: &[BreadcrumbEntry]) -> Option<String> {
    if trail.is_empty() {
        return None;
    }

    let labels: Vec<String> =
        trail.iter().enumerate().map(|(i, entry)| display_title(i, entry)).collect();
    let width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);

    let lines: Vec<String> = trail
        .iter()
        .zip(&labels)
        .map(|(entry, label)| {
            let marker = if entry.active { '*' } else { ' ' };
            format!("{marker} {label:<width$}  -> {}", entry.pathname)
        })
        .collect();
    Some(lines.join("\n"))
}

/// Single-line form such as `organization / acme / [widgets]`.
#[must_use]
pub fn render_inline(trail: &[BreadcrumbEntry]) -> String {
    if trail.is_empty() {
        return "(none)".to_string();
    }
    trail
        .iter()
        .map(|entry| {
            if entry.active {
                format!("[{}]", entry.title)
            } else {
                entry.title.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Section labels are shown capitalized; names are shown verbatim.
fn display_title(position: usize, entry: &BreadcrumbEntry) -> String {
    if position > 0 || entry.pathname.trim_start_matches('/').contains('/') {
        return entry.title.clone();
    }
    let mut chars = entry.title.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
