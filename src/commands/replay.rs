//! `crumbs replay` command.

use std::io::Write;
use std::path::Path;

use super::{format_visit, write_line};
use crate::breadcrumb::render::render_inline;
use crate::breadcrumb::Navigator;
use crate::cassette::{Cassette, CassetteReplayer};
use crate::config::OutputFormat;
use crate::context::ServiceContext;
use crate::error::CrumbsError;

/// Execute the `replay` command.
///
/// Prints the recorded trail of every visit. With `check`, every trail is
/// also rebuilt from scratch and the first difference is an error.
///
/// # Errors
///
/// Returns an error if the cassette cannot be loaded, output fails, or a
/// rebuilt trail differs from the recording.
pub fn run(
    cassette_path: &Path,
    check: bool,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CrumbsError> {
    let cassette = Cassette::load(cassette_path)?;
    tracing::info!(name = %cassette.name, visits = cassette.visits.len(), check, "replaying session");

    let mut replayer = CassetteReplayer::new(&cassette);
    let mut recorded = ServiceContext::from_cassette(&cassette);
    let mut live = check.then(|| ServiceContext::live(Navigator::default()));

    let mut count = 0usize;
    while let Some(visit) = replayer.next_visit() {
        let (seq, pathname) = (visit.seq, visit.pathname.clone());
        let expected = recorded.trails.navigate(&pathname)?;

        let shown = match live.as_mut() {
            Some(live) => {
                let actual = live.trails.navigate(&pathname)?;
                if actual != expected {
                    tracing::warn!(seq, pathname = %pathname, "trail differs from recording");
                    return Err(CrumbsError::TrailMismatch {
                        seq,
                        pathname,
                        expected: render_inline(&expected),
                        actual: render_inline(&actual),
                    });
                }
                actual
            }
            None => expected,
        };

        if format == OutputFormat::Text && count > 0 {
            write_line(out, "")?;
        }
        write_line(out, &format_visit(&pathname, &shown, format)?)?;
        count += 1;
    }

    if check && format == OutputFormat::Text {
        write_line(out, &format!("\n{count} visit(s) verified."))?;
    }
    Ok(())
}
