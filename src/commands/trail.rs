//! `crumbs trail` command.

use std::io::Write;

use super::{format_visit, write_line};
use crate::config::OutputFormat;
use crate::context::ServiceContext;
use crate::error::CrumbsError;

/// Execute the `trail` command.
///
/// Visits `paths` in order through one context so that each trail sees
/// the history left by the ones before it.
///
/// # Errors
///
/// Returns an error if a trail cannot be produced or written.
pub fn run(
    ctx: &mut ServiceContext,
    paths: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CrumbsError> {
    for (i, path) in paths.iter().enumerate() {
        let trail = ctx.trails.navigate(path)?;
        if format == OutputFormat::Text && i > 0 {
            write_line(out, "")?;
        }
        write_line(out, &format_visit(path, &trail, format)?)?;
    }
    Ok(())
}
