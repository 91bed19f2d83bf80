//! `crumbs resolve` command.

use std::io::Write;

use super::write_line;
use crate::config::OutputFormat;
use crate::error::CrumbsError;
use crate::route::shorthand::{Resolution, ShorthandResolver};

/// Execute the `resolve` command.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn run(
    resolver: &ShorthandResolver,
    url: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CrumbsError> {
    let resolution = resolver.resolve(url);
    let line = match format {
        OutputFormat::Json => serde_json::to_string(&resolution)?,
        OutputFormat::Text => format_resolution(&resolution),
    };
    write_line(out, &line)
}

fn format_resolution(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Redirect(target) => format!("redirect {target}"),
        Resolution::Passthrough => "passthrough".to_string(),
    }
}
