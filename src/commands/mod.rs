//! Command dispatch and handlers.

pub mod replay;
pub mod resolve;
pub mod routes;
pub mod trail;

use std::env;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::breadcrumb::render::render_text;
use crate::breadcrumb::{BreadcrumbEntry, Navigator};
use crate::cli::Command;
use crate::config::{Config, OutputFormat};
use crate::context::ServiceContext;
use crate::error::CrumbsError;
use crate::route::shorthand::ShorthandResolver;
use crate::route::{canonical_path, Router};

/// Environment variable naming a cassette file to record `trail` runs into.
pub const RECORD_ENV: &str = "CRUMBS_RECORD";

/// Dispatch a parsed command to its handler, writing results to stdout.
///
/// When `CRUMBS_RECORD` is set to a file path, every visit made by `trail`
/// is recorded into a cassette at that path.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), CrumbsError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Trail { paths, stdin, json } => {
            let paths =
                if *stdin { read_paths(std::io::stdin().lock())? } else { paths.clone() };
            let mut ctx = match env::var(RECORD_ENV) {
                Ok(path) => ServiceContext::recording(Navigator::default(), Path::new(&path)),
                Err(_) => ServiceContext::live(Navigator::default()),
            };
            let result = trail::run(&mut ctx, &paths, output_format(*json, config), &mut out);
            finish_recording(ctx, result)
        }
        Command::Replay { cassette, check, json } => {
            replay::run(cassette, *check, output_format(*json, config), &mut out)
        }
        Command::Resolve { url, json } => {
            let resolver = ShorthandResolver::new(&Router::console(), &config.reserved_prefixes);
            resolve::run(&resolver, url, output_format(*json, config), &mut out)
        }
        Command::Routes => {
            let router = Router::console();
            let resolver = ShorthandResolver::new(&router, &config.reserved_prefixes);
            routes::run(&router, &resolver, &mut out)
        }
    }
}

/// Finishes the session after the command completes, even on error.
///
/// The command's own error takes precedence over a failure to write the
/// cassette.
fn finish_recording(
    ctx: ServiceContext,
    result: Result<(), CrumbsError>,
) -> Result<(), CrumbsError> {
    let finished = ctx.finish();
    match &finished {
        Ok(Some(path)) => eprintln!("Recording saved to: {}", path.display()),
        Ok(None) => {}
        Err(err) if result.is_err() => {
            tracing::warn!(error = %err, "recording could not be saved");
        }
        Err(_) => {}
    }
    result.and(finished.map(drop))
}

/// `--json` wins over the configured format.
fn output_format(json_flag: bool, config: &Config) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output
    }
}

/// Reads one pathname per line, skipping blanks and `#` comments.
///
/// # Errors
///
/// Returns an error if reading fails or no pathname is found.
pub fn read_paths(reader: impl BufRead) -> Result<Vec<String>, CrumbsError> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            paths.push(line.to_string());
        }
    }
    if paths.is_empty() {
        return Err(CrumbsError::InvalidInput("no pathnames on stdin".to_string()));
    }
    Ok(paths)
}

/// Formats one visit for output.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_visit(
    pathname: &str,
    trail: &[BreadcrumbEntry],
    format: OutputFormat,
) -> Result<String, CrumbsError> {
    let pathname = canonical_path(pathname);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
            "pathname": pathname,
            "trail": trail,
        }))?),
        OutputFormat::Text => {
            let body = render_text(trail).unwrap_or_else(|| "  (no breadcrumbs)".to_string());
            Ok(format!("{pathname}\n{body}"))
        }
    }
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<(), CrumbsError> {
    writeln!(out, "{line}")?;
    Ok(())
}
