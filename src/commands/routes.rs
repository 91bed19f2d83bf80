//! `crumbs routes` command.

use std::io::Write;

use super::write_line;
use crate::error::CrumbsError;
use crate::route::shorthand::ShorthandResolver;
use crate::route::Router;

/// Execute the `routes` command.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn run(
    router: &Router,
    resolver: &ShorthandResolver,
    out: &mut dyn Write,
) -> Result<(), CrumbsError> {
    let routes: Vec<_> = router.routes().collect();
    let name_width = routes.iter().map(|r| r.name().len()).max().unwrap_or(0);
    let pattern_width = routes.iter().map(|r| r.pattern().len()).max().unwrap_or(0);

    for route in routes {
        let label = route.breadcrumb().unwrap_or("-");
        let line = format!("{:<name_width$}  {:<pattern_width$}  {label}", route.name(), route.pattern());
        write_line(out, line.trim_end())?;
    }

    let reserved: Vec<&str> = resolver.reserved().collect();
    write_line(out, "")?;
    write_line(out, &format!("Reserved prefixes: {}", reserved.join(", ")))
}
