//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `crumbs`.
#[derive(Debug, Parser)]
#[command(name = "crumbs", version, about = "Rebuild registry console breadcrumb trails")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build trails for a sequence of navigations, sharing history between them.
    Trail {
        /// Pathnames to visit, in order.
        #[arg(value_name = "PATH", required_unless_present = "stdin")]
        paths: Vec<String>,
        /// Read pathnames from stdin, one per line.
        #[arg(long, conflicts_with = "paths")]
        stdin: bool,
        /// Print JSON lines instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Replay a recorded navigation session.
    Replay {
        /// Cassette file written by a recorded `trail` run.
        cassette: PathBuf,
        /// Rebuild every trail and fail on the first difference.
        #[arg(long)]
        check: bool,
        /// Print JSON lines instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Resolve a shorthand namespace or repository URL.
    Resolve {
        /// URL path, optionally with query string and fragment.
        url: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the route table and reserved prefixes.
    Routes,
}
