//! Typed errors for the `crumbs` library and CLI.
//!
//! Trail building itself never fails; everything here comes from the
//! surfaces around it (configuration, cassettes, replay checks).

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by commands, configuration loading and session replay.
#[derive(Debug, Error)]
pub enum CrumbsError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::config::Config`].
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A cassette file could not be read.
    #[error("Failed to read cassette file {path}: {source}")]
    CassetteRead {
        /// Cassette path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A cassette file is not a valid navigation session.
    #[error("Failed to parse cassette file {path}: {source}")]
    CassetteParse {
        /// Cassette path.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A cassette could not be written to disk.
    #[error("Failed to write cassette file {path}: {source}")]
    CassetteWrite {
        /// Cassette path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Replaying a visit produced a different trail than the one recorded.
    #[error("Trail mismatch at visit {seq} ({pathname}): expected {expected}, got {actual}")]
    TrailMismatch {
        /// Sequence number of the diverging visit.
        seq: u64,
        /// Pathname of the diverging visit.
        pathname: String,
        /// Recorded trail, rendered inline.
        expected: String,
        /// Rebuilt trail, rendered inline.
        actual: String,
    },

    /// A replay asked for more visits than the cassette holds.
    #[error("Cassette exhausted: no visit recorded for {pathname}")]
    CassetteExhausted {
        /// Pathname that was requested.
        pathname: String,
    },

    /// A replay requested a different pathname than the one recorded next.
    #[error("Unexpected visit at {seq}: cassette has {expected}, requested {actual}")]
    UnexpectedVisit {
        /// Sequence number of the recorded visit.
        seq: u64,
        /// Recorded pathname.
        expected: String,
        /// Requested pathname.
        actual: String,
    },

    /// The recording session could not be finalized.
    #[error("Recording session error: {0}")]
    Recording(String),

    /// A value on the command line or stdin was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON output could not be produced.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Reading stdin or writing stdout failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
