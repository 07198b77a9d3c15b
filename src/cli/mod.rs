//! CLI support for zonespec
//!
//! Provides programmatic access to the zonespec commands so other tools can
//! embed them without going through the binary.

mod check;
mod docs;
mod eval;
mod zones;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use docs::{get_predicate_doc, get_predicates_overview};
pub use eval::{EvalOptions, LocationSource, execute_eval, resolve_location};
pub use zones::{ZonesOptions, execute_zones};

use std::io;

use thiserror::Error;

use crate::{ParseError, ZoneError};

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Specification failed to parse; displays with a caret under the
    /// offending token
    #[error("{}", .error.render(.spec))]
    Parse { spec: String, error: ParseError },

    /// Zone file could not be loaded
    #[error(transparent)]
    Zone(#[from] ZoneError),

    /// Location document is not valid JSON
    #[error("invalid location: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Neither coordinates nor a location document were given
    #[error("No location provided. Use --x/--y/--z, --input, or pipe a JSON location to stdin.")]
    NoLocation,

    /// Unknown predicate requested from the documentation
    #[error("Unknown predicate: '{0}'\nRun 'zonespec predicates' to see available predicates.")]
    UnknownPredicate(String),
}

impl CliError {
    pub(crate) fn parse(spec: &str, error: ParseError) -> Self {
        CliError::Parse {
            spec: spec.to_string(),
            error,
        }
    }
}
