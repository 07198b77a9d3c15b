//! Named zone sets loaded from configuration.
//!
//! A zone file is a JSON document mapping zone names to specification text:
//!
//! ```text
//! {
//!   "zones": {
//!     "spawn": "circle(0,0,200)",
//!     "outskirts": "donut(0,0,200,2000) & !wg(\"__global__\")"
//!   }
//! }
//! ```
//!
//! Every specification is parsed once when the set is built; evaluation then
//! only walks the cached trees.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{ast::Expr, context::SpatialContext, error::ParseError, parser::parse};

/// Errors raised while building a [`ZoneSet`].
#[derive(Debug, Error)]
pub enum ZoneError {
    /// The document is not a valid zone file
    #[error("invalid zone file: {0}")]
    Json(#[from] serde_json::Error),

    /// A zone's specification failed to parse
    #[error("zone '{zone}': {error}")]
    Invalid {
        zone: String,
        spec: String,
        #[source]
        error: ParseError,
    },
}

#[derive(Debug, Deserialize)]
struct ZoneFile {
    zones: BTreeMap<String, String>,
}

/// A named, parsed zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub spec: String,
    pub expr: Expr,
}

/// Zones keyed by name, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct ZoneSet {
    zones: BTreeMap<String, Zone>,
}

impl ZoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a JSON zone file.
    pub fn from_json(text: &str) -> Result<Self, ZoneError> {
        let file: ZoneFile = serde_json::from_str(text)?;
        let set = Self::from_specs(file.zones)?;
        debug!(zones = set.len(), "loaded zone file");
        Ok(set)
    }

    /// Build a set from `(name, spec)` pairs, failing on the first invalid
    /// specification.
    pub fn from_specs<I, N, S>(specs: I) -> Result<Self, ZoneError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut set = ZoneSet::new();
        for (name, spec) in specs {
            set.insert(name, spec)?;
        }
        Ok(set)
    }

    /// Parse and add a zone, replacing any zone of the same name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        spec: impl Into<String>,
    ) -> Result<(), ZoneError> {
        let (name, spec) = (name.into(), spec.into());
        match parse(&spec) {
            Ok(expr) => {
                self.zones.insert(name, Zone { spec, expr });
                Ok(())
            }
            Err(error) => Err(ZoneError::Invalid {
                zone: name,
                spec,
                error,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.zones.get(name)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    /// Names of every zone containing `context`, in name order.
    pub fn matching(&self, context: &dyn SpatialContext) -> Vec<&str> {
        self.zones
            .iter()
            .filter(|(_, zone)| zone.expr.matches(context))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
