//! Match a location against every zone in a zone file

use super::{CliError, LocationSource, resolve_location};
use crate::ZoneSet;

/// Options for the zones command
#[derive(Debug, Clone, Default)]
pub struct ZonesOptions {
    /// Contents of the JSON zone file
    pub zone_file: String,
    pub location: LocationSource,
}

/// Load the zone file and list the zones containing the location
pub fn execute_zones(options: &ZonesOptions) -> Result<Vec<String>, CliError> {
    let zones = ZoneSet::from_json(&options.zone_file)?;
    let location = resolve_location(&options.location)?;
    Ok(zones
        .matching(&location)
        .into_iter()
        .map(str::to_string)
        .collect())
}
