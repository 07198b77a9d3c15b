//! Evaluate zone specifications against a location

use super::CliError;
use crate::{Biome, Evaluation, Location, evaluate, parse};

/// Where the location for an evaluation comes from.
///
/// A JSON `input` document wins over the individual coordinate fields.
/// Missing coordinates default to 0 as long as at least one is given.
#[derive(Debug, Clone)]
pub struct LocationSource {
    /// JSON location document
    pub input: Option<String>,
    pub world: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub biome: Option<Biome>,
    pub regions: Vec<String>,
}

impl Default for LocationSource {
    fn default() -> Self {
        LocationSource {
            input: None,
            world: "world".to_string(),
            x: None,
            y: None,
            z: None,
            biome: None,
            regions: Vec::new(),
        }
    }
}

impl LocationSource {
    pub fn has_coordinates(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }
}

/// Build the location described by `source`
pub fn resolve_location(source: &LocationSource) -> Result<Location, CliError> {
    if let Some(json) = &source.input {
        return Ok(serde_json::from_str(json)?);
    }
    if !source.has_coordinates() {
        return Err(CliError::NoLocation);
    }

    let mut location = Location::new(
        source.world.clone(),
        source.x.unwrap_or_default(),
        source.y.unwrap_or_default(),
        source.z.unwrap_or_default(),
    );
    if let Some(biome) = source.biome {
        location = location.with_biome(biome);
    }
    for region in &source.regions {
        location = location.with_region(region.clone());
    }
    Ok(location)
}

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The specification to evaluate
    pub spec: String,
    pub location: LocationSource,
    /// Record a trace of every sub-evaluation
    pub trace: bool,
}

/// Parse and evaluate a specification
pub fn execute_eval(options: &EvalOptions) -> Result<Evaluation, CliError> {
    let expr = parse(&options.spec).map_err(|e| CliError::parse(&options.spec, e))?;
    let location = resolve_location(&options.location)?;
    Ok(evaluate(&expr, &location, options.trace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_from_flags() {
        let options = EvalOptions {
            spec: "circle(0,0,10) & wg(\"spawn\")".to_string(),
            location: LocationSource {
                x: Some(3.0),
                z: Some(-4.0),
                regions: vec!["spawn".to_string()],
                ..LocationSource::default()
            },
            trace: false,
        };
        let outcome = execute_eval(&options).unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.trace, None);
    }

    #[test]
    fn location_document_wins() {
        let source = LocationSource {
            input: Some(r#"{"world":"nether","x":1,"y":2,"z":3,"biome":"basalt_deltas"}"#.into()),
            x: Some(100.0),
            ..LocationSource::default()
        };
        let location = resolve_location(&source).unwrap();
        assert_eq!(location.world, "nether");
        assert_eq!(location.x, 1.0);
        assert_eq!(location.biome, Some(Biome::BasaltDeltas));
        assert!(location.regions.is_empty());
    }

    #[test]
    fn missing_location_is_an_error() {
        let err = resolve_location(&LocationSource::default()).unwrap_err();
        assert!(matches!(err, CliError::NoLocation));
    }

    #[test]
    fn trace_requested() {
        let options = EvalOptions {
            spec: "y(0,10) | y(20,30)".to_string(),
            location: LocationSource {
                y: Some(5.0),
                ..LocationSource::default()
            },
            trace: true,
        };
        let outcome = execute_eval(&options).unwrap();
        assert_eq!(
            outcome.trace.as_deref(),
            Some("y(0,10) => T, y(20,30) => F, | => T,")
        );
    }
}
