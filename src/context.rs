use serde::{Deserialize, Serialize};

use crate::biome::Biome;

/// Region id a location is considered to be in when no other region applies.
pub const GLOBAL_REGION: &str = "__global__";

/// The runtime location a zone specification is evaluated against.
///
/// Implemented by the world integration layer. Lookups are expected to be
/// cheap and non-blocking; evaluation calls them synchronously.
pub trait SpatialContext {
    /// Identifier of the world the location is in.
    fn world(&self) -> &str;

    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn z(&self) -> f64;

    /// Biome at the location, if the world reports one.
    fn biome(&self) -> Option<Biome>;

    /// Ids of the named regions containing the location. The global region
    /// is not listed.
    fn regions(&self) -> &[String];
}

/// A plain, fully materialised [`SpatialContext`].
///
/// # Example
///
/// ```
/// use zonespec::{Biome, Location, SpatialContext};
///
/// let here = Location::new("world", 120.0, 64.0, -35.0)
///     .with_biome(Biome::Plains)
///     .with_region("spawn");
///
/// assert_eq!(here.biome(), Some(Biome::Plains));
/// assert_eq!(here.regions(), ["spawn".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub biome: Option<Biome>,
    #[serde(default)]
    pub regions: Vec<String>,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Location {
            world: world.into(),
            x,
            y,
            z,
            biome: None,
            regions: Vec::new(),
        }
    }

    pub fn with_biome(mut self, biome: Biome) -> Self {
        self.biome = Some(biome);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        if region != GLOBAL_REGION {
            self.regions.push(region);
        }
        self
    }
}

impl SpatialContext for Location {
    fn world(&self) -> &str {
        &self.world
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn biome(&self) -> Option<Biome> {
        self.biome
    }

    fn regions(&self) -> &[String] {
        &self.regions
    }
}
