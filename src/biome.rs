use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! biomes {
    ($($variant:ident => $name:literal,)*) => {
        /// Known biome identifiers.
        ///
        /// Names are the upper-case identifiers used by the game world, e.g.
        /// `PLAINS` or `END_BARRENS`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
        pub enum Biome {
            $($variant,)*
        }

        impl Biome {
            pub const ALL: &'static [Biome] = &[$(Biome::$variant,)*];

            /// Canonical upper-case name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Biome::$variant => $name,)*
                }
            }
        }
    };
}

biomes! {
    Ocean => "OCEAN",
    Plains => "PLAINS",
    Desert => "DESERT",
    WindsweptHills => "WINDSWEPT_HILLS",
    Forest => "FOREST",
    Taiga => "TAIGA",
    Swamp => "SWAMP",
    MangroveSwamp => "MANGROVE_SWAMP",
    River => "RIVER",
    NetherWastes => "NETHER_WASTES",
    TheEnd => "THE_END",
    FrozenOcean => "FROZEN_OCEAN",
    FrozenRiver => "FROZEN_RIVER",
    SnowyPlains => "SNOWY_PLAINS",
    MushroomFields => "MUSHROOM_FIELDS",
    Beach => "BEACH",
    Jungle => "JUNGLE",
    SparseJungle => "SPARSE_JUNGLE",
    DeepOcean => "DEEP_OCEAN",
    StonyShore => "STONY_SHORE",
    SnowyBeach => "SNOWY_BEACH",
    BirchForest => "BIRCH_FOREST",
    DarkForest => "DARK_FOREST",
    SnowyTaiga => "SNOWY_TAIGA",
    OldGrowthPineTaiga => "OLD_GROWTH_PINE_TAIGA",
    WindsweptForest => "WINDSWEPT_FOREST",
    Savanna => "SAVANNA",
    SavannaPlateau => "SAVANNA_PLATEAU",
    Badlands => "BADLANDS",
    WoodedBadlands => "WOODED_BADLANDS",
    SmallEndIslands => "SMALL_END_ISLANDS",
    EndMidlands => "END_MIDLANDS",
    EndHighlands => "END_HIGHLANDS",
    EndBarrens => "END_BARRENS",
    WarmOcean => "WARM_OCEAN",
    LukewarmOcean => "LUKEWARM_OCEAN",
    ColdOcean => "COLD_OCEAN",
    DeepLukewarmOcean => "DEEP_LUKEWARM_OCEAN",
    DeepColdOcean => "DEEP_COLD_OCEAN",
    DeepFrozenOcean => "DEEP_FROZEN_OCEAN",
    TheVoid => "THE_VOID",
    SunflowerPlains => "SUNFLOWER_PLAINS",
    WindsweptGravellyHills => "WINDSWEPT_GRAVELLY_HILLS",
    FlowerForest => "FLOWER_FOREST",
    IceSpikes => "ICE_SPIKES",
    OldGrowthBirchForest => "OLD_GROWTH_BIRCH_FOREST",
    OldGrowthSpruceTaiga => "OLD_GROWTH_SPRUCE_TAIGA",
    WindsweptSavanna => "WINDSWEPT_SAVANNA",
    ErodedBadlands => "ERODED_BADLANDS",
    BambooJungle => "BAMBOO_JUNGLE",
    SoulSandValley => "SOUL_SAND_VALLEY",
    CrimsonForest => "CRIMSON_FOREST",
    WarpedForest => "WARPED_FOREST",
    BasaltDeltas => "BASALT_DELTAS",
    DripstoneCaves => "DRIPSTONE_CAVES",
    LushCaves => "LUSH_CAVES",
    DeepDark => "DEEP_DARK",
    Meadow => "MEADOW",
    Grove => "GROVE",
    SnowySlopes => "SNOWY_SLOPES",
    FrozenPeaks => "FROZEN_PEAKS",
    JaggedPeaks => "JAGGED_PEAKS",
    StonyPeaks => "STONY_PEAKS",
    CherryGrove => "CHERRY_GROVE",
    Custom => "CUSTOM",
}

impl Biome {
    /// Resolve a biome name case-insensitively.
    pub fn from_name(name: &str) -> Option<Biome> {
        let upper = name.to_uppercase();
        Biome::ALL.iter().copied().find(|biome| biome.name() == upper)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Biome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Biome::from_name(s).ok_or_else(|| format!("unknown biome '{}'", s))
    }
}

impl TryFrom<String> for Biome {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
