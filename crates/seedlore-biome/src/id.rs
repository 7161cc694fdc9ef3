//! Biome and version identifiers.

use serde::{Deserialize, Serialize};

/// Supported generator data version.
///
/// The climate parameter table, biome layout, and structure catalog are all
/// keyed by this; only the current overworld layout is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameVersion {
    /// 1.21 winter-drop layout (pale gardens present).
    #[default]
    V1_21_4,
}

/// World dimensions. Only the overworld has a climate stack here; seeding
/// a generator for another dimension is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    Nether,
    #[default]
    Overworld,
    End,
}

/// Overworld biomes, with the reference library's numeric identifiers as
/// discriminants so callers can exchange raw ids with external tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Biome {
    Ocean = 0,
    Plains = 1,
    Desert = 2,
    WindsweptHills = 3,
    Forest = 4,
    Taiga = 5,
    Swamp = 6,
    River = 7,
    FrozenOcean = 10,
    FrozenRiver = 11,
    SnowyPlains = 12,
    MushroomFields = 14,
    Beach = 16,
    Jungle = 21,
    SparseJungle = 23,
    DeepOcean = 24,
    StonyShore = 25,
    SnowyBeach = 26,
    BirchForest = 27,
    DarkForest = 29,
    SnowyTaiga = 30,
    OldGrowthPineTaiga = 32,
    WindsweptForest = 34,
    Savanna = 35,
    SavannaPlateau = 36,
    Badlands = 37,
    WoodedBadlands = 38,
    WarmOcean = 44,
    LukewarmOcean = 45,
    ColdOcean = 46,
    DeepLukewarmOcean = 48,
    DeepColdOcean = 49,
    DeepFrozenOcean = 50,
    SunflowerPlains = 129,
    WindsweptGravellyHills = 131,
    FlowerForest = 132,
    IceSpikes = 140,
    OldGrowthBirchForest = 155,
    OldGrowthSpruceTaiga = 160,
    WindsweptSavanna = 163,
    ErodedBadlands = 165,
    BambooJungle = 168,
    DripstoneCaves = 174,
    LushCaves = 175,
    Meadow = 177,
    Grove = 178,
    SnowySlopes = 179,
    JaggedPeaks = 180,
    FrozenPeaks = 181,
    StonyPeaks = 182,
    DeepDark = 183,
    MangroveSwamp = 184,
    CherryGrove = 185,
    PaleGarden = 186,
}

impl Biome {
    /// Numeric identifier.
    #[must_use]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Resource-style name, without namespace.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Plains => "plains",
            Self::Desert => "desert",
            Self::WindsweptHills => "windswept_hills",
            Self::Forest => "forest",
            Self::Taiga => "taiga",
            Self::Swamp => "swamp",
            Self::River => "river",
            Self::FrozenOcean => "frozen_ocean",
            Self::FrozenRiver => "frozen_river",
            Self::SnowyPlains => "snowy_plains",
            Self::MushroomFields => "mushroom_fields",
            Self::Beach => "beach",
            Self::Jungle => "jungle",
            Self::SparseJungle => "sparse_jungle",
            Self::DeepOcean => "deep_ocean",
            Self::StonyShore => "stony_shore",
            Self::SnowyBeach => "snowy_beach",
            Self::BirchForest => "birch_forest",
            Self::DarkForest => "dark_forest",
            Self::SnowyTaiga => "snowy_taiga",
            Self::OldGrowthPineTaiga => "old_growth_pine_taiga",
            Self::WindsweptForest => "windswept_forest",
            Self::Savanna => "savanna",
            Self::SavannaPlateau => "savanna_plateau",
            Self::Badlands => "badlands",
            Self::WoodedBadlands => "wooded_badlands",
            Self::WarmOcean => "warm_ocean",
            Self::LukewarmOcean => "lukewarm_ocean",
            Self::ColdOcean => "cold_ocean",
            Self::DeepLukewarmOcean => "deep_lukewarm_ocean",
            Self::DeepColdOcean => "deep_cold_ocean",
            Self::DeepFrozenOcean => "deep_frozen_ocean",
            Self::SunflowerPlains => "sunflower_plains",
            Self::WindsweptGravellyHills => "windswept_gravelly_hills",
            Self::FlowerForest => "flower_forest",
            Self::IceSpikes => "ice_spikes",
            Self::OldGrowthBirchForest => "old_growth_birch_forest",
            Self::OldGrowthSpruceTaiga => "old_growth_spruce_taiga",
            Self::WindsweptSavanna => "windswept_savanna",
            Self::ErodedBadlands => "eroded_badlands",
            Self::BambooJungle => "bamboo_jungle",
            Self::DripstoneCaves => "dripstone_caves",
            Self::LushCaves => "lush_caves",
            Self::Meadow => "meadow",
            Self::Grove => "grove",
            Self::SnowySlopes => "snowy_slopes",
            Self::JaggedPeaks => "jagged_peaks",
            Self::FrozenPeaks => "frozen_peaks",
            Self::StonyPeaks => "stony_peaks",
            Self::DeepDark => "deep_dark",
            Self::MangroveSwamp => "mangrove_swamp",
            Self::CherryGrove => "cherry_grove",
            Self::PaleGarden => "pale_garden",
        }
    }

    /// True for every ocean variant, deep or shallow.
    #[must_use]
    pub fn is_ocean(self) -> bool {
        matches!(
            self,
            Self::Ocean
                | Self::FrozenOcean
                | Self::WarmOcean
                | Self::LukewarmOcean
                | Self::ColdOcean
                | Self::DeepOcean
                | Self::DeepFrozenOcean
                | Self::DeepLukewarmOcean
                | Self::DeepColdOcean
        )
    }

    /// True for the river variants.
    #[must_use]
    pub fn is_river(self) -> bool {
        matches!(self, Self::River | Self::FrozenRiver)
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ids() {
        assert_eq!(Biome::Ocean.id(), 0);
        assert_eq!(Biome::Plains.id(), 1);
        assert_eq!(Biome::River.id(), 7);
        assert_eq!(Biome::Jungle.id(), 21);
        assert_eq!(Biome::LukewarmOcean.id(), 45);
        assert_eq!(Biome::Meadow.id(), 177);
        assert_eq!(Biome::PaleGarden.id(), 186);
    }

    #[test]
    fn test_names() {
        assert_eq!(Biome::OldGrowthSpruceTaiga.name(), "old_growth_spruce_taiga");
        assert_eq!(Biome::WindsweptGravellyHills.to_string(), "windswept_gravelly_hills");
    }

    #[test]
    fn test_categories() {
        assert!(Biome::DeepFrozenOcean.is_ocean());
        assert!(!Biome::Beach.is_ocean());
        assert!(Biome::FrozenRiver.is_river());
    }
}
