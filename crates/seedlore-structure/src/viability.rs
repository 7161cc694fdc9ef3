//! Biome viability test for placed candidates.

use seedlore_biome::{Biome, Generator};

use crate::catalog::StructureType;
use crate::error::StructureError;

/// Block height at which land structures read their biome. Well above any
/// terrain, so the column's surface band is what gets sampled.
const LAND_SAMPLE_Y: i32 = 316;
/// Ocean structures sample just below sea level.
const OCEAN_SAMPLE_Y: i32 = 60;
/// Ancient cities generate in the deep dark band.
const DEEP_SAMPLE_Y: i32 = -51;

fn sample_y(structure: StructureType) -> i32 {
    match structure {
        StructureType::Monument | StructureType::OceanRuin | StructureType::Shipwreck => {
            OCEAN_SAMPLE_Y
        }
        StructureType::AncientCity => DEEP_SAMPLE_Y,
        _ => LAND_SAMPLE_Y,
    }
}

fn allows(structure: StructureType, biome: Biome) -> bool {
    use Biome::*;
    match structure {
        StructureType::Village => {
            matches!(biome, Plains | Desert | Savanna | Taiga | SnowyPlains)
        }
        StructureType::PillagerOutpost => matches!(
            biome,
            Plains
                | Desert
                | Savanna
                | Taiga
                | SnowyPlains
                | Meadow
                | Grove
                | SnowySlopes
                | FrozenPeaks
                | JaggedPeaks
                | StonyPeaks
                | CherryGrove
                | PaleGarden
        ),
        StructureType::DesertPyramid => biome == Desert,
        StructureType::JungleTemple => matches!(biome, Jungle | BambooJungle),
        StructureType::SwampHut => matches!(biome, Swamp | MangroveSwamp),
        StructureType::Igloo => matches!(biome, SnowyPlains | SnowyTaiga | SnowySlopes),
        StructureType::Monument => matches!(
            biome,
            DeepOcean | DeepColdOcean | DeepLukewarmOcean | DeepFrozenOcean
        ),
        StructureType::OceanRuin => biome.is_ocean(),
        StructureType::Shipwreck => biome.is_ocean() || matches!(biome, Beach | SnowyBeach),
        StructureType::Mansion => matches!(biome, DarkForest | PaleGarden),
        StructureType::RuinedPortal => true,
        StructureType::AncientCity => biome == DeepDark,
    }
}

/// Whether the biome at candidate block `(x, z)` admits `structure`.
///
/// The candidate position comes from [`crate::structure_pos`]; this is the
/// second, seed-plus-biome dependent half of the placement test.
pub fn is_viable_structure_pos(
    structure: StructureType,
    generator: &Generator,
    x: i32,
    z: i32,
) -> Result<bool, StructureError> {
    let y = sample_y(structure);
    let biome = generator.biome_at(1, x, y, z)?;
    let viable = allows(structure, biome);
    log::debug!("viability of {structure:?} at ({x}, {z}): biome {biome}, viable {viable}");
    Ok(viable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedlore_biome::{Dimension, GameVersion, GeneratorError};

    fn seeded() -> Generator {
        let mut generator = Generator::new(GameVersion::V1_21_4);
        generator
            .apply_seed(1234567890, Dimension::Overworld)
            .unwrap();
        generator
    }

    #[test]
    fn test_village_viability() {
        let generator = seeded();
        // plains column
        assert!(is_viable_structure_pos(StructureType::Village, &generator, 288, 1984).unwrap());
        // jungle column
        assert!(!is_viable_structure_pos(StructureType::Village, &generator, 1000, 1000).unwrap());
        // candidate over lukewarm ocean
        assert!(!is_viable_structure_pos(StructureType::Village, &generator, 256, 64).unwrap());
    }

    #[test]
    fn test_monument_needs_deep_ocean() {
        let generator = seeded();
        assert!(is_viable_structure_pos(StructureType::Monument, &generator, -3840, -4000).unwrap());
        // lukewarm ocean is too shallow
        assert!(!is_viable_structure_pos(StructureType::Monument, &generator, 128, 176).unwrap());
    }

    #[test]
    fn test_ocean_ruin_accepts_shallow_ocean() {
        let generator = seeded();
        assert!(is_viable_structure_pos(StructureType::OceanRuin, &generator, 128, 176).unwrap());
        assert!(is_viable_structure_pos(StructureType::Shipwreck, &generator, 128, 176).unwrap());
    }

    #[test]
    fn test_desert_pyramid() {
        let generator = seeded();
        assert!(is_viable_structure_pos(StructureType::DesertPyramid, &generator, -320, -2720).unwrap());
        // stony shore column
        assert!(!is_viable_structure_pos(StructureType::DesertPyramid, &generator, 1296, -1728).unwrap());
    }

    #[test]
    fn test_mansion_and_ancient_city() {
        let generator = seeded();
        assert!(is_viable_structure_pos(StructureType::Mansion, &generator, -2560, -1280).unwrap());
        assert!(
            is_viable_structure_pos(StructureType::Mansion, &generator, -2560, -1440).unwrap(),
            "pale garden counts as a mansion biome"
        );
        assert!(is_viable_structure_pos(StructureType::AncientCity, &generator, 800, -4000).unwrap());
        assert!(!is_viable_structure_pos(StructureType::AncientCity, &generator, 288, 1984).unwrap());
    }

    #[test]
    fn test_ruined_portal_anywhere() {
        let generator = seeded();
        for (x, z) in [(288, 1984), (1000, 1000), (128, 176)] {
            assert!(is_viable_structure_pos(StructureType::RuinedPortal, &generator, x, z).unwrap());
        }
    }

    #[test]
    fn test_unseeded_generator_rejected() {
        let generator = Generator::new(GameVersion::V1_21_4);
        assert!(matches!(
            is_viable_structure_pos(StructureType::Village, &generator, 0, 0),
            Err(StructureError::Generator(GeneratorError::UninitializedContext))
        ));
    }
}
