//! Per-version structure placement catalog.
//!
//! The built-in table carries the reference constants for the supported
//! version. Deployments that ship data-pack style tweaks can override or
//! extend it from a RON file; overrides replace whole entries, never
//! individual fields.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use seedlore_biome::{Dimension, GameVersion};

use crate::error::StructureError;

/// Closed enumeration of placeable structure types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StructureType {
    #[default]
    Village,
    DesertPyramid,
    Igloo,
    JungleTemple,
    SwampHut,
    PillagerOutpost,
    OceanRuin,
    Shipwreck,
    Monument,
    Mansion,
    RuinedPortal,
    AncientCity,
}

/// Placement constants for one structure type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Type this record describes. Override files may omit it; loading
    /// rewrites it from the entry's key.
    #[serde(default)]
    pub struct_type: StructureType,
    /// Dimension the type generates in.
    #[serde(default)]
    pub dim: Dimension,
    /// Mixed into the region hash to decorrelate structure types.
    pub salt: u64,
    /// Region edge length, chunks.
    pub region_size: i32,
    /// Candidate chunk offsets are drawn from `0..chunk_range`.
    pub chunk_range: i32,
    /// Placement probability in `[0, 1]`; zero means the acceptance draw
    /// is skipped entirely.
    #[serde(default)]
    pub rarity: f32,
    /// Averaged-pair offset draws instead of uniform ones.
    #[serde(default)]
    pub triangular: bool,
}

fn builtin(structure: StructureType) -> StructureConfig {
    let cfg = |salt, region_size, chunk_range, rarity, triangular| StructureConfig {
        struct_type: structure,
        dim: Dimension::Overworld,
        salt,
        region_size,
        chunk_range,
        rarity,
        triangular,
    };
    match structure {
        StructureType::Village => cfg(10387312, 34, 26, 0.0, false),
        StructureType::DesertPyramid => cfg(14357617, 32, 24, 0.0, false),
        StructureType::Igloo => cfg(14357618, 32, 24, 0.0, false),
        StructureType::JungleTemple => cfg(14357619, 32, 24, 0.0, false),
        StructureType::SwampHut => cfg(14357620, 32, 24, 0.0, false),
        StructureType::PillagerOutpost => cfg(165745296, 32, 24, 0.2, false),
        StructureType::OceanRuin => cfg(14357621, 20, 12, 0.0, false),
        StructureType::Shipwreck => cfg(165745295, 24, 20, 0.0, false),
        StructureType::Monument => cfg(10387313, 32, 27, 0.0, true),
        StructureType::Mansion => cfg(10387208, 80, 60, 0.0, true),
        StructureType::RuinedPortal => cfg(34222645, 40, 25, 0.0, false),
        StructureType::AncientCity => cfg(20083232, 24, 16, 0.0, true),
    }
}

/// Version-resolved lookup table.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: GameVersion,
    entries: HashMap<StructureType, StructureConfig>,
}

impl Catalog {
    /// Built-in table for `version`.
    #[must_use]
    pub fn for_version(version: GameVersion) -> Self {
        use StructureType::*;
        let mut entries = HashMap::new();
        for structure in [
            Village,
            DesertPyramid,
            Igloo,
            JungleTemple,
            SwampHut,
            PillagerOutpost,
            OceanRuin,
            Shipwreck,
            Monument,
            Mansion,
            RuinedPortal,
            AncientCity,
        ] {
            entries.insert(structure, builtin(structure));
        }
        Self { version, entries }
    }

    /// Applies overrides from a RON file mapping structure types to
    /// configs.
    pub fn load_overrides(&mut self, path: &std::path::Path) -> Result<(), StructureError> {
        let text = std::fs::read_to_string(path)?;
        let overrides: HashMap<StructureType, StructureConfig> = ron::from_str(&text)?;
        log::info!(
            "applying {} catalog override(s) from {}",
            overrides.len(),
            path.display()
        );
        for (structure, mut config) in overrides {
            config.struct_type = structure;
            self.entries.insert(structure, config);
        }
        Ok(())
    }

    #[must_use]
    pub fn version(&self) -> GameVersion {
        self.version
    }

    /// Config for `structure`, or `UnknownCatalogEntry`.
    pub fn config(&self, structure: StructureType) -> Result<StructureConfig, StructureError> {
        self.entries
            .get(&structure)
            .copied()
            .ok_or(StructureError::UnknownCatalogEntry {
                structure,
                version: self.version,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_village_constants() {
        let catalog = Catalog::for_version(GameVersion::V1_21_4);
        let cfg = catalog.config(StructureType::Village).unwrap();
        assert_eq!(cfg.salt, 10387312);
        assert_eq!(cfg.region_size, 34);
        assert_eq!(cfg.chunk_range, 26);
        assert_eq!(cfg.rarity, 0.0);
        assert!(!cfg.triangular);
        assert_eq!(cfg.struct_type, StructureType::Village);
        assert_eq!(cfg.dim, Dimension::Overworld);
    }

    #[test]
    fn test_triangular_types() {
        let catalog = Catalog::for_version(GameVersion::V1_21_4);
        assert!(catalog.config(StructureType::Monument).unwrap().triangular);
        assert!(catalog.config(StructureType::Mansion).unwrap().triangular);
        assert!(!catalog.config(StructureType::SwampHut).unwrap().triangular);
    }

    #[test]
    fn test_overrides_from_ron() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "{{ Village: (salt: 99, region_size: 10, chunk_range: 6, rarity: 0.5) }}"
        )
        .expect("write overrides");
        let mut catalog = Catalog::for_version(GameVersion::V1_21_4);
        catalog.load_overrides(file.path()).expect("load overrides");
        let cfg = catalog.config(StructureType::Village).unwrap();
        assert_eq!(cfg.salt, 99);
        assert_eq!(cfg.region_size, 10);
        assert_eq!(cfg.rarity, 0.5);
        // key wins over the file's (omitted) struct_type field
        assert_eq!(cfg.struct_type, StructureType::Village);
        assert_eq!(cfg.dim, Dimension::Overworld);
        // untouched entries keep their built-in values
        let monument = catalog.config(StructureType::Monument).unwrap();
        assert_eq!(monument.salt, 10387313);
    }

    #[test]
    fn test_bad_override_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not ron at all [").expect("write garbage");
        let mut catalog = Catalog::for_version(GameVersion::V1_21_4);
        assert!(matches!(
            catalog.load_overrides(file.path()),
            Err(StructureError::CatalogParse(_))
        ));
    }
}
