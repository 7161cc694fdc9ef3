//! Overworld biome parameter table.
//!
//! A direct re-expression of the reference layout builder: five
//! temperature and humidity bands, seven erosion bands, thirteen
//! weirdness slices, and the continentalness bands from mushroom fields
//! out to far inland. Entries are emitted quantized, in builder order;
//! lookup is nearest-entry with ties going to the earliest entry, so the
//! order is part of the format.

use crate::climate::{ParamRange, TargetPoint};
use crate::id::Biome;

/// One climate box: temperature, humidity, continentalness, erosion,
/// depth, weirdness.
#[derive(Debug, Clone, Copy)]
pub struct BiomeEntry {
    pub ranges: [ParamRange; 6],
    pub biome: Biome,
}

impl BiomeEntry {
    /// Squared distance from a sampled point, zero when inside the box.
    #[must_use]
    pub fn distance_sq(&self, point: &TargetPoint) -> i64 {
        self.ranges
            .iter()
            .zip(&point.0)
            .map(|(range, &v)| {
                let d = range.distance(v);
                d * d
            })
            .sum()
    }
}

type Band = (f64, f64);

const FULL: Band = (-1.0, 1.0);
const TEMPS: [Band; 5] = [
    (-1.0, -0.45),
    (-0.45, -0.15),
    (-0.15, 0.2),
    (0.2, 0.55),
    (0.55, 1.0),
];
const HUMID: [Band; 5] = [
    (-1.0, -0.35),
    (-0.35, -0.1),
    (-0.1, 0.1),
    (0.1, 0.3),
    (0.3, 1.0),
];
const EROS: [Band; 7] = [
    (-1.0, -0.78),
    (-0.78, -0.375),
    (-0.375, -0.2225),
    (-0.2225, 0.05),
    (0.05, 0.45),
    (0.45, 0.55),
    (0.55, 1.0),
];
const C_MUSH: Band = (-1.2, -1.05);
const C_DEEP: Band = (-1.05, -0.455);
const C_OCEAN: Band = (-0.455, -0.19);
const C_COAST: Band = (-0.19, -0.11);
const C_INLAND: Band = (-0.11, 0.55);
const C_NEAR: Band = (-0.11, 0.03);
const C_MID: Band = (0.03, 0.3);
const C_FAR: Band = (0.3, 1.0);

const FROZEN: Band = TEMPS[0];

fn span(a: Band, b: Band) -> Band {
    (a.0.min(b.0), a.1.max(b.1))
}

const DEEP_OCEANS: [Biome; 5] = [
    Biome::DeepFrozenOcean,
    Biome::DeepColdOcean,
    Biome::DeepOcean,
    Biome::DeepLukewarmOcean,
    Biome::WarmOcean,
];
const OCEANS: [Biome; 5] = [
    Biome::FrozenOcean,
    Biome::ColdOcean,
    Biome::Ocean,
    Biome::LukewarmOcean,
    Biome::WarmOcean,
];

use Biome::*;

const MIDDLE: [[Biome; 5]; 5] = [
    [SnowyPlains, SnowyPlains, SnowyPlains, SnowyTaiga, Taiga],
    [Plains, Plains, Forest, Taiga, OldGrowthSpruceTaiga],
    [FlowerForest, Plains, Forest, BirchForest, DarkForest],
    [Savanna, Savanna, Forest, Jungle, Jungle],
    [Desert, Desert, Desert, Desert, Desert],
];
const MIDDLE_VAR: [[Option<Biome>; 5]; 5] = [
    [Some(IceSpikes), None, Some(SnowyTaiga), None, None],
    [None, None, None, None, Some(OldGrowthPineTaiga)],
    [
        Some(SunflowerPlains),
        None,
        None,
        Some(OldGrowthBirchForest),
        Some(PaleGarden),
    ],
    [None, None, Some(Plains), Some(SparseJungle), Some(BambooJungle)],
    [None, None, None, None, None],
];
const PLATEAU: [[Biome; 5]; 5] = [
    [SnowyPlains, SnowyPlains, SnowyPlains, SnowyTaiga, SnowyTaiga],
    [Meadow, Meadow, Forest, Taiga, OldGrowthSpruceTaiga],
    [Meadow, Meadow, Meadow, Meadow, DarkForest],
    [SavannaPlateau, SavannaPlateau, Forest, Forest, Jungle],
    [Badlands, Badlands, Badlands, WoodedBadlands, WoodedBadlands],
];
const PLATEAU_VAR: [[Option<Biome>; 5]; 5] = [
    [Some(IceSpikes), None, None, None, None],
    [
        Some(CherryGrove),
        None,
        Some(Meadow),
        Some(Meadow),
        Some(OldGrowthPineTaiga),
    ],
    [
        Some(CherryGrove),
        Some(CherryGrove),
        Some(Forest),
        Some(BirchForest),
        Some(PaleGarden),
    ],
    [None, None, None, None, None],
    [Some(ErodedBadlands), Some(ErodedBadlands), None, None, None],
];
const SHATTERED: [[Option<Biome>; 5]; 5] = [
    [
        Some(WindsweptGravellyHills),
        Some(WindsweptGravellyHills),
        Some(WindsweptHills),
        Some(WindsweptForest),
        Some(WindsweptForest),
    ],
    [
        Some(WindsweptGravellyHills),
        Some(WindsweptGravellyHills),
        Some(WindsweptHills),
        Some(WindsweptForest),
        Some(WindsweptForest),
    ],
    [
        Some(WindsweptHills),
        Some(WindsweptHills),
        Some(WindsweptHills),
        Some(WindsweptForest),
        Some(WindsweptForest),
    ],
    [None, None, None, None, None],
    [None, None, None, None, None],
];

fn pick_middle(t: usize, h: usize, w: Band) -> Biome {
    if w.1 < 0.0 {
        MIDDLE[t][h]
    } else {
        MIDDLE_VAR[t][h].unwrap_or(MIDDLE[t][h])
    }
}

fn pick_badlands(h: usize, w: Band) -> Biome {
    if h < 2 {
        if w.1 < 0.0 { Badlands } else { ErodedBadlands }
    } else if h < 3 {
        Badlands
    } else {
        WoodedBadlands
    }
}

fn pick_middle_or_badlands(t: usize, h: usize, w: Band) -> Biome {
    if t == 4 {
        pick_badlands(h, w)
    } else {
        pick_middle(t, h, w)
    }
}

fn pick_plateau(t: usize, h: usize, w: Band) -> Biome {
    if w.1 >= 0.0 {
        if let Some(variant) = PLATEAU_VAR[t][h] {
            return variant;
        }
    }
    PLATEAU[t][h]
}

fn pick_slope(t: usize, h: usize, w: Band) -> Biome {
    if t >= 3 {
        pick_plateau(t, h, w)
    } else if h <= 1 {
        SnowySlopes
    } else {
        Grove
    }
}

fn pick_middle_or_badlands_or_slope(t: usize, h: usize, w: Band) -> Biome {
    if t == 0 {
        pick_slope(t, h, w)
    } else {
        pick_middle_or_badlands(t, h, w)
    }
}

fn pick_peak(t: usize, h: usize, w: Band) -> Biome {
    if t <= 2 {
        if w.1 < 0.0 { JaggedPeaks } else { FrozenPeaks }
    } else if t == 3 {
        StonyPeaks
    } else {
        pick_badlands(h, w)
    }
}

fn pick_shattered(t: usize, h: usize, w: Band) -> Biome {
    SHATTERED[t][h].unwrap_or_else(|| pick_middle(t, h, w))
}

fn maybe_windswept_savanna(t: usize, h: usize, w: Band, under: Biome) -> Biome {
    if t > 1 && h < 4 && w.1 >= 0.0 {
        WindsweptSavanna
    } else {
        under
    }
}

fn pick_beach(t: usize) -> Biome {
    match t {
        0 => SnowyBeach,
        4 => Desert,
        _ => Beach,
    }
}

fn pick_shattered_coast(t: usize, h: usize, w: Band) -> Biome {
    let under = if w.1 >= 0.0 {
        pick_middle(t, h, w)
    } else {
        pick_beach(t)
    };
    maybe_windswept_savanna(t, h, w, under)
}

struct EntriesBuilder {
    entries: Vec<BiomeEntry>,
}

impl EntriesBuilder {
    fn push(&mut self, t: Band, h: Band, c: Band, e: Band, d: Band, w: Band, biome: Biome) {
        self.entries.push(BiomeEntry {
            ranges: [
                ParamRange::new(t.0, t.1),
                ParamRange::new(h.0, h.1),
                ParamRange::new(c.0, c.1),
                ParamRange::new(e.0, e.1),
                ParamRange::new(d.0, d.1),
                ParamRange::new(w.0, w.1),
            ],
            biome,
        });
    }

    // every surface box is emitted twice, at depth 0 and depth 1
    fn surface(&mut self, t: Band, h: Band, c: Band, e: Band, w: Band, biome: Biome) {
        self.push(t, h, c, e, (0.0, 0.0), w, biome);
        self.push(t, h, c, e, (1.0, 1.0), w, biome);
    }

    fn underground(&mut self, t: Band, h: Band, c: Band, e: Band, w: Band, biome: Biome) {
        self.push(t, h, c, e, (0.2, 0.9), w, biome);
    }

    fn bottom(&mut self, t: Band, h: Band, c: Band, e: Band, w: Band, biome: Biome) {
        self.push(t, h, c, e, (1.1, 1.1), w, biome);
    }

    fn off_coast(&mut self) {
        self.surface(FULL, FULL, C_MUSH, FULL, FULL, MushroomFields);
        for t in 0..5 {
            self.surface(TEMPS[t], FULL, C_DEEP, FULL, FULL, DEEP_OCEANS[t]);
            self.surface(TEMPS[t], FULL, C_OCEAN, FULL, FULL, OCEANS[t]);
        }
    }

    fn inland(&mut self) {
        self.mid_slice((-1.0, -0.93333334));
        self.high_slice((-0.93333334, -0.7666667));
        self.peaks_slice((-0.7666667, -0.56666666));
        self.high_slice((-0.56666666, -0.4));
        self.mid_slice((-0.4, -0.26666668));
        self.low_slice((-0.26666668, -0.05));
        self.valleys_slice((-0.05, 0.05));
        self.low_slice((0.05, 0.26666668));
        self.mid_slice((0.26666668, 0.4));
        self.high_slice((0.4, 0.56666666));
        self.peaks_slice((0.56666666, 0.7666667));
        self.high_slice((0.7666667, 0.93333334));
        self.mid_slice((0.93333334, 1.0));
    }

    fn peaks_slice(&mut self, w: Band) {
        for t in 0..5 {
            for h in 0..5 {
                let mid = pick_middle(t, h, w);
                let midbad = pick_middle_or_badlands(t, h, w);
                let midbadslope = pick_middle_or_badlands_or_slope(t, h, w);
                let plateau = pick_plateau(t, h, w);
                let shat = pick_shattered(t, h, w);
                let shatws = maybe_windswept_savanna(t, h, w, shat);
                let peak = pick_peak(t, h, w);
                let (tb, hb) = (TEMPS[t], HUMID[h]);
                self.surface(tb, hb, span(C_COAST, C_FAR), EROS[0], w, peak);
                self.surface(tb, hb, span(C_COAST, C_NEAR), EROS[1], w, midbadslope);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[1], w, peak);
                self.surface(tb, hb, span(C_COAST, C_NEAR), span(EROS[2], EROS[3]), w, mid);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[2], w, plateau);
                self.surface(tb, hb, C_MID, EROS[3], w, midbad);
                self.surface(tb, hb, C_FAR, EROS[3], w, plateau);
                self.surface(tb, hb, span(C_COAST, C_FAR), EROS[4], w, mid);
                self.surface(tb, hb, span(C_COAST, C_NEAR), EROS[5], w, shatws);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[5], w, shat);
                self.surface(tb, hb, span(C_COAST, C_FAR), EROS[6], w, mid);
            }
        }
    }

    fn high_slice(&mut self, w: Band) {
        for t in 0..5 {
            for h in 0..5 {
                let mid = pick_middle(t, h, w);
                let midbad = pick_middle_or_badlands(t, h, w);
                let midbadslope = pick_middle_or_badlands_or_slope(t, h, w);
                let plateau = pick_plateau(t, h, w);
                let shat = pick_shattered(t, h, w);
                let midws = maybe_windswept_savanna(t, h, w, mid);
                let slope = pick_slope(t, h, w);
                let peak = pick_peak(t, h, w);
                let (tb, hb) = (TEMPS[t], HUMID[h]);
                self.surface(tb, hb, C_COAST, span(EROS[0], EROS[1]), w, mid);
                self.surface(tb, hb, C_NEAR, EROS[0], w, slope);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[0], w, peak);
                self.surface(tb, hb, C_NEAR, EROS[1], w, midbadslope);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[1], w, slope);
                self.surface(tb, hb, span(C_COAST, C_NEAR), span(EROS[2], EROS[3]), w, mid);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[2], w, plateau);
                self.surface(tb, hb, C_MID, EROS[3], w, midbad);
                self.surface(tb, hb, C_FAR, EROS[3], w, plateau);
                self.surface(tb, hb, span(C_COAST, C_FAR), EROS[4], w, mid);
                self.surface(tb, hb, span(C_COAST, C_NEAR), EROS[5], w, midws);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[5], w, shat);
                self.surface(tb, hb, span(C_COAST, C_FAR), EROS[6], w, mid);
            }
        }
    }

    fn mid_slice(&mut self, w: Band) {
        self.surface(FULL, FULL, C_COAST, span(EROS[0], EROS[2]), w, StonyShore);
        self.surface(span(TEMPS[1], TEMPS[2]), FULL, span(C_NEAR, C_FAR), EROS[6], w, Swamp);
        self.surface(span(TEMPS[3], TEMPS[4]), FULL, span(C_NEAR, C_FAR), EROS[6], w, MangroveSwamp);
        for t in 0..5 {
            for h in 0..5 {
                let mid = pick_middle(t, h, w);
                let midbad = pick_middle_or_badlands(t, h, w);
                let midbadslope = pick_middle_or_badlands_or_slope(t, h, w);
                let shat = pick_shattered(t, h, w);
                let plateau = pick_plateau(t, h, w);
                let beach = pick_beach(t);
                let midws = maybe_windswept_savanna(t, h, w, mid);
                let shatcoast = pick_shattered_coast(t, h, w);
                let slope = pick_slope(t, h, w);
                let (tb, hb) = (TEMPS[t], HUMID[h]);
                self.surface(tb, hb, span(C_NEAR, C_FAR), EROS[0], w, slope);
                self.surface(tb, hb, span(C_NEAR, C_MID), EROS[1], w, midbadslope);
                self.surface(
                    tb,
                    hb,
                    C_FAR,
                    EROS[1],
                    w,
                    if t == 0 { slope } else { plateau },
                );
                self.surface(tb, hb, C_NEAR, EROS[2], w, mid);
                self.surface(tb, hb, C_MID, EROS[2], w, midbad);
                self.surface(tb, hb, C_FAR, EROS[2], w, plateau);
                self.surface(tb, hb, span(C_COAST, C_NEAR), EROS[3], w, mid);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[3], w, midbad);
                if w.1 < 0.0 {
                    self.surface(tb, hb, C_COAST, EROS[4], w, beach);
                    self.surface(tb, hb, span(C_NEAR, C_FAR), EROS[4], w, mid);
                } else {
                    self.surface(tb, hb, span(C_COAST, C_FAR), EROS[4], w, mid);
                }
                self.surface(tb, hb, C_COAST, EROS[5], w, shatcoast);
                self.surface(tb, hb, C_NEAR, EROS[5], w, midws);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[5], w, shat);
                self.surface(tb, hb, C_COAST, EROS[6], w, if w.1 < 0.0 { beach } else { mid });
                if t == 0 {
                    self.surface(tb, hb, span(C_NEAR, C_FAR), EROS[6], w, mid);
                }
            }
        }
    }

    fn low_slice(&mut self, w: Band) {
        self.surface(FULL, FULL, C_COAST, span(EROS[0], EROS[2]), w, StonyShore);
        self.surface(span(TEMPS[1], TEMPS[2]), FULL, span(C_NEAR, C_FAR), EROS[6], w, Swamp);
        self.surface(span(TEMPS[3], TEMPS[4]), FULL, span(C_NEAR, C_FAR), EROS[6], w, MangroveSwamp);
        for t in 0..5 {
            for h in 0..5 {
                let mid = pick_middle(t, h, w);
                let midbad = pick_middle_or_badlands(t, h, w);
                let midbadslope = pick_middle_or_badlands_or_slope(t, h, w);
                let beach = pick_beach(t);
                let midws = maybe_windswept_savanna(t, h, w, mid);
                let shatcoast = pick_shattered_coast(t, h, w);
                let (tb, hb) = (TEMPS[t], HUMID[h]);
                self.surface(tb, hb, C_NEAR, span(EROS[0], EROS[1]), w, midbad);
                self.surface(tb, hb, span(C_MID, C_FAR), span(EROS[0], EROS[1]), w, midbadslope);
                self.surface(tb, hb, C_NEAR, span(EROS[2], EROS[3]), w, mid);
                self.surface(tb, hb, span(C_MID, C_FAR), span(EROS[2], EROS[3]), w, midbad);
                self.surface(tb, hb, C_COAST, span(EROS[3], EROS[4]), w, beach);
                self.surface(tb, hb, span(C_NEAR, C_FAR), EROS[4], w, mid);
                self.surface(tb, hb, C_COAST, EROS[5], w, shatcoast);
                self.surface(tb, hb, C_NEAR, EROS[5], w, midws);
                self.surface(tb, hb, span(C_MID, C_FAR), EROS[5], w, mid);
                self.surface(tb, hb, C_COAST, EROS[6], w, beach);
                if t == 0 {
                    self.surface(tb, hb, span(C_NEAR, C_FAR), EROS[6], w, mid);
                }
            }
        }
    }

    fn valleys_slice(&mut self, w: Band) {
        let unfrozen = span(TEMPS[1], TEMPS[4]);
        let shore_or_frozen = if w.1 < 0.0 { StonyShore } else { FrozenRiver };
        let shore_or_river = if w.1 < 0.0 { StonyShore } else { River };
        self.surface(FROZEN, FULL, C_COAST, span(EROS[0], EROS[1]), w, shore_or_frozen);
        self.surface(unfrozen, FULL, C_COAST, span(EROS[0], EROS[1]), w, shore_or_river);
        self.surface(FROZEN, FULL, C_NEAR, span(EROS[0], EROS[1]), w, FrozenRiver);
        self.surface(unfrozen, FULL, C_NEAR, span(EROS[0], EROS[1]), w, River);
        self.surface(FROZEN, FULL, span(C_COAST, C_FAR), span(EROS[2], EROS[5]), w, FrozenRiver);
        self.surface(unfrozen, FULL, span(C_COAST, C_FAR), span(EROS[2], EROS[5]), w, River);
        self.surface(FROZEN, FULL, C_COAST, EROS[6], w, FrozenRiver);
        self.surface(unfrozen, FULL, C_COAST, EROS[6], w, River);
        self.surface(span(TEMPS[1], TEMPS[2]), FULL, span(C_INLAND, C_FAR), EROS[6], w, Swamp);
        self.surface(span(TEMPS[3], TEMPS[4]), FULL, span(C_INLAND, C_FAR), EROS[6], w, MangroveSwamp);
        self.surface(FROZEN, FULL, span(C_INLAND, C_FAR), EROS[6], w, FrozenRiver);
        for t in 0..5 {
            for h in 0..5 {
                let midbad = pick_middle_or_badlands(t, h, w);
                self.surface(TEMPS[t], HUMID[h], span(C_MID, C_FAR), span(EROS[0], EROS[1]), w, midbad);
            }
        }
    }

    fn caves(&mut self) {
        self.underground(FULL, FULL, (0.8, 1.0), FULL, FULL, DripstoneCaves);
        self.underground(FULL, (0.7, 1.0), FULL, FULL, FULL, LushCaves);
        self.bottom(FULL, FULL, FULL, span(EROS[0], EROS[1]), FULL, DeepDark);
    }
}

/// Emits the full entry list in builder order.
#[must_use]
pub fn overworld_entries() -> Vec<BiomeEntry> {
    let mut b = EntriesBuilder {
        entries: Vec::new(),
    };
    b.off_coast();
    b.inland();
    b.caves();
    b.entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::quantize;

    #[test]
    fn test_entry_count_stable() {
        let a = overworld_entries();
        let b = overworld_entries();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), 7593, "table layout changed");
    }

    #[test]
    fn test_first_entry_is_mushroom_fields() {
        let entries = overworld_entries();
        assert_eq!(entries[0].biome, MushroomFields);
        assert_eq!(entries[0].ranges[2].min, quantize(-1.2));
        assert_eq!(entries[0].ranges[2].max, quantize(-1.05));
        assert_eq!(entries[0].ranges[4], ParamRange::point(0.0));
        assert_eq!(entries[1].ranges[4], ParamRange::point(1.0));
    }

    #[test]
    fn test_last_entries_are_caves() {
        let entries = overworld_entries();
        let n = entries.len();
        assert_eq!(entries[n - 1].biome, DeepDark);
        assert_eq!(entries[n - 2].biome, LushCaves);
        assert_eq!(entries[n - 3].biome, DripstoneCaves);
        assert_eq!(entries[n - 1].ranges[4], ParamRange::point(1.1));
    }

    #[test]
    fn test_distance_sq_inside_and_outside() {
        let entries = overworld_entries();
        let mush = &entries[0];
        let inside = TargetPoint([0, 0, quantize(-1.1), 0, 0, 0]);
        assert_eq!(mush.distance_sq(&inside), 0);
        let outside = TargetPoint([0, 0, quantize(-1.0), 0, 0, 0]);
        assert!(mush.distance_sq(&outside) > 0);
    }

    #[test]
    fn test_pale_garden_present() {
        let entries = overworld_entries();
        assert!(
            entries.iter().any(|e| e.biome == PaleGarden),
            "winter-drop layout must include pale gardens"
        );
    }
}
