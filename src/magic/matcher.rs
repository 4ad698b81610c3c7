//! Matching variants against spell and item requirements.
//!
//! Castability is pure membership: each non-empty requirement slot is
//! satisfied when its symbol occurs anywhere in the variant's path string.
//! Level runs in a slot (`FF`) collapse to presence of the symbol.

use std::collections::HashSet;

use crate::data::spell::SpellRecord;
use crate::magic::chance::Chance;
use crate::magic::mage::Mage;
use crate::magic::variants::Variant;

fn slot_satisfied(variant_paths: &str, slot: &str) -> bool {
    // An empty slot is trivially satisfied.
    slot.chars().all(|symbol| variant_paths.contains(symbol))
}

/// Can a mage with this exact path set cast the spell?
pub fn can_cast(variant_paths: &str, spell: &SpellRecord) -> bool {
    slot_satisfied(variant_paths, &spell.path1) && slot_satisfied(variant_paths, &spell.path2)
}

/// Filter a catalog down to what this path set can cast, sorted for display:
/// combined requirement length, then the requirement string, descending.
/// Cosmetic, but deterministic so reports reproduce run to run.
pub fn only_castable<'a>(variant_paths: &str, spells: &'a [SpellRecord]) -> Vec<&'a SpellRecord> {
    let mut castable: Vec<&SpellRecord> = spells
        .iter()
        .filter(|spell| can_cast(variant_paths, spell))
        .collect();
    castable.sort_by(|a, b| {
        let ka = (a.requirement().len(), a.requirement());
        let kb = (b.requirement().len(), b.requirement());
        kb.cmp(&ka)
    });
    castable
}

/// Total likelihood the mage can cast this spell, summed exactly over every
/// variant that satisfies the requirement.
pub fn chance_to_cast(mage: &Mage, spell: &SpellRecord) -> Chance {
    mage.variants
        .iter()
        .filter(|variant| can_cast(&variant.paths, spell))
        .map(|variant| variant.chance)
        .sum()
}

/// Hashes of every catalog entry castable by *any* variant, ignoring
/// probability. This is what the mage could ever produce.
pub fn possible_spells(mage: &Mage, spells: &[SpellRecord]) -> HashSet<String> {
    spells
        .iter()
        .filter(|spell| {
            mage.variants
                .iter()
                .any(|variant| can_cast(&variant.paths, spell))
        })
        .map(|spell| spell.hash.clone())
        .collect()
}

/// Castable spells per variant, chance descending. Entries in `ignored` are
/// dropped everywhere; with `each_spell_once` a hash already attributed to
/// an earlier (more likely) variant of the same mage is not repeated.
pub fn spells_by_variant<'a>(
    mage: &Mage,
    spells: &'a [SpellRecord],
    each_spell_once: bool,
    ignored: &HashSet<String>,
) -> Vec<(Variant, Vec<&'a SpellRecord>)> {
    let mut shown: HashSet<&str> = HashSet::new();
    let mut result = Vec::with_capacity(mage.variants.len());
    for variant in &mage.variants {
        let mut castable = only_castable(&variant.paths, spells);
        castable.retain(|spell| !ignored.contains(&spell.hash));
        if each_spell_once {
            castable.retain(|spell| !shown.contains(spell.hash.as_str()));
            for spell in &castable {
                shown.insert(spell.hash.as_str());
            }
        }
        result.push((variant.clone(), castable));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spell::SpellMode;

    fn spell(hash: &str, path1: &str, path2: &str) -> SpellRecord {
        SpellRecord {
            name: format!("spell {hash}"),
            path1: path1.to_string(),
            path2: path2.to_string(),
            mode: SpellMode::Combat,
            hash: hash.to_string(),
            mage: None,
            level: None,
            boosts: None,
        }
    }

    #[test]
    fn requirement_slot_order_does_not_matter() {
        let fw = spell("s1", "F", "W");
        let wf = spell("s2", "W", "F");
        for variant in ["FW", "WF"] {
            assert!(can_cast(variant, &fw));
            assert!(can_cast(variant, &wf));
        }
        assert!(!can_cast("F", &fw));
        assert!(!can_cast("W", &wf));
    }

    #[test]
    fn empty_slots_are_trivially_satisfied() {
        let anything = spell("s1", "", "");
        assert!(can_cast("", &anything));
        let fire_only = spell("s2", "F", "");
        assert!(can_cast("FAW", &fire_only));
        assert!(!can_cast("AW", &fire_only));
    }

    #[test]
    fn level_runs_collapse_to_presence() {
        let deep = spell("s1", "FFF", "WW");
        assert!(can_cast("FW", &deep));
        assert!(!can_cast("F", &deep));
    }

    #[test]
    fn only_castable_sorts_by_requirement_length_then_text_descending() {
        let spells = vec![
            spell("s1", "F", ""),
            spell("s2", "FF", "W"),
            spell("s3", "W", ""),
            spell("s4", "FF", ""),
        ];
        let castable = only_castable("FFW", &spells);
        let order: Vec<&str> = castable.iter().map(|s| s.hash.as_str()).collect();
        assert_eq!(order, vec!["s2", "s4", "s3", "s1"]);
    }

    #[test]
    fn chance_to_cast_sums_qualifying_variants() {
        let mage = Mage::new("Acolyte", "50FW", 50).unwrap();
        // Variants: "" 1/2, F 1/4, W 1/4.
        assert_eq!(chance_to_cast(&mage, &spell("s1", "F", "")), Chance::new(1, 4));
        assert_eq!(chance_to_cast(&mage, &spell("s2", "", "")), Chance::ONE);
        assert_eq!(chance_to_cast(&mage, &spell("s3", "F", "W")), Chance::ZERO);
    }

    #[test]
    fn relaxing_a_requirement_never_lowers_the_chance() {
        let mage = Mage::new("Adept", "F,50FW,10E", 120).unwrap();
        let catalog = ["F", "W", "E", ""];
        for p1 in catalog {
            for p2 in catalog {
                let strict = spell("strict", p1, p2);
                let relaxed_first = spell("r1", "", p2);
                let relaxed_second = spell("r2", p1, "");
                assert!(chance_to_cast(&mage, &strict) <= chance_to_cast(&mage, &relaxed_first));
                assert!(chance_to_cast(&mage, &strict) <= chance_to_cast(&mage, &relaxed_second));
            }
        }
    }

    #[test]
    fn possible_spells_ignores_probability() {
        let mage = Mage::new("Acolyte", "50FW", 50).unwrap();
        let spells = vec![spell("s1", "F", ""), spell("s2", "F", "W"), spell("s3", "", "")];
        let possible = possible_spells(&mage, &spells);
        assert!(possible.contains("s1"));
        assert!(!possible.contains("s2"));
        assert!(possible.contains("s3"));
    }

    #[test]
    fn each_spell_once_attributes_to_the_most_likely_variant() {
        let mage = Mage::new("Acolyte", "50FW", 50).unwrap();
        let spells = vec![spell("s1", "", ""), spell("s2", "F", "")];
        let by_variant = spells_by_variant(&mage, &spells, true, &HashSet::new());
        // "" variant (1/2) claims s1; the F variant keeps only s2.
        assert_eq!(by_variant[0].0.paths, "");
        assert_eq!(by_variant[0].1.len(), 1);
        assert_eq!(by_variant[0].1[0].hash, "s1");
        assert_eq!(by_variant[1].0.paths, "F");
        assert_eq!(by_variant[1].1.len(), 1);
        assert_eq!(by_variant[1].1[0].hash, "s2");
        // W variant casts nothing new.
        assert_eq!(by_variant[2].1.len(), 0);
    }

    #[test]
    fn ignored_hashes_are_suppressed_everywhere() {
        let mage = Mage::new("Acolyte", "50FW", 50).unwrap();
        let spells = vec![spell("s1", "", ""), spell("s2", "F", "")];
        let ignored: HashSet<String> = ["s1".to_string()].into_iter().collect();
        let by_variant = spells_by_variant(&mage, &spells, true, &ignored);
        assert!(by_variant.iter().all(|(_, sps)| sps.iter().all(|s| s.hash != "s1")));
    }
}
