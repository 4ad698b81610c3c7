//! Per-nation report assembly: rank mages, suppress redundant listings,
//! attribute each spell to the most likely variant that can cast it.

use std::collections::HashSet;

use serde::Serialize;

use crate::data::loader::{DataError, GameData};
use crate::data::nation::NationRecord;
use crate::data::spell::SpellRecord;
use crate::magic::chance::Chance;
use crate::magic::mage::Mage;
use crate::magic::matcher::{possible_spells, spells_by_variant};
use crate::magic::subsume::{subsumed_by, SubsumptionStrategy};
use crate::magic::variants::VariantNote;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Report each spell hash at most once per mage, attributed to its
    /// first (most likely) qualifying variant.
    pub each_spell_once: bool,
    pub strategy: SubsumptionStrategy,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            each_spell_once: true,
            strategy: SubsumptionStrategy::Structural,
        }
    }
}

/// One variant with the spells attributed to it.
#[derive(Debug, Clone, Serialize)]
pub struct VariantSpells {
    pub paths: String,
    pub chance: Chance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<VariantNote>,
    pub spells: Vec<SpellRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MageReport {
    pub name: String,
    pub gcost: u32,
    pub paths: String,
    /// Names of recruitable mages this one fully covers; their listings are
    /// suppressed against this mage's.
    pub includes: Vec<String>,
    pub variants: Vec<VariantSpells>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NationReport {
    pub name: String,
    pub epithet: String,
    pub mages: Vec<MageReport>,
}

fn build_mages(data: &GameData, nation: &NationRecord, ids: &[u32]) -> Result<Vec<Mage>, DataError> {
    ids.iter()
        .map(|id| {
            let record = data.mage_record(*id).ok_or_else(|| DataError::UnknownMage {
                nation: nation.name.clone(),
                id: *id,
            })?;
            Mage::new(&record.name, &record.paths, record.gcost).map_err(DataError::from)
        })
        .collect()
}

/// Recruitable mages (fort, capital, underwater) sorted by cost ascending;
/// the sort is stable so role order breaks ties.
fn recruitable_mages(data: &GameData, nation: &NationRecord) -> Result<Vec<Mage>, DataError> {
    let ids: Vec<u32> = nation.recruitable_ids().collect();
    let mut mages = build_mages(data, nation, &ids)?;
    mages.sort_by_key(|mage| mage.gcost);
    Ok(mages)
}

pub fn build_nation_report(
    data: &GameData,
    nation: &NationRecord,
    options: &ReportOptions,
) -> Result<NationReport, DataError> {
    let catalog = data.catalog_for(nation);
    let recruitable = recruitable_mages(data, nation)?;
    let heroes = build_mages(data, nation, &nation.hero_mages)?;

    let mut mages = Vec::with_capacity(recruitable.len() + heroes.len());
    for mage in recruitable.iter().chain(&heroes) {
        // Only recruitables feed the ignore-set: what a subsumed recruitable
        // already guarantees is not repeated in this mage's listing. Heroes
        // are listed but never suppress anyone (their arrival is not
        // guaranteed).
        let covered: Vec<&Mage> = recruitable
            .iter()
            .filter(|other| {
                other.name != mage.name && subsumed_by(other, mage, options.strategy, &catalog)
            })
            .collect();
        let includes: Vec<String> = covered.iter().map(|other| other.name.clone()).collect();

        let mut ignored: HashSet<String> = HashSet::new();
        for other in covered {
            ignored.extend(possible_spells(other, &catalog));
        }

        let variants = spells_by_variant(mage, &catalog, options.each_spell_once, &ignored)
            .into_iter()
            .map(|(variant, spells)| VariantSpells {
                paths: variant.paths,
                chance: variant.chance,
                note: variant.note,
                spells: spells.into_iter().cloned().collect(),
            })
            .collect();

        mages.push(MageReport {
            name: mage.name.clone(),
            gcost: mage.gcost,
            paths: mage.paths.clone(),
            includes,
            variants,
        });
    }

    Ok(NationReport {
        name: nation.name.clone(),
        epithet: nation.epithet.clone(),
        mages,
    })
}

/// Reports for every nation in the dataset, in dataset order.
pub fn build_all_reports(
    data: &GameData,
    options: &ReportOptions,
) -> Result<Vec<NationReport>, DataError> {
    data.nations
        .iter()
        .map(|nation| build_nation_report(data, nation, options))
        .collect()
}
