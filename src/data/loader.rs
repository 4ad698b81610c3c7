//! Load the normalized game export (gamedata.json) into typed records.
//!
//! The export is produced ahead of time from the game's tables; this loader
//! assumes that shape and surfaces io/json failures as-is. Run `validate`
//! for content-level diagnostics before trusting a new export.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::mage::MageRecord;
use crate::data::nation::NationRecord;
use crate::data::spell::SpellRecord;
use crate::magic::PathsError;

pub const DEFAULT_DATA_PATH: &str = "data/gamedata.json";

/// The whole dataset, loaded once and passed by reference into report
/// generation. No ambient global state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    /// All spellcasting units, keyed by unit id.
    pub mages: HashMap<u32, MageRecord>,
    pub nations: Vec<NationRecord>,
    /// Spells castable by any nation; nation-restricted ones live on the
    /// nation record instead.
    pub spells: Vec<SpellRecord>,
    /// Forgeable items, same record shape with `mode: forge`.
    pub items: Vec<SpellRecord>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unable to read dataset '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse dataset '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("nation '{nation}' references unknown mage id {id}")]
    UnknownMage { nation: String, id: u32 },

    #[error(transparent)]
    Paths(#[from] PathsError),
}

impl GameData {
    pub fn mage_record(&self, id: u32) -> Option<&MageRecord> {
        self.mages.get(&id)
    }

    /// Full spell catalog for one nation: generic spells, the nation's own
    /// spells, then forgeable items.
    pub fn catalog_for(&self, nation: &NationRecord) -> Vec<SpellRecord> {
        self.spells
            .iter()
            .chain(&nation.nspells)
            .chain(&self.items)
            .cloned()
            .collect()
    }
}

pub fn load_game_data(path: impl AsRef<Path>) -> Result<GameData, DataError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })
}
