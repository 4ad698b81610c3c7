//! Spell and forged-item records from the normalized game export.
//!
//! Items ride through the same shape as spells: `path1`/`path2` hold the
//! forge requirement, `mode` is `forge`, and the extra fields (`level`,
//! `boosts`) are carried as data without interpretation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub name: String,
    /// First requirement slot: empty, or a run of one symbol whose length is
    /// the path level. Castability tests symbol presence only.
    #[serde(default)]
    pub path1: String,
    /// Second requirement slot, same shape as `path1`.
    #[serde(default)]
    pub path2: String,
    pub mode: SpellMode,
    /// Unique id across spells and items (`s<id>` / `i<id>`), used to
    /// deduplicate repeated listings.
    pub hash: String,
    /// Unit id of the mage this spell summons, when it summons one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mage: Option<u32>,
    /// Construction level (items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Paths granted to the wielder (items only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boosts: Option<String>,
}

/// Where the entry shows up in play; drives the two-column layout (combat
/// left, ritual/forge right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellMode {
    Combat,
    Ritual,
    Forge,
}

impl SpellRecord {
    /// Combined requirement string, the display sort key.
    pub fn requirement(&self) -> String {
        format!("{}{}", self.path1, self.path2)
    }
}
