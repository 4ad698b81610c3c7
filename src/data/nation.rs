//! Nation records: identity plus role-tagged mage id lists and the spells
//! restricted to that nation. Read-only input; reports never mutate it.

use serde::{Deserialize, Serialize};

use crate::data::spell::SpellRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationRecord {
    pub name: String,
    pub epithet: String,
    #[serde(default)]
    pub era: Option<u32>,
    /// Recruitable anywhere a fort stands.
    #[serde(default)]
    pub fort_mages: Vec<u32>,
    /// Recruitable only at the capital.
    #[serde(default)]
    pub cap_mages: Vec<u32>,
    /// Unique heroes; arrive by event, cost nothing.
    #[serde(default)]
    pub hero_mages: Vec<u32>,
    /// Recruitable in underwater provinces.
    #[serde(default)]
    pub uw_mages: Vec<u32>,
    /// Capital gem income, lowercased path symbols.
    #[serde(default)]
    pub gem_inc: String,
    /// Spells only this nation may cast.
    #[serde(default)]
    pub nspells: Vec<SpellRecord>,
}

impl NationRecord {
    /// Everything the nation can put gold into, in recruitment-role order.
    /// Ranking by cost happens in the report builder.
    pub fn recruitable_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.fort_mages
            .iter()
            .chain(&self.cap_mages)
            .chain(&self.uw_mages)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_sparse_fields() {
        let raw = r#"{"name": "Abysia", "epithet": "Children of Flame",
                      "fort_mages": [101, 102], "cap_mages": [103]}"#;
        let nation: NationRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(nation.name, "Abysia");
        assert!(nation.hero_mages.is_empty());
        assert!(nation.nspells.is_empty());
        let ids: Vec<u32> = nation.recruitable_ids().collect();
        assert_eq!(ids, vec![101, 102, 103]);
    }
}
