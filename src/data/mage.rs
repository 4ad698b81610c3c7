//! Mage records from the normalized game export, keyed by unit id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MageRecord {
    pub name: String,
    /// Raw path spec: guaranteed prefix plus random bonus tokens, e.g.
    /// `FWWEEE,100FWE,10FWE`.
    pub paths: String,
    /// Recruitment cost in gold. Heroes and summons carry 0.
    #[serde(default)]
    pub gcost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_mage_row() {
        let raw = r#"{"name": "Basalt King", "paths": "FWWEEE,100FWE,10FWE", "gcost": 390}"#;
        let record: MageRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name, "Basalt King");
        assert_eq!(record.gcost, 390);
    }

    #[test]
    fn gcost_defaults_to_zero() {
        let raw = r#"{"name": "Hero", "paths": "FF"}"#;
        let record: MageRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.gcost, 0);
    }
}
