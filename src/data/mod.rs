//! Typed records for the normalized game export, the loader, and dataset
//! validation.

pub mod loader;
pub mod mage;
pub mod nation;
pub mod spell;
pub mod validate;

pub use loader::{load_game_data, DataError, GameData, DEFAULT_DATA_PATH};
pub use mage::MageRecord;
pub use nation::NationRecord;
pub use spell::{SpellMode, SpellRecord};
pub use validate::{validate_game_data, ValidationReport, ValidationSeverity};
