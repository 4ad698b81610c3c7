//! Probabilistic mage-path analysis for a fantasy strategy game's exported
//! data: expand each mage's randomized path spec into an exact probability
//! distribution of path sets, match those against two-path spell and item
//! requirements, and suppress listings already covered by a cheaper mage the
//! same nation recruits.

pub mod cli;
pub mod data;
pub mod magic;
pub mod report;

pub use data::{load_game_data, validate_game_data, DataError, GameData};
pub use magic::{Chance, Mage, PathsError, SubsumptionStrategy, Variant, VariantNote};
pub use report::{build_all_reports, build_nation_report, NationReport, ReportOptions};
